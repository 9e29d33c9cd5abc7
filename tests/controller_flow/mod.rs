//! Controller-Flow-Tests: Intents laufen end-to-end durch Mapping, Controller
//! und Use-Cases.

pub mod common;
mod cranes;
mod equipment;
mod transport;
mod zones;
