//! Core-Domänentypen: Geometrie, Constraints, Layout-Entities, Transport-Graph,
//! Hit-Test.

pub mod attraction;
pub mod constraint;
pub mod crane;
pub mod geometry;
pub mod group;
pub mod ids;
pub mod layer;
/// Fabrik-Layout als Container aller Entities
///
/// Zentrale Stelle für kaskadierende Löschungen:
/// - Node → Kanten und Gruppen-Mitgliedschaften
/// - Kran → Übergabepunkte
/// - Station/Wegpunkt → Segmente (im Netzwerk)
pub mod layout;
pub mod mode;
pub mod node;
pub mod spatial;
pub mod terminal;
pub mod transport;
pub mod validation;
pub mod wall;
pub mod zone;

pub use attraction::{
    attract_on_placement, find_candidates, link_after_drag, AttractionCandidates,
    AutoConnectOutcome, TerminalMatch,
};
pub use constraint::{
    ArcConstraint, Constraint, ConstraintParam, LineConstraint, Polygon, PolylineConstraint,
    Projection,
};
pub use crane::{
    find_overlap, HandoffKind, HandoffPoint, HandoffRule, JibCrane, OverheadCrane, Runway,
};
pub use geometry::Rect;
pub use group::NodeGroup;
pub use hit_test::{hit_selected_handle, hit_test, HitResult, HitTarget};
pub use ids::IdAllocator;
pub use layer::{LayerKind, LayerState, Layers};
pub use layout::{FacilityLayout, HandoffError};
pub use mode::InteractionMode;
pub use node::{LayoutNode, NodeKind, PathEdge};
pub use spatial::{SpatialIndex, SpatialMatch};
pub use terminal::{terminal_position, TerminalRole, TerminalSide};
pub use transport::{
    ConnectError, LegacyTransport, Segment, SegmentDefaults, SegmentHit, SplitResult, Station,
    StationKind, TransportNetwork, Transporter, Waypoint,
};
pub use validation::{has_errors, IssueKind, Severity, ValidationIssue};
pub use wall::{Wall, WallEnd};
pub use zone::{Zone, ZoneKind};
