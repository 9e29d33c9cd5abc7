//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Werkzeuge ===
            AppCommand::TrackToolClick { world_pos } => {
                handlers::tools::track_click(state, world_pos)
            }
            AppCommand::ZoneToolClick { world_pos } => {
                handlers::tools::zone_click(state, world_pos)
            }
            AppCommand::FinishTool => handlers::tools::finish(state),
            AppCommand::SetEditorTool { tool } => handlers::editing::set_editor_tool(state, tool),
            AppCommand::SetInteractionMode { mode } => {
                handlers::editing::set_interaction_mode(state, mode)
            }

            // === Platzierung & Editing ===
            AppCommand::ArmNodePlacement { template } => {
                handlers::editing::arm_node_placement(state, template)
            }
            AppCommand::PlacePendingNode { world_pos } => {
                handlers::editing::place_pending_node(state, world_pos)
            }
            AppCommand::ConnectNodes { from, to } => {
                handlers::editing::connect_nodes(state, from, to)
            }
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state),
            AppCommand::SetEdgeRoute { edge_id, route } => {
                handlers::editing::set_edge_route(state, edge_id, route)
            }

            // === Zeiger-Interaktion ===
            AppCommand::BeginPan { world_pos } => handlers::pointer::begin_pan(state, world_pos),
            AppCommand::BeginAreaSelect {
                world_pos,
                additive,
            } => handlers::pointer::begin_area_select(state, world_pos, additive),
            AppCommand::BeginDrag { hit, world_pos } => {
                handlers::pointer::begin_drag(state, hit, world_pos)
            }
            AppCommand::SelectHit { hit, additive } => {
                handlers::selection::select_hit(state, hit, additive)
            }
            AppCommand::UpdatePointer { world_pos } => handlers::pointer::update(state, world_pos),
            AppCommand::EndPointer { world_pos } => handlers::pointer::end(state, world_pos),
            AppCommand::CancelInteraction => handlers::pointer::cancel(state),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Krane ===
            AppCommand::CreateHandoff {
                crane_a,
                crane_b,
                kind,
                rule,
            } => handlers::layout::create_handoff(state, crane_a, crane_b, kind, rule),
            AppCommand::SetCraneZone {
                crane_id,
                zone_min,
                zone_max,
            } => handlers::layout::set_crane_zone(state, crane_id, zone_min, zone_max),

            // === Transport ===
            AppCommand::CreateNetwork { name } => handlers::layout::create_network(state, name),
            AppCommand::SelectNetwork { network_id } => {
                handlers::layout::select_network(state, network_id)
            }
            AppCommand::ImportLegacyTransport { legacy } => {
                handlers::layout::import_legacy_transport(state, legacy)
            }

            // === Ebenen ===
            AppCommand::SetLayerVisible { layer, visible } => {
                handlers::layout::set_layer_visible(state, layer, visible)
            }
            AppCommand::SetLayerLocked { layer, locked } => {
                handlers::layout::set_layer_locked(state, layer, locked)
            }

            // === Prüfung, History, Optionen ===
            AppCommand::Validate => handlers::layout::validate(state),
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, *options)
            }
        }

        Ok(())
    }
}
