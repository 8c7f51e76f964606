//! UI plugin for the system map.
//!
//! Panels:
//! - System list (left): selection, hover action bar
//! - Inspector (right): selected system header, actions, details
//! - System settings dialog (modal, owned by the inspector)

mod action_bar;
mod components;
mod content;
mod dialog;
mod inspector;
pub mod panel;
mod system_list;

use bevy::prelude::*;
use std::path::Path;

use crate::plugins::core::{AppState, MapperConfig};

#[allow(unused_imports)]
pub use action_bar::{ActionBarEditRequested, ActionBarProps, BarAction, BarCommand};
#[allow(unused_imports)]
pub use dialog::{DialogVisibilityChanged, EditDialog};
#[allow(unused_imports)]
pub use inspector::{InspectorPhase, InspectorView, SelectionInspector};
#[allow(unused_imports)]
pub use panel::{PanelConfig, PanelPosition};
#[allow(unused_imports)]
pub use system_list::HoveredSystem;

// =============================================================================
// Plugin
// =============================================================================

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ActionBarEditRequested>()
            .add_message::<content::ContentEditRequested>()
            .add_message::<DialogVisibilityChanged>()
            .init_resource::<components::UiFont>()
            .init_resource::<HoveredSystem>()
            .init_resource::<system_list::HoverCandidate>()
            .add_systems(
                Startup,
                (
                    load_ui_font,
                    inspector::spawn_inspector,
                    system_list::spawn_system_list,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    (
                        (
                            system_list::handle_system_list_clicks,
                            system_list::settle_hover_target,
                        )
                            .chain(),
                        system_list::handle_clear_selection,
                    ),
                    (
                        inspector::observe_selection,
                        inspector::close_dialogs_for_missing_systems,
                    )
                        .chain(),
                    (
                        action_bar::handle_action_bar_clicks,
                        content::handle_content_edit_clicks,
                        dialog::handle_dialog_controls,
                        dialog::handle_dialog_close_key,
                    ),
                    (
                        inspector::handle_edit_requests,
                        inspector::handle_inspector_hotkeys,
                        inspector::handle_dialog_visibility,
                        dialog::log_dialog_reports,
                    ),
                    inspector::sync_inspector_view,
                    (
                        content::rebuild_content_panels,
                        dialog::sync_edit_dialogs,
                        system_list::rebuild_system_list,
                        system_list::sync_hover_bar,
                    ),
                    (
                        system_list::update_system_list_styles,
                        action_bar::sync_action_bar_buttons,
                        update_button_styles,
                    ),
                )
                    .chain()
                    .run_if(in_state(AppState::Ready)),
            );
    }
}

// =============================================================================
// Systems
// =============================================================================

fn font_available(font_path: &str) -> bool {
    Path::new("assets").join(font_path).exists()
}

fn load_ui_font(
    asset_server: Res<AssetServer>,
    config: Res<MapperConfig>,
    mut font: ResMut<components::UiFont>,
) {
    if font_available(&config.font_path) {
        font.0 = asset_server.load(config.font_path.clone());
    } else {
        info!("Font {} not found, using default font", config.font_path);
    }
}

/// Hover feedback for plain buttons. Action bar buttons style themselves and
/// the dialog backdrop keeps its tint.
#[allow(clippy::type_complexity)]
fn update_button_styles(
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor),
        (
            Changed<Interaction>,
            With<Button>,
            Without<action_bar::ActionBarButton>,
            Without<EditDialog>,
        ),
    >,
) {
    for (interaction, mut background) in buttons.iter_mut() {
        background.0 = components::button_color(*interaction, true);
    }
}

// =============================================================================
// Tests
// =============================================================================
