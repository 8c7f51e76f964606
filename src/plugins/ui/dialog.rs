//! Modal system settings dialog.
//!
//! The overlay exists only while its inspector is in the dialog-open phase.
//! The dialog never flips that phase itself: Done, Cancel, a backdrop click
//! or the close key report `visible: false` back to the inspector.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::ui::{FocusPolicy, GlobalZIndex, Node as UiNode};

use crate::compat::{ButtonBundle, NodeBundle, TextBundle};
use crate::plugins::core::InputBindings;
use crate::world::{SystemId, SystemRegistry};

use super::components::{button_color, UiFont, PANEL_BACKGROUND, TEXT_MUTED, TEXT_PRIMARY};
use super::inspector::SelectionInspector;

#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct EditDialog {
    pub inspector: Entity,
    pub system: SystemId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogAction {
    Confirm,
    Cancel,
    Dismiss,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct DialogControl {
    pub dialog: Entity,
    pub action: DialogAction,
}

/// Visibility report from a dialog to the inspector that owns it.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct DialogVisibilityChanged {
    pub inspector: Entity,
    pub visible: bool,
}

/// System the inspector wants a dialog for, if any.
pub fn dialog_target(inspector: &SelectionInspector) -> Option<&SystemId> {
    if inspector.dialog_visible() {
        inspector.inspected()
    } else {
        None
    }
}

// =============================================================================
// Systems
// =============================================================================

/// Spawns or despawns overlays so each inspector has a dialog exactly while
/// its phase says so.
pub fn sync_edit_dialogs(
    mut commands: Commands,
    font: Res<UiFont>,
    registry: Res<SystemRegistry>,
    inspectors: Query<(Entity, &SelectionInspector), Changed<SelectionInspector>>,
    mut removed: RemovedComponents<SelectionInspector>,
    dialogs: Query<(Entity, &EditDialog)>,
) {
    for gone in removed.read() {
        for (entity, dialog) in dialogs.iter() {
            if dialog.inspector == gone {
                commands.entity(entity).despawn();
            }
        }
    }

    for (inspector_entity, inspector) in inspectors.iter() {
        let wanted = dialog_target(inspector);
        let mut present = false;

        for (entity, dialog) in dialogs.iter() {
            if dialog.inspector != inspector_entity {
                continue;
            }
            if Some(&dialog.system) == wanted {
                present = true;
            } else {
                commands.entity(entity).despawn();
            }
        }

        if let (Some(system), false) = (wanted, present) {
            spawn_edit_dialog(&mut commands, &font, &registry, inspector_entity, system);
        }
    }
}

fn spawn_edit_dialog(
    commands: &mut Commands,
    font: &UiFont,
    registry: &SystemRegistry,
    inspector: Entity,
    system: &SystemId,
) {
    let record = registry.get(system);
    let name = record.map_or("Unknown system", |record| record.display_name());
    let label = record
        .and_then(|record| record.custom_name.clone())
        .unwrap_or_else(|| "--".to_string());
    let notes = record
        .and_then(|record| record.description.clone())
        .unwrap_or_else(|| "No description".to_string());

    let mut overlay = commands.spawn((
        EditDialog {
            inspector,
            system: system.clone(),
        },
        Name::new(format!("SystemSettings-{}", system)),
        GlobalZIndex(100),
        ButtonBundle::with_node(
            UiNode {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            Color::srgba(0.0, 0.0, 0.0, 0.55),
        ),
    ));
    let dialog = overlay.id();
    overlay.insert(DialogControl {
        dialog,
        action: DialogAction::Dismiss,
    });

    overlay.with_children(|backdrop| {
        backdrop
            .spawn((
                FocusPolicy::Block,
                NodeBundle {
                    node: UiNode {
                        width: Val::Px(360.0),
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(6.0),
                        padding: UiRect::all(Val::Px(14.0)),
                        ..default()
                    },
                    background_color: PANEL_BACKGROUND.into(),
                    ..default()
                },
            ))
            .with_children(|card| {
                card.spawn(TextBundle::from_section(
                    "System settings",
                    font.style(15.0, TEXT_PRIMARY),
                ));
                card.spawn(TextBundle::from_section(
                    format!("{} ({})", name, system),
                    font.style(13.0, TEXT_PRIMARY),
                ));
                card.spawn(TextBundle::from_section(
                    format!("Label: {}", label),
                    font.style(12.0, TEXT_MUTED),
                ));
                card.spawn(TextBundle::from_section(
                    format!("Notes: {}", notes),
                    font.style(12.0, TEXT_MUTED),
                ));

                card.spawn(NodeBundle {
                    node: UiNode {
                        flex_direction: FlexDirection::Row,
                        justify_content: JustifyContent::FlexEnd,
                        column_gap: Val::Px(8.0),
                        margin: UiRect::top(Val::Px(8.0)),
                        ..default()
                    },
                    ..default()
                })
                .with_children(|row| {
                    for (action, caption) in
                        [(DialogAction::Cancel, "Cancel"), (DialogAction::Confirm, "Done")]
                    {
                        row.spawn((
                            DialogControl { dialog, action },
                            ButtonBundle::with_node(
                                UiNode {
                                    padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                                    ..default()
                                },
                                button_color(Interaction::None, true),
                            ),
                        ))
                        .with_children(|button| {
                            button.spawn(TextBundle::from_section(
                                caption,
                                font.style(13.0, TEXT_PRIMARY),
                            ));
                        });
                    }
                });
            });
    });
}

pub fn handle_dialog_controls(
    controls: Query<(&Interaction, &DialogControl), Changed<Interaction>>,
    dialogs: Query<&EditDialog>,
    mut changes: MessageWriter<DialogVisibilityChanged>,
) {
    for (interaction, control) in controls.iter() {
        if !matches!(interaction, Interaction::Pressed) {
            continue;
        }
        let Ok(dialog) = dialogs.get(control.dialog) else {
            continue;
        };

        if control.action == DialogAction::Confirm {
            info!("System settings confirmed for {}", dialog.system);
        }
        changes.write(DialogVisibilityChanged {
            inspector: dialog.inspector,
            visible: false,
        });
    }
}

pub fn handle_dialog_close_key(
    input: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    dialogs: Query<&EditDialog>,
    mut changes: MessageWriter<DialogVisibilityChanged>,
) {
    if !input.just_pressed(bindings.close_dialog) {
        return;
    }
    for dialog in dialogs.iter() {
        changes.write(DialogVisibilityChanged {
            inspector: dialog.inspector,
            visible: false,
        });
    }
}

/// Logs reports that no inspector will act on.
pub fn log_dialog_reports(
    mut changes: MessageReader<DialogVisibilityChanged>,
    inspectors: Query<(), With<SelectionInspector>>,
) {
    for change in changes.read() {
        if inspectors.get(change.inspector).is_err() {
            warn!("Dialog report for missing inspector {:?}", change.inspector);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
