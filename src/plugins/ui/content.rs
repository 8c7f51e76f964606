//! Detail rows for the inspected system.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::ui::Node as UiNode;

use crate::compat::{ButtonBundle, TextBundle};
use crate::world::{SystemId, SystemRecord, SystemRegistry};

use super::components::{button_color, format_security, UiFont, TEXT_MUTED, TEXT_PRIMARY};

/// Content area keyed by system id. Rows are rebuilt whenever it changes.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct SystemContentPanel {
    pub system: Option<SystemId>,
    pub owner: Entity,
}

impl SystemContentPanel {
    pub fn owned_by(owner: Entity) -> Self {
        Self {
            system: None,
            owner,
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct ContentEditButton {
    pub panel: Entity,
}

#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct ContentEditRequested {
    pub inspector: Entity,
    pub system: SystemId,
}

pub fn content_lines(record: &SystemRecord) -> Vec<(&'static str, String)> {
    let info = &record.static_info;
    let mut lines = vec![("Region", info.region_name.clone())];

    if !info.constellation_name.is_empty() {
        lines.push(("Constellation", info.constellation_name.clone()));
    }
    lines.push(("Security", format_security(info.security)));
    if let Some(class) = &info.system_class {
        lines.push(("Class", class.clone()));
    }
    if let Some(effect) = &info.effect {
        lines.push(("Effect", effect.clone()));
    }
    if !info.statics.is_empty() {
        lines.push(("Statics", info.statics.join(", ")));
    }
    if let Some(custom_name) = &record.custom_name {
        lines.push(("Label", custom_name.clone()));
    }
    lines.push((
        "Notes",
        record
            .description
            .clone()
            .unwrap_or_else(|| "No description".to_string()),
    ));

    lines
}

pub fn rebuild_content_panels(
    mut commands: Commands,
    font: Res<UiFont>,
    registry: Res<SystemRegistry>,
    panels: Query<(Entity, &SystemContentPanel), Changed<SystemContentPanel>>,
) {
    for (entity, panel) in panels.iter() {
        commands.entity(entity).despawn_related::<Children>();

        let Some(record) = panel.system.as_ref().and_then(|id| registry.get(id)) else {
            continue;
        };

        commands.entity(entity).with_children(|parent| {
            for (label, value) in content_lines(record) {
                parent.spawn(TextBundle::from_section(
                    format!("{}: {}", label, value),
                    font.style(12.0, TEXT_MUTED),
                ));
            }

            parent
                .spawn((
                    ContentEditButton { panel: entity },
                    ButtonBundle::with_node(
                        UiNode {
                            align_self: AlignSelf::FlexStart,
                            margin: UiRect::top(Val::Px(4.0)),
                            padding: UiRect::axes(Val::Px(6.0), Val::Px(2.0)),
                            ..default()
                        },
                        button_color(Interaction::None, true),
                    ),
                ))
                .with_children(|button| {
                    button.spawn(TextBundle::from_section(
                        "Edit name and description",
                        font.style(12.0, TEXT_PRIMARY),
                    ));
                });
        });
    }
}

pub fn handle_content_edit_clicks(
    buttons: Query<(&Interaction, &ContentEditButton), Changed<Interaction>>,
    panels: Query<&SystemContentPanel>,
    mut requests: MessageWriter<ContentEditRequested>,
) {
    for (interaction, button) in buttons.iter() {
        if !matches!(interaction, Interaction::Pressed) {
            continue;
        }
        let Ok(panel) = panels.get(button.panel) else {
            continue;
        };
        if let Some(system) = &panel.system {
            requests.write(ContentEditRequested {
                inspector: panel.owner,
                system: system.clone(),
            });
        }
    }
}
