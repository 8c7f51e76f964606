//! Quick actions for one target system: external lookups, copy name, edit.
//!
//! The bar entity carries [`ActionBarProps`], the current target. Buttons only
//! point back at their bar and read the props when clicked, so a bar spawned
//! once keeps acting on whatever target was written last.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::ui::Node as UiNode;

use crate::compat::{ButtonBundle, NodeBundle, TextBundle};
use crate::links::ExternalLink;
use crate::plugins::actions::{CopyText, OpenUrl};
use crate::world::SystemId;

use super::components::{button_color, UiFont, TEXT_MUTED, TEXT_PRIMARY};

// =============================================================================
// Components and Messages
// =============================================================================

#[derive(Component, Debug, Clone, PartialEq)]
pub struct ActionBarProps {
    pub target_id: SystemId,
    pub target_name: String,
    pub show_edit: bool,
}

impl ActionBarProps {
    pub fn new(target_id: SystemId, target_name: impl Into<String>, show_edit: bool) -> Self {
        Self {
            target_id,
            target_name: target_name.into(),
            show_edit,
        }
    }

    /// A bar with nothing to act on yet.
    pub fn untargeted(show_edit: bool) -> Self {
        Self::new(SystemId::new(""), "", show_edit)
    }

    /// What clicking `action` does right now, or `None` if it cannot run.
    pub fn command(&self, action: BarAction) -> Option<BarCommand> {
        match action {
            BarAction::Link(link) => link
                .url(&self.target_id, &self.target_name)
                .map(BarCommand::Open),
            BarAction::CopyName => {
                if self.target_name.trim().is_empty() {
                    None
                } else {
                    Some(BarCommand::Copy(self.target_name.clone()))
                }
            }
            BarAction::Edit => {
                if self.show_edit && !self.target_id.is_blank() {
                    Some(BarCommand::RequestEdit(self.target_id.clone()))
                } else {
                    None
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BarAction {
    Link(ExternalLink),
    CopyName,
    Edit,
}

impl BarAction {
    pub const ALL: [BarAction; 5] = [
        BarAction::Link(ExternalLink::Killboard),
        BarAction::Link(ExternalLink::AnomalyWiki),
        BarAction::Link(ExternalLink::RegionMap),
        BarAction::CopyName,
        BarAction::Edit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BarAction::Link(link) => link.label(),
            BarAction::CopyName => "Copy",
            BarAction::Edit => "Edit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarCommand {
    Open(String),
    Copy(String),
    RequestEdit(SystemId),
}

#[derive(Component, Debug, Clone, Copy)]
pub struct ActionBarButton {
    pub bar: Entity,
    pub action: BarAction,
}

/// Raised by a bar's edit button; the bar's owner decides what editing means.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct ActionBarEditRequested {
    pub bar: Entity,
    pub system: SystemId,
}

// =============================================================================
// Spawning
// =============================================================================

pub fn spawn_action_bar(
    parent: &mut ChildSpawnerCommands,
    font: &UiFont,
    props: ActionBarProps,
) -> Entity {
    let mut bar = parent.spawn((
        props,
        NodeBundle {
            node: UiNode {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(4.0),
                align_items: AlignItems::Center,
                ..default()
            },
            ..default()
        },
    ));
    let bar_entity = bar.id();

    bar.with_children(|row| {
        for action in BarAction::ALL {
            row.spawn((
                ActionBarButton {
                    bar: bar_entity,
                    action,
                },
                ButtonBundle::with_node(
                    UiNode {
                        padding: UiRect::axes(Val::Px(6.0), Val::Px(2.0)),
                        ..default()
                    },
                    button_color(Interaction::None, false),
                ),
            ))
            .with_children(|button| {
                button.spawn(TextBundle::from_section(
                    action.label(),
                    font.style(12.0, TEXT_PRIMARY),
                ));
            });
        }
    });

    bar_entity
}

// =============================================================================
// Systems
// =============================================================================

pub fn handle_action_bar_clicks(
    buttons: Query<(&Interaction, &ActionBarButton), Changed<Interaction>>,
    bars: Query<&ActionBarProps>,
    mut urls: MessageWriter<OpenUrl>,
    mut copies: MessageWriter<CopyText>,
    mut edits: MessageWriter<ActionBarEditRequested>,
) {
    for (interaction, button) in buttons.iter() {
        if !matches!(interaction, Interaction::Pressed) {
            continue;
        }
        let Ok(props) = bars.get(button.bar) else {
            continue;
        };

        match props.command(button.action) {
            Some(BarCommand::Open(url)) => {
                urls.write(OpenUrl { url });
            }
            Some(BarCommand::Copy(text)) => {
                copies.write(CopyText { text });
            }
            Some(BarCommand::RequestEdit(system)) => {
                edits.write(ActionBarEditRequested {
                    bar: button.bar,
                    system,
                });
            }
            None => debug!("{:?} unavailable for current target", button.action),
        }
    }
}

/// Dims buttons that cannot run and hides the edit button when not offered.
pub fn sync_action_bar_buttons(
    bars: Query<&ActionBarProps>,
    mut buttons: Query<(
        &ActionBarButton,
        &Interaction,
        &mut BackgroundColor,
        &mut UiNode,
        &Children,
    )>,
    mut labels: Query<&mut TextColor>,
) {
    for (button, interaction, mut background, mut node, children) in buttons.iter_mut() {
        let Ok(props) = bars.get(button.bar) else {
            continue;
        };

        let display = if matches!(button.action, BarAction::Edit) && !props.show_edit {
            Display::None
        } else {
            Display::Flex
        };
        if node.display != display {
            node.display = display;
        }

        let enabled = props.command(button.action).is_some();
        background.set_if_neq(BackgroundColor(button_color(*interaction, enabled)));

        let text_color = if enabled { TEXT_PRIMARY } else { TEXT_MUTED };
        for child in children.iter() {
            if let Ok(mut color) = labels.get_mut(child) {
                color.set_if_neq(TextColor(text_color));
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
