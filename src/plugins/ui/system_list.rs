//! System list panel: the map-side selection surface.
//!
//! Rows select on click, Shift+click extends, the clear key empties the
//! selection. The row the pointer rests on drives a long-lived action bar
//! that is retargeted in place and never offers editing. Rows merely crossed
//! on the way to the bar do not retarget it.

use bevy::prelude::*;
use bevy::ui::Node as UiNode;

use crate::compat::{NodeBundle, TextBundle};
use crate::plugins::core::{InputBindings, MapperConfig};
use crate::world::{MapSelection, SystemId, SystemRecord, SystemRegistry};

use super::action_bar::{spawn_action_bar, ActionBarProps};
use super::components::{
    format_security, list_item_color, HoverActionBar, SystemListContainer, SystemListItem,
    UiFont, PANEL_BACKGROUND, TEXT_MUTED, TEXT_PRIMARY,
};
use super::panel::{PanelConfig, PanelPosition};

const HOVER_HINT: &str = "Hover a system";
/// How long the pointer must stay on a row before the hover bar follows it.
pub const HOVER_DWELL_SECS: f32 = 0.25;

/// Last list row the pointer rested on. Kept after the pointer leaves so the
/// hover bar stays usable.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct HoveredSystem(pub Option<SystemId>);

/// Row under the pointer and the elapsed time it was entered at.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct HoverCandidate(pub Option<(SystemId, f32)>);

#[derive(Component)]
pub struct HoverTargetText;

pub fn format_list_row(record: &SystemRecord, selected: bool) -> String {
    let indicator = if selected { ">" } else { " " };
    format!(
        "{} {}  {} ({})",
        indicator,
        record.display_name(),
        format_security(record.static_info.security),
        record.static_info.region_name
    )
}

/// Props for the hover bar; unknown or absent targets leave it untargeted.
pub fn hover_props(hovered: &HoveredSystem, registry: &SystemRegistry) -> ActionBarProps {
    match hovered.0.as_ref().and_then(|id| registry.get(id)) {
        Some(record) => ActionBarProps::new(record.id.clone(), record.display_name(), false),
        None => ActionBarProps::untargeted(false),
    }
}

/// Applies a row click to a selection.
pub fn apply_click(selection: &MapSelection, id: &SystemId, extending: bool) -> MapSelection {
    let mut next = selection.clone();
    if extending {
        next.toggle(id.clone());
    } else {
        next.select_only(id.clone());
    }
    next
}

// =============================================================================
// Setup Systems
// =============================================================================

pub fn spawn_system_list(mut commands: Commands, font: Res<UiFont>, config: Res<MapperConfig>) {
    let panel = PanelConfig::at(PanelPosition::TopLeft)
        .with_width(config.list_width)
        .with_background(PANEL_BACKGROUND)
        .with_padding(10.0)
        .with_gap(6.0)
        .with_scroll(560.0);

    let mut hover_bar = Entity::PLACEHOLDER;

    commands
        .spawn((
            Name::new("SystemList"),
            NodeBundle {
                node: panel.node(),
                background_color: panel.background(),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn(TextBundle::from_section(
                "Systems",
                font.style(15.0, TEXT_PRIMARY),
            ));
            parent.spawn((
                SystemListContainer,
                NodeBundle {
                    node: UiNode {
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(2.0),
                        ..default()
                    },
                    ..default()
                },
            ));
            parent.spawn((
                HoverTargetText,
                TextBundle::from_section(HOVER_HINT, font.style(12.0, TEXT_MUTED)).with_node(
                    UiNode {
                        margin: UiRect::top(Val::Px(6.0)),
                        ..default()
                    },
                ),
            ));
            hover_bar = spawn_action_bar(parent, &font, ActionBarProps::untargeted(false));
        });

    commands.entity(hover_bar).insert(HoverActionBar);
}

// =============================================================================
// Update Systems
// =============================================================================

pub fn rebuild_system_list(
    mut commands: Commands,
    font: Res<UiFont>,
    registry: Res<SystemRegistry>,
    selection: Res<MapSelection>,
    containers: Query<Entity, With<SystemListContainer>>,
) {
    if !registry.is_changed() && !selection.is_changed() {
        return;
    }

    for container in containers.iter() {
        commands.entity(container).despawn_related::<Children>();
        commands.entity(container).with_children(|parent| {
            if registry.is_empty() {
                parent.spawn(TextBundle::from_section(
                    "(no systems)",
                    font.style(13.0, TEXT_MUTED),
                ));
                return;
            }
            for record in registry.iter() {
                let selected = selection.contains(&record.id);
                parent.spawn((
                    SystemListItem {
                        id: record.id.clone(),
                    },
                    Interaction::None,
                    TextBundle::from_section(
                        format_list_row(record, selected),
                        font.style(13.0, list_item_color(selected, false)),
                    ),
                ));
            }
        });
    }
}

pub fn handle_system_list_clicks(
    input: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    time: Res<Time>,
    items: Query<(&Interaction, &SystemListItem), Changed<Interaction>>,
    mut selection: ResMut<MapSelection>,
    mut candidate: ResMut<HoverCandidate>,
) {
    for (interaction, item) in items.iter() {
        match interaction {
            Interaction::Pressed => {
                let next = apply_click(&selection, &item.id, bindings.extending(&input));
                selection.set_if_neq(next);
            }
            Interaction::Hovered => {
                candidate.0 = Some((item.id.clone(), time.elapsed_secs()));
            }
            Interaction::None => {
                let left = matches!(&candidate.0, Some((id, _)) if *id == item.id);
                if left {
                    candidate.0 = None;
                }
            }
        }
    }
}

/// Commits the hovered row once the pointer has stayed on it long enough.
pub fn settle_hover_target(
    time: Res<Time>,
    candidate: Res<HoverCandidate>,
    mut hovered: ResMut<HoveredSystem>,
) {
    let Some((id, since)) = &candidate.0 else {
        return;
    };
    if time.elapsed_secs() - since >= HOVER_DWELL_SECS {
        hovered.set_if_neq(HoveredSystem(Some(id.clone())));
    }
}

pub fn handle_clear_selection(
    input: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    mut selection: ResMut<MapSelection>,
) {
    if input.just_pressed(bindings.clear_selection) && !selection.is_empty() {
        info!("Selection cleared ({} systems)", selection.len());
        selection.clear();
    }
}

pub fn sync_hover_bar(
    hovered: Res<HoveredSystem>,
    registry: Res<SystemRegistry>,
    mut bars: Query<&mut ActionBarProps, With<HoverActionBar>>,
    mut labels: Query<&mut Text, With<HoverTargetText>>,
) {
    if !hovered.is_changed() && !registry.is_changed() {
        return;
    }

    let props = hover_props(&hovered, &registry);
    let caption = if props.target_id.is_blank() {
        HOVER_HINT.to_string()
    } else {
        format!("Hovered: {}", props.target_name)
    };

    for mut label in labels.iter_mut() {
        label.0 = caption.clone();
    }
    for mut bar in bars.iter_mut() {
        bar.set_if_neq(props.clone());
    }
}

pub fn update_system_list_styles(
    selection: Res<MapSelection>,
    mut items: Query<(&Interaction, &SystemListItem, &mut TextColor)>,
) {
    for (interaction, item, mut text_color) in items.iter_mut() {
        let is_selected = selection.contains(&item.id);
        let is_hovered = matches!(interaction, Interaction::Hovered);
        text_color.set_if_neq(TextColor(list_item_color(is_selected, is_hovered)));
    }
}

// =============================================================================
// Tests
// =============================================================================
