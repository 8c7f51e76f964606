//! Shared UI components, resources, and styling helpers.

use bevy::prelude::*;

use crate::compat::TextStyle;

// =============================================================================
// Resources
// =============================================================================

/// Font used by every panel. Falls back to Bevy's built-in font when the
/// configured file is missing.
#[derive(Resource, Default, Clone)]
pub struct UiFont(pub Handle<Font>);

impl UiFont {
    pub fn style(&self, font_size: f32, color: Color) -> TextStyle {
        TextStyle::new(&self.0, font_size, color)
    }
}

// =============================================================================
// System List Components
// =============================================================================

#[derive(Component)]
pub struct SystemListContainer;

/// Clickable row in the system list.
#[derive(Component, Debug, Clone)]
pub struct SystemListItem {
    pub id: crate::world::SystemId,
}

/// Marker for the action bar that follows the hovered list row.
#[derive(Component)]
pub struct HoverActionBar;

// =============================================================================
// Inspector Components
// =============================================================================

#[derive(Component)]
pub struct InspectorTitleText;

#[derive(Component)]
pub struct InspectorPlaceholderText;

#[derive(Component)]
pub struct InspectorHeader;

/// Marker for the action bar embedded in an inspector header.
#[derive(Component)]
pub struct InspectorActionBar {
    pub inspector: Entity,
}

// =============================================================================
// Palette
// =============================================================================

pub const PANEL_BACKGROUND: Color = Color::srgba(0.05, 0.08, 0.12, 0.92);
pub const TEXT_PRIMARY: Color = Color::srgb(0.9, 0.92, 0.96);
pub const TEXT_MUTED: Color = Color::srgb(0.55, 0.58, 0.62);

/// Background for a button given its pointer state.
pub fn button_color(interaction: Interaction, enabled: bool) -> Color {
    if !enabled {
        return Color::srgba(0.12, 0.14, 0.16, 0.6);
    }
    match interaction {
        Interaction::Pressed => Color::srgb(0.3, 0.45, 0.55),
        Interaction::Hovered => Color::srgb(0.2, 0.3, 0.38),
        Interaction::None => Color::srgb(0.12, 0.18, 0.24),
    }
}

/// Text color for a list row based on selection and hover state.
pub fn list_item_color(is_selected: bool, is_hovered: bool) -> Color {
    match (is_selected, is_hovered) {
        (true, _) => Color::srgb(1.0, 1.0, 1.0),
        (false, true) => Color::srgb(0.5, 0.9, 0.9),
        (false, false) => Color::srgb(0.0, 1.0, 1.0),
    }
}

/// Security status shown the way in-game lists round it.
pub fn format_security(security: f32) -> String {
    format!("{:.1}", (security * 10.0).round() / 10.0)
}
