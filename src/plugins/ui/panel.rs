//! Panel layout configuration shared by the list and inspector panels.

use bevy::prelude::*;
use bevy::ui::{Node as UiNode, OverflowAxis, PositionType, UiRect, Val};

// =============================================================================
// Panel Position
// =============================================================================

/// Screen corner a panel is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPosition {
    TopLeft,
    TopRight,
}

// =============================================================================
// Panel Configuration
// =============================================================================

#[derive(Debug, Clone)]
pub struct PanelConfig {
    pub position: PanelPosition,
    pub margin: f32,
    pub background_color: Option<Color>,
    pub padding: f32,
    pub gap: f32,
    pub width: Option<f32>,
    pub max_height: Option<f32>,
    pub overflow_scroll: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            position: PanelPosition::TopLeft,
            margin: 14.0,
            background_color: None,
            padding: 0.0,
            gap: 0.0,
            width: None,
            max_height: None,
            overflow_scroll: false,
        }
    }
}

impl PanelConfig {
    pub fn at(position: PanelPosition) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the vertical spacing between children
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Caps the height and scrolls vertically past it
    pub fn with_scroll(mut self, max_height: f32) -> Self {
        self.max_height = Some(max_height);
        self.overflow_scroll = true;
        self
    }

    /// Builds an absolutely positioned column node for this panel
    pub fn node(&self) -> UiNode {
        let mut node = UiNode {
            position_type: PositionType::Absolute,
            flex_direction: FlexDirection::Column,
            top: Val::Px(self.margin),
            ..default()
        };

        match self.position {
            PanelPosition::TopLeft => node.left = Val::Px(self.margin),
            PanelPosition::TopRight => node.right = Val::Px(self.margin),
        }

        if self.padding > 0.0 {
            node.padding = UiRect::all(Val::Px(self.padding));
        }

        if self.gap > 0.0 {
            node.row_gap = Val::Px(self.gap);
        }

        if let Some(width) = self.width {
            node.width = Val::Px(width);
        }

        if let Some(max_height) = self.max_height {
            node.max_height = Val::Px(max_height);
        }

        if self.overflow_scroll {
            node.overflow.y = OverflowAxis::Scroll;
        }

        node
    }

    pub fn background(&self) -> BackgroundColor {
        BackgroundColor(self.background_color.unwrap_or(Color::NONE))
    }
}

// =============================================================================
// Tests
// =============================================================================
