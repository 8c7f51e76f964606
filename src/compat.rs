//! Bundle shorthands for assembling `bevy::ui` trees.

use bevy::color::Color;
use bevy::prelude::{
    Bundle, Button, GlobalTransform, Handle, InheritedVisibility, Interaction, Text as UiText,
    Transform, ViewVisibility, Visibility, ZIndex,
};
use bevy::text::{Font, TextColor, TextFont, TextLayout};
use bevy::ui::widget::TextNodeFlags;
use bevy::ui::{BackgroundColor, BorderColor, ContentSize, FocusPolicy, Node as UiNode};

#[derive(Clone)]
pub struct TextStyle {
    pub font: Handle<Font>,
    pub font_size: f32,
    pub color: Color,
}

impl TextStyle {
    pub fn new(font: &Handle<Font>, font_size: f32, color: Color) -> Self {
        Self {
            font: font.clone(),
            font_size,
            color,
        }
    }
}

#[derive(Bundle, Default)]
pub struct TextBundle {
    pub node: UiNode,
    pub text: UiText,
    pub text_layout: TextLayout,
    pub text_font: TextFont,
    pub text_color: TextColor,
    pub text_node_flags: TextNodeFlags,
    pub content_size: ContentSize,
    pub focus_policy: FocusPolicy,
    pub transform: Transform,
    pub global_transform: GlobalTransform,
    pub visibility: Visibility,
    pub inherited_visibility: InheritedVisibility,
    pub view_visibility: ViewVisibility,
    pub z_index: ZIndex,
    pub background_color: BackgroundColor,
}

impl TextBundle {
    pub fn from_section(value: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: UiText::from(value.into()),
            text_font: TextFont {
                font: style.font,
                font_size: style.font_size,
                ..Default::default()
            },
            text_color: TextColor(style.color),
            ..Default::default()
        }
    }

    pub fn with_node(mut self, node: UiNode) -> Self {
        self.node = node;
        self
    }
}

#[derive(Bundle, Default)]
pub struct NodeBundle {
    pub node: UiNode,
    pub transform: Transform,
    pub global_transform: GlobalTransform,
    pub visibility: Visibility,
    pub inherited_visibility: InheritedVisibility,
    pub view_visibility: ViewVisibility,
    pub z_index: ZIndex,
    pub background_color: BackgroundColor,
    pub border_color: BorderColor,
}

/// Clickable node; the label is spawned as a child `TextBundle`.
#[derive(Bundle, Default)]
pub struct ButtonBundle {
    pub button: Button,
    pub interaction: Interaction,
    pub focus_policy: FocusPolicy,
    pub node: UiNode,
    pub transform: Transform,
    pub global_transform: GlobalTransform,
    pub visibility: Visibility,
    pub inherited_visibility: InheritedVisibility,
    pub view_visibility: ViewVisibility,
    pub z_index: ZIndex,
    pub background_color: BackgroundColor,
    pub border_color: BorderColor,
}

impl ButtonBundle {
    pub fn with_node(node: UiNode, background: Color) -> Self {
        Self {
            node,
            background_color: BackgroundColor(background),
            focus_policy: FocusPolicy::Block,
            ..Default::default()
        }
    }
}
