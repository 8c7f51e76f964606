//! Selected-system inspector.
//!
//! Derives one of three views from the map selection: nothing (or several
//! systems) selected, one system with the edit dialog closed, or one system
//! with the dialog open. The dialog flag belongs to the inspector entity and
//! never outlives the system it was opened for.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::ui::Node as UiNode;

use crate::compat::{NodeBundle, TextBundle};
use crate::plugins::actions::CopyText;
use crate::plugins::core::{InputBindings, MapperConfig};
use crate::world::{MapSelection, SystemId, SystemRecord, SystemRegistry};

use super::action_bar::{spawn_action_bar, ActionBarEditRequested, ActionBarProps};
use super::components::{
    format_security, InspectorActionBar, InspectorHeader, InspectorPlaceholderText,
    InspectorTitleText, UiFont, PANEL_BACKGROUND, TEXT_MUTED, TEXT_PRIMARY,
};
use super::content::{ContentEditRequested, SystemContentPanel};
use super::dialog::DialogVisibilityChanged;
use super::panel::{PanelConfig, PanelPosition};

pub const NOT_SELECTED_TEXT: &str = "System is not selected";
pub const UNAVAILABLE_TEXT: &str = "System data is unavailable";

// =============================================================================
// State Machine
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InspectorPhase {
    #[default]
    NoSelection,
    SingleClosed(SystemId),
    SingleOpen(SystemId),
}

#[derive(Component, Debug, Default)]
pub struct SelectionInspector {
    phase: InspectorPhase,
}

impl SelectionInspector {
    pub fn phase(&self) -> &InspectorPhase {
        &self.phase
    }

    pub fn inspected(&self) -> Option<&SystemId> {
        match &self.phase {
            InspectorPhase::NoSelection => None,
            InspectorPhase::SingleClosed(id) | InspectorPhase::SingleOpen(id) => Some(id),
        }
    }

    pub fn dialog_visible(&self) -> bool {
        matches!(self.phase, InspectorPhase::SingleOpen(_))
    }

    /// Applies a new selection. Any change of inspected system closes the
    /// dialog. Returns whether the phase changed.
    pub fn observe(&mut self, selection: &[SystemId]) -> bool {
        let next = match selection {
            [only] if self.inspected() == Some(only) => return false,
            [only] => InspectorPhase::SingleClosed(only.clone()),
            _ => InspectorPhase::NoSelection,
        };
        if next == self.phase {
            return false;
        }
        self.phase = next;
        true
    }

    /// Opens the dialog if `id` is the system being inspected.
    pub fn request_edit(&mut self, id: &SystemId) -> bool {
        match &self.phase {
            InspectorPhase::SingleClosed(current) if current == id => {
                self.phase = InspectorPhase::SingleOpen(id.clone());
                true
            }
            _ => false,
        }
    }

    pub fn close_dialog(&mut self) -> bool {
        match &self.phase {
            InspectorPhase::SingleOpen(id) => {
                self.phase = InspectorPhase::SingleClosed(id.clone());
                true
            }
            _ => false,
        }
    }
}

/// What the inspector shows for a selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InspectorView<'a> {
    NotSelected,
    Unavailable(&'a SystemId),
    Single(&'a SystemRecord),
}

impl<'a> InspectorView<'a> {
    pub fn derive(selection: &'a [SystemId], registry: &'a SystemRegistry) -> Self {
        match selection {
            [only] => match registry.get(only) {
                Some(record) => InspectorView::Single(record),
                None => InspectorView::Unavailable(only),
            },
            _ => InspectorView::NotSelected,
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            InspectorView::NotSelected => Some(NOT_SELECTED_TEXT),
            InspectorView::Unavailable(_) => Some(UNAVAILABLE_TEXT),
            InspectorView::Single(_) => None,
        }
    }

    pub fn record(&self) -> Option<&'a SystemRecord> {
        match self {
            InspectorView::Single(record) => Some(record),
            _ => None,
        }
    }
}

/// Header label: name and security, region left out.
pub fn format_title(record: &SystemRecord) -> String {
    format!(
        "{}  {}",
        record.display_name(),
        format_security(record.static_info.security)
    )
}

/// Entities making up one inspector panel.
#[derive(Component, Debug, Clone, Copy)]
pub struct InspectorParts {
    pub header: Entity,
    pub title: Entity,
    pub placeholder: Entity,
    pub content: Entity,
    pub action_bar: Entity,
}

// =============================================================================
// Setup Systems
// =============================================================================

pub fn spawn_inspector(mut commands: Commands, font: Res<UiFont>, config: Res<MapperConfig>) {
    let panel = PanelConfig::at(PanelPosition::TopRight)
        .with_width(config.inspector_width)
        .with_background(PANEL_BACKGROUND)
        .with_padding(10.0)
        .with_gap(8.0);

    let inspector = commands
        .spawn((
            SelectionInspector::default(),
            Name::new("SelectionInspector"),
            NodeBundle {
                node: panel.node(),
                background_color: panel.background(),
                ..default()
            },
        ))
        .id();

    let mut title = Entity::PLACEHOLDER;
    let mut action_bar = Entity::PLACEHOLDER;
    let mut header = Entity::PLACEHOLDER;
    let mut placeholder = Entity::PLACEHOLDER;
    let mut content = Entity::PLACEHOLDER;

    commands.entity(inspector).with_children(|parent| {
        let mut header_commands = parent.spawn((
            InspectorHeader,
            NodeBundle {
                node: UiNode {
                    display: Display::None,
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(6.0),
                    ..default()
                },
                ..default()
            },
        ));
        header = header_commands.id();
        header_commands.with_children(|row| {
            title = row
                .spawn((
                    InspectorTitleText,
                    TextBundle::from_section("", font.style(15.0, TEXT_PRIMARY)),
                ))
                .id();
            action_bar = spawn_action_bar(row, &font, ActionBarProps::untargeted(true));
        });

        placeholder = parent
            .spawn((
                InspectorPlaceholderText,
                TextBundle::from_section(NOT_SELECTED_TEXT, font.style(13.0, TEXT_MUTED)),
            ))
            .id();

        content = parent
            .spawn((
                SystemContentPanel::owned_by(inspector),
                NodeBundle {
                    node: UiNode {
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(3.0),
                        ..default()
                    },
                    ..default()
                },
            ))
            .id();
    });

    commands
        .entity(action_bar)
        .insert(InspectorActionBar { inspector });
    commands.entity(inspector).insert(InspectorParts {
        header,
        title,
        placeholder,
        content,
        action_bar,
    });
}

// =============================================================================
// Update Systems
// =============================================================================

/// Follows the map selection. Runs whenever the selection changes, so the
/// inspector's subscription lasts exactly as long as its entity.
pub fn observe_selection(
    selection: Res<MapSelection>,
    mut inspectors: Query<&mut SelectionInspector>,
) {
    if !selection.is_changed() {
        return;
    }

    for mut inspector in inspectors.iter_mut() {
        let was_open = inspector.dialog_visible();
        if inspector.bypass_change_detection().observe(selection.systems()) {
            if was_open {
                info!("Selection changed, closing system settings");
            }
            inspector.set_changed();
        }
    }
}

/// Closes a dialog whose system dropped out of the registry on reload.
pub fn close_dialogs_for_missing_systems(
    registry: Res<SystemRegistry>,
    mut inspectors: Query<&mut SelectionInspector>,
) {
    if !registry.is_changed() {
        return;
    }

    for mut inspector in inspectors.iter_mut() {
        let missing = match inspector.phase() {
            InspectorPhase::SingleOpen(id) => registry.get(id).is_none(),
            _ => false,
        };
        if missing && inspector.bypass_change_detection().close_dialog() {
            info!("Inspected system left the registry, closing system settings");
            inspector.set_changed();
        }
    }
}

/// Opens the dialog for edit requests coming from the inspector's own bar
/// or its content panel.
pub fn handle_edit_requests(
    mut bar_requests: MessageReader<ActionBarEditRequested>,
    mut content_requests: MessageReader<ContentEditRequested>,
    bars: Query<&InspectorActionBar>,
    registry: Res<SystemRegistry>,
    mut inspectors: Query<&mut SelectionInspector>,
) {
    let from_bars = bar_requests.read().filter_map(|request| {
        bars.get(request.bar)
            .ok()
            .map(|bar| (bar.inspector, request.system.clone()))
    });
    let from_content = content_requests
        .read()
        .map(|request| (request.inspector, request.system.clone()));
    let requests: Vec<(Entity, SystemId)> = from_bars.chain(from_content).collect();

    for (entity, system) in requests {
        open_dialog(&mut inspectors, &registry, entity, &system);
    }
}

/// Keyboard shortcuts acting on the inspected system.
pub fn handle_inspector_hotkeys(
    input: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    registry: Res<SystemRegistry>,
    mut inspectors: Query<&mut SelectionInspector>,
    mut copies: MessageWriter<CopyText>,
) {
    let copy = input.just_pressed(bindings.copy_name);
    let edit = input.just_pressed(bindings.edit_system);
    if !copy && !edit {
        return;
    }

    for mut inspector in inspectors.iter_mut() {
        if inspector.dialog_visible() {
            continue;
        }
        let Some(record) = inspector.inspected().and_then(|id| registry.get(id)) else {
            continue;
        };

        if copy {
            copies.write(CopyText {
                text: record.display_name().to_string(),
            });
        }
        if edit && inspector.bypass_change_detection().request_edit(&record.id) {
            info!("Opening system settings for {}", record.id);
            inspector.set_changed();
        }
    }
}

pub fn handle_dialog_visibility(
    mut changes: MessageReader<DialogVisibilityChanged>,
    mut inspectors: Query<&mut SelectionInspector>,
) {
    for change in changes.read() {
        if change.visible {
            continue;
        }
        if let Ok(mut inspector) = inspectors.get_mut(change.inspector) {
            if inspector.bypass_change_detection().close_dialog() {
                info!("System settings closed");
                inspector.set_changed();
            }
        }
    }
}

fn open_dialog(
    inspectors: &mut Query<&mut SelectionInspector>,
    registry: &SystemRegistry,
    entity: Entity,
    system: &SystemId,
) {
    if registry.get(system).is_none() {
        warn!("Edit refused: system {} is not in the registry", system);
        return;
    }
    let Ok(mut inspector) = inspectors.get_mut(entity) else {
        return;
    };
    if inspector.bypass_change_detection().request_edit(system) {
        info!("Opening system settings for {}", system);
        inspector.set_changed();
    }
}

/// Pushes the derived view into the header, placeholder, action bar and
/// content panel.
#[allow(clippy::type_complexity)]
pub fn sync_inspector_view(
    selection: Res<MapSelection>,
    registry: Res<SystemRegistry>,
    inspectors: Query<(Ref<SelectionInspector>, &InspectorParts)>,
    mut nodes: Query<&mut UiNode>,
    mut texts: Query<&mut Text>,
    mut bars: Query<&mut ActionBarProps>,
    mut panels: Query<&mut SystemContentPanel>,
) {
    let inputs_changed = selection.is_changed() || registry.is_changed();

    for (inspector, parts) in inspectors.iter() {
        if !inputs_changed && !inspector.is_changed() {
            continue;
        }

        let view = InspectorView::derive(selection.systems(), &registry);

        if let Ok(mut node) = nodes.get_mut(parts.header) {
            node.display = if view.record().is_some() {
                Display::Flex
            } else {
                Display::None
            };
        }

        if let Ok(mut node) = nodes.get_mut(parts.placeholder) {
            node.display = if view.placeholder().is_some() {
                Display::Flex
            } else {
                Display::None
            };
        }
        if let Some(message) = view.placeholder() {
            if let Ok(mut text) = texts.get_mut(parts.placeholder) {
                text.0 = message.to_string();
            }
        }

        if let Ok(mut props) = bars.get_mut(parts.action_bar) {
            let next = match view.record() {
                Some(record) => {
                    ActionBarProps::new(record.id.clone(), record.display_name(), true)
                }
                None => ActionBarProps::untargeted(true),
            };
            props.set_if_neq(next);
        }

        if let (Some(record), Ok(mut text)) = (view.record(), texts.get_mut(parts.title)) {
            text.0 = format_title(record);
        }

        if let Ok(mut panel) = panels.get_mut(parts.content) {
            let system = view.record().map(|record| record.id.clone());
            if panel.system != system || registry.is_changed() {
                panel.system = system;
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::actions::testing::read_messages;
    use crate::world::sample_record;
    use bevy::ecs::message::Messages;
    use bevy::ecs::system::SystemState;

    fn ids(values: &[&str]) -> Vec<SystemId> {
        values.iter().map(|value| SystemId::new(*value)).collect()
    }

    fn registry() -> SystemRegistry {
        SystemRegistry::from_records([
            sample_record("30000142", "Jita", "The Forge"),
            sample_record("30002187", "Amarr", "Domain"),
        ])
    }

    fn open_for(id: &str) -> SelectionInspector {
        let mut inspector = SelectionInspector::default();
        inspector.observe(&ids(&[id]));
        assert!(inspector.request_edit(&SystemId::new(id)));
        inspector
    }

    #[test]
    fn starts_with_no_selection() {
        let inspector = SelectionInspector::default();
        assert_eq!(inspector.phase(), &InspectorPhase::NoSelection);
        assert!(!inspector.dialog_visible());
    }

    #[test]
    fn single_selection_enters_closed_phase() {
        let mut inspector = SelectionInspector::default();
        assert!(inspector.observe(&ids(&["30000142"])));
        assert_eq!(
            inspector.phase(),
            &InspectorPhase::SingleClosed(SystemId::new("30000142"))
        );
    }

    #[test]
    fn multi_selection_is_no_selection() {
        let mut inspector = SelectionInspector::default();
        inspector.observe(&ids(&["30000142"]));
        assert!(inspector.observe(&ids(&["30000142", "30002187"])));
        assert_eq!(inspector.phase(), &InspectorPhase::NoSelection);
    }

    #[test]
    fn edit_then_close_round_trip() {
        let mut inspector = open_for("30000142");
        assert!(inspector.dialog_visible());

        assert!(inspector.close_dialog());
        assert_eq!(
            inspector.phase(),
            &InspectorPhase::SingleClosed(SystemId::new("30000142"))
        );
        assert!(!inspector.close_dialog());
    }

    #[test]
    fn edit_refused_without_single_selection() {
        let mut inspector = SelectionInspector::default();
        assert!(!inspector.request_edit(&SystemId::new("30000142")));

        inspector.observe(&ids(&["30000142", "30002187"]));
        assert!(!inspector.request_edit(&SystemId::new("30000142")));
        assert!(!inspector.dialog_visible());
    }

    #[test]
    fn edit_refused_for_other_system() {
        let mut inspector = SelectionInspector::default();
        inspector.observe(&ids(&["30000142"]));
        assert!(!inspector.request_edit(&SystemId::new("30002187")));
    }

    #[test]
    fn selection_change_forces_dialog_closed() {
        for next in [vec![], ids(&["30002187"]), ids(&["30000142", "30002187"])] {
            let mut inspector = open_for("30000142");
            assert!(inspector.observe(&next));
            assert!(!inspector.dialog_visible(), "dialog left open for {:?}", next);
        }
    }

    #[test]
    fn same_single_selection_keeps_dialog_open() {
        let mut inspector = open_for("30000142");
        assert!(!inspector.observe(&ids(&["30000142"])));
        assert!(inspector.dialog_visible());
    }

    #[test]
    fn reselecting_after_forced_close_starts_closed() {
        let mut inspector = open_for("30000142");
        inspector.observe(&[]);
        inspector.observe(&ids(&["30000142"]));
        assert!(!inspector.dialog_visible());
    }

    #[test]
    fn view_placeholder_unless_exactly_one() {
        let registry = registry();
        for selection in [vec![], ids(&["30000142", "30002187"])] {
            let view = InspectorView::derive(&selection, &registry);
            assert_eq!(view, InspectorView::NotSelected);
            assert_eq!(view.placeholder(), Some("System is not selected"));
            assert!(view.record().is_none());
        }
    }

    #[test]
    fn view_resolves_single_record() {
        let registry = registry();
        let selection = ids(&["30000142"]);
        let view = InspectorView::derive(&selection, &registry);

        assert!(view.placeholder().is_none());
        assert_eq!(view.record().map(SystemRecord::display_name), Some("Jita"));
    }

    #[test]
    fn view_unknown_single_is_unavailable() {
        let registry = registry();
        let selection = ids(&["1"]);
        let view = InspectorView::derive(&selection, &registry);

        assert_eq!(view, InspectorView::Unavailable(&selection[0]));
        assert_eq!(view.placeholder(), Some(UNAVAILABLE_TEXT));
    }

    #[test]
    fn title_hides_region() {
        let record = sample_record("30000142", "Jita", "The Forge");
        let title = format_title(&record);
        assert_eq!(title, "Jita  0.9");
        assert!(!title.contains("The Forge"));
    }

    #[test]
    fn observe_selection_closes_open_dialog() {
        let mut world = World::default();
        let mut selection = MapSelection::default();
        selection.select_only(SystemId::new("30000142"));
        world.insert_resource(selection);
        let inspector = world.spawn(open_for("30000142")).id();

        world
            .resource_mut::<MapSelection>()
            .select_only(SystemId::new("30002187"));

        let mut system_state: SystemState<(Res<MapSelection>, Query<&mut SelectionInspector>)> =
            SystemState::new(&mut world);
        let (selection, inspectors) = system_state.get_mut(&mut world);
        observe_selection(selection, inspectors);
        system_state.apply(&mut world);

        let inspector = world.get::<SelectionInspector>(inspector).expect("inspector");
        assert_eq!(
            inspector.phase(),
            &InspectorPhase::SingleClosed(SystemId::new("30002187"))
        );
    }

    fn run_edit_requests(world: &mut World) {
        let mut system_state: SystemState<(
            MessageReader<ActionBarEditRequested>,
            MessageReader<ContentEditRequested>,
            Query<&InspectorActionBar>,
            Res<SystemRegistry>,
            Query<&mut SelectionInspector>,
        )> = SystemState::new(world);
        let (bar_requests, content_requests, bars, registry, inspectors) =
            system_state.get_mut(world);
        handle_edit_requests(bar_requests, content_requests, bars, registry, inspectors);
        system_state.apply(world);
    }

    fn edit_world() -> World {
        let mut world = World::default();
        world.insert_resource(registry());
        world.init_resource::<Messages<ActionBarEditRequested>>();
        world.init_resource::<Messages<ContentEditRequested>>();
        world
    }

    #[test]
    fn bar_edit_request_opens_dialog() {
        let mut world = edit_world();
        let mut state = SelectionInspector::default();
        state.observe(&ids(&["30000142"]));
        let inspector = world.spawn(state).id();
        let bar = world.spawn(InspectorActionBar { inspector }).id();

        world
            .resource_mut::<Messages<ActionBarEditRequested>>()
            .write(ActionBarEditRequested {
                bar,
                system: SystemId::new("30000142"),
            });
        run_edit_requests(&mut world);

        let inspector = world.get::<SelectionInspector>(inspector).expect("inspector");
        assert!(inspector.dialog_visible());
    }

    #[test]
    fn foreign_bar_edit_request_is_ignored() {
        let mut world = edit_world();
        let mut state = SelectionInspector::default();
        state.observe(&ids(&["30000142"]));
        let inspector = world.spawn(state).id();
        let stranger = world.spawn_empty().id();

        world
            .resource_mut::<Messages<ActionBarEditRequested>>()
            .write(ActionBarEditRequested {
                bar: stranger,
                system: SystemId::new("30000142"),
            });
        run_edit_requests(&mut world);

        let inspector = world.get::<SelectionInspector>(inspector).expect("inspector");
        assert!(!inspector.dialog_visible());
    }

    #[test]
    fn content_edit_request_for_unknown_system_is_refused() {
        let mut world = edit_world();
        let mut state = SelectionInspector::default();
        state.observe(&ids(&["1"]));
        let inspector = world.spawn(state).id();

        world
            .resource_mut::<Messages<ContentEditRequested>>()
            .write(ContentEditRequested {
                inspector,
                system: SystemId::new("1"),
            });
        run_edit_requests(&mut world);

        let inspector = world.get::<SelectionInspector>(inspector).expect("inspector");
        assert!(!inspector.dialog_visible());
    }

    #[test]
    fn dialog_close_message_closes_without_touching_selection() {
        let mut world = World::default();
        let mut selection = MapSelection::default();
        selection.select_only(SystemId::new("30000142"));
        world.insert_resource(selection.clone());
        world.init_resource::<Messages<DialogVisibilityChanged>>();
        let inspector = world.spawn(open_for("30000142")).id();

        world
            .resource_mut::<Messages<DialogVisibilityChanged>>()
            .write(DialogVisibilityChanged {
                inspector,
                visible: false,
            });

        let mut system_state: SystemState<(
            MessageReader<DialogVisibilityChanged>,
            Query<&mut SelectionInspector>,
        )> = SystemState::new(&mut world);
        let (changes, inspectors) = system_state.get_mut(&mut world);
        handle_dialog_visibility(changes, inspectors);
        system_state.apply(&mut world);

        let state = world.get::<SelectionInspector>(inspector).expect("inspector");
        assert!(!state.dialog_visible());
        assert_eq!(*world.resource::<MapSelection>(), selection);
    }

    #[test]
    fn registry_reload_closes_dialog_for_vanished_system() {
        let mut world = World::default();
        world.insert_resource(registry());
        let kept = world.spawn(open_for("30000142")).id();
        let dropped = world.spawn(open_for("30000144")).id();

        let mut system_state: SystemState<(Res<SystemRegistry>, Query<&mut SelectionInspector>)> =
            SystemState::new(&mut world);
        let (registry, inspectors) = system_state.get_mut(&mut world);
        close_dialogs_for_missing_systems(registry, inspectors);
        system_state.apply(&mut world);

        let kept = world.get::<SelectionInspector>(kept).expect("inspector");
        assert!(kept.dialog_visible());
        let dropped = world.get::<SelectionInspector>(dropped).expect("inspector");
        assert_eq!(
            dropped.phase(),
            &InspectorPhase::SingleClosed(SystemId::new("30000144"))
        );
    }

    fn hotkey_world(key: KeyCode, inspector: SelectionInspector) -> (World, Entity) {
        let mut world = World::default();
        world.insert_resource(registry());
        world.insert_resource(InputBindings::default());
        let mut input = ButtonInput::<KeyCode>::default();
        input.press(key);
        world.insert_resource(input);
        world.init_resource::<Messages<CopyText>>();
        let entity = world.spawn(inspector).id();
        (world, entity)
    }

    fn run_hotkeys(world: &mut World) {
        let mut system_state: SystemState<(
            Res<ButtonInput<KeyCode>>,
            Res<InputBindings>,
            Res<SystemRegistry>,
            Query<&mut SelectionInspector>,
            MessageWriter<CopyText>,
        )> = SystemState::new(world);
        let (input, bindings, registry, inspectors, copies) = system_state.get_mut(world);
        handle_inspector_hotkeys(input, bindings, registry, inspectors, copies);
        system_state.apply(world);
    }

    fn closed_on(id: &str) -> SelectionInspector {
        let mut inspector = SelectionInspector::default();
        inspector.observe(&ids(&[id]));
        inspector
    }

    #[test]
    fn copy_key_copies_inspected_name() {
        let (mut world, _) = hotkey_world(KeyCode::KeyC, closed_on("30000142"));
        run_hotkeys(&mut world);

        assert_eq!(
            read_messages::<CopyText>(&mut world),
            vec![CopyText {
                text: "Jita".to_string()
            }]
        );
    }

    #[test]
    fn edit_key_opens_dialog() {
        let (mut world, entity) = hotkey_world(KeyCode::KeyE, closed_on("30000142"));
        run_hotkeys(&mut world);

        let inspector = world.get::<SelectionInspector>(entity).expect("inspector");
        assert_eq!(
            inspector.phase(),
            &InspectorPhase::SingleOpen(SystemId::new("30000142"))
        );
    }

    #[test]
    fn hotkeys_ignored_while_dialog_open() {
        let (mut world, entity) = hotkey_world(KeyCode::KeyC, open_for("30000142"));
        world
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyE);
        run_hotkeys(&mut world);

        assert!(read_messages::<CopyText>(&mut world).is_empty());
        let inspector = world.get::<SelectionInspector>(entity).expect("inspector");
        assert!(inspector.dialog_visible());
    }

    #[test]
    fn hotkeys_ignored_without_single_selection() {
        let (mut world, entity) = hotkey_world(KeyCode::KeyC, SelectionInspector::default());
        world
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyE);
        run_hotkeys(&mut world);

        assert!(read_messages::<CopyText>(&mut world).is_empty());
        let inspector = world.get::<SelectionInspector>(entity).expect("inspector");
        assert_eq!(inspector.phase(), &InspectorPhase::NoSelection);
    }
}
