use bevy::prelude::*;

pub struct CorePlugin;

#[derive(Resource, Debug, Clone)]
pub struct MapperConfig {
    pub registry_path: String,
    pub font_path: String,
    pub inspector_width: f32,
    pub list_width: f32,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            registry_path: "assets/data/systems.ron".to_string(),
            font_path: "fonts/SpaceMono-Regular.ttf".to_string(),
            inspector_width: 340.0,
            list_width: 240.0,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    pub close_dialog: KeyCode,
    pub clear_selection: KeyCode,
    pub copy_name: KeyCode,
    pub edit_system: KeyCode,
    pub reload_registry: KeyCode,
    pub extend_selection: [KeyCode; 2],
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            close_dialog: KeyCode::Escape,
            clear_selection: KeyCode::Delete,
            copy_name: KeyCode::KeyC,
            edit_system: KeyCode::KeyE,
            reload_registry: KeyCode::F9,
            extend_selection: [KeyCode::ShiftLeft, KeyCode::ShiftRight],
        }
    }
}

impl InputBindings {
    pub fn extending(&self, input: &ButtonInput<KeyCode>) -> bool {
        input.any_pressed(self.extend_selection)
    }
}

#[derive(States, Debug, Clone, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    #[default]
    Loading,
    Ready,
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_resource::<MapperConfig>()
            .init_resource::<InputBindings>()
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(AppState::Ready), log_enter_ready);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Name::new("UiCamera")));
}

fn log_enter_ready() {
    info!("State: Ready");
}
