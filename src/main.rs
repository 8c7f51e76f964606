use bevy::prelude::*;

mod compat;
mod links;
mod plugins;
mod world;

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::srgb(0.05, 0.07, 0.1)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Star Mapper".to_string(),
                resolution: (1280, 720).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            plugins::core::CorePlugin,
            plugins::registry::RegistryPlugin,
            plugins::actions::ActionsPlugin,
            plugins::ui::UIPlugin,
        ))
        .run();
}
