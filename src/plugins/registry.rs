use bevy::prelude::*;

use crate::plugins::core::{AppState, InputBindings, MapperConfig};
use crate::world::{SystemRecord, SystemRegistry};
use std::fs;
use std::path::Path;

pub struct RegistryPlugin;

impl Plugin for RegistryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SystemRegistry>()
            .add_systems(OnEnter(AppState::Loading), load_registry)
            .add_systems(
                Update,
                handle_reload_request.run_if(in_state(AppState::Ready)),
            );
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("read error: {0}")]
    Read(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[derive(serde::Serialize, serde::Deserialize)]
struct RegistryFile {
    systems: Vec<SystemRecord>,
}

const SAMPLE_RON: &str = r#"
(
    systems: [
        (
            id: "30000142",
            static_info: (
                solar_system_name: "Jita",
                region_name: "The Forge",
                constellation_name: "Kimotoro",
                security: 0.95,
                system_class: Some("HS"),
            ),
            description: Some("Main trade hub"),
        ),
        (
            id: "30002187",
            static_info: (
                solar_system_name: "Amarr",
                region_name: "Domain",
                constellation_name: "Throne Worlds",
                security: 1.0,
                system_class: Some("HS"),
            ),
        ),
        (
            id: "31000005",
            static_info: (
                solar_system_name: "Thera",
                region_name: "G-R00031",
                constellation_name: "G-C00311",
                security: -0.99,
                system_class: Some("C12"),
            ),
        ),
    ],
)
"#;

fn load_registry(
    config: Res<MapperConfig>,
    mut registry: ResMut<SystemRegistry>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    match read_registry(Path::new(&config.registry_path)) {
        Ok(Some(records)) => {
            *registry = build_registry(records);
            info!(
                "Loaded {} systems from {}",
                registry.len(),
                config.registry_path
            );
        }
        Ok(None) => match parse_registry(SAMPLE_RON) {
            Ok(records) => {
                *registry = build_registry(records);
                info!("Loaded sample registry ({} systems)", registry.len());
            }
            Err(error) => error!("Sample registry failed: {}", error),
        },
        Err(error) => error!("Registry load failed: {}", error),
    }

    next_state.set(AppState::Ready);
}

fn handle_reload_request(
    input: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    config: Res<MapperConfig>,
    mut registry: ResMut<SystemRegistry>,
) {
    if !input.just_pressed(bindings.reload_registry) {
        return;
    }

    match read_registry(Path::new(&config.registry_path)) {
        Ok(Some(records)) => {
            *registry = build_registry(records);
            info!("Reloaded {} systems", registry.len());
        }
        Ok(None) => warn!("Registry file {} not found", config.registry_path),
        Err(error) => error!("Registry reload failed: {}", error),
    }
}

fn read_registry(path: &Path) -> Result<Option<Vec<SystemRecord>>, RegistryError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    parse_registry(&contents).map(Some)
}

fn parse_registry(contents: &str) -> Result<Vec<SystemRecord>, RegistryError> {
    let file = ron::de::from_str::<RegistryFile>(contents)?;
    Ok(file.systems)
}

fn build_registry(records: Vec<SystemRecord>) -> SystemRegistry {
    let mut registry = SystemRegistry::default();
    for record in records {
        let id = record.id.clone();
        if registry.insert(record).is_some() {
            warn!("Duplicate system id {} in registry, keeping last", id);
        }
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::SystemId;
    use bevy::ecs::system::SystemState;

    #[test]
    fn sample_registry_parses() {
        let records = parse_registry(SAMPLE_RON).expect("sample parses");
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].display_name(), "Jita");
        assert_eq!(records[0].static_info.region_name, "The Forge");
    }

    #[test]
    fn malformed_registry_is_parse_error() {
        let result = parse_registry("(systems: [ (id: ) ])");
        assert!(matches!(result, Err(RegistryError::Parse(_))));
    }

    #[test]
    fn missing_file_reads_as_none() {
        let result = read_registry(Path::new("does/not/exist/systems.ron"));
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn build_registry_keeps_last_duplicate() {
        let mut records = parse_registry(SAMPLE_RON).expect("sample parses");
        let mut renamed = records[0].clone();
        renamed.static_info.solar_system_name = "Jita Prime".to_string();
        records.push(renamed);

        let registry = build_registry(records);
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry
                .get(&SystemId::new("30000142"))
                .map(SystemRecord::display_name),
            Some("Jita Prime")
        );
    }

    #[test]
    fn load_registry_falls_back_to_sample_and_enters_ready() {
        let mut world = World::default();
        world.insert_resource(MapperConfig {
            registry_path: "does/not/exist/systems.ron".to_string(),
            ..MapperConfig::default()
        });
        world.init_resource::<SystemRegistry>();
        world.init_resource::<NextState<AppState>>();

        let mut system_state: SystemState<(
            Res<MapperConfig>,
            ResMut<SystemRegistry>,
            ResMut<NextState<AppState>>,
        )> = SystemState::new(&mut world);
        let (config, registry, next_state) = system_state.get_mut(&mut world);
        load_registry(config, registry, next_state);
        system_state.apply(&mut world);

        assert_eq!(world.resource::<SystemRegistry>().len(), 3);
        assert!(matches!(
            world.resource::<NextState<AppState>>(),
            NextState::Pending(AppState::Ready)
        ));
    }

    #[test]
    fn bundled_registry_file_parses() {
        let records = read_registry(Path::new(&MapperConfig::default().registry_path))
            .expect("bundled registry parses")
            .expect("bundled registry present");
        let registry = build_registry(records);
        assert_eq!(registry.len(), 7);
        assert!(registry.get(&SystemId::new("31000005")).is_some());
    }

    const SINGLE_SYSTEM_RON: &str = r#"(
        systems: [
            (
                id: "30002053",
                static_info: (solar_system_name: "Hek", region_name: "Metropolis"),
            ),
        ],
    )"#;

    fn temp_registry(name: &str, contents: &str) -> String {
        let path = std::env::temp_dir().join(format!(
            "starmapper-{}-{}.ron",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).expect("write temp registry");
        path.to_string_lossy().into_owned()
    }

    fn reload_world(registry_path: String, press_reload: bool) -> World {
        let mut world = World::default();
        world.insert_resource(MapperConfig {
            registry_path,
            ..MapperConfig::default()
        });
        world.insert_resource(InputBindings::default());
        let mut input = ButtonInput::<KeyCode>::default();
        if press_reload {
            input.press(KeyCode::F9);
        }
        world.insert_resource(input);
        let records = parse_registry(SAMPLE_RON).expect("sample parses");
        world.insert_resource(build_registry(records));
        world
    }

    fn run_reload(world: &mut World) {
        let mut system_state: SystemState<(
            Res<ButtonInput<KeyCode>>,
            Res<InputBindings>,
            Res<MapperConfig>,
            ResMut<SystemRegistry>,
        )> = SystemState::new(world);
        let (input, bindings, config, registry) = system_state.get_mut(world);
        handle_reload_request(input, bindings, config, registry);
        system_state.apply(world);
    }

    #[test]
    fn reload_key_replaces_registry_from_file() {
        let path = temp_registry("reload-ok", SINGLE_SYSTEM_RON);
        let mut world = reload_world(path.clone(), true);

        run_reload(&mut world);

        let registry = world.resource::<SystemRegistry>();
        assert_eq!(registry.len(), 1);
        assert!(registry.get(&SystemId::new("30002053")).is_some());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn reload_without_key_does_nothing() {
        let path = temp_registry("reload-idle", SINGLE_SYSTEM_RON);
        let mut world = reload_world(path.clone(), false);

        run_reload(&mut world);

        assert_eq!(world.resource::<SystemRegistry>().len(), 3);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn malformed_reload_keeps_previous_registry() {
        let path = temp_registry("reload-bad", "(systems: [ (id: ) ])");
        let mut world = reload_world(path.clone(), true);

        run_reload(&mut world);

        let registry = world.resource::<SystemRegistry>();
        assert_eq!(registry.len(), 3);
        assert!(registry.get(&SystemId::new("30000142")).is_some());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_reload_keeps_previous_registry() {
        let mut world = reload_world("does/not/exist/systems.ron".to_string(), true);

        run_reload(&mut world);

        assert_eq!(world.resource::<SystemRegistry>().len(), 3);
    }
}
