use bevy::prelude::*;

use crate::components::spawn_dock;
use crate::config::{get_config_path, read_or_init_config, Config, ConfigSource};
use crate::types::*;

pub fn setup(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    config: Res<Config>,
    source: Res<ConfigSource>,
) {
    match (&source.path, &source.issue) {
        (_, Some(issue)) => warn!("Config: {issue}"),
        (Some(path), None) => info!("Config loaded from {}", path.display()),
        (None, None) => info!("Using default config"),
    }
    debug!(
        "Spring damping ratios: size {:.2}, glyph {:.2}",
        config.springs.size.damping_ratio(),
        config.springs.glyph.damping_ratio()
    );

    commands
        .spawn(Camera2dBundle {
            transform: Transform::from_xyz(0.0, 0.0, 100.0),
            ..default()
        })
        .insert(MainCamera);

    let slots = spawn_dock(&mut commands, &mut images, &config);
    commands.insert_resource(slots);
}

/// Re-reads the config file when a reload was requested. A file that fails
/// to load leaves the running config in place.
pub fn reload_config_system(reload: Res<ReloadRequest>, mut config: ResMut<Config>) {
    if !reload.0 {
        return;
    }

    match get_config_path().map(|path| read_or_init_config(&path)) {
        Some(Ok(fresh)) => *config = fresh,
        Some(Err(err)) => warn!("Reload kept the current config: {err}"),
        None => warn!("Reload kept the current config: no config directory"),
    }
}

/// Unmounts the dock and mounts a fresh one from the current config.
pub fn remount_system(
    mut commands: Commands,
    mut reload: ResMut<ReloadRequest>,
    mut images: ResMut<Assets<Image>>,
    config: Res<Config>,
    mut pointer: ResMut<PointerState>,
    mut focus: ResMut<KeyboardFocus>,
    q_roots: Query<Entity, With<DockRoot>>,
) {
    if !reload.0 {
        return;
    }
    reload.0 = false;

    for root in &q_roots {
        commands.entity(root).despawn_recursive();
    }
    *pointer = PointerState::Far;
    focus.0 = None;

    let slots = spawn_dock(&mut commands, &mut images, &config);
    commands.insert_resource(slots);
    info!("Dock reloaded");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mount(mut commands: Commands, mut images: ResMut<Assets<Image>>, config: Res<Config>) {
        let slots = spawn_dock(&mut commands, &mut images, &config);
        commands.insert_resource(slots);
    }

    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<Assets<Image>>()
            .insert_resource(Config::default())
            .init_resource::<PointerState>()
            .init_resource::<KeyboardFocus>()
            .init_resource::<ReloadRequest>()
            .init_resource::<DockSlots>()
            .add_systems(Startup, mount)
            .add_systems(Update, remount_system);
        app.update();
        app
    }

    fn live_roots(app: &mut App) -> usize {
        app.world
            .query_filtered::<Entity, With<DockRoot>>()
            .iter(&app.world)
            .count()
    }

    #[test]
    fn remount_replaces_every_icon() {
        let mut app = test_app();
        let old: Vec<Entity> = app.world.resource::<DockSlots>().icons().collect();
        assert_eq!(old.len(), Config::default().items.len());
        assert_eq!(live_roots(&mut app), 1);

        *app.world.resource_mut::<PointerState>() = PointerState::At(12.0);
        app.world.resource_mut::<KeyboardFocus>().0 = Some(2);
        app.world.resource_mut::<ReloadRequest>().0 = true;
        app.update();

        for entity in &old {
            assert!(app.world.get_entity(*entity).is_none());
        }

        let slots = app.world.resource::<DockSlots>().clone();
        assert_eq!(slots.icon_count(), old.len());
        for slot in &slots.0 {
            let entity = match slot {
                Slot::Icon(entity) | Slot::Divider(entity) => *entity,
            };
            assert!(app.world.get_entity(entity).is_some());
        }
        for entity in slots.icons() {
            assert!(app.world.get::<DockIcon>(entity).is_some());
            assert!(!old.contains(&entity));
        }

        assert_eq!(live_roots(&mut app), 1);
        assert_eq!(*app.world.resource::<PointerState>(), PointerState::Far);
        assert_eq!(app.world.resource::<KeyboardFocus>().0, None);
        assert!(!app.world.resource::<ReloadRequest>().0);
    }

    #[test]
    fn no_request_leaves_the_dock_mounted() {
        let mut app = test_app();
        let before: Vec<Entity> = app.world.resource::<DockSlots>().icons().collect();
        *app.world.resource_mut::<PointerState>() = PointerState::At(12.0);
        app.update();

        let after: Vec<Entity> = app.world.resource::<DockSlots>().icons().collect();
        assert_eq!(before, after);
        assert_eq!(*app.world.resource::<PointerState>(), PointerState::At(12.0));
    }
}
