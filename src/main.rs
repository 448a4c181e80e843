use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::window::{WindowLevel, WindowPlugin};
use bevy_easings::EasingsPlugin;

mod components;
mod config;
mod error;
mod sets;
mod systems;
mod types;
mod utils;

use config::load_config;
use sets::*;
use systems::*;
use types::*;

fn main() {
    let (config, source) = load_config();

    let window = Window {
        title: "folio-dock".to_string(),
        resolution: (config.window.width, config.window.height).into(),
        transparent: true,
        decorations: false,
        resizable: false,
        window_level: if config.window.always_on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        },
        ..default()
    };

    App::new()
        .insert_resource(Msaa::Sample4)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..default()
                })
                .set(LogPlugin {
                    level: Level::INFO,
                    filter: "wgpu=error,naga=warn,folio_dock=debug".to_string(),
                }),
        )
        .add_plugins(EasingsPlugin)
        .insert_resource(ClearColor(Color::NONE))
        .insert_resource(config)
        .insert_resource(source)
        .init_resource::<PointerState>()
        .init_resource::<DockCursor>()
        .init_resource::<StripBounds>()
        .init_resource::<DockSlots>()
        .init_resource::<KeyboardFocus>()
        .init_resource::<ReloadRequest>()
        .add_event::<ItemActivated>()
        .configure_sets(
            Update,
            (
                AppSystemSet::Input,
                AppSystemSet::Logic,
                AppSystemSet::Events,
                AppSystemSet::Render,
            )
                .chain(),
        )
        .configure_sets(
            Update,
            (
                InputSystemSet::Pointer,
                InputSystemSet::Mouse,
                InputSystemSet::Keyboard,
            )
                .chain()
                .in_set(AppSystemSet::Input),
        )
        .configure_sets(
            Update,
            (LogicSystemSet::Magnify, LogicSystemSet::Tooltip)
                .chain()
                .in_set(AppSystemSet::Logic),
        )
        .configure_sets(
            Update,
            (EventSystemSet::Activation, EventSystemSet::Reload)
                .chain()
                .in_set(AppSystemSet::Events),
        )
        .configure_sets(
            Update,
            (RenderSystemSet::Layout, RenderSystemSet::Visuals)
                .chain()
                .in_set(AppSystemSet::Render),
        )
        .add_systems(Startup, setup)
        .add_systems(Update, track_pointer_system.in_set(InputSystemSet::Pointer))
        .add_systems(
            Update,
            (hover_system, icon_click_system)
                .chain()
                .in_set(InputSystemSet::Mouse),
        )
        .add_systems(
            Update,
            (
                keyboard_focus_system,
                apply_focus_system,
                keybind_activate_system,
                reload_key_system,
            )
                .chain()
                .in_set(InputSystemSet::Keyboard),
        )
        .add_systems(Update, magnify_system.in_set(LogicSystemSet::Magnify))
        .add_systems(Update, tooltip_system.in_set(LogicSystemSet::Tooltip))
        .add_systems(Update, launch_system.in_set(EventSystemSet::Activation))
        .add_systems(
            Update,
            (reload_config_system, remount_system)
                .chain()
                .in_set(EventSystemSet::Reload),
        )
        .add_systems(Update, reflow_system.in_set(RenderSystemSet::Layout))
        .add_systems(Update, icon_visuals_system.in_set(RenderSystemSet::Visuals))
        .run();
}
