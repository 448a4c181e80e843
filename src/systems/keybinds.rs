use bevy::app::AppExit;
use bevy::prelude::*;

use crate::types::*;

const ACTIVATE_KEYS: [KeyCode; 10] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
    KeyCode::Key0,
];

pub fn next_focus(current: Option<usize>, count: usize, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(match (current, backwards) {
        (None, false) => 0,
        (None, true) => count - 1,
        (Some(i), false) => (i + 1) % count,
        (Some(i), true) => (i + count - 1) % count,
    })
}

/// Tab / Shift+Tab walk the focus; Escape drops it, or quits when nothing
/// is focused; Q always quits.
pub fn keyboard_focus_system(
    keyboard: Res<Input<KeyCode>>,
    slots: Res<DockSlots>,
    mut focus: ResMut<KeyboardFocus>,
    mut exit: EventWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Tab) {
        let backwards = keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
        focus.0 = next_focus(focus.0, slots.icon_count(), backwards);
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        if focus.0.is_some() {
            focus.0 = None;
        } else {
            exit.send(AppExit);
        }
    }

    if keyboard.just_pressed(KeyCode::Q) {
        exit.send(AppExit);
    }
}

pub fn apply_focus_system(
    focus: Res<KeyboardFocus>,
    mut q_icons: Query<(&DockIcon, &mut IconInteraction)>,
) {
    if !focus.is_changed() {
        return;
    }
    for (icon, mut interaction) in &mut q_icons {
        interaction.focused = focus.0 == Some(icon.index);
    }
}

pub fn keybind_activate_system(
    keyboard: Res<Input<KeyCode>>,
    focus: Res<KeyboardFocus>,
    q_icons: Query<(Entity, &DockIcon)>,
    mut activated: EventWriter<ItemActivated>,
) {
    let mut targets: Vec<usize> = ACTIVATE_KEYS
        .iter()
        .enumerate()
        .filter(|(_, key)| keyboard.just_pressed(**key))
        .map(|(i, _)| i)
        .collect();

    if keyboard.any_just_pressed([KeyCode::Return, KeyCode::Space]) {
        targets.extend(focus.0);
    }

    for target in targets {
        if let Some((entity, _)) = q_icons.iter().find(|(_, icon)| icon.index == target) {
            activated.send(ItemActivated(entity));
        }
    }
}

pub fn reload_key_system(keyboard: Res<Input<KeyCode>>, mut reload: ResMut<ReloadRequest>) {
    if keyboard.just_pressed(KeyCode::R) {
        reload.0 = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_starts_at_either_end() {
        assert_eq!(next_focus(None, 5, false), Some(0));
        assert_eq!(next_focus(None, 5, true), Some(4));
    }

    #[test]
    fn focus_wraps_both_ways() {
        assert_eq!(next_focus(Some(4), 5, false), Some(0));
        assert_eq!(next_focus(Some(0), 5, true), Some(4));
        assert_eq!(next_focus(Some(2), 5, false), Some(3));
    }

    #[test]
    fn empty_dock_has_no_focus() {
        assert_eq!(next_focus(Some(1), 0, false), None);
    }

    #[test]
    fn focus_marks_only_the_matching_icon() {
        let mut app = App::new();
        app.insert_resource(KeyboardFocus(Some(1)))
            .add_systems(Update, apply_focus_system);
        let icons: Vec<Entity> = (0..3)
            .map(|index| {
                app.world
                    .spawn((
                        DockIcon {
                            index,
                            item: DockItem::internal("Item", "#item", "home"),
                        },
                        IconInteraction::default(),
                    ))
                    .id()
            })
            .collect();

        app.update();

        let focused: Vec<bool> = icons
            .iter()
            .map(|e| app.world.get::<IconInteraction>(*e).unwrap().focused)
            .collect();
        assert_eq!(focused, vec![false, true, false]);
    }
}
