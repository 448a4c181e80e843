use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::types::*;

/// `At(x)` while the cursor is inside the strip, the far sentinel otherwise.
pub fn pointer_from_cursor(local: Option<Vec2>, strip: &StripBounds) -> PointerState {
    match local {
        Some(position) if position.is_finite() && strip.contains(position) => {
            PointerState::At(position.x)
        }
        _ => PointerState::Far,
    }
}

pub fn track_pointer_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    q_root: Query<&Transform, With<DockRoot>>,
    strip: Res<StripBounds>,
    mut cursor: ResMut<DockCursor>,
    mut pointer: ResMut<PointerState>,
) {
    let root_offset = q_root
        .get_single()
        .map(|transform| transform.translation.truncate())
        .unwrap_or(Vec2::ZERO);

    let local = match (windows.get_single(), q_camera.get_single()) {
        (Ok(window), Ok((camera, camera_transform))) => window
            .cursor_position()
            .and_then(|cursor_pos| camera.viewport_to_world_2d(camera_transform, cursor_pos))
            .map(|world| world - root_offset),
        _ => None,
    };
    cursor.set_if_neq(DockCursor(local));

    let next = pointer_from_cursor(local, &strip);
    if next.is_tracking() != pointer.is_tracking() {
        debug!(
            "Dock {}",
            if next.is_tracking() { "tracking" } else { "idle" }
        );
    }
    pointer.set_if_neq(next);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip() -> StripBounds {
        StripBounds {
            half_size: Vec2::new(200.0, 28.0),
        }
    }

    #[test]
    fn inside_strip_tracks_x() {
        assert_eq!(
            pointer_from_cursor(Some(Vec2::new(-120.0, 10.0)), &strip()),
            PointerState::At(-120.0)
        );
    }

    #[test]
    fn outside_strip_is_far() {
        assert_eq!(
            pointer_from_cursor(Some(Vec2::new(-120.0, 40.0)), &strip()),
            PointerState::Far
        );
        assert_eq!(
            pointer_from_cursor(Some(Vec2::new(250.0, 0.0)), &strip()),
            PointerState::Far
        );
    }

    #[test]
    fn no_cursor_is_far() {
        assert_eq!(pointer_from_cursor(None, &strip()), PointerState::Far);
    }

    #[test]
    fn unmeasured_strip_is_far() {
        assert_eq!(
            pointer_from_cursor(Some(Vec2::new(1.0, 0.0)), &StripBounds::default()),
            PointerState::Far
        );
    }
}
