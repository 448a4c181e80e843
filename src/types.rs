use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::utils::spring::Spring;
use crate::utils::tooltip::TooltipPhase;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DockItem {
    pub label: String,
    pub target: String,
    /// Built-in glyph name or a path to an svg/raster image.
    pub icon: String,
    #[serde(default)]
    pub external: bool,
}

impl DockItem {
    pub fn internal(label: &str, target: &str, icon: &str) -> Self {
        Self {
            label: label.to_string(),
            target: target.to_string(),
            icon: icon.to_string(),
            external: false,
        }
    }

    pub fn external(label: &str, target: &str, icon: &str) -> Self {
        Self {
            external: true,
            ..Self::internal(label, target, icon)
        }
    }
}

/// Horizontal pointer position in strip-local space, or `Far` while the
/// pointer is not over the strip.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    #[default]
    Far,
    At(f32),
}

impl PointerState {
    pub fn is_tracking(&self) -> bool {
        matches!(self, PointerState::At(_))
    }

    /// Signed distance from an icon centre; `None` when either side is
    /// unknown or not a finite number.
    pub fn distance_to(&self, center_x: Option<f32>) -> Option<f32> {
        match (*self, center_x) {
            (PointerState::At(x), Some(center)) if x.is_finite() && center.is_finite() => {
                Some(x - center)
            }
            _ => None,
        }
    }
}

#[derive(Component)]
pub struct MainCamera;

/// Root of a mounted dock; despawning it recursively unmounts everything.
#[derive(Component)]
pub struct DockRoot;

#[derive(Component)]
pub struct DockBackground;

#[derive(Component)]
pub struct DockDivider;

#[derive(Component, Debug)]
pub struct DockIcon {
    pub index: usize,
    pub item: DockItem,
}

/// Last measured extent of an icon; `center_x` stays `None` until the first
/// layout pass. `center_y` follows the icon's lift.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct IconBounds {
    pub center_x: Option<f32>,
    pub center_y: f32,
    pub width: f32,
}

impl IconBounds {
    pub fn contains(&self, local: Vec2, height: f32) -> bool {
        match self.center_x {
            Some(center) => Rect::from_center_size(
                Vec2::new(center, self.center_y),
                Vec2::new(self.width, height),
            )
            .contains(local),
            None => false,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct IconMotion {
    pub size: Spring,
    pub glyph: Spring,
    pub lift: Spring,
    pub glow: Spring,
}

impl IconMotion {
    pub fn at_rest(config: &Config) -> Self {
        let springs = &config.springs;
        Self {
            size: Spring::new(springs.size, config.dock.base_size),
            glyph: Spring::new(springs.glyph, 1.0),
            lift: Spring::new(springs.lift, 0.0),
            glow: Spring::new(springs.glow, 0.0),
        }
    }

    /// Container edge length; overshoot is kept to the glyph channel.
    pub fn displayed_size(&self, config: &Config) -> f32 {
        let size = self.size.value();
        if !size.is_finite() {
            return config.dock.base_size;
        }
        size.clamp(config.dock.base_size, config.dock.max_size)
    }

    pub fn step(&mut self, dt: f32) {
        self.size.step(dt);
        self.glyph.step(dt);
        self.lift.step(dt);
        self.glow.step(dt);
    }
}

#[derive(Component, Debug, Default, Clone, Copy)]
pub struct IconInteraction {
    pub hovered: bool,
    pub pressed: bool,
    pub focused: bool,
}

#[derive(Component, Debug)]
pub struct IconParts {
    pub glyph: Entity,
    pub glow: Entity,
    pub ring: Entity,
    pub tooltip: Entity,
}

#[derive(Component, Debug, Default)]
pub struct Tooltip {
    pub phase: TooltipPhase,
}

#[derive(Component)]
pub struct IconGlyph;

#[derive(Component)]
pub struct IconGlow;

#[derive(Component)]
pub struct FocusRing;

#[derive(Component)]
pub struct TooltipLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Icon(Entity),
    Divider(Entity),
}

/// Left-to-right order of everything in the strip.
#[derive(Resource, Debug, Default, Clone)]
pub struct DockSlots(pub Vec<Slot>);

impl DockSlots {
    pub fn icons(&self) -> impl Iterator<Item = Entity> + '_ {
        self.0.iter().filter_map(|slot| match slot {
            Slot::Icon(entity) => Some(*entity),
            Slot::Divider(_) => None,
        })
    }

    pub fn icon_count(&self) -> usize {
        self.icons().count()
    }
}

/// Strip-local half extents of the dock background, updated by the layout pass.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct StripBounds {
    pub half_size: Vec2,
}

impl StripBounds {
    pub fn contains(&self, local: Vec2) -> bool {
        local.x.abs() <= self.half_size.x && local.y.abs() <= self.half_size.y
    }
}

/// Cursor position in strip-local space while it is inside the window.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct DockCursor(pub Option<Vec2>);

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardFocus(pub Option<usize>);

#[derive(Resource, Debug, Default)]
pub struct ReloadRequest(pub bool);

#[derive(Event, Debug, Clone, Copy)]
pub struct ItemActivated(pub Entity);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_pointer_has_no_distance() {
        assert_eq!(PointerState::Far.distance_to(Some(10.0)), None);
    }

    #[test]
    fn unmeasured_icon_has_no_distance() {
        assert_eq!(PointerState::At(10.0).distance_to(None), None);
    }

    #[test]
    fn non_finite_pointer_counts_as_far() {
        assert_eq!(PointerState::At(f32::NAN).distance_to(Some(0.0)), None);
        assert_eq!(PointerState::At(f32::INFINITY).distance_to(Some(0.0)), None);
    }

    #[test]
    fn distance_is_pointer_minus_center() {
        assert_eq!(PointerState::At(15.0).distance_to(Some(40.0)), Some(-25.0));
    }

    #[test]
    fn displayed_size_stays_in_range() {
        let config = Config::default();
        let mut motion = IconMotion::at_rest(&config);
        assert_eq!(motion.displayed_size(&config), config.dock.base_size);

        motion.size = Spring::new(config.springs.size, 1000.0);
        assert_eq!(motion.displayed_size(&config), config.dock.max_size);

        motion.size = Spring::new(config.springs.size, f32::NAN);
        assert_eq!(motion.displayed_size(&config), config.dock.base_size);
    }

    #[test]
    fn hit_box_follows_lift() {
        let bounds = IconBounds {
            center_x: Some(20.0),
            center_y: 6.0,
            width: 40.0,
        };
        assert!(bounds.contains(Vec2::new(20.0, 25.0), 40.0));
        assert!(!bounds.contains(Vec2::new(20.0, -16.0), 40.0));
        assert!(!IconBounds::default().contains(Vec2::ZERO, 40.0));
    }

    #[test]
    fn slots_skip_dividers() {
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);
        let d = Entity::from_raw(3);
        let slots = DockSlots(vec![Slot::Icon(a), Slot::Divider(d), Slot::Icon(b)]);
        assert_eq!(slots.icons().collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(slots.icon_count(), 2);
    }
}
