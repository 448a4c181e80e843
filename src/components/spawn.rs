use bevy::prelude::*;

use crate::config::Config;
use crate::types::*;
use crate::utils::load_glyph;

const BACKGROUND_COLOR: Color = Color::rgba(0.06, 0.06, 0.08, 0.82);
const CONTAINER_COLOR: Color = Color::rgba(1.0, 1.0, 1.0, 0.06);
const DIVIDER_COLOR: Color = Color::rgba(1.0, 1.0, 1.0, 0.18);
const GLOW_COLOR: Color = Color::rgba(0.23, 0.51, 0.96, 0.0);
const RING_COLOR: Color = Color::rgba(0.23, 0.51, 0.96, 0.9);

/// Internal anchors first, then external links, each group in config order.
pub fn ordered_items(items: &[DockItem]) -> (Vec<DockItem>, usize) {
    let (internal, external): (Vec<_>, Vec<_>) =
        items.iter().cloned().partition(|item| !item.external);
    let split = internal.len();
    (internal.into_iter().chain(external).collect(), split)
}

/// Spawns the strip under a fresh [`DockRoot`] and returns its slot order.
pub fn spawn_dock(
    commands: &mut Commands,
    images: &mut Assets<Image>,
    config: &Config,
) -> DockSlots {
    let dock = &config.dock;
    let (items, split) = ordered_items(&config.items);

    let root = commands
        .spawn((SpatialBundle::default(), DockRoot, Name::new("dock")))
        .id();

    let background = commands
        .spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: BACKGROUND_COLOR,
                    custom_size: Some(Vec2::splat(dock.base_size + dock.padding * 2.0)),
                    ..default()
                },
                ..default()
            },
            DockBackground,
        ))
        .id();
    commands.entity(root).add_child(background);

    let glyph_px = (dock.max_size * dock.glyph_ratio * 2.0).ceil() as u32;
    let mut slots = Vec::with_capacity(items.len() + 1);

    for (index, item) in items.into_iter().enumerate() {
        if index == split && split > 0 {
            let divider = spawn_divider(commands, config);
            commands.entity(root).add_child(divider);
            slots.push(Slot::Divider(divider));
        }

        let glyph = images.add(load_glyph(&item.icon, glyph_px));
        let icon = spawn_icon(commands, config, index, item, glyph);
        commands.entity(root).add_child(icon);
        slots.push(Slot::Icon(icon));
    }

    info!(
        "Dock mounted with {} internal and {} external items",
        split,
        slots.iter().filter(|s| matches!(s, Slot::Icon(_))).count() - split
    );

    DockSlots(slots)
}

fn spawn_divider(commands: &mut Commands, config: &Config) -> Entity {
    commands
        .spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: DIVIDER_COLOR,
                    custom_size: Some(Vec2::new(
                        config.dock.divider_width,
                        config.dock.base_size * 0.6,
                    )),
                    ..default()
                },
                transform: Transform::from_xyz(0.0, 0.0, 0.5),
                ..default()
            },
            DockDivider,
        ))
        .id()
}

fn spawn_icon(
    commands: &mut Commands,
    config: &Config,
    index: usize,
    item: DockItem,
    glyph: Handle<Image>,
) -> Entity {
    let base = config.dock.base_size;

    let glow = commands
        .spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: GLOW_COLOR,
                    custom_size: Some(Vec2::splat(base * 1.4)),
                    ..default()
                },
                transform: Transform::from_xyz(0.0, 0.0, -0.2),
                ..default()
            },
            IconGlow,
        ))
        .id();

    let ring = commands
        .spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: RING_COLOR,
                    custom_size: Some(Vec2::splat(base + 4.0)),
                    ..default()
                },
                transform: Transform::from_xyz(0.0, 0.0, -0.1),
                visibility: Visibility::Hidden,
                ..default()
            },
            FocusRing,
        ))
        .id();

    let glyph = commands
        .spawn((
            SpriteBundle {
                texture: glyph,
                sprite: Sprite {
                    custom_size: Some(Vec2::splat(base * config.dock.glyph_ratio)),
                    ..default()
                },
                transform: Transform::from_xyz(0.0, 0.0, 0.1),
                ..default()
            },
            IconGlyph,
        ))
        .id();

    let tooltip = commands
        .spawn((
            Text2dBundle {
                text: Text::from_section(
                    item.label.clone(),
                    TextStyle {
                        font: TextStyle::default().font,
                        font_size: config.tooltip.font_size,
                        color: Color::WHITE,
                    },
                )
                .with_alignment(TextAlignment::Center),
                transform: tooltip_transform(config, false),
                ..default()
            },
            TooltipLabel,
        ))
        .id();

    let label = item.label.clone();
    commands
        .spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: CONTAINER_COLOR,
                    custom_size: Some(Vec2::splat(base)),
                    ..default()
                },
                transform: Transform::from_xyz(0.0, 0.0, 1.0),
                ..default()
            },
            DockIcon { index, item },
            IconBounds::default(),
            IconMotion::at_rest(config),
            IconInteraction::default(),
            Tooltip::default(),
            IconParts {
                glyph,
                glow,
                ring,
                tooltip,
            },
            Name::new(label),
        ))
        .push_children(&[glow, ring, glyph, tooltip])
        .id()
}

/// Resting transform of a tooltip label; hidden labels collapse to zero
/// scale a little below their shown position.
pub fn tooltip_transform(config: &Config, shown: bool) -> Transform {
    let y = config.dock.max_size / 2.0 + config.tooltip.offset;
    if shown {
        Transform::from_xyz(0.0, y, 0.2)
    } else {
        Transform::from_xyz(0.0, y - 4.0, 0.2).with_scale(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_items_come_first() {
        let items = vec![
            DockItem::external("GitHub", "https://github.com", "github"),
            DockItem::internal("Home", "#hero", "home"),
            DockItem::external("LinkedIn", "https://linkedin.com", "linkedin"),
            DockItem::internal("About", "#about", "user"),
        ];
        let (ordered, split) = ordered_items(&items);
        let labels: Vec<_> = ordered.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["Home", "About", "GitHub", "LinkedIn"]);
        assert_eq!(split, 2);
    }

    #[test]
    fn single_group_has_no_split_point() {
        let items = vec![DockItem::external("GitHub", "https://github.com", "github")];
        let (_, split) = ordered_items(&items);
        assert_eq!(split, 0);
    }
}
