use bevy::prelude::*;

use crate::config::Config;
use crate::types::*;
use crate::utils::layout::flow_row;

const GLOW_SPREAD: f32 = 1.4;
const RING_INSET: f32 = 4.0;

/// Lays the strip out from the current displayed sizes. Icons are resized,
/// never scaled, so growth pushes the rest of the row aside.
pub fn reflow_system(
    config: Res<Config>,
    slots: Res<DockSlots>,
    mut strip: ResMut<StripBounds>,
    mut q_icons: Query<
        (&IconMotion, &mut IconBounds, &mut Transform, &mut Sprite),
        With<DockIcon>,
    >,
    mut q_dividers: Query<&mut Transform, (With<DockDivider>, Without<DockIcon>)>,
    mut q_background: Query<&mut Sprite, (With<DockBackground>, Without<DockIcon>)>,
) {
    let dock = &config.dock;

    let widths: Vec<f32> = slots
        .0
        .iter()
        .map(|slot| match slot {
            Slot::Icon(entity) => q_icons
                .get(*entity)
                .map(|(motion, ..)| motion.displayed_size(&config))
                .unwrap_or(dock.base_size),
            Slot::Divider(_) => dock.divider_width,
        })
        .collect();

    let (spans, total) = flow_row(&widths, dock.gap);
    let mut tallest = dock.base_size;

    for (slot, span) in slots.0.iter().zip(&spans) {
        match slot {
            Slot::Icon(entity) => {
                if let Ok((motion, mut bounds, mut transform, mut sprite)) =
                    q_icons.get_mut(*entity)
                {
                    let lift = motion.lift.value();
                    transform.translation.x = span.center();
                    transform.translation.y = lift;
                    sprite.custom_size = Some(Vec2::splat(span.width));
                    *bounds = IconBounds {
                        center_x: Some(span.center()),
                        center_y: lift,
                        width: span.width,
                    };
                    tallest = tallest.max(span.width);
                }
            }
            Slot::Divider(entity) => {
                if let Ok(mut transform) = q_dividers.get_mut(*entity) {
                    transform.translation.x = span.center();
                }
            }
        }
    }

    let size = Vec2::new(total + dock.padding * 2.0, tallest + dock.padding * 2.0);
    for mut sprite in &mut q_background {
        sprite.custom_size = Some(size);
    }
    strip.half_size = size / 2.0;
}

/// Pushes spring values onto the glyph, glow and focus ring of each icon.
pub fn icon_visuals_system(
    config: Res<Config>,
    q_icons: Query<(&IconMotion, &IconInteraction, &IconParts)>,
    mut q_parts: Query<(&mut Sprite, &mut Transform, &mut Visibility), Without<DockIcon>>,
) {
    for (motion, interaction, parts) in &q_icons {
        let size = motion.displayed_size(&config);

        if let Ok((mut sprite, mut transform, _)) = q_parts.get_mut(parts.glyph) {
            sprite.custom_size = Some(Vec2::splat(size * config.dock.glyph_ratio));
            transform.scale = Vec3::splat(motion.glyph.value().max(0.0));
        }

        if let Ok((mut sprite, _, _)) = q_parts.get_mut(parts.glow) {
            sprite.custom_size = Some(Vec2::splat(size * GLOW_SPREAD));
            sprite.color.set_a(motion.glow.value().clamp(0.0, 1.0));
        }

        if let Ok((mut sprite, _, mut visibility)) = q_parts.get_mut(parts.ring) {
            sprite.custom_size = Some(Vec2::splat(size + RING_INSET));
            *visibility = if interaction.focused {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
        }
    }
}
