use bevy::prelude::*;

use crate::config::Config;
use crate::types::*;
use crate::utils::falloff::Falloff;

/// Retargets and advances every icon's springs from the shared pointer.
///
/// Distances come from the bounds measured by the previous layout pass, so an
/// icon that has never been laid out stays at rest.
pub fn magnify_system(
    time: Res<Time>,
    config: Res<Config>,
    pointer: Res<PointerState>,
    slots: Res<DockSlots>,
    mut q_icons: Query<(&mut IconMotion, &IconBounds, &IconInteraction), With<DockIcon>>,
) {
    let falloff = Falloff::from(&config.magnification);
    let mag = &config.magnification;
    let dt = time.delta_seconds();

    let centers: Vec<Option<f32>> = slots
        .icons()
        .map(|entity| {
            q_icons
                .get(entity)
                .ok()
                .and_then(|(_, bounds, _)| bounds.center_x)
        })
        .collect();
    let factors = falloff.tiered_factors(*pointer, &centers);

    for (entity, factor) in slots.icons().zip(factors) {
        let Ok((mut motion, bounds, interaction)) = q_icons.get_mut(entity) else {
            continue;
        };

        let proximity = falloff.proximity(pointer.distance_to(bounds.center_x));
        let press = if interaction.pressed {
            mag.press_scale
        } else {
            1.0
        };

        motion.size.set_target(falloff.size_for(factor, &config.dock));
        motion
            .glyph
            .set_target((1.0 + (factor - 1.0) * mag.glyph_pop) * press);
        motion.lift.set_target(mag.lift * proximity);
        motion.glow.set_target(mag.glow * proximity);
        motion.step(dt);
    }
}
