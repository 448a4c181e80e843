use bevy::prelude::*;
use bevy_easings::{Ease, EaseFunction, EasingType};
use std::time::Duration;

use crate::components::tooltip_transform;
use crate::config::Config;
use crate::types::*;
use crate::utils::tooltip::TooltipPhase;

pub fn tooltip_system(
    mut commands: Commands,
    config: Res<Config>,
    mut q_icons: Query<(&IconInteraction, &IconParts, &mut Tooltip)>,
    q_labels: Query<&Transform, With<TooltipLabel>>,
) {
    let duration = Duration::from_millis(config.tooltip.transition_ms);

    for (interaction, parts, mut tooltip) in &mut q_icons {
        let Some(next) = tooltip.phase.next(interaction.hovered, interaction.focused) else {
            continue;
        };
        tooltip.phase = next;

        let Ok(&current) = q_labels.get(parts.tooltip) else {
            continue;
        };
        let shown = next == TooltipPhase::Shown;
        let ease = if shown {
            EaseFunction::QuadraticOut
        } else {
            EaseFunction::QuadraticIn
        };

        let target = tooltip_transform(&config, shown);
        if duration.is_zero() {
            commands.entity(parts.tooltip).insert(target);
            continue;
        }
        commands.entity(parts.tooltip).insert(current.ease_to(
            target,
            ease,
            EasingType::Once { duration },
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_easings::EasingComponent;

    fn test_app(transition_ms: u64) -> (App, Entity, Entity) {
        let mut config = Config::default();
        config.tooltip.transition_ms = transition_ms;

        let mut app = App::new();
        app.insert_resource(config.clone())
            .add_systems(Update, tooltip_system);

        let label = app
            .world
            .spawn((tooltip_transform(&config, false), TooltipLabel))
            .id();
        let placeholder = app.world.spawn_empty().id();
        let icon = app
            .world
            .spawn((
                IconInteraction::default(),
                IconParts {
                    glyph: placeholder,
                    glow: placeholder,
                    ring: placeholder,
                    tooltip: label,
                },
                Tooltip::default(),
            ))
            .id();
        (app, icon, label)
    }

    fn hover(app: &mut App, icon: Entity) {
        app.world.get_mut::<IconInteraction>(icon).unwrap().hovered = true;
        app.update();
    }

    #[test]
    fn hover_starts_an_eased_reveal() {
        let (mut app, icon, label) = test_app(150);
        hover(&mut app, icon);

        assert_eq!(
            app.world.get::<Tooltip>(icon).unwrap().phase,
            TooltipPhase::Shown
        );
        assert!(app
            .world
            .get::<EasingComponent<Transform>>(label)
            .is_some());
    }

    #[test]
    fn zero_length_transition_jumps_to_target() {
        let (mut app, icon, label) = test_app(0);
        hover(&mut app, icon);

        let config = app.world.resource::<Config>().clone();
        assert!(app
            .world
            .get::<EasingComponent<Transform>>(label)
            .is_none());
        assert_eq!(
            *app.world.get::<Transform>(label).unwrap(),
            tooltip_transform(&config, true)
        );
    }
}
