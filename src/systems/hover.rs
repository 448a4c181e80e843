use bevy::prelude::*;

use crate::types::*;

/// Marks the icon under the cursor as hovered, and as pressed while the left
/// button is held on it.
pub fn hover_system(
    cursor: Res<DockCursor>,
    buttons: Res<Input<MouseButton>>,
    mut q_icons: Query<(&IconBounds, &mut IconInteraction)>,
) {
    for (bounds, mut interaction) in &mut q_icons {
        let hovered = cursor
            .0
            .is_some_and(|local| bounds.contains(local, bounds.width));
        let pressed = hovered && buttons.pressed(MouseButton::Left);

        if interaction.hovered != hovered || interaction.pressed != pressed {
            interaction.hovered = hovered;
            interaction.pressed = pressed;
        }
    }
}

pub fn icon_click_system(
    buttons: Res<Input<MouseButton>>,
    q_icons: Query<(Entity, &IconInteraction), With<DockIcon>>,
    mut activated: EventWriter<ItemActivated>,
) {
    if !buttons.just_released(MouseButton::Left) {
        return;
    }

    for (entity, interaction) in &q_icons {
        if interaction.hovered {
            activated.send(ItemActivated(entity));
        }
    }
}
