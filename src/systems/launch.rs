use bevy::prelude::*;

use crate::config::Config;
use crate::types::*;
use crate::utils::launch_item;

pub fn launch_system(
    mut activated: EventReader<ItemActivated>,
    q_icons: Query<&DockIcon>,
    config: Res<Config>,
) {
    for ItemActivated(entity) in activated.read() {
        let Ok(icon) = q_icons.get(*entity) else {
            continue;
        };
        if let Err(err) = launch_item(&icon.item, &config.site_url) {
            error!("{err}");
        }
    }
}
