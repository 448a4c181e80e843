use bevy::log::info;

use crate::error::DockError;
use crate::types::DockItem;

/// Turns an item's target into something a browser can open. In-page
/// anchors and site-relative paths are resolved against `site_url`.
pub fn resolve_target(item: &DockItem, site_url: &str) -> String {
    let target = item.target.trim();
    if item.external || target.contains("://") || target.starts_with("mailto:") {
        return target.to_string();
    }

    let base = site_url.trim_end_matches('/');
    if target.starts_with('#') {
        format!("{base}/{target}")
    } else {
        format!("{base}/{}", target.trim_start_matches('/'))
    }
}

pub fn launch_item(item: &DockItem, site_url: &str) -> Result<(), DockError> {
    let url = resolve_target(item, site_url);
    open::that_detached(&url).map_err(|source| DockError::Launch {
        target: url.clone(),
        source,
    })?;
    info!("Opened {} -> {}", item.label, url);
    Ok(())
}
