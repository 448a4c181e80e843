use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DockError;
use crate::types::DockItem;
use crate::utils::spring::{SpringParams, MAX_RATE};

const CONFIG_ENV: &str = "FOLIO_DOCK_CONFIG";

#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Base URL that in-page anchors such as `#about` are resolved against.
    pub site_url: String,
    pub window: WindowConfig,
    pub dock: DockConfig,
    pub magnification: MagnificationConfig,
    pub springs: SpringsConfig,
    pub tooltip: TooltipConfig,
    pub items: Vec<DockItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub always_on_top: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DockConfig {
    pub base_size: f32,
    pub max_size: f32,
    pub gap: f32,
    pub padding: f32,
    pub divider_width: f32,
    /// Glyph edge length as a fraction of its container.
    pub glyph_ratio: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MagnificationConfig {
    pub radius: f32,
    pub max_factor: f32,
    pub neighbor_factor: f32,
    /// Share of the magnification factor applied again to the glyph alone.
    pub glyph_pop: f32,
    pub lift: f32,
    pub glow: f32,
    pub press_scale: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SpringsConfig {
    pub size: SpringParams,
    pub glyph: SpringParams,
    pub lift: SpringParams,
    pub glow: SpringParams,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TooltipConfig {
    pub font_size: f32,
    pub offset: f32,
    pub transition_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_url: "https://mrshady.dev".to_string(),
            window: WindowConfig::default(),
            dock: DockConfig::default(),
            magnification: MagnificationConfig::default(),
            springs: SpringsConfig::default(),
            tooltip: TooltipConfig::default(),
            items: default_items(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 180.0,
            always_on_top: true,
        }
    }
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            base_size: 40.0,
            max_size: 64.0,
            gap: 6.0,
            padding: 8.0,
            divider_width: 2.0,
            glyph_ratio: 0.5,
        }
    }
}

impl Default for MagnificationConfig {
    fn default() -> Self {
        Self {
            radius: 110.0,
            max_factor: 1.3,
            neighbor_factor: 1.12,
            glyph_pop: 0.5,
            lift: 4.0,
            glow: 0.25,
            press_scale: 0.95,
        }
    }
}

impl Default for SpringsConfig {
    fn default() -> Self {
        Self {
            size: SpringParams::new(0.1, 200.0, 7.0),
            glyph: SpringParams::new(0.1, 300.0, 6.0),
            lift: SpringParams::new(0.1, 200.0, 12.0),
            glow: SpringParams::new(0.1, 150.0, 15.0),
        }
    }
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            offset: 14.0,
            transition_ms: 150,
        }
    }
}

fn default_items() -> Vec<DockItem> {
    vec![
        DockItem::internal("Home", "#hero", "home"),
        DockItem::internal("About", "#about", "user"),
        DockItem::internal("Experience", "#experience", "briefcase"),
        DockItem::internal("Projects", "#projects", "folder"),
        DockItem::internal("Skills", "#skills", "wrench"),
        DockItem::internal("Contact", "#contact", "mail"),
        DockItem::external("LinkedIn", "https://linkedin.com/in/adeshsrivastava-ofc", "linkedin"),
        DockItem::external("GitHub", "https://github.com/adeshsrivastava-ofc", "github"),
        DockItem::external("Twitter", "https://x.com/adesh_ofc", "twitter"),
        DockItem::external("LeetCode", "https://leetcode.com/u/AdeshSrivastava", "code"),
    ]
}

impl Config {
    pub fn validate(&self) -> Result<(), DockError> {
        let dock = &self.dock;
        let mag = &self.magnification;

        if !(dock.base_size > 0.0) {
            return Err(invalid("dock.base_size must be positive"));
        }
        if !(dock.max_size >= dock.base_size) {
            return Err(invalid("dock.max_size must not be smaller than dock.base_size"));
        }
        if !(dock.gap >= 0.0) || !(dock.padding >= 0.0) || !(dock.divider_width >= 0.0) {
            return Err(invalid("dock spacing values must not be negative"));
        }
        if !(dock.glyph_ratio > 0.0 && dock.glyph_ratio <= 1.0) {
            return Err(invalid("dock.glyph_ratio must be in (0, 1]"));
        }
        if !(mag.radius > 0.0) {
            return Err(invalid("magnification.radius must be positive"));
        }
        if !(mag.neighbor_factor > 1.0 && mag.max_factor > mag.neighbor_factor) {
            return Err(invalid(
                "magnification factors must satisfy 1 < neighbor_factor < max_factor",
            ));
        }
        for (name, params) in [
            ("size", &self.springs.size),
            ("glyph", &self.springs.glyph),
            ("lift", &self.springs.lift),
            ("glow", &self.springs.glow),
        ] {
            if !params.is_valid() {
                return Err(DockError::InvalidConfig(format!(
                    "springs.{name} needs positive mass, stiffness and damping, \
                     with sqrt(stiffness / mass) and damping / mass at most {MAX_RATE}"
                )));
            }
        }
        if self.tooltip.transition_ms == 0 {
            return Err(invalid("tooltip.transition_ms must be positive"));
        }
        if self.items.is_empty() {
            return Err(invalid("at least one dock item is required"));
        }

        Ok(())
    }
}

fn invalid(reason: &str) -> DockError {
    DockError::InvalidConfig(reason.to_string())
}

/// Where the active config came from, kept around so startup can report it
/// once logging is up.
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigSource {
    pub path: Option<PathBuf>,
    pub issue: Option<String>,
}

pub fn get_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }

    dirs::config_dir().and_then(|mut path| {
        path.push("folio-dock");
        fs::create_dir_all(&path).ok()?;
        path.push("config.toml");
        Some(path)
    })
}

pub fn parse_config(contents: &str) -> Result<Config, DockError> {
    let config: Config = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Reads the config at `path`, writing the defaults there first when the
/// file does not exist yet.
pub fn read_or_init_config(path: &Path) -> Result<Config, DockError> {
    if path.exists() {
        let contents = fs::read_to_string(path).map_err(|source| DockError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        parse_config(&contents)
    } else {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config)?;
        fs::write(path, toml_string).map_err(|source| DockError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }
}

pub fn load_config() -> (Config, ConfigSource) {
    let Some(path) = get_config_path() else {
        return (
            Config::default(),
            ConfigSource {
                path: None,
                issue: Some("no config directory available, using defaults".to_string()),
            },
        );
    };

    match read_or_init_config(&path) {
        Ok(config) => (
            config,
            ConfigSource {
                path: Some(path),
                issue: None,
            },
        ),
        Err(err) => (
            Config::default(),
            ConfigSource {
                path: Some(path),
                issue: Some(format!("{err}, using defaults")),
            },
        ),
    }
}
