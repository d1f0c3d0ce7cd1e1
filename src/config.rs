use crate::wheel::geometry::{DEFAULT_HIT_RADIUS, DEFAULT_MARGIN};
use crate::wheel::WheelGeometry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "ENNEAGRAM_WHEEL_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub margin: f64,
    pub hit_radius: f64,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            hit_radius: DEFAULT_HIT_RADIUS,
            window_width: 1024.0,
            window_height: 720.0,
        }
    }
}

impl WheelConfig {
    pub fn geometry(&self) -> WheelGeometry {
        WheelGeometry::new(self.margin, self.hit_radius)
    }

    /// Replaces out-of-range values with defaults, reporting each one.
    fn sanitized(mut self) -> (Self, Vec<String>) {
        let defaults = Self::default();
        let mut warnings = Vec::new();

        if !self.margin.is_finite() || self.margin < 0.0 {
            warnings.push(format!("ignoring invalid margin {}", self.margin));
            self.margin = defaults.margin;
        }
        if !self.hit_radius.is_finite() || self.hit_radius <= 0.0 {
            warnings.push(format!("ignoring invalid hit_radius {}", self.hit_radius));
            self.hit_radius = defaults.hit_radius;
        }
        if !self.window_width.is_finite() || self.window_width < 200.0 {
            warnings.push(format!("ignoring invalid window_width {}", self.window_width));
            self.window_width = defaults.window_width;
        }
        if !self.window_height.is_finite() || self.window_height < 200.0 {
            warnings.push(format!("ignoring invalid window_height {}", self.window_height));
            self.window_height = defaults.window_height;
        }

        (self, warnings)
    }
}

fn default_config_dir() -> PathBuf {
    ["HOME", "USERPROFILE"]
        .iter()
        .find_map(|key| std::env::var_os(key))
        .map(|home| PathBuf::from(home).join(".enneagram-wheel"))
        .unwrap_or_else(|| PathBuf::from(".enneagram-wheel"))
}

pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| default_config_dir().join("config.json"))
}

fn read_config_file(path: &Path) -> Result<WheelConfig, String> {
    let data = fs::read(path).map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    serde_json::from_slice(&data).map_err(|err| format!("failed to parse {}: {err}", path.display()))
}

/// Loads the config at `path`. Never fails: problems come back as warnings
/// alongside a usable config.
pub fn load_from(path: &Path) -> (WheelConfig, Vec<String>) {
    if !path.exists() {
        return (WheelConfig::default(), Vec::new());
    }

    match read_config_file(path) {
        Ok(config) => config.sanitized(),
        Err(err) => (WheelConfig::default(), vec![err]),
    }
}

pub fn save_to(path: &Path, config: &WheelConfig) -> io::Result<()> {
    let bytes = serde_json::to_vec_pretty(config)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    replace_file(path, &bytes)
}

/// Stages `bytes` beside `path` and renames the staged file over it, so
/// readers see either the old config or the new one.
fn replace_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let staged = path.with_extension("json.tmp");
    fs::write(&staged, bytes)?;
    fs::rename(&staged, path).map_err(|err| {
        let _ = fs::remove_file(&staged);
        err
    })
}
