//! TOML config file loading and creation.

use crate::schema::HeroConfig;
use crate::validation;
use hero_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. If the parsed config fails
/// validation, a warning is logged and the default config is returned.
pub fn load_from_path(path: &Path) -> Result<HeroConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let config: HeroConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(HeroConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/hero-morph/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<HeroConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(HeroConfig::default());
    }

    load_from_path(&path)
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("hero-morph").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

fn default_config_toml() -> &'static str {
    r##"# Hero morph configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[text]
# words = ["CREATIVE", "DEVELOPER"]
# font_family = "sans-serif"
# font_size = 110        # 8-400
# bold = true
# canvas_width = 1400    # 16-4096
# canvas_height = 770    # 16-4096
# word_spacing = 40      # 0-512
# sample_stride = 4      # 1-64
# alpha_threshold = 150  # 0-254
# extent_x = 1.9
# extent_y = 1.05

[particles]
# count = 700            # 1-2000, plexus cost grows with count squared
# sphere_radius = 2.4
# seed = 42
# point_color = "#00d4ff" # #RRGGBB or #RRGGBBAA
# point_size = 2.0

[morph]
# reveal_start = 0.2     # 0.0-1.0
# reveal_end = 0.9       # 0.0-1.0, greater than reveal_start
# rotation_speed = 0.15  # radians per second

[interaction]
# radius = 0.5
# force = 0.3
# pointer_extent_x = 1.9
# pointer_extent_y = 1.05

[plexus]
# wide_threshold = 0.6
# narrow_threshold = 0.18
# max_alpha = 0.6
# min_fade = 0.25
# color = "#7fdcff"       # #RRGGBB or #RRGGBBAA

[timeline]
# duration = 3.5         # seconds
# ease = "power2_in_out" # linear, power2_in_out

[motion]
# reduced_motion = false

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_nonexistent_returns_file_not_found() {
        let result = load_from_path(Path::new("/tmp/nonexistent_hero_morph_config.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn load_valid_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r##"
[text]
words = ["HELLO"]

[plexus]
color = "#ff0000"
"##,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.text.words, vec!["HELLO"]);
        assert_eq!(config.plexus.color, "#ff0000");
        // Defaults preserved
        assert_eq!(config.particles.count, 700);
        assert_eq!(config.text.sample_stride, 4);
    }

    #[test]
    fn load_invalid_toml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        let result = load_from_path(&path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn load_config_with_invalid_values_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r##"
[particles]
count = 0

[morph]
reveal_start = 0.8
reveal_end = 0.3
"##,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.particles.count, 700);
        assert!((config.morph.reveal_start - 0.2).abs() < 1e-9);
    }

    #[test]
    fn create_default_config_writes_parseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        create_default_config(&path).unwrap();
        assert!(path.exists());

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.text.words, vec!["CREATIVE", "DEVELOPER"]);
    }
}
