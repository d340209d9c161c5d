use crate::Config;
use anyhow::{self, bail, Result};
use ron::{
    extensions::Extensions,
    ser::{to_string_pretty, PrettyConfig},
    Options,
};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use xdg::BaseDirectories;

const COMMENT_HEADER: &str = r#"// windfall configuration
//
// gravity:       pixels per tick squared pulling windows down
// bounce:        share of the speed kept when a window hits a screen edge
// friction:      share of the speed kept every tick
// throw_factor:  share of the last cursor movement a released window keeps
// bottom_margin: pixels left free at the bottom of the screen, for a panel
// hit_test:      Stack or BoundingBox, how the window under the cursor is found
// titles:        only animate these windows, for example `titles: ["Notepad"]`

"#;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ConfigFileType {
    RonFile,
    TomlFile,
}

/// Returns where the `ron` configuration file lives, creating its directory when needed.
/// # Errors
///
/// Errors when the XDG directories cannot be determined or created.
pub fn get_default_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("windfall")?;
    Ok(path.place_config_file("config.ron")?)
}

#[must_use]
pub fn check_file_type(path: impl AsRef<Path>) -> ConfigFileType {
    match path.as_ref().extension() {
        Some(ext) if ext == "toml" => ConfigFileType::TomlFile,
        _ => ConfigFileType::RonFile,
    }
}

/// Loads the configuration from `path`, or from the default location.
///
/// Without a path, `config.ron` is preferred over `config.toml`. When neither exists the
/// defaults are written to `config.ron`.
/// # Errors
///
/// Errors when the file cannot be read or parsed, or the default file cannot be written.
pub fn load_config_file(path: Option<PathBuf>) -> Result<Config> {
    tracing::debug!("Loading config file");

    let config_file = if let Some(path) = path {
        if !path.exists() {
            bail!("Config file '{}' does not exist", path.display());
        }
        path
    } else {
        let ron_file = get_default_path()?;
        let toml_file = ron_file.with_extension("toml");
        if ron_file.exists() {
            ron_file
        } else if toml_file.exists() {
            toml_file
        } else {
            tracing::debug!("Config file not found. Using default config file.");
            let config = Config::default();
            write_to_file(&ron_file, &config)?;
            return Ok(config);
        }
    };

    tracing::debug!("Config file '{}' found.", config_file.to_string_lossy());
    let contents = fs::read_to_string(&config_file)?;
    parse_config(&contents, check_file_type(&config_file))
}

/// # Errors
///
/// Errors when the contents are not a valid configuration.
pub fn parse_config(contents: &str, file_type: ConfigFileType) -> Result<Config> {
    match file_type {
        ConfigFileType::RonFile => {
            let ron = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
            Ok(ron.from_str(contents)?)
        }
        ConfigFileType::TomlFile => Ok(toml::from_str(contents)?),
    }
}

/// # Errors
/// This function errors when:
/// - serialization of the config fails
/// - writing to file fails
pub fn write_to_file(ron_file: &Path, config: &Config) -> Result<(), anyhow::Error> {
    let ron_pretty_conf = PrettyConfig::new()
        .depth_limit(2)
        .extensions(Extensions::IMPLICIT_SOME);
    let ron = to_string_pretty(&config, ron_pretty_conf)?;
    let ron_with_header = String::from(COMMENT_HEADER) + &ron;
    let mut file = File::create(ron_file)?;
    file.write_all(ron_with_header.as_bytes())?;
    Ok(())
}
