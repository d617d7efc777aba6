use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub static CONFIG: Lazy<Arc<Config>> = Lazy::new(|| Arc::new(Config::load()));

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_brand_name")]
    pub brand_name: String,
    #[serde(default = "default_copyright_year")]
    pub copyright_year: u16,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

impl Config {
    /// Loads the config file.
    ///
    /// The frontend can't reach the server's file system, so it embeds `config.toml`
    /// at compile time (`build.rs` makes sure the file exists). The server reads it
    /// from disk and writes the defaults out if it's missing.
    ///
    /// Anything unreadable falls back to the defaults.
    pub fn load() -> Self {
        #[cfg(not(feature = "server"))]
        let config_str = Some(include_str!("../../config.toml").to_string());
        #[cfg(feature = "server")]
        let config_str = read_or_create(std::path::Path::new("config.toml"));

        config_str
            .and_then(|s| Self::parse(&s))
            .unwrap_or_default()
    }

    pub fn parse(s: &str) -> Option<Self> {
        match toml::from_str(s) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("invalid config, using defaults: {}", e);
                None
            }
        }
    }

    pub fn footer_notice(&self) -> String {
        format!(
            "© {} {}. Empowering education through better testing.",
            self.copyright_year, self.brand_name
        )
    }
}

#[cfg(feature = "server")]
fn read_or_create(path: &std::path::Path) -> Option<String> {
    if !path.exists() {
        let s = toml::to_string(&Config::default()).ok()?;
        if let Err(e) = std::fs::write(path, s.as_bytes()) {
            tracing::warn!("failed to write default config: {}", e);
        }
    }

    match std::fs::read_to_string(path) {
        Ok(s) => Some(s),
        Err(e) => {
            tracing::warn!("failed to read config: {}", e);
            None
        }
    }
}

fn default_brand_name() -> String {
    "TestMaster".to_string()
}

fn default_copyright_year() -> u16 {
    2024
}

fn default_port() -> u16 {
    8080
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            brand_name: default_brand_name(),
            copyright_year: default_copyright_year(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}
