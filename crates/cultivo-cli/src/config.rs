use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    /// Path of the SQLite database file
    #[serde(default = "default_database_path")]
    pub database_path: String,
    /// Kind filter applied to `list` when none is given on the command line
    #[serde(default)]
    pub default_kind: Option<String>,
}

fn default_database_path() -> String {
    "cultivo.db".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            default_kind: None,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("cultivo.toml"))
            .merge(Env::prefixed("CULTIVO_"))
            .extract()
    }
}
