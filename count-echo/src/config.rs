use crate::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_server_addr")]
    pub server_addr: String,

    #[serde(default)]
    pub json_log: bool,
}

impl Config {
    pub fn from_envvar() -> Result<Config> {
        envy::from_env().map_err(Into::into)
    }
}

fn default_server_addr() -> String {
    "0.0.0.0:8080".to_owned()
}
