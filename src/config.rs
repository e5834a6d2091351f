/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::ConfigError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub requests: Vec<RequestConfig>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub n_floors: u32,
    pub ticks: i64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RequestConfig {
    pub origin: u32,
    pub destination: u32,
    pub time: u64,
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&config_str)
}
