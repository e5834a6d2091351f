/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*               Errors                */
/***************************************/

/// Rejected simulation setups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("invalid floor count {0}: a building needs at least one floor")]
    InvalidFloorCount(u32),

    #[error(
        "invalid request #{index} ({origin} -> {destination}): floors must be within 1..={n_floors}"
    )]
    InvalidRequest {
        index: usize,
        origin: u32,
        destination: u32,
        n_floors: u32,
    },
}

/// Failures while loading a scenario file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),
}
