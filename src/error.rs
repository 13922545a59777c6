use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("eccentricities and radii are not consistent: {first} != {second}")]
    InconsistentGeometry { first: f64, second: f64 },

    #[error("parameter '{name}' = {value} is invalid: {reason}")]
    InvalidValue {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("input file is missing field '{0}'")]
    MissingField(&'static str),

    #[error("could not parse field '{name}' from {token:?}")]
    MalformedField { name: &'static str, token: String },

    #[error("could not parse toml parameters: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },
}
