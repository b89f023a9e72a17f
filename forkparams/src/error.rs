use thiserror::Error;

// Registry lookups and fork predicates are total; only selector parsing and
// parameter files can fail.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("unknown network variant '{0}'")]
    UnknownNetwork(String),
    #[error("unknown fork '{0}'")]
    UnknownFork(String),
    #[error("error reading or writing parameter file: {0}")]
    Io(#[from] std::io::Error),
    #[error("error parsing TOML parameters: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("error serializing TOML parameters: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("error parsing JSON parameters: {0}")]
    Json(#[from] serde_json::Error),
}
