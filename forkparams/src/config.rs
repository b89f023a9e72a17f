//! Reading and writing parameter sets as files, for parameter sets that do not come from a
//! built-in registry.
use crate::{chain::params::ChainParameters, error::ParamsError};
use std::{fs, path::Path};
use tracing::debug;

pub fn from_toml_str(content: &str) -> Result<ChainParameters, ParamsError> {
    toml::from_str(content).map_err(|e| e.into())
}

pub fn from_json_str(content: &str) -> Result<ChainParameters, ParamsError> {
    serde_json::from_str(content).map_err(|e| e.into())
}

pub fn to_toml_string(params: &ChainParameters) -> Result<String, ParamsError> {
    toml::to_string(params).map_err(|e| e.into())
}

/// Loads a parameter set from `path`. Files ending in `.json` are read as JSON, anything else as
/// TOML.
pub fn load_params<P: AsRef<Path>>(path: P) -> Result<ChainParameters, ParamsError> {
    let path = path.as_ref();
    debug!("loading parameter set from {}", path.display());
    let content = fs::read_to_string(path)?;

    if is_json(path) {
        from_json_str(&content)
    } else {
        from_toml_str(&content)
    }
}

/// Writes `params` to `path`, as JSON or TOML depending on the extension like [`load_params`].
pub fn save_params<P: AsRef<Path>>(path: P, params: &ChainParameters) -> Result<(), ParamsError> {
    let path = path.as_ref();
    let content = if is_json(path) {
        serde_json::to_string_pretty(params)?
    } else {
        to_toml_string(params)?
    };

    fs::write(path, content)?;

    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
