use crate::model::Feed;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("failed to read feed definition: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid YAML feed definition: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON feed definition: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn from_yaml_str(input: &str) -> Result<Feed, DefinitionError> {
    Ok(serde_yaml::from_str(input)?)
}

pub fn from_yaml_file(path: &Path) -> Result<Feed, DefinitionError> {
    from_yaml_str(&fs::read_to_string(path)?)
}

pub fn from_json_str(input: &str) -> Result<Feed, DefinitionError> {
    Ok(serde_json::from_str(input)?)
}

pub fn from_json_file(path: &Path) -> Result<Feed, DefinitionError> {
    from_json_str(&fs::read_to_string(path)?)
}

pub fn to_json_string(feed: &Feed) -> Result<String, DefinitionError> {
    Ok(serde_json::to_string_pretty(feed)?)
}

pub fn to_yaml_string(feed: &Feed) -> Result<String, DefinitionError> {
    Ok(serde_yaml::to_string(feed)?)
}

pub fn to_json_file(feed: &Feed, path: &Path) -> Result<(), DefinitionError> {
    fs::write(path, to_json_string(feed)?)?;
    Ok(())
}
