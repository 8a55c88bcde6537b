//! Flat `KEY=VALUE` files used for stack parameters and tags
//!
//! Every line is stripped of trailing whitespace and split on `=`. Only lines
//! producing exactly two segments are kept, anything else is skipped without
//! error, so `A=1=2`, `badline` and blank lines contribute nothing.

use crate::error::{Error, Result};
use serde::Serialize;
use std::{collections::BTreeMap, fs, path::Path};
use tracing::{debug, info};

/// Parameter name to value, later duplicates win
pub type Parameters = BTreeMap<String, String>;

/// A stack tag, serialized the way CloudFormation names its fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl Tag {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Split one line into `(key, value)` if it has exactly one `=`
#[inline]
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let mut segments = line.trim_end().split('=');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(key), Some(value), None) => Some((key, value)),
        _ => None,
    }
}

fn read_pairs(path: &Path) -> Result<Vec<(String, String)>> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .filter_map(|line| {
            let pair = split_pair(line);
            if pair.is_none() && !line.trim().is_empty() {
                debug!("skipping line without a single '=' in {}", path.display());
            }
            pair.map(|(key, value)| (key.to_string(), value.to_string()))
        })
        .collect())
}

/// Load the parameter file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read
pub fn load_parameters(path: &Path) -> Result<Parameters> {
    let parameters: Parameters = read_pairs(path)?.into_iter().collect();
    debug!("loaded {} parameters from {}", parameters.len(), path.display());
    Ok(parameters)
}

/// Load the tag file, keeping file order
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read
pub fn load_tags(path: &Path) -> Result<Vec<Tag>> {
    let tags: Vec<Tag> = read_pairs(path)?
        .into_iter()
        .map(|(key, value)| Tag { key, value })
        .collect();

    match serde_json::to_string_pretty(&tags) {
        Ok(json) => info!("Tags: {json}"),
        Err(e) => debug!("could not render tags: {e}"),
    }

    Ok(tags)
}
