use crate::{
    config::TemplateFormat,
    error::{Error, Result},
};
use indexmap::IndexMap;
use serde::{Deserialize, de::IgnoredAny};
use std::{fs, path::Path};

/// The part of a CloudFormation template this tool cares about
///
/// Everything besides `Parameters` is skipped without being decoded, which
/// keeps YAML short-form intrinsics like `!Ref` out of the way.
#[derive(Debug, Deserialize)]
pub struct Template {
    #[serde(rename = "Parameters")]
    parameters: IndexMap<String, IgnoredAny>,
}

impl Template {
    /// Read and decode a template file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, cannot be decoded in the
    /// given format or has no `Parameters` section
    pub fn load(path: &Path, format: TemplateFormat) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Template {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::parse(&content, format).map_err(|message| Error::Template {
            path: path.to_path_buf(),
            message,
        })
    }

    fn parse(content: &str, format: TemplateFormat) -> std::result::Result<Self, String> {
        match format {
            TemplateFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            TemplateFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    /// Names declared under `Parameters`, in declaration order
    pub fn required_parameters(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(String::as_str)
    }
}
