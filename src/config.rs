use std::{path::PathBuf, time::Duration};

/// Seconds between stack status checks unless overridden
pub const DEFAULT_POLL_INTERVAL: u64 = 30;

/// Everything needed to stage and deploy one stack
#[derive(Debug, Clone)]
pub struct Config {
    pub stack_name: String,
    pub region: String,
    pub profile: Option<String>,
    pub template_file: PathBuf,
    pub parameter_file: PathBuf,
    pub tag_file: PathBuf,
    pub destination_bucket: String,
    pub code_version: String,
    pub dry_run: bool,
    pub format: TemplateFormat,
    pub poll_interval: Duration,
    /// Send the resolved template parameters with the stack call
    pub forward_parameters: bool,
}

/// Encoding of the stack template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateFormat {
    #[default]
    Json,
    Yaml,
}

impl TemplateFormat {
    #[must_use]
    pub const fn from_yaml_flag(yaml: bool) -> Self {
        if yaml { Self::Yaml } else { Self::Json }
    }
}
