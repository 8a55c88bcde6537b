use crate::{
    config::Config,
    error::{Error, Result},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::info;

/// Object storage the template and parameter file are copied to
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload a local file to `bucket/key`
    async fn upload(&self, local_path: &Path, bucket: &str, key: &str) -> Result<()>;
}

/// Destination keys for one staging run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactKeys {
    pub template: String,
    pub properties: String,
}

impl ArtifactKeys {
    /// `templates/{stack}/{version}/{YYYY}/{MM}/{DD}/{HH}:{MM}:{SS}/stack.{json,properties}`
    ///
    /// The template key always ends in `stack.json`, YAML templates included.
    #[must_use]
    pub fn new(stack_name: &str, code_version: &str, now: DateTime<Utc>) -> Self {
        let stub = format!(
            "templates/{stack_name}/{code_version}/{}",
            now.format("%Y/%m/%d/%H:%M:%S")
        );

        Self {
            template: format!("{stub}/stack.json"),
            properties: format!("{stub}/stack.properties"),
        }
    }
}

/// Public style URL CloudFormation fetches the template from
#[must_use]
pub fn template_url(bucket: &str, key: &str) -> String {
    format!("https://s3.amazonaws.com/{bucket}/{key}")
}

async fn copy(store: &impl ObjectStore, path: &Path, bucket: &str, key: &str) -> Result<()> {
    info!("Copying {} to s3://{bucket}/{key}", path.display());
    store.upload(path, bucket, key).await
}

/// Upload the parameter file and the template, returning the template URL
///
/// # Errors
///
/// Returns an error if the template file does not exist or any upload fails,
/// an upload that already succeeded is not rolled back
pub async fn stage_artifacts(
    config: &Config,
    store: &impl ObjectStore,
    now: DateTime<Utc>,
) -> Result<String> {
    let keys = ArtifactKeys::new(&config.stack_name, &config.code_version, now);

    if !config.template_file.is_file() {
        return Err(Error::TemplateMissing(config.template_file.clone()));
    }

    let bucket = config.destination_bucket.as_str();
    copy(store, &config.parameter_file, bucket, &keys.properties).await?;
    copy(store, &config.template_file, bucket, &keys.template).await?;

    let url = template_url(bucket, &keys.template);
    info!("template_url: {url}");

    Ok(url)
}
