use super::{CAPABILITIES, StackClient, StackMode, StackRequest, resolve_mode};
use crate::{
    config::Config,
    error::{Error, Result},
    properties::{Parameters, Tag, load_parameters, load_tags},
    storage::{ObjectStore, stage_artifacts},
    template::Template,
};
use chrono::{DateTime, Utc};
use std::path::Path;
use tokio::time;
use tracing::{debug, info};

/// Tag carrying the deployed code version
pub const CODE_VERSION_TAG: &str = "CODE_VERSION_SD";

/// Constant marker tag added to every stack
pub const ANSWER_TAG: (&str, &str) = ("ANSWER", "42");

/// Result of a stack call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deployment {
    /// Template and parameters were inspected, nothing was sent
    DryRun,
    Created { stack_id: Option<String> },
    Updated { stack_id: Option<String> },
}

/// Stages the artifacts of one stack and drives its create or update
///
/// Built once per stack, `initialize` runs every step that must happen before
/// the stack call and fails on the first one that does.
#[derive(Debug)]
pub struct StackDeployer<C> {
    config: Config,
    client: C,
    parameters: Parameters,
    tags: Vec<Tag>,
    template_url: String,
    mode: StackMode,
}

impl<C: StackClient> StackDeployer<C> {
    /// Load parameters and tags, upload the artifacts and resolve the stack mode
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter or tag file cannot be read or the
    /// artifacts cannot be uploaded
    pub async fn initialize(
        config: Config,
        store: &impl ObjectStore,
        client: C,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let parameters = load_parameters(&config.parameter_file)?;
        let tags = load_tags(&config.tag_file)?;
        let template_url = stage_artifacts(&config, store, now).await?;
        let mode = resolve_mode(&client, &config.stack_name).await;

        Ok(Self {
            config,
            client,
            parameters,
            tags,
            template_url,
            mode,
        })
    }

    #[must_use]
    pub fn template_file(&self) -> &Path {
        &self.config.template_file
    }

    #[must_use]
    pub fn template_url(&self) -> &str {
        &self.template_url
    }

    #[must_use]
    pub const fn mode(&self) -> StackMode {
        self.mode
    }

    #[must_use]
    pub const fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Tags as loaded from the tag file, without the fixed tags
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Tags sent with the stack call
    #[must_use]
    pub fn call_tags(&self) -> Vec<Tag> {
        let mut tags = self.tags.clone();
        tags.push(Tag::new(CODE_VERSION_TAG, self.config.code_version.as_str()));
        tags.push(Tag::new(ANSWER_TAG.0, ANSWER_TAG.1));
        tags
    }

    /// Look up every parameter the template declares
    fn resolve_parameters<'a>(
        &self,
        required: impl IntoIterator<Item = &'a str>,
    ) -> Result<Vec<(String, String)>> {
        required
            .into_iter()
            .map(|name| {
                self.parameters
                    .get(name)
                    .map(|value| (name.to_string(), value.clone()))
                    .ok_or_else(|| Error::MissingParameter(name.to_string()))
            })
            .collect()
    }

    /// Create the stack, or update it when it already exists in a stable state
    ///
    /// In dry run mode this stops after the template has been inspected.
    ///
    /// # Errors
    ///
    /// Returns an error if the template cannot be loaded, a declared parameter
    /// is missing from the parameter file or the stack call fails
    pub async fn create_or_update_stack(&self) -> Result<Deployment> {
        let template = Template::load(&self.config.template_file, self.config.format)?;

        let required: Vec<&str> = template.required_parameters().collect();
        let available: Vec<&str> = self.parameters.keys().map(String::as_str).collect();
        info!(" required parameters: {required:?}");
        info!("available parameters: {available:?}");

        let resolved = self.resolve_parameters(required)?;

        if self.config.dry_run {
            info!("This was a dryrun");
            return Ok(Deployment::DryRun);
        }

        // the resolved pairs are only forwarded on request, the stack call
        // otherwise goes out with an empty parameter list
        let parameters = if self.config.forward_parameters {
            resolved
        } else {
            debug!("not forwarding {} resolved parameters", resolved.len());
            Vec::new()
        };

        let request = StackRequest {
            stack_name: self.config.stack_name.clone(),
            template_url: self.template_url.clone(),
            parameters,
            capabilities: CAPABILITIES.iter().map(ToString::to_string).collect(),
            tags: self.call_tags(),
        };

        let deployment = match self.mode {
            StackMode::Update => Deployment::Updated {
                stack_id: self.client.update_stack(&request).await?,
            },
            StackMode::Create => Deployment::Created {
                stack_id: self.client.create_stack(&request).await?,
            },
        };

        info!("{deployment:?}");

        Ok(deployment)
    }

    /// Poll the stack until it reaches a terminal status
    ///
    /// Sleeps one interval before the first check. Returns `true` only for
    /// `CREATE_COMPLETE` and `UPDATE_COMPLETE`; there is no attempt limit.
    ///
    /// # Errors
    ///
    /// Returns an error if a describe call fails or the stack no longer exists
    pub async fn wait_for_stack(&self) -> Result<bool> {
        let stack_name = self.config.stack_name.as_str();
        let interval = self.config.poll_interval;

        info!(
            "polling stack status, POLL_INTERVAL={}",
            interval.as_secs()
        );

        loop {
            time::sleep(interval).await;

            let status = self
                .client
                .describe_stack(stack_name)
                .await?
                .ok_or_else(|| Error::StackNotFound(stack_name.to_string()))?;

            info!("Current status of {stack_name}: {status}");

            if status.is_terminal() {
                return Ok(status.is_successful());
            }
        }
    }
}
