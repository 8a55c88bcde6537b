use crate::{
    aws::AwsSession,
    config::Config,
    stack::{Deployment, StackDeployer},
};
use anyhow::{Context, Result, bail};
use chrono::Utc;
use tracing::info;

/// Stage the artifacts, create or update the stack and optionally wait for it
///
/// # Errors
///
/// Returns an error if initialization or the stack call fails, or when
/// waiting ends on anything but a successful terminal status
pub async fn start(config: Config, wait: bool) -> Result<()> {
    let session = AwsSession::connect(config.profile.as_deref(), &config.region)
        .await
        .context("initialize session")?;

    let stack_name = config.stack_name.clone();
    let deployer = StackDeployer::initialize(
        config,
        &session.object_store(),
        session.stack_client(),
        Utc::now(),
    )
    .await
    .with_context(|| format!("initialize deployment of {stack_name}"))?;

    info!("template file: {}", deployer.template_file().display());

    let deployment = deployer
        .create_or_update_stack()
        .await
        .context("create or update stack")?;

    if deployment == Deployment::DryRun || !wait {
        return Ok(());
    }

    match deployer.wait_for_stack().await {
        Ok(true) => {
            info!("stack {stack_name} is ready");
            Ok(())
        }
        Ok(false) => bail!("stack {stack_name} did not reach a successful status"),
        Err(e) => Err(e).context("wait for stack"),
    }
}
