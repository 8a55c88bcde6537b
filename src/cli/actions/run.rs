use super::Action;

/// Execute the action's business logic by delegating to the appropriate module
pub async fn execute(action: Action) -> anyhow::Result<()> {
    match action {
        Action::Upsert { config, wait } => crate::upsert::start(config, wait).await,
    }
}
