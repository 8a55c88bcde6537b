use super::{AwsObjectStore, AwsStackClient};
use crate::error::{Error, Result};
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use tracing::{debug, info};

/// Credentialed session the S3 and CloudFormation clients are built from
#[derive(Debug, Clone)]
pub struct AwsSession {
    sdk_config: SdkConfig,
    region: String,
}

impl AwsSession {
    /// Load the shared AWS config, using `profile` when given
    ///
    /// Credentials are resolved up front so a bad profile fails here and not
    /// halfway through the upload.
    ///
    /// # Errors
    ///
    /// Returns an error if no credentials can be resolved
    pub async fn connect(profile: Option<&str>, region: &str) -> Result<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = profile {
            info!("using profile {profile}");
            loader = loader.profile_name(profile);
        }
        let sdk_config = loader.load().await;

        let provider = sdk_config
            .credentials_provider()
            .ok_or_else(|| Error::Session("no credentials provider configured".to_string()))?;

        provider
            .provide_credentials()
            .await
            .map_err(|e| Error::Session(e.to_string()))?;

        debug!("session default region: {:?}", sdk_config.region());

        Ok(Self {
            sdk_config,
            region: region.to_string(),
        })
    }

    /// S3 client in the profile's default region, or the stack region if the
    /// profile has none
    #[must_use]
    pub fn object_store(&self) -> AwsObjectStore {
        let mut builder = aws_sdk_s3::config::Builder::from(&self.sdk_config);
        if self.sdk_config.region().is_none() {
            builder = builder.region(Region::new(self.region.clone()));
        }
        AwsObjectStore::new(aws_sdk_s3::Client::from_conf(builder.build()))
    }

    /// CloudFormation client scoped to the stack region
    #[must_use]
    pub fn stack_client(&self) -> AwsStackClient {
        let config = aws_sdk_cloudformation::config::Builder::from(&self.sdk_config)
            .region(Region::new(self.region.clone()))
            .build();
        AwsStackClient::new(aws_sdk_cloudformation::Client::from_conf(config))
    }
}
