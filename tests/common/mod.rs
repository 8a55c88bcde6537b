#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use stackility::{
    Config, Error, Result, TemplateFormat,
    stack::{StackClient, StackDeployer, StackRequest, StackStatus},
    storage::ObjectStore,
};
use std::{
    collections::VecDeque,
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::Duration,
};
use tempfile::TempDir;

pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

pub const JSON_TEMPLATE: &str = r#"{
    "AWSTemplateFormatVersion": "2010-09-09",
    "Parameters": {
        "Env": {"Type": "String"},
        "InstanceType": {"Type": "String"}
    },
    "Resources": {}
}"#;

pub const YAML_TEMPLATE: &str = r"
AWSTemplateFormatVersion: '2010-09-09'
Parameters:
  Env:
    Type: String
Resources:
  Topic:
    Type: AWS::SNS::Topic
    Properties:
      TopicName: !Sub '${Env}-alerts'
";

/// Fixed staging time, 2024-03-05 07:08:09 UTC
pub fn staged_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap()
}

/// Template, parameter and tag files in a temporary directory
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new(template: &str, parameters: &str, tags: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("stack.json"), template).unwrap();
        fs::write(dir.path().join("stack.properties"), parameters).unwrap();
        fs::write(dir.path().join("tags.properties"), tags).unwrap();
        Self { dir }
    }

    pub fn standard() -> Self {
        Self::new(
            JSON_TEMPLATE,
            "Env=prod\nInstanceType=t3.micro\n",
            "Team=infra\nOwner=ops\n",
        )
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn config(&self) -> Config {
        Config {
            stack_name: "web".to_string(),
            region: "us-east-1".to_string(),
            profile: None,
            template_file: self.path("stack.json"),
            parameter_file: self.path("stack.properties"),
            tag_file: self.path("tags.properties"),
            destination_bucket: "artifacts".to_string(),
            code_version: "1.2.3".to_string(),
            dry_run: false,
            format: TemplateFormat::Json,
            poll_interval: POLL_INTERVAL,
            forward_parameters: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub path: PathBuf,
    pub bucket: String,
    pub key: String,
}

/// Records uploads, optionally failing every one of them
#[derive(Debug, Clone, Default)]
pub struct MockObjectStore {
    uploads: Arc<Mutex<Vec<Upload>>>,
    fail: bool,
}

impl MockObjectStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn uploads(&self) -> Vec<Upload> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn upload(&self, local_path: &Path, bucket: &str, key: &str) -> Result<()> {
        if self.fail {
            return Err(Error::Upload {
                path: local_path.to_path_buf(),
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: "access denied".to_string(),
            });
        }

        self.uploads.lock().unwrap().push(Upload {
            path: local_path.to_path_buf(),
            bucket: bucket.to_string(),
            key: key.to_string(),
        });
        Ok(())
    }
}

/// One scripted answer to a describe call
#[derive(Debug, Clone)]
pub enum Describe {
    Status(&'static str),
    Missing,
    Fail,
}

#[derive(Debug, Default)]
struct StackState {
    describes: VecDeque<Describe>,
    describe_calls: usize,
    created: Vec<StackRequest>,
    updated: Vec<StackRequest>,
}

/// Answers describe calls from a script and records create/update requests
#[derive(Debug, Clone, Default)]
pub struct MockStackClient {
    state: Arc<Mutex<StackState>>,
    fail_calls: bool,
}

impl MockStackClient {
    /// Describe answers in order, `Missing` once the script runs out
    pub fn scripted(describes: impl IntoIterator<Item = Describe>) -> Self {
        let client = Self::default();
        client.state.lock().unwrap().describes = describes.into_iter().collect();
        client
    }

    /// Like `scripted` but create and update calls fail
    pub fn rejecting(describes: impl IntoIterator<Item = Describe>) -> Self {
        Self {
            fail_calls: true,
            ..Self::scripted(describes)
        }
    }

    pub fn describe_calls(&self) -> usize {
        self.state.lock().unwrap().describe_calls
    }

    pub fn created(&self) -> Vec<StackRequest> {
        self.state.lock().unwrap().created.clone()
    }

    pub fn updated(&self) -> Vec<StackRequest> {
        self.state.lock().unwrap().updated.clone()
    }
}

#[async_trait]
impl StackClient for MockStackClient {
    async fn describe_stack(&self, stack_name: &str) -> Result<Option<StackStatus>> {
        let mut state = self.state.lock().unwrap();
        state.describe_calls += 1;
        match state.describes.pop_front().unwrap_or(Describe::Missing) {
            Describe::Status(status) => Ok(Some(StackStatus::new(status))),
            Describe::Missing => Ok(None),
            Describe::Fail => Err(Error::Describe {
                stack: stack_name.to_string(),
                message: "Rate exceeded".to_string(),
            }),
        }
    }

    async fn create_stack(&self, request: &StackRequest) -> Result<Option<String>> {
        if self.fail_calls {
            return Err(Error::CreateStack {
                stack: request.stack_name.clone(),
                message: "Template format error".to_string(),
            });
        }
        self.state.lock().unwrap().created.push(request.clone());
        Ok(Some(format!(
            "arn:aws:cloudformation:us-east-1:123456789012:stack/{}/1",
            request.stack_name
        )))
    }

    async fn update_stack(&self, request: &StackRequest) -> Result<Option<String>> {
        if self.fail_calls {
            return Err(Error::UpdateStack {
                stack: request.stack_name.clone(),
                message: "No updates are to be performed.".to_string(),
            });
        }
        self.state.lock().unwrap().updated.push(request.clone());
        Ok(None)
    }
}

/// Initialize a deployer against the mocks, the first describe answer
/// decides the stack mode
pub async fn deployer(
    config: Config,
    client: &MockStackClient,
) -> Result<StackDeployer<MockStackClient>> {
    StackDeployer::initialize(
        config,
        &MockObjectStore::default(),
        client.clone(),
        staged_at(),
    )
    .await
}
