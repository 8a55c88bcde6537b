//! AWS implementations of the storage and stack collaborators
//!
//! - `session` - shared SDK config from an optional named profile
//! - `s3` - `ObjectStore` over S3 `PutObject`
//! - `cloudformation` - `StackClient` over the CloudFormation API

pub mod cloudformation;
pub mod s3;
pub mod session;

pub use cloudformation::AwsStackClient;
pub use s3::AwsObjectStore;
pub use session::AwsSession;
