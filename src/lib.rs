//! Create or update a CloudFormation stack from a template plus flat
//! `KEY=VALUE` parameter and tag files.
//!
//! The flow is a fixed pipeline: load parameters and tags, copy the template
//! and parameter file to S3, decide between create and update, send the stack
//! call and optionally poll until the stack settles.

pub mod aws;
pub mod cli;
pub mod config;
pub mod error;
pub mod properties;
pub mod stack;
pub mod storage;
pub mod template;
pub mod upsert;

pub use config::{Config, TemplateFormat};
pub use error::{Error, Result};
