use crate::{
    cli::actions::Action,
    config::{Config, DEFAULT_POLL_INTERVAL, TemplateFormat},
};
use anyhow::{Context, Result};
use clap::ArgMatches;
use std::{path::PathBuf, time::Duration};

fn required(matches: &ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("{name} is required"))
}

/// Extract the `-v` count
#[must_use]
pub fn extract_verbosity(matches: &ArgMatches) -> u8 {
    matches.get_count("verbose")
}

/// Convert `ArgMatches` into typed Action enum
///
/// # Errors
///
/// Returns an error if a required argument is missing
pub fn dispatch(matches: &ArgMatches) -> Result<Action> {
    let poll_interval = matches
        .get_one::<u64>("poll-interval")
        .copied()
        .unwrap_or(DEFAULT_POLL_INTERVAL);

    let config = Config {
        stack_name: required(matches, "stack-name")?,
        region: required(matches, "region")?,
        profile: matches.get_one::<String>("profile").cloned(),
        template_file: PathBuf::from(required(matches, "template")?),
        parameter_file: PathBuf::from(required(matches, "parameters")?),
        tag_file: PathBuf::from(required(matches, "tags")?),
        destination_bucket: required(matches, "bucket")?,
        code_version: required(matches, "code-version")?,
        dry_run: matches.get_flag("dryrun"),
        format: TemplateFormat::from_yaml_flag(matches.get_flag("yaml")),
        poll_interval: Duration::from_secs(poll_interval),
        forward_parameters: matches.get_flag("forward-parameters"),
    };

    Ok(Action::Upsert {
        config,
        wait: matches.get_flag("wait"),
    })
}
