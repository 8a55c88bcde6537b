use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

/// Pure clap command definitions with zero business logic
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("stack-name")
                .env("STACKILITY_STACK_NAME")
                .help("name of the stack to create or update")
                .long("stack-name")
                .short('s')
                .required(true),
        )
        .arg(
            Arg::new("region")
                .env("STACKILITY_REGION")
                .help("region the stack lives in")
                .long("region")
                .short('r')
                .required(true),
        )
        .arg(
            Arg::new("profile")
                .env("STACKILITY_PROFILE")
                .help("named AWS credentials profile")
                .long("profile")
                .short('p'),
        )
        .arg(
            Arg::new("template")
                .env("STACKILITY_TEMPLATE")
                .help("CloudFormation template file")
                .long("template")
                .short('t')
                .value_name("PATH")
                .required(true),
        )
        .arg(
            Arg::new("parameters")
                .env("STACKILITY_PARAMETERS")
                .help("KEY=VALUE file with the stack parameters")
                .long("parameters")
                .value_name("PATH")
                .required(true),
        )
        .arg(
            Arg::new("tags")
                .env("STACKILITY_TAGS")
                .help("KEY=VALUE file with the stack tags")
                .long("tags")
                .value_name("PATH")
                .required(true),
        )
        .arg(
            Arg::new("bucket")
                .env("STACKILITY_BUCKET")
                .help("S3 bucket the template and parameters are copied to")
                .long("bucket")
                .short('b')
                .required(true),
        )
        .arg(
            Arg::new("code-version")
                .env("STACKILITY_CODE_VERSION")
                .help("code version, used in the object keys and the CODE_VERSION_SD tag")
                .long("code-version")
                .short('c')
                .required(true),
        )
        .arg(
            Arg::new("dryrun")
                .env("STACKILITY_DRYRUN")
                .help("inspect the template and parameters without touching the stack")
                .long("dryrun")
                .short('d')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("yaml")
                .env("STACKILITY_YAML")
                .help("the template is YAML instead of JSON")
                .long("yaml")
                .short('y')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("wait")
                .env("STACKILITY_WAIT")
                .help("poll the stack until it reaches a terminal status")
                .long("wait")
                .short('w')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("poll-interval")
                .default_value("30")
                .env("CSU_POLL_INTERVAL")
                .help("number of seconds between stack status checks")
                .long("poll-interval")
                .short('i')
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("forward-parameters")
                .env("STACKILITY_FORWARD_PARAMETERS")
                .help("send the resolved template parameters with the stack call")
                .long("forward-parameters")
                .long_help(
                    "Send the resolved template parameters with the stack call.\n\n\
                    Without this flag the parameter file is uploaded and every parameter\n\
                    the template declares must be present in it, but the create/update\n\
                    request goes out with an empty parameter list."
                )
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .help("increase verbosity, -vv for trace")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count),
        )
}
