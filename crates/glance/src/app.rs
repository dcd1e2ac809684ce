use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("glance")
        .about("Live window preview session coordination")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Enable verbose logging"),
        )
        .subcommand(
            Command::new("sources")
                .about("List capturable source windows, grouped by application")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                )
                .arg(
                    Arg::new("all")
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .help("Ignore the configured filter rule"),
                ),
        )
        .subcommand(
            Command::new("focused")
                .about("Show the frontmost application")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("bindings")
                .about("Inspect and resolve stored hotkey bindings")
                .subcommand_required(true)
                .subcommand(
                    Command::new("list").about("List stored bindings").arg(
                        Arg::new("json")
                            .long("json")
                            .action(ArgAction::SetTrue)
                            .help("Output as JSON"),
                    ),
                )
                .subcommand(
                    Command::new("check")
                        .about("Validate stored bindings and report chord conflicts"),
                )
                .subcommand(
                    Command::new("resolve")
                        .about("Resolve a stored binding against the live window set")
                        .arg(
                            Arg::new("title")
                                .required(true)
                                .help("Target title of the stored binding"),
                        ),
                ),
        )
        .subcommand(
            Command::new("watch")
                .about("Watch focus and title changes until interrupted")
                .arg(
                    Arg::new("interval-ms")
                        .long("interval-ms")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("250")
                        .help("Poll interval in milliseconds"),
                ),
        )
}
