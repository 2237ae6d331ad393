//! Command-line interface for the NoShift compiler.
//!
//! Usage:
//!   nsc build [--no-header]             - Compile all .nsjs files under rootdir
//!   nsc watch [--no-header]             - Recompile on file changes
//!   nsc check <files...> [--format f]   - Run structural diagnostics
//!   nsc lint [files...] [--format f]    - Lint sources (--init writes defaults)
//!   nsc reverse <file> [-o out]         - Convert JavaScript back to NoShift
//!   nsc init                            - Create nsjsconfig.json
//!   nsc clean                           - Delete the output directory

use clap::{Arg, ArgAction, Command};

#[path = "nsc/commands.rs"]
mod commands;
#[path = "nsc/logger.rs"]
mod logger;
#[path = "nsc/watch.rs"]
mod watch;

fn main() {
    let matches = Command::new("nsc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("NoShift compiler and linter")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("build")
                .about("Compile all .nsjs files under rootdir")
                .arg(
                    Arg::new("no-header")
                        .long("no-header")
                        .help("Suppress the generated header comment in output")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("watch")
                .alias("w")
                .about("Watch for file changes and recompile")
                .arg(
                    Arg::new("no-header")
                        .long("no-header")
                        .help("Suppress the generated header comment in output")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Run structural diagnostics on files")
                .arg(
                    Arg::new("files")
                        .help("Files to check")
                        .required(true)
                        .num_args(1..),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Report format: text, json or yaml")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("lint")
                .about("Lint .nsjs files")
                .arg(
                    Arg::new("files")
                        .help("Files to lint (defaults to rootdir from nsjsconfig.json)")
                        .num_args(0..),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Report format: text, json or yaml")
                        .default_value("text"),
                )
                .arg(
                    Arg::new("init")
                        .long("init")
                        .help("Create nsjslinter.json with the default rules")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("reverse")
                .about("Convert a JavaScript file back to NoShift notation")
                .arg(Arg::new("file").help("JavaScript file to convert").required(true))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write the result to a file instead of stdout"),
                ),
        )
        .subcommand(Command::new("init").about("Create a nsjsconfig.json in the current directory"))
        .subcommand(Command::new("clean").about("Delete the output directory (outdir)"))
        .get_matches();

    let exit_code = match matches.subcommand() {
        Some(("build", sub)) => commands::build(sub.get_flag("no-header")),
        Some(("watch", sub)) => watch::run(sub.get_flag("no-header")),
        Some(("check", sub)) => {
            let files: Vec<String> = sub
                .get_many::<String>("files")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            let format = sub
                .get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or("text");
            commands::check(&files, format)
        }
        Some(("lint", sub)) => {
            if sub.get_flag("init") {
                commands::lint_init()
            } else {
                let files: Vec<String> = sub
                    .get_many::<String>("files")
                    .map(|values| values.cloned().collect())
                    .unwrap_or_default();
                let format = sub
                    .get_one::<String>("format")
                    .map(String::as_str)
                    .unwrap_or("text");
                commands::lint_run(&files, format)
            }
        }
        Some(("reverse", sub)) => {
            let file = sub
                .get_one::<String>("file")
                .map(String::as_str)
                .unwrap_or_default();
            commands::reverse(file, sub.get_one::<String>("output"))
        }
        Some(("init", _)) => commands::init(),
        Some(("clean", _)) => commands::clean(),
        _ => 2,
    };
    std::process::exit(exit_code);
}
