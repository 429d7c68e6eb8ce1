use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the dialect names from kanban_index::IndexVersion
// We need to duplicate this here since build scripts can't access the library
const DIALECTS: &[&str] = &["v1", "v2"];

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Path to the index file")
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("kanban-index")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for reading and writing kanban board index files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("parse").arg(input_arg()))
        .subcommand(
            Command::new("build")
                .arg(input_arg().required(true))
                .arg(output_arg())
                .arg(
                    Arg::new("ignore-options")
                        .long("ignore-options")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("convert")
                .arg(input_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .required(true)
                        .value_parser(clap::builder::PossibleValuesParser::new(DIALECTS)),
                )
                .arg(output_arg()),
        )
        .subcommand(Command::new("validate").arg(input_arg()))
        .subcommand(Command::new("format").arg(input_arg()).arg(output_arg()))
        .subcommand(Command::new("info").arg(input_arg()));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "kanban-index", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "kanban-index", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "kanban-index", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
