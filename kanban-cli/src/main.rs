// Command-line interface for kanban board index files
//
// This binary reads and writes the markdown index file that lists a board's
// columns and the tasks in each column. The heavy lifting lives in the
// kanban-index library; this crate only wires files, configuration and
// logging around it.
//
// Usage:
//  kanban-index parse [<input>]                         - Print the board model as JSON
//  kanban-index build <json> [-o <file>]                - Render a JSON model as markdown
//  kanban-index convert [<input>] --to <v1|v2> [-o ..]  - Rewrite in another dialect
//  kanban-index validate [<input>]                      - Check an index file
//  kanban-index format [<input>] [-o <file>]            - Re-render in the same dialect
//  kanban-index info [<input>]                          - Summarize columns and options
//
// When <input> is omitted the `index.path` config value is used
// (`.kanbn/index.md` by default).

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use kanban_config::{KanbanConfig, Loader};
use kanban_index::dialects;
use kanban_index::schema::validate_raw_columns;
use kanban_index::{ConvertError, IndexDocument, IndexError, IndexVersion, SerializeOptions};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Path to the index file (defaults to index.path from config)")
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

/// One help line per dialect, e.g. `  - v1: Heading per column ...`
fn dialect_list() -> String {
    dialects::all()
        .iter()
        .map(|dialect| format!("  - {}: {}", dialect.name(), dialect.description()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn build_cli() -> Command {
    Command::new("kanban-index")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for reading and writing kanban board index files")
        .long_about(format!(
            "kanban-index works with the markdown index file of a kanban board.\n\n\
            Dialects, selected by the indexVersion option:\n\
            {}\n\n\
            Examples:\n  \
            kanban-index parse .kanbn/index.md           # Board model as JSON\n  \
            kanban-index convert --to v2 -o index.md     # Rewrite the default index as a table\n  \
            kanban-index validate board.md               # Check options and layout",
            dialect_list()
        ))
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a kanban.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse an index file and print the board model as JSON")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("build")
                .about("Render a JSON board model as index markdown")
                .long_about(
                    "Read a board model as JSON (the shape printed by 'parse') and\n\
                    render it in the dialect selected by its indexVersion option.\n\n\
                    Examples:\n  \
                    kanban-index build board.json                 # Markdown to stdout\n  \
                    kanban-index build board.json -o index.md     # Write a file",
                )
                .arg(
                    input_arg()
                        .help("Path to the JSON board model")
                        .required(true),
                )
                .arg(output_arg())
                .arg(
                    Arg::new("ignore-options")
                        .long("ignore-options")
                        .help("Skip schema validation of the board options")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Rewrite an index file in another dialect")
                .arg(input_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target dialect")
                        .required(true)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            dialects::all().map(|dialect| dialect.name()),
                        ))
                        .value_hint(ValueHint::Other),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("validate")
                .about("Check that an index file parses and its options are valid")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("format")
                .about("Parse an index file and re-render it in the same dialect")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("info")
                .about("Summarize the columns and options of an index file")
                .arg(input_arg()),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    init_tracing(&config, matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("parse", sub_matches)) => {
            handle_parse_command(&input_path(sub_matches, &config));
        }
        Some(("build", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let mut options: SerializeOptions = (&config.serialize).into();
            options.ignore_options |= sub_matches.get_flag("ignore-options");
            handle_build_command(Path::new(input), output, &options);
        }
        Some(("convert", sub_matches)) => {
            let to = sub_matches.get_one::<String>("to").expect("to is required");
            let target = IndexVersion::from_name(to).unwrap_or_else(|| {
                fail(format!("Unknown dialect '{to}'"));
            });
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(&input_path(sub_matches, &config), target, output);
        }
        Some(("validate", sub_matches)) => {
            handle_validate_command(&input_path(sub_matches, &config));
        }
        Some(("format", sub_matches)) => {
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_format_command(&input_path(sub_matches, &config), output);
        }
        Some(("info", sub_matches)) => {
            handle_info_command(&input_path(sub_matches, &config));
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the parse command
fn handle_parse_command(input: &Path) {
    let doc = parse_file(input);
    let json = serde_json::to_string_pretty(&doc).unwrap_or_else(|e| {
        fail(format!("Error encoding board as JSON: {e}"));
    });
    println!("{json}");
}

/// Handle the build command
fn handle_build_command(input: &Path, output: Option<&str>, options: &SerializeOptions) {
    let source = read_source(input);
    let value: serde_json::Value = serde_json::from_str(&source).unwrap_or_else(|e| {
        fail(format!("Invalid JSON in '{}': {e}", input.display()));
    });

    // Check the raw column map first so that violations are reported the same
    // way as option violations rather than as a serde type error.
    if let Some(columns) = value.get("columns") {
        if let Err(err) = validate_raw_columns(columns) {
            fail(ConvertError::Build(err));
        }
    }

    let doc: IndexDocument = serde_json::from_value(value).unwrap_or_else(|e| {
        fail(format!("Invalid board model in '{}': {e}", input.display()));
    });
    tracing::debug!(name = %doc.name, ignore_options = options.ignore_options, "building index");

    let text = kanban_index::serialize_with(&doc, options).unwrap_or_else(|e| fail(e));
    write_output(output, &text);
}

/// Handle the convert command
fn handle_convert_command(input: &Path, target: IndexVersion, output: Option<&str>) {
    let source = read_source(input);
    tracing::debug!(%target, input = %input.display(), "converting index");
    let text = kanban_index::convert(&source, target).unwrap_or_else(|e| fail(e));
    write_output(output, &text);
}

/// Handle the validate command
fn handle_validate_command(input: &Path) {
    let source = read_source(input);
    match kanban_index::parse(&source) {
        Ok(_) => println!("ok"),
        Err(err) => fail(err),
    }
}

/// Handle the format command
fn handle_format_command(input: &Path, output: Option<&str>) {
    let doc = parse_file(input);
    let text = kanban_index::serialize(&doc).unwrap_or_else(|e| fail(e));
    write_output(output, &text);
}

/// Handle the info command
fn handle_info_command(input: &Path) {
    let doc = parse_file(input);
    let summary = render_info(&doc).unwrap_or_else(|e| fail(e));
    print!("{summary}");
}

/// Plain-text board summary built from the typed options view
fn render_info(doc: &IndexDocument) -> Result<String, IndexError> {
    let version = doc.version()?;
    let options = doc.options.config()?;

    let mut lines = vec![
        format!("name: {}", doc.name),
        format!("dialect: {version}"),
        format!("tasks: {}", doc.task_ids().len()),
        "columns:".to_string(),
    ];
    for (name, tasks) in &doc.columns {
        let mut line = format!("  {name}: {}", tasks.len());
        if options.hidden_columns.contains(name) {
            line.push_str(" (hidden)");
        }
        lines.push(line);
    }
    if !options.started_columns.is_empty() {
        lines.push(format!("started: {}", options.started_columns.join(", ")));
    }
    if !options.completed_columns.is_empty() {
        lines.push(format!("completed: {}", options.completed_columns.join(", ")));
    }
    if !options.sprints.is_empty() {
        lines.push("sprints:".to_string());
        for sprint in &options.sprints {
            lines.push(format!("  {} {}", sprint.start, sprint.name));
        }
    }

    let mut summary = lines.join("\n");
    summary.push('\n');
    Ok(summary)
}

fn input_path(matches: &ArgMatches, config: &KanbanConfig) -> PathBuf {
    matches
        .get_one::<String>("input")
        .map(PathBuf::from)
        .unwrap_or_else(|| config.index.path.clone())
}

fn read_source(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        fail(format!("Error reading file '{}': {e}", path.display()));
    })
}

fn parse_file(path: &Path) -> IndexDocument {
    let source = read_source(path);
    kanban_index::parse(&source).unwrap_or_else(|e| fail(e))
}

fn write_output(output: Option<&str>, text: &str) {
    match output {
        Some(path) => fs::write(path, text).unwrap_or_else(|e| {
            fail(format!("Error writing file '{path}': {e}"));
        }),
        None => print!("{text}"),
    }
}

fn fail(message: impl Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn load_cli_config(explicit_path: Option<&str>) -> KanbanConfig {
    let loader = Loader::new().with_optional_file("kanban.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// `--verbose` wins over `RUST_LOG`, which wins over `logging.filter`
fn log_filter(config: &KanbanConfig, verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("kanban_index=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.filter))
    }
}

fn init_tracing(config: &KanbanConfig, verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(config, verbose))
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}
