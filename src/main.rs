use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use jsonnode_utils::config::Config;
use jsonnode_utils::document::tree::JsonTree;
use jsonnode_utils::file::loader::{load_json_file, load_json_from_stdin};
use jsonnode_utils::file::saver::{save_json_file, serialize_node, serialize_node_compact, serialize_tree};
use jsonnode_utils::ops;
use jsonnode_utils::path::parse_dotted;
use jsonnode_utils::script::Script;

/// jsonnode - apply path-addressed edits to a JSON document
#[derive(Parser)]
#[command(name = "jsonnode")]
#[command(version)]
#[command(about = "Apply path-addressed structural edits to a JSON document", long_about = None)]
struct Cli {
    /// JSON file to read (omit to read from stdin)
    file: Option<PathBuf>,

    /// TOML script of operations to apply in order
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Print the node at this dot-separated path instead of the whole document.
    /// Keys that are empty or contain a '.' cannot be addressed this way
    #[arg(short, long, conflicts_with = "output")]
    get: Option<String>,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Single-line output
    #[arg(long)]
    compact: bool,

    /// Spaces per indentation level (overrides config)
    #[arg(long)]
    indent: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn load_input(file: Option<&PathBuf>) -> Result<JsonTree> {
    match file {
        Some(path) => load_json_file(path),
        None if io::stdin().is_terminal() => {
            anyhow::bail!("No input: pass a file or pipe JSON on stdin")
        }
        None => load_json_from_stdin(),
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = Config::load();
    if cli.compact {
        config.compact_output = true;
    }
    if let Some(indent) = cli.indent {
        config.indent_size = indent;
    }

    let mut tree = load_input(cli.file.as_ref())?;

    if let Some(script_path) = &cli.script {
        let script = Script::load(script_path)?;
        let applied = script
            .apply(&mut tree, &config)
            .with_context(|| format!("Script {} failed", script_path.display()))?;
        log::info!(
            "Applied {} operations (document modified: {})",
            applied,
            tree.is_modified()
        );
    }

    if let Some(dotted) = &cli.get {
        let path = parse_dotted(dotted);
        let Some(node) = ops::get_node_by_path(tree.root(), &path) else {
            log::warn!("Nothing at path {}", dotted);
            return Ok(ExitCode::FAILURE);
        };
        let text = if config.compact_output {
            serialize_node_compact(node)
        } else {
            serialize_node(node, config.indent_size)?
        };
        println!("{}", text);
        return Ok(ExitCode::SUCCESS);
    }

    match &cli.output {
        Some(path) => save_json_file(path, &tree, &config)?,
        None => println!("{}", serialize_tree(&tree, &config)?),
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}
