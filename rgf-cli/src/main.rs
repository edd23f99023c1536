//! Command-line interface for rgf
//! This binary extracts the genre and accent tables from the RGF macro module into the
//! page's data modules, and repairs the page script's broken template literals.
//!
//! Usage:
//!   rgf extract [--source `<path>`] [--out-dir `<dir>`] [--check]   - Write genres.js / accents.js
//!   rgf inspect `<path>` --transform `<name>`                       - Print one view of a module
//!   rgf patch [`<path>`]                                            - Fix app.js template literals
//!   rgf --list-transforms                                          - List inspect transforms
//!
//! Every command reads `rgf.toml` from the working directory when present; `--config`
//! and `--set key=value` layer on top of it.

mod transforms;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use rgf_config::{Loader, RgfConfig};
use rgf_parser::rgf::loader::SourceLoader;
use rgf_parser::rgf::patching::patch_app_script;
use rgf_parser::rgf::records::RecordKind;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USER_CONFIG: &str = "rgf.toml";

fn main() {
    let matches = build_cli().get_matches();

    // Global args are propagated down, so the active subcommand sees them all
    let active = matches.subcommand().map(|(_, sub)| sub).unwrap_or(&matches);
    let level = active
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or("warn");
    init_tracing(level);

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let result = match matches.subcommand() {
        Some(("extract", sub)) => handle_extract_command(sub),
        Some(("inspect", sub)) => handle_inspect_command(sub),
        Some(("patch", sub)) => handle_patch_command(sub),
        _ => {
            let _ = build_cli().print_help();
            std::process::exit(2);
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn build_cli() -> Command {
    Command::new("rgf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extracts genre and accent tables from the RGF macro module")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults and ./rgf.toml"),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .global(true)
                .action(ArgAction::Append)
                .value_name("KEY=VALUE")
                .help("Override a configuration key (e.g., 'extract.receiver=ws, r')"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .default_value("warn")
                .help("Log filter used when RUST_LOG is not set"),
        )
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available inspect transforms")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("extract")
                .about("Extract both tables and write the page's data modules")
                .arg(
                    Arg::new("source")
                        .long("source")
                        .short('s')
                        .help("Macro module to read (default: extract.source)"),
                )
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .short('o')
                        .help("Directory to write genres.js and accents.js (default: extract.out_dir)"),
                )
                .arg(
                    Arg::new("check")
                        .long("check")
                        .help("Validate and report counts without writing anything")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print one view of a macro module")
                .arg(
                    Arg::new("path")
                        .help("Path to the macro module")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("transform")
                        .long("transform")
                        .short('t')
                        .help("Transform name (see --list-transforms)")
                        .default_value("calls-json"),
                ),
        )
        .subcommand(
            Command::new("patch")
                .about("Restore the template literals in the page's app script")
                .arg(
                    Arg::new("path")
                        .help("Script to patch in place (default: patch.target)")
                        .index(1),
                ),
        )
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Layer ./rgf.toml, --config and --set over the embedded defaults
fn load_config(matches: &ArgMatches) -> Result<RgfConfig> {
    let mut loader = Loader::new().with_optional_file(USER_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(assignments) = matches.get_many::<String>("set") {
        for assignment in assignments {
            loader = loader.set_assignment(assignment)?;
        }
    }
    loader.build().context("failed to load configuration")
}

/// Handle the extract command
fn handle_extract_command(sub: &ArgMatches) -> Result<()> {
    let mut config = load_config(sub)?;
    if let Some(source) = sub.get_one::<String>("source") {
        config.extract.source = PathBuf::from(source);
    }
    if let Some(out_dir) = sub.get_one::<String>("out-dir") {
        config.extract.out_dir = PathBuf::from(out_dir);
    }
    let extract = &config.extract;

    info!(source = %extract.source.display(), "reading macro module");
    let loader = SourceLoader::from_path(&extract.source)
        .with_context(|| format!("failed to read {}", extract.source.display()))?;
    let library = loader
        .extract(&extract.options())
        .with_context(|| format!("failed to extract {}", extract.source.display()))?;

    if !sub.get_flag("check") {
        // Render both before touching the output directory
        let genres = extract.module(RecordKind::Genre).render(&library.genres)?;
        let accents = extract.module(RecordKind::Accent).render(&library.accents)?;

        fs::create_dir_all(&extract.out_dir)
            .with_context(|| format!("failed to create {}", extract.out_dir.display()))?;
        for (kind, contents) in [(RecordKind::Genre, genres), (RecordKind::Accent, accents)] {
            let path = extract.output_path(kind);
            fs::write(&path, contents)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote {} table", kind);
        }
    }

    println!(
        "Extracted {} genres and {} accents.",
        library.genres.len(),
        library.accents.len()
    );
    Ok(())
}

/// Handle the inspect command
fn handle_inspect_command(sub: &ArgMatches) -> Result<()> {
    let config = load_config(sub)?;
    let path = sub
        .get_one::<String>("path")
        .expect("path is a required argument");
    let transform = sub
        .get_one::<String>("transform")
        .expect("transform has a default value");

    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
    let output = transforms::execute_transform(&source, transform, &config.extract)
        .with_context(|| format!("transform '{}' failed on {}", transform, path))?;

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Handle the patch command
fn handle_patch_command(sub: &ArgMatches) -> Result<()> {
    let config = load_config(sub)?;
    let path = sub
        .get_one::<String>("path")
        .map(PathBuf::from)
        .unwrap_or(config.patch.target);

    let bytes = fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
    let report = patch_app_script(&String::from_utf8_lossy(&bytes));

    if !report.changed() {
        println!("{}: nothing to patch", path.display());
        return Ok(());
    }

    fs::write(&path, &report.text)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Patched {}:", path.display());
    for fixup in &report.applied {
        println!("  {} ({}x)", fixup.name, fixup.occurrences);
    }
    Ok(())
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    for name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {}", name);
    }
}
