//! ggbgen - GeoGebra construction file generator

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ggbgen::{Color, Document, GgbConfig, GgbExporter, Scene};

#[derive(Parser)]
#[command(name = "ggbgen")]
#[command(version, about = "Generate GeoGebra (.ggb) construction files", long_about = None)]
#[command(after_help = "EXAMPLES:
    ggbgen demo                      Write the sample construction to demo.ggb
    ggbgen build scene.toml          Build scene.ggb from a scene file
    ggbgen build scene.toml -o out   Build out.ggb")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Only print warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Print every appended construction entry
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample construction (perpendicular line and a segment)
    Demo {
        /// Output file; `.ggb` is appended if missing
        #[arg(short, long, value_name = "OUTPUT", default_value = "demo")]
        output: PathBuf,
    },
    /// Build a construction from a TOML scene file
    Build {
        /// Scene file
        #[arg(value_name = "SCENE")]
        scene: PathBuf,

        /// Output file; defaults to the scene file name with `.ggb`
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Reject duplicate labels and undeclared references
        #[arg(long)]
        strict: bool,

        /// Pretty-print the XML inside the archive
        #[arg(long)]
        indent: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Demo { output } => demo_document().save(&output),
        Commands::Build {
            scene,
            output,
            strict,
            indent,
        } => build(&scene, output, strict, indent),
    };

    match result {
        Ok(path) => {
            if !cli.quiet {
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(quiet: bool, verbose: bool) {
    let default_level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn build(
    scene_path: &Path,
    output: Option<PathBuf>,
    strict: bool,
    indent: bool,
) -> ggbgen::Result<PathBuf> {
    let doc = Scene::from_file(scene_path)?.build();
    let output = output.unwrap_or_else(|| scene_path.with_extension(""));
    GgbExporter::new()
        .with_config(
            GgbConfig::default()
                .with_strict(strict)
                .with_indent(indent),
        )
        .save(&doc, output)
}

/// Line f: y = 2 with the perpendicular through A, then segment PQ.
fn demo_document() -> Document {
    let mut doc = Document::new("suite", "graphing");

    doc.add_line_by_coeffs("f", 0.0, 1.0, -2.0);
    doc.add_point("A", -3.0, 4.0);
    doc.add_orthogonal_line("g", "A", "f");

    doc.add_point("P", 5.0, 5.0);
    doc.add_point("Q", 8.0, 1.0);
    doc.add_segment("seg1", "P", "Q")
        .set_color(Color::rgb(255, 87, 34));

    doc
}
