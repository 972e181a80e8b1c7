mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "entry-kit")]
#[command(version, about = "Entry-point registry for multi-page static site builds", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Initialize a site directory with the default pages
    Init {
        /// Path to site directory
        path: PathBuf,
    },

    /// Validate site configuration and entry files
    Validate {
        /// Path to site directory
        path: PathBuf,
    },

    /// List resolved entry points in build order
    List {
        /// Path to site directory
        path: PathBuf,

        /// Print the build-engine input map as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the build manifest for the build engine
    Build {
        /// Path to site directory
        path: PathBuf,

        /// Output directory (defaults to build.out_dir in site.toml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Suggest a padded viewBox for an SVG's traced artwork
    Viewbox {
        /// Path to the SVG file
        svg: PathBuf,

        /// Padding added on every side
        #[arg(short, long, default_value_t = entry_kit_svg::DEFAULT_PADDING)]
        padding: f64,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Init { path } => commands::init::run(path).await,
        Command::Validate { path } => commands::validate::run(path).await,
        Command::List { path, json } => commands::list::run(path, json).await,
        Command::Build { path, output } => commands::build::run(path, output).await,
        Command::Viewbox { svg, padding } => commands::viewbox::run(svg, padding).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "entry-kit", &mut io::stdout());
            Ok(())
        }
    }
}
