//! CLI for confmat: sensitivity, specificity and a confusion-matrix heatmap.

mod commands;
mod tui;

use clap::{Parser, Subcommand};

use commands::CountsArgs;

#[derive(Parser)]
#[command(name = "confmat")]
#[command(about = "confmat: sensitivity and specificity calculator with a confusion-matrix heatmap")]
#[command(version = confmat_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute sensitivity and specificity and print the 2x3 matrix
    Calc {
        #[command(flatten)]
        counts: CountsArgs,

        /// Print counts, rates and grid as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the annotated confusion-matrix heatmap as SVG
    Render {
        #[command(flatten)]
        counts: CountsArgs,

        /// Output path for the SVG ("-" writes to stdout)
        #[arg(long, default_value = "confusion_matrix.svg")]
        output: String,
    },

    /// Interactive calculator form (TUI)
    Form,

    /// Serve the calculator as a web form
    Server {
        /// Port to listen on
        #[arg(long, default_value = "8501")]
        port: u16,

        /// Bind address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory holding the side-panel image CM.png
        #[arg(long, default_value = "images")]
        images_dir: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Calc { counts, json } => commands::calc::run(counts.into(), json),
        Commands::Render { counts, output } => commands::render::run(counts.into(), &output),
        Commands::Form => commands::form::run(),
        Commands::Server {
            port,
            host,
            images_dir,
        } => commands::server::run(&host, port, &images_dir),
    }
}
