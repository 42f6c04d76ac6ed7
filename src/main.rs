//! Euler - Eulerian circuit finder
//!
//! Reads an adjacency matrix, checks whether the graph has an Eulerian
//! circuit and prints one if it does.
//!
//! # Usage
//!
//! ```bash
//! euler                          # choose a file from ./matrices
//! euler --dir graphs --choice 2  # second file of ./graphs, no prompt
//! euler graphs/triangle.txt      # analyze one file
//! ```

use std::io;
use std::path::PathBuf;

use clap::Parser;
use euler_circuit::{
    analyze, catalog::MatrixCatalog, error::Result, matrix, report, DEFAULT_MATRIX_DIR,
};
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Eulerian circuit finder for undirected multigraphs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Matrix file to analyze; skips selection from the directory
    #[arg(value_name = "MATRIX_FILE")]
    matrix_file: Option<PathBuf>,

    /// Directory holding the .txt matrix files to choose from
    #[arg(short, long, default_value = DEFAULT_MATRIX_DIR)]
    dir: PathBuf,

    /// 1-based number of the file to analyze instead of prompting
    #[arg(short, long)]
    choice: Option<String>,

    /// The log level to use, one of Off, Error, Warn, Info, Debug, Trace
    #[arg(long, default_value = "Warn")]
    log_level: LevelFilter,
}

fn main() {
    let args = Args::parse();
    initialise_logging(args.log_level);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn initialise_logging(level_filter: LevelFilter) {
    if let Err(e) = TermLogger::init(
        level_filter,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialise logging: {}", e);
        return;
    }

    info!("Logging initialised successfully");
}

fn run(args: &Args) -> Result<()> {
    let path = match &args.matrix_file {
        Some(path) => path.clone(),
        None => {
            let catalog = MatrixCatalog::scan(&args.dir)?;
            match &args.choice {
                Some(choice) => catalog.select(choice)?.to_path_buf(),
                None => catalog
                    .prompt_selection(&mut io::stdin().lock(), &mut io::stdout())?
                    .to_path_buf(),
            }
        }
    };
    info!("Analyzing {}", path.display());

    // Parse and validate the matrix
    let graph = matrix::parse_file(&path)?;

    // Analyze and print
    let outcome = analyze(&graph);
    for line in report::render(&outcome) {
        println!("{}", line);
    }

    Ok(())
}
