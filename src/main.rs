//! CLI entry point for canopy

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use canopy::{TreeFormatter, export_yaml, walk};
use clap::Parser;

/// Determine whether to use color output based on the environment.
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    // Respect FORCE_COLOR environment variable
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    // Respect TERM=dumb
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }
    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "Print a directory tree's structure and export it as YAML")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    path: PathBuf,

    /// File the YAML representation is written to
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "directory_structure.yaml"
    )]
    output: PathBuf,
}

fn main() {
    let args = Args::parse();

    let tree = match walk(&args.path) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("canopy: {}", e);
            process::exit(1);
        }
    };

    let formatter = TreeFormatter::new(should_use_color());
    if let Err(e) = formatter.print(&tree) {
        eprintln!("canopy: error writing output: {}", e);
        process::exit(1);
    }

    if let Err(e) = export_yaml(&tree, &args.output) {
        eprintln!("canopy: {}", e);
        process::exit(1);
    }

    println!("\nYAML representation exported to {}", args.output.display());
}
