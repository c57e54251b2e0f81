//! gridtrim CLI - reduce a status grid according to rule tables

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use gridtrim::{parse_document, reduce, render_visible, GridError, ReducerConfig};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "gridtrim")]
#[command(version)]
#[command(about = "Rule-driven reducer for rendered status grids", long_about = None)]
struct Cli {
    /// Input grid file (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// TOML rules file overriding the shipped vocabulary
    #[arg(short, long)]
    rules: Option<String>,

    /// Quiet mode: suppress the run summary on stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let config = match cli.rules {
        Some(ref path) => {
            let raw = fs::read_to_string(path)?;
            match ReducerConfig::from_toml_str(&raw) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("✗ {}: {}", path, err);
                    std::process::exit(2);
                }
            }
        }
        None => ReducerConfig::default(),
    };

    // Locate the table; absence is reported once and the run stops there.
    let Some(mut table) = parse_document(&input) else {
        eprintln!("✗ {}", GridError::TableNotFound);
        std::process::exit(1);
    };

    let report = reduce(&mut table, &config);
    let rendered = render_visible(&table);

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            write!(file, "{}", rendered)?;
            if !cli.quiet {
                eprintln!("✓ Output written to: {} ({})", path, report);
            }
        }
        None => {
            print!("{}", rendered);
            if !cli.quiet {
                eprintln!("✓ {}", report);
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
}
