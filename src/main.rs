//! amalgam CLI
//!
//! Entry point for the `amalgam` command-line tool.

use amalgam::{logging, Bundler, CheckOutcome, ConditionalScope};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "amalgam")]
#[command(about = "Bundle C/C++ headers into a single header", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the single header (default)
    Bundle {
        /// Path to bundle config (default: amalgam.toml, else built-in)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Conditional flag lifetime: "run" or "file"
        #[arg(long)]
        scope: Option<ConditionalScope>,

        /// Print to stdout instead of writing the output file
        #[arg(long)]
        stdout: bool,
    },

    /// Exit non-zero if the output is missing or out of date
    Check {
        /// Path to bundle config (default: amalgam.toml, else built-in)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },

    /// Show the decision for every line of one header
    Explain {
        /// Path to bundle config (default: amalgam.toml, else built-in)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output in human-readable format instead of JSON
        #[arg(long)]
        human: bool,

        /// Header file to explain
        file: PathBuf,
    },

    /// Validate the config and confirm all inputs exist
    Verify {
        /// Path to bundle config (default: amalgam.toml, else built-in)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Bundle {
        config: None,
        scope: None,
        stdout: false,
    });

    match command {
        Commands::Bundle {
            config,
            scope,
            stdout,
        } => run_bundle(config, scope, stdout),
        Commands::Check { config } => run_check(config),
        Commands::Explain {
            config,
            human,
            file,
        } => run_explain(config, human, file),
        Commands::Verify { config } => run_verify(config),
    }
}

fn load_bundler(config_path: Option<PathBuf>) -> Bundler {
    match Bundler::from_config(config_path.as_deref()) {
        Ok(bundler) => bundler,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    }
}

fn run_bundle(config_path: Option<PathBuf>, scope: Option<ConditionalScope>, stdout: bool) {
    let mut bundler = load_bundler(config_path);
    if let Some(scope) = scope {
        bundler = bundler.with_scope(scope);
    }

    let result = if stdout {
        bundler.render()
    } else {
        bundler.run()
    };

    match result {
        Ok(result) => {
            if stdout {
                print!("{}", result.text);
            } else {
                eprintln!(
                    "Bundled {} header(s), {} include(s) -> {}",
                    result.parts.len(),
                    result.includes.len(),
                    bundler.spec().output.path.display()
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run_check(config_path: Option<PathBuf>) {
    let bundler = load_bundler(config_path);
    let path = bundler.spec().output.path.clone();

    match bundler.check() {
        Ok(CheckOutcome::UpToDate) => println!("Up to date: {}", path.display()),
        Ok(CheckOutcome::Stale) => {
            println!("Out of date: {}", path.display());
            process::exit(1);
        }
        Ok(CheckOutcome::Missing) => {
            println!("Missing: {}", path.display());
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run_explain(config_path: Option<PathBuf>, human: bool, file: PathBuf) {
    let bundler = load_bundler(config_path);

    let explanation = match bundler.explain_file(&file) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if human {
        print!("{}", explanation.to_human());
    } else {
        match explanation.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    }
}

fn run_verify(config_path: Option<PathBuf>) {
    let bundler = load_bundler(config_path);
    let spec = bundler.spec();

    match bundler.verify_inputs() {
        Ok(paths) => {
            println!("Configuration valid");
            println!();
            println!("  Inputs: {}", paths.len());
            for path in &paths {
                println!("    {}", path.display());
            }
            println!("  Output: {}", spec.output.path.display());
            println!("  Guard: {}", spec.output.guard);
            println!("  Conditional scope: {:?}", spec.conditional_scope);
        }
        Err(e) => {
            eprintln!("Verification failed: {}", e);
            process::exit(1);
        }
    }
}
