//! hipify - CUDA to HIP source-to-source translator.
//!
//! Rewrites CUDA vocabulary (identifiers, types, enumerators, includes,
//! launch syntax, in-string references) to the HIP equivalents, preserving
//! all surrounding bytes.

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use hipify_driver::{TranslateOptions, TranslationJob};
use hipify_stats::Stats;
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// CUDA to HIP source translator
#[derive(Parser, Debug)]
#[command(name = "hipify")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input C/C++ source files to translate
    #[arg(value_name = "FILE", required = true)]
    files: Vec<Utf8PathBuf>,

    /// Output filename (single input only)
    #[arg(short, long, value_name = "FILE")]
    output: Option<Utf8PathBuf>,

    /// Modify the input file in place, saving a backup in a .prehip file
    #[arg(long)]
    inplace: bool,

    /// Don't create a backup file when translating in place
    #[arg(long)]
    no_backup: bool,

    /// Don't write any translated output (analysis only)
    #[arg(long)]
    no_output: bool,

    /// Print translation statistics to stderr
    #[arg(long)]
    print_stats: bool,

    /// Write statistics as CSV to this file
    #[arg(long = "o-stats", value_name = "FILE")]
    output_stats: Option<Utf8PathBuf>,

    /// Shorthand for --no-output --print-stats
    #[arg(long)]
    examine: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if cli.examine {
        cli.no_output = true;
        cli.print_stats = true;
    }

    // Option conflicts are rejected before any work happens.
    if cli.output.is_some() && cli.files.len() > 1 {
        eprintln!("[HIPIFY] conflict: -o and multiple source files are specified.");
        std::process::exit(1);
    }
    if cli.no_output && cli.inplace {
        eprintln!("[HIPIFY] conflict: both -no-output and -inplace options are specified.");
        std::process::exit(1);
    }
    if cli.no_output && cli.output.is_some() {
        eprintln!("[HIPIFY] conflict: both -no-output and -o options are specified.");
        std::process::exit(1);
    }
    if cli.output.is_some() && cli.inplace {
        eprintln!("[HIPIFY] conflict: both -o and -inplace options are specified.");
        std::process::exit(1);
    }

    let mut csv = match &cli.output_stats {
        Some(path) => {
            let mut w = BufWriter::new(File::create(path)?);
            writeln!(w, "{}", Stats::csv_header())?;
            Some(w)
        }
        None => None,
    };

    let opts = TranslateOptions {
        output: cli.output.clone(),
        inplace: cli.inplace,
        no_backup: cli.no_backup,
        no_output: cli.no_output,
    };

    let mut failures: u32 = 0;
    let mut aggregate = Stats::new("TOTAL");

    for src in &cli.files {
        let job = TranslationJob::new(src.clone(), opts.clone());
        let outcome = match job.run() {
            Ok(outcome) => outcome,
            Err(err) => {
                eprintln!("[HIPIFY] error: {err}");
                failures += 1;
                continue;
            }
        };
        failures += outcome.failures;

        if cli.print_stats {
            let mut stderr = std::io::stderr().lock();
            let _ = outcome.stats.print(&mut stderr);
        }
        if let Some(w) = csv.as_mut() {
            outcome.stats.write_csv(w)?;
        }
        aggregate.merge(&outcome.stats);
    }

    if cli.print_stats && cli.files.len() > 1 {
        aggregate.mark_completion();
        let mut stderr = std::io::stderr().lock();
        let _ = aggregate.print(&mut stderr);
    }

    if let Some(mut w) = csv {
        w.flush()?;
    }

    if failures > 0 {
        std::process::exit(failures.min(i32::MAX as u32) as i32);
    }
    Ok(())
}
