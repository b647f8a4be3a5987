//! LCS Plagiarism Detection CLI
//!
//! Compares two text files line by line and reports how much of the
//! suspicious text is covered by the original.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use lcs_plagiarism::prelude::*;

#[derive(Parser)]
#[command(name = "lcs-plagiarism")]
#[command(about = "Sentence-level plagiarism detection via longest common subsequence")]
#[command(version)]
struct Cli {
    /// Log more detail (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for comparison results
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// One CSV row per line pair
    Csv,
    /// Human-readable report with bracketed diffs
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two documents line by line
    Compare {
        /// Path to the original text
        #[arg(long)]
        original: PathBuf,

        /// Path to the suspicious text
        #[arg(long)]
        suspicious: PathBuf,

        /// Minimum LCS ratio counted as overlap [default: 0.3]
        #[arg(long)]
        threshold: Option<f64>,

        /// Output file path (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Suppress progress and summary output
        #[arg(long)]
        quiet: bool,

        /// Print the first N line reports to console
        #[arg(long)]
        show_lines: Option<usize>,
    },

    /// Compare two single sentences
    Sentence {
        /// Original sentence
        #[arg(long)]
        original: String,

        /// Suspicious sentence
        #[arg(long)]
        suspicious: String,

        /// Minimum LCS ratio counted as overlap [default: 0.3]
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Benchmark matrix fill and LCS reconstruction
    Benchmark {
        /// Number of iterations
        #[arg(long, default_value = "1000")]
        iterations: usize,

        /// Sentence length in tokens
        #[arg(long, default_value = "200")]
        size: usize,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Compare {
            original,
            suspicious,
            threshold,
            output,
            format,
            quiet,
            show_lines,
        } => {
            let defaults = ComparisonParams::default();
            let params = ComparisonParams {
                plagiarism_threshold: threshold.unwrap_or(defaults.plagiarism_threshold),
            };

            let original_text = std::fs::read_to_string(&original)?;
            let suspicious_text = std::fs::read_to_string(&suspicious)?;
            let original_tokens = tokenize_by_lines(&original_text);
            let suspicious_tokens = tokenize_by_lines(&suspicious_text);

            let result =
                compare_documents(&original_tokens, &suspicious_tokens, &params, !quiet)?;

            match (&output, format) {
                (Some(path), OutputFormat::Json) => write_json_file(&result, path)?,
                (Some(path), OutputFormat::Csv) => write_csv_file(&result.stats, path)?,
                (Some(path), OutputFormat::Text) => std::fs::write(
                    path,
                    create_diff_report(&original_tokens, &suspicious_tokens, &result.stats),
                )?,
                (None, OutputFormat::Json) => {
                    write_json(&result, &mut std::io::stdout().lock())?;
                    println!();
                }
                (None, OutputFormat::Csv) => {
                    write_csv(&result.stats, &mut std::io::stdout().lock())?
                }
                (None, OutputFormat::Text) => println!(
                    "{}",
                    create_diff_report(&original_tokens, &suspicious_tokens, &result.stats)
                ),
            }

            // Results on stdout keep stdout to themselves; reports go to stderr
            let mut report: Box<dyn Write> = if output.is_some() {
                Box::new(std::io::stdout().lock())
            } else {
                Box::new(std::io::stderr().lock())
            };

            if !quiet {
                write_summary(&result, &mut report)?;
                if let Some(path) = &output {
                    eprintln!("\nOutput: {}", path.display());
                }
            }

            if let Some(limit) = show_lines {
                writeln!(report, "\n=== Line Reports ===")?;
                write_sentences(
                    &original_tokens,
                    &suspicious_tokens,
                    &result.stats,
                    Some(limit),
                    &mut report,
                )?;
            }
        }

        Commands::Sentence {
            original,
            suspicious,
            threshold,
        } => {
            let threshold = threshold.unwrap_or(DEFAULT_PLAGIARISM_THRESHOLD);
            let original_tokens = tokenize(&original);
            let suspicious_tokens = tokenize(&suspicious);

            println!("Original tokens: {:?}", original_tokens);
            println!("Suspicious tokens: {:?}", suspicious_tokens);

            let stats = sentence_stats(0, &original_tokens, &suspicious_tokens, threshold)?;
            let matrix = fill_lcs_matrix(&original_tokens, &suspicious_tokens);
            let lcs = find_lcs(&original_tokens, &suspicious_tokens, &matrix)?;

            println!("LCS length: {}", stats.lcs_length);
            println!("LCS: {:?}", lcs);
            println!("Plagiarism score: {:.2}", stats.plagiarism_score);
            println!(
                "{}",
                format_sentence(&original_tokens, &suspicious_tokens, &stats)
            );
        }

        Commands::Benchmark { iterations, size } => {
            run_benchmark(iterations, size);
        }
    }

    Ok(())
}

/// Run LCS benchmark to measure performance.
fn run_benchmark(iterations: usize, size: usize) {
    use std::time::Instant;

    println!("=== LCS Benchmark ===");
    println!("Iterations: {}", iterations);
    println!("Sentence size: {}", size);

    let seq_a: Vec<String> = (0..size).map(|i| format!("w{}", i)).collect();
    let seq_partial: Vec<String> = (0..size)
        .map(|i| if i % 10 < 7 { format!("w{}", i) } else { format!("x{}", i) })
        .collect();
    let seq_no_match: Vec<String> = (0..size).map(|i| format!("y{}", i)).collect();

    let cases = [
        ("Identical sentences", &seq_a),
        ("70% match sentences", &seq_partial),
        ("No match sentences", &seq_no_match),
    ];

    for (label, seq_b) in cases {
        println!("\n{}:", label);
        let start = Instant::now();
        for _ in 0..iterations {
            let matrix = fill_lcs_matrix(&seq_a, seq_b);
            let _ = find_lcs(&seq_a, seq_b, &matrix);
        }
        let elapsed = start.elapsed();
        let per_pair = elapsed.as_secs_f64() / iterations.max(1) as f64;
        println!("  Total time: {:.3}s", elapsed.as_secs_f64());
        println!("  Per pair: {:.3}ms", per_pair * 1000.0);
        if per_pair > 0.0 {
            println!("  Pairs/sec: {:.0}", 1.0 / per_pair);
        }
    }
}
