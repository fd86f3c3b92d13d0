//! Comparison tool for inspecting diffx output quality.
//!
//! Runs the Myers and histogram drivers over the same inputs and reports
//! op counts, change regions, and timings side by side.

use std::fs;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand, ValueEnum};
use diffx::{diff, diff_histogram, DiffOp, DiffOptions, OpType};

/// diffx comparison tool
#[derive(Parser)]
#[command(name = "dfx")]
#[command(version)]
#[command(about = "Sequence diff comparison tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Tokens {
    /// One element per line
    Lines,
    /// One element per whitespace-separated word
    Words,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Myers,
    Histogram,
    Both,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two files with the diff drivers
    #[command(visible_alias = "c")]
    Compare {
        /// First input file
        a: Option<String>,
        /// Second input file
        b: Option<String>,

        /// Tokenization unit
        #[arg(long, value_enum, default_value = "lines")]
        tokens: Tokens,

        /// Which driver(s) to run
        #[arg(long, value_enum, default_value = "both")]
        algorithm: Algorithm,

        /// Force the minimal edit script (slower)
        #[arg(long)]
        minimal: bool,

        /// Disable the frequency-filter preprocessing pass
        #[arg(long)]
        no_preprocessing: bool,

        /// Disable boundary-shift postprocessing
        #[arg(long)]
        no_postprocessing: bool,

        /// Run the built-in quality scenarios instead of reading files
        #[arg(long)]
        builtin: bool,
    },
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare {
            a,
            b,
            tokens,
            algorithm,
            minimal,
            no_preprocessing,
            no_postprocessing,
            builtin,
        } => {
            let options = DiffOptions::new()
                .minimal(minimal)
                .preprocessing(!no_preprocessing)
                .postprocessing(!no_postprocessing);

            if builtin {
                run_builtin(algorithm, options)
            } else {
                run_compare(a.as_deref(), b.as_deref(), tokens, algorithm, options)
            }
        }
    };

    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

/// Compares two files and prints per-driver results.
fn run_compare(
    a_path: Option<&str>,
    b_path: Option<&str>,
    tokens: Tokens,
    algorithm: Algorithm,
    options: DiffOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let (a_path, b_path) = match (a_path, b_path) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err("two input files are required unless --builtin is set".into()),
    };

    eprintln!("Reading {}", a_path);
    let a_content = fs::read_to_string(a_path)?;
    eprintln!("Reading {}", b_path);
    let b_content = fs::read_to_string(b_path)?;

    let a_elems = tokenize(&a_content, tokens);
    let b_elems = tokenize(&b_content, tokens);

    compare_case(a_path, &a_elems, &b_elems, algorithm, options);
    Ok(())
}

/// Runs the canned scenarios that expose fragmentation issues.
fn run_builtin(
    algorithm: Algorithm,
    options: DiffOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let words = |s: &str| -> Vec<String> { s.split(' ').map(str::to_string).collect() };

    let cases: Vec<(&str, Vec<String>, Vec<String>)> = vec![
        (
            "Fox example (common anchor word)",
            words("The quick brown fox jumps"),
            words("A slow red fox leaps"),
        ),
        (
            "Prose with common words",
            words("The quick brown fox jumps over the lazy dog in the park"),
            words("A slow red fox leaps over the sleeping cat in the garden"),
        ),
        (
            "Code-like tokens",
            words("func main ( ) { fmt . Println ( hello ) }"),
            words("func main ( ) { log . Printf ( world ) }"),
        ),
        (
            "Large file (500 lines, scattered changes)",
            generate_large_text(500, 0),
            generate_large_text(500, 42),
        ),
    ];

    for (name, a, b) in &cases {
        compare_case(name, a, b, algorithm, options);
    }
    Ok(())
}

fn tokenize(content: &str, tokens: Tokens) -> Vec<String> {
    match tokens {
        Tokens::Lines => content.lines().map(str::to_string).collect(),
        Tokens::Words => content.split_whitespace().map(str::to_string).collect(),
    }
}

/// Runs the selected driver(s) over one case and prints the results.
fn compare_case(
    name: &str,
    a: &[String],
    b: &[String],
    algorithm: Algorithm,
    options: DiffOptions,
) {
    println!("\n=== {} ===", name);
    println!("A: {} elements, B: {} elements", a.len(), b.len());

    if algorithm != Algorithm::Histogram {
        let start = Instant::now();
        let ops = diff(a, b, options);
        report("myers", a, b, &ops, start.elapsed());
    }

    if algorithm != Algorithm::Myers {
        let start = Instant::now();
        let ops = diff_histogram(a, b, options);
        report("histogram", a, b, &ops, start.elapsed());
    }
}

struct DiffStats {
    total: usize,
    equal: usize,
    delete: usize,
    insert: usize,
    change_regions: usize,
}

fn analyze(ops: &[DiffOp]) -> DiffStats {
    let mut stats = DiffStats {
        total: ops.len(),
        equal: 0,
        delete: 0,
        insert: 0,
        change_regions: 0,
    };

    let mut in_change = false;
    for op in ops {
        match op.kind {
            OpType::Equal => {
                stats.equal += 1;
                in_change = false;
            }
            OpType::Delete => {
                stats.delete += 1;
                if !in_change {
                    stats.change_regions += 1;
                    in_change = true;
                }
            }
            OpType::Insert => {
                stats.insert += 1;
                if !in_change {
                    stats.change_regions += 1;
                    in_change = true;
                }
            }
        }
    }

    stats
}

fn report(driver: &str, a: &[String], b: &[String], ops: &[DiffOp], elapsed: Duration) {
    let stats = analyze(ops);

    println!("\n{}: {:?}", driver, elapsed);
    println!(
        "  Operations: {} (Equal: {}, Delete: {}, Insert: {})",
        stats.total, stats.equal, stats.delete, stats.insert
    );
    println!("  Change regions: {}", stats.change_regions);

    // Detailed listing for small cases only
    if a.len() <= 20 {
        println!("  Output:");
        for op in ops {
            match op.kind {
                OpType::Equal => println!("    = {:?}", &a[op.a_start..op.a_end]),
                OpType::Delete => println!("    - {:?}", &a[op.a_start..op.a_end]),
                OpType::Insert => println!("    + {:?}", &b[op.b_start..op.b_end]),
            }
        }
    }
}

/// Deterministic synthetic text: word soup with periodic changed lines.
fn generate_large_text(lines: usize, seed: usize) -> Vec<String> {
    let words = [
        "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "fn", "main", "return",
        "if", "else", "for", "loop", "let", "const", "use", "mod", "type", "struct", "trait",
        "map", "slice",
    ];

    let mut result: Vec<String> = (0..lines)
        .map(|i| {
            let count = 5 + i % 3;
            let line: Vec<&str> = (0..count)
                .map(|j| words[(i * 7 + j * 13 + seed) % words.len()])
                .collect();
            line.join(" ")
        })
        .collect();

    // Scatter changed lines based on the seed
    let mut i = seed % 10;
    while i < lines {
        result[i] = format!("CHANGED LINE {}", i);
        i += 10 + seed % 5;
    }

    result
}
