use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "halo-digraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the graph benchmarks and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Only run this bench target
        #[arg(long)]
        only: Option<String>,

        /// Where to write the report
        #[arg(long, default_value = "benchmark_results/report.md")]
        out: PathBuf,
    },
}

const BENCHES: &[&str] = &["digraph_benchmark", "shortest_path_benchmark"];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            only,
            out,
        } => {
            if !report_only {
                let selected: Vec<&str> = match only.as_deref() {
                    Some(name) => {
                        if !BENCHES.contains(&name) {
                            anyhow::bail!("unknown bench target `{name}`; expected one of {BENCHES:?}");
                        }
                        vec![name]
                    }
                    None => BENCHES.to_vec(),
                };
                run_benchmarks(&selected, quick)?;
            }
            generate_report(&out)?;
        }
    }

    Ok(())
}

fn run_benchmarks(benches: &[&str], quick: bool) -> Result<()> {
    for bench in benches {
        println!("\n>>> Running bench target: {bench}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.args(["bench", "--bench", bench]);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if quick {
            cmd.args(["--measurement-time", "0.1", "--sample-size", "10", "--noplot"]);
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench target {bench}"))?;
        if !status.success() {
            anyhow::bail!("bench target {bench} failed");
        }
        println!("Finished {bench} in {:.2?}", start.elapsed());
    }
    Ok(())
}

/// Mean time in nanoseconds, keyed by criterion's benchmark directory path.
type Results = BTreeMap<String, f64>;

fn generate_report(report_path: &Path) -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, criterion_dir, &mut results)?;

    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;

    writeln!(file, "# Graph Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Benchmark | Mean | Ops/s |")?;
    writeln!(file, "|---|---|---|")?;
    for (name, time_ns) in &results {
        writeln!(
            file,
            "| {} | {} | {} |",
            name,
            format_time(*time_ns),
            format_ops(1e9 / time_ns)
        )?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn collect_results(root: &Path, dir: &Path, results: &mut Results) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return Ok(()),
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            // Criterion keeps HTML under `report/` and old runs under `base/`.
            let name = path.file_name().and_then(|s| s.to_str()).unwrap_or_default();
            if name != "report" && name != "base" && name != "change" {
                collect_results(root, &path, results)?;
            }
        } else if path.file_name().and_then(|s| s.to_str()) == Some("estimates.json") {
            // Structure: target/criterion/<group>/[<function>/][<param>/]new/estimates.json
            let Some(run_dir) = path.parent() else { continue };
            if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
                continue;
            }
            let Some(bench_dir) = run_dir.parent() else { continue };
            let name = bench_dir
                .strip_prefix(root)
                .unwrap_or(bench_dir)
                .to_string_lossy()
                .replace('\\', "/");

            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let json: serde_json::Value = serde_json::from_str(&content)
                .with_context(|| format!("Malformed estimates in {}", path.display()))?;
            if let Some(mean) = json
                .get("mean")
                .and_then(|m| m.get("point_estimate"))
                .and_then(serde_json::Value::as_f64)
            {
                if mean > 0.0 {
                    results.insert(name, mean);
                }
            }
        }
    }
    Ok(())
}

fn format_time(ns: f64) -> String {
    if ns >= 1e6 {
        format!("{:.2} ms", ns / 1e6)
    } else if ns >= 1e3 {
        format!("{:.2} µs", ns / 1e3)
    } else {
        format!("{ns:.0} ns")
    }
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}
