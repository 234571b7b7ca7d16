//! CLI for the dispatch cost benchmarks.
//!
//! Usage:
//!   dispatch-bench                     # Compiled-in mode, one line per variant
//!   dispatch-bench callback_sum_f32    # Specific algorithm
//!   dispatch-bench --report            # Sampled statistics table
//!   dispatch-bench --list              # List available algorithms
//!   dispatch-bench --help              # Show help

use dispatch_cost_bench::registry::{build_registry, default_algorithm, AlgorithmRunner};
use dispatch_cost_bench::utils::logging::init_logging;
use dispatch_cost_bench::utils::runner::{export_csv, CsvRow};
use dispatch_cost_bench::utils::{sample_variants, PinStrategy, SampleConfig};
use dispatch_cost_bench::{tui, BenchError, Result};
use std::env;

/// Parsed command-line options
#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    show_list: bool,
    show_help: bool,
    report: bool,
    pin_per_sample: bool,
    repetitions: Option<usize>,
    samples: Option<usize>,
    seed: Option<u64>,
    csv_path: Option<String>,
    algorithm: Option<String>,
}

fn parse_value<T: std::str::FromStr>(
    option: &'static str,
    expected: &'static str,
    value: Option<&String>,
) -> Result<T> {
    let value = value.ok_or(BenchError::MissingValue(option))?;
    value.parse().map_err(|_| BenchError::InvalidValue {
        option,
        expected,
        value: value.clone(),
    })
}

fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut opts = CliOptions::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => opts.show_list = true,
            "--help" | "-h" => opts.show_help = true,
            "--report" | "-r" => opts.report = true,
            "--pin-per-sample" => opts.pin_per_sample = true,
            "--iter" => {
                i += 1;
                opts.repetitions = Some(parse_value("--iter", "a repetition count", args.get(i))?);
            }
            "--samples" => {
                i += 1;
                let samples: usize = parse_value("--samples", "a positive sample count", args.get(i))?;
                if samples == 0 {
                    return Err(BenchError::InvalidValue {
                        option: "--samples",
                        expected: "a positive sample count",
                        value: "0".to_string(),
                    });
                }
                opts.samples = Some(samples);
            }
            "--seed" => {
                i += 1;
                opts.seed = Some(parse_value("--seed", "an unsigned integer", args.get(i))?);
            }
            "--csv" => {
                i += 1;
                opts.csv_path = Some(parse_value("--csv", "a file path", args.get(i))?);
            }
            arg if !arg.starts_with('-') => {
                opts.algorithm = Some(arg.to_string());
            }
            other => return Err(BenchError::UnknownOption(other.to_string())),
        }
        i += 1;
    }

    Ok(opts)
}

fn pin_strategy(opts: &CliOptions) -> PinStrategy {
    if opts.pin_per_sample {
        PinStrategy::PerSample
    } else {
        PinStrategy::Global
    }
}

fn run_report(algo: &dyn AlgorithmRunner, opts: &CliOptions, repetitions: usize) -> Result<()> {
    tui::print_header();
    tui::print_algo_info_box(algo);

    let defaults = SampleConfig::default();
    let config = SampleConfig {
        samples_per_variant: opts.samples.unwrap_or(defaults.samples_per_variant),
        seed: opts.seed,
        pin_strategy: pin_strategy(opts),
        ..defaults
    };

    let results = sample_variants(algo.timed_variants(repetitions), &config);
    tui::print_results_table(&results, repetitions);

    if let Some(path) = &opts.csv_path {
        let rows: Vec<CsvRow> = results
            .iter()
            .map(|stats| CsvRow {
                algo_name: algo.name(),
                repetitions,
                stats,
            })
            .collect();
        export_csv(path, &rows)?;
        println!("  Raw data exported to: {}", path);
    }

    println!("Note: Relative cost is measured against the first variant ('inline').");
    Ok(())
}

fn run(args: &[String]) -> Result<()> {
    let opts = parse_args(args)?;
    let registry = build_registry();

    if opts.show_help {
        tui::print_help();
        return Ok(());
    }

    if opts.show_list {
        tui::print_available_algorithms(&registry);
        return Ok(());
    }

    let name = opts.algorithm.as_deref().unwrap_or(default_algorithm());
    let algo = registry
        .find(name)
        .ok_or_else(|| BenchError::UnknownAlgorithm(name.to_string()))?;
    let repetitions = opts.repetitions.unwrap_or_else(|| algo.default_repetitions());

    tracing::info!(algorithm = algo.name(), repetitions, report = opts.report, "starting");

    if opts.report {
        run_report(algo, &opts, repetitions)
    } else {
        let stdout = std::io::stdout();
        algo.run_sequence(repetitions, &mut stdout.lock())
    }
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        if let BenchError::UnknownAlgorithm(_) = e {
            eprintln!("Available: {:?}", build_registry().list_names());
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_arguments_is_default_run() {
        assert_eq!(parse_args(&[]).unwrap(), CliOptions::default());
    }

    #[test]
    fn test_parse_full_report_options() {
        let opts = parse_args(&args(&[
            "--report", "--iter", "100", "--samples", "5", "--seed", "7", "--csv", "out.csv", "callback_sum_f32",
        ]))
        .unwrap();
        assert!(opts.report);
        assert_eq!(opts.repetitions, Some(100));
        assert_eq!(opts.samples, Some(5));
        assert_eq!(opts.seed, Some(7));
        assert_eq!(opts.csv_path.as_deref(), Some("out.csv"));
        assert_eq!(opts.algorithm.as_deref(), Some("callback_sum_f32"));
        assert_eq!(pin_strategy(&opts), PinStrategy::Global);
    }

    #[test]
    fn test_pin_per_sample_flag() {
        let opts = parse_args(&args(&["--report", "--pin-per-sample"])).unwrap();
        assert!(opts.pin_per_sample);
        assert_eq!(pin_strategy(&opts), PinStrategy::PerSample);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_args(&args(&["--bogus"])),
            Err(BenchError::UnknownOption(_))
        ));
        assert!(matches!(
            parse_args(&args(&["--iter"])),
            Err(BenchError::MissingValue("--iter"))
        ));
        assert!(matches!(
            parse_args(&args(&["--iter", "many"])),
            Err(BenchError::InvalidValue { option: "--iter", .. })
        ));
        assert!(matches!(
            parse_args(&args(&["--samples", "0"])),
            Err(BenchError::InvalidValue { option: "--samples", .. })
        ));
    }

    #[test]
    fn test_unknown_algorithm() {
        assert!(matches!(
            run(&args(&["no_such_algorithm"])),
            Err(BenchError::UnknownAlgorithm(_))
        ));
    }
}
