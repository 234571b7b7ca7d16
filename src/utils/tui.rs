//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::registry::{AlgorithmRegistry, AlgorithmRunner};
use crate::utils::bench::format_measurement;
use crate::utils::timer::VariantStats;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let variants_str = algo.available_variants().join(", ");
    let name_line = format!("Algorithm: {}", algo.name());
    let cat_line = format!("Category:  {}", algo.category());
    let desc_line = algo.description();
    let var_line = format!("Variants: {}", variants_str);

    let content_width = [name_line.len(), cat_line.len(), desc_line.len(), var_line.len()]
        .iter()
        .cloned()
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for line in [name_line.as_str(), cat_line.as_str(), desc_line] {
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        truncate(&var_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Cost of `stats` relative to the first row (1.00x = same as baseline)
pub fn relative_cost(stats: &VariantStats, baseline: &VariantStats) -> f64 {
    if baseline.avg > 0.0 {
        stats.avg / baseline.avg
    } else {
        0.0
    }
}

/// Print the results table. The first row is the baseline.
pub fn print_results_table(results: &[VariantStats], repetitions: usize) {
    let Some(baseline) = results.first() else {
        return;
    };

    let term_width = get_term_width();
    let fixed_width = 78;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 14 * 3 + 9 + 9 + 16 + 5;

    println!(
        "  {} repetitions per sample, {} samples per variant",
        repetitions, baseline.samples
    );
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>14} {:>14} {:>14} {:>9} {:>9} {:>16}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Relative",
        "CV",
        "Checksum",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let display_name = if result.name.starts_with("c-") {
            match crate::utils::C_COMPILER_NAME {
                Some(c) => format!("{} ({})", result.name, c),
                None => result.name.clone(),
            }
        } else {
            result.name.clone()
        };

        let checksum = result
            .checksum
            .map(|c| format!("{:.6e}", c))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:<v_width$} {:>14} {:>14} {:>14} {:>8.2}x {:>8.2}% {:>16}",
            truncate(&display_name, variant_col_width),
            format_measurement(result.avg),
            format_measurement(result.min as f64),
            format_measurement(result.max as f64),
            relative_cost(result, baseline),
            result.cv() * 100.0,
            checksum,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Dispatch Cost Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: dispatch-bench [OPTIONS] [ALGORITHM]");
    println!();
    println!("Without options, runs the compiled-in benchmark and prints one line per");
    println!("variant: <variant>: <checksum>: <elapsed-ms>");
    println!();
    println!("Options:");
    println!("  --list, -l      List all available algorithms");
    println!("  --help, -h      Show this help message");
    println!("  --iter N        Repetitions per measurement (default: 1000000 for i64, 100000 for f32)");
    println!("  --report, -r    Sample every variant and print a statistics table");
    println!("  --samples N     Samples per variant in report mode (default: 30)");
    println!("  --seed N        Seed for the report-mode sample order (default: time-based)");
    println!("  --csv PATH      Export report-mode statistics to CSV");
    println!("  --pin-per-sample");
    println!("                  Re-pin the thread around every report-mode sample");
    println!();
    println!("Arguments:");
    println!("  ALGORITHM       callback_sum_i64 or callback_sum_f32 (default: compiled-in mode)");
    println!();
    println!("Examples:");
    println!("  dispatch-bench                          # Compiled-in mode, plain output");
    println!("  dispatch-bench callback_sum_f32         # Float benchmark");
    println!("  dispatch-bench --report --iter 100      # Statistics table");
    println!("  dispatch-bench --report --csv data.csv  # Export statistics to CSV");
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<20} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
    }
}
