//! CSV export of sampled results.

use std::io::Write;

use super::timer::VariantStats;
use crate::error::{BenchError, Result};

/// One exported row: a variant of one algorithm at one repetition count
pub struct CsvRow<'a> {
    pub algo_name: &'a str,
    pub repetitions: usize,
    pub stats: &'a VariantStats,
}

/// Write rows as CSV to any writer
pub fn write_csv<W: Write>(mut out: W, rows: &[CsvRow<'_>]) -> std::io::Result<()> {
    writeln!(
        out,
        "algorithm,variant,compiler,repetitions,samples,avg_{unit},median_{unit},min_{unit},max_{unit},checksum",
        unit = super::bench::unit_name()
    )?;

    for row in rows {
        let compiler = if row.stats.name.starts_with("c-") {
            super::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };

        writeln!(
            out,
            "{},{},{},{},{},{:.1},{},{},{},{}",
            row.algo_name,
            row.stats.name,
            compiler,
            row.repetitions,
            row.stats.samples,
            row.stats.avg,
            row.stats.median,
            row.stats.min,
            row.stats.max,
            row.stats.checksum.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    out.flush()
}

/// Export rows to a CSV file
pub fn export_csv(path: &str, rows: &[CsvRow<'_>]) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|source| BenchError::Csv {
        path: path.to_string(),
        source,
    })?;
    write_csv(std::io::BufWriter::new(file), rows).map_err(|source| BenchError::Csv {
        path: path.to_string(),
        source,
    })?;
    tracing::info!(path, rows = rows.len(), "exported csv");
    Ok(())
}
