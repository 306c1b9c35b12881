//! CSV export functionality.
//!
//! Writes flattened rows to a CSV file with a fixed header. One row per
//! product variant.

use anyhow::{Context, Result};
use csv::{Terminator, Writer, WriterBuilder};
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::CSV_HEADER;

use super::row::ExportRow;

/// Writes the header and every row to `writer`.
///
/// The header is written even when `rows` is empty.
///
/// # Returns
///
/// The number of data rows written (header excluded).
pub fn write_rows<W: Write>(writer: &mut Writer<W>, rows: &[ExportRow]) -> Result<usize> {
    writer
        .write_record(CSV_HEADER)
        .context("Failed to write CSV header")?;

    for row in rows {
        writer.serialize(row).context("Failed to write CSV row")?;
    }
    writer.flush().context("Failed to flush CSV writer")?;

    Ok(rows.len())
}

/// Exports rows to `output_dir/file_name`.
///
/// Creates `output_dir` (and parents) if it does not exist. An existing file
/// is truncated. Records end in CRLF.
///
/// # Arguments
///
/// * `rows` - Flattened rows, in output order
/// * `output_dir` - Destination directory
/// * `file_name` - CSV file name inside `output_dir`
///
/// # Returns
///
/// The path of the written file, or an error if the directory or file could
/// not be created or written.
pub fn export_csv(rows: &[ExportRow], output_dir: &Path, file_name: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).context(format!(
        "Failed to create output directory: {}",
        output_dir.display()
    ))?;

    let output_path = output_dir.join(file_name);
    info!("Writing CSV to {}", output_path.display());

    let file = std::fs::File::create(&output_path).context(format!(
        "Failed to create output file: {}",
        output_path.display()
    ))?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(file);

    let written = write_rows(&mut writer, rows)?;
    info!(
        "✓ Export complete! {} rows written to {}",
        written,
        output_path.display()
    );

    Ok(output_path)
}
