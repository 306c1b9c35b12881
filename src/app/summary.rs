//! End-of-run summary line.

use crate::ExportReport;

/// Formats the one-line summary the binary prints after a run.
pub fn format_summary(report: &ExportReport) -> String {
    let pages = if report.pages_fetched == 1 { "" } else { "s" };
    match &report.output_path {
        Some(path) => {
            let partial = if report.fetch.is_partial() {
                " (partial: pagination stopped on an error)"
            } else {
                ""
            };
            format!(
                "✅ Exported {} row{} from {} product{} ({} page{}) in {:.1}s to {}{}",
                report.rows_written,
                if report.rows_written == 1 { "" } else { "s" },
                report.products_fetched,
                if report.products_fetched == 1 { "" } else { "s" },
                report.pages_fetched,
                pages,
                report.elapsed_seconds,
                path.display(),
                partial
            )
        }
        None => format!(
            "No product found or error occurred ({} page{} fetched); nothing written",
            report.pages_fetched, pages
        ),
    }
}
