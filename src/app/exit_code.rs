//! Exit code policy (`--fail-on`).

use crate::config::FailOn;
use crate::error_handling::ExportError;
use crate::ExportReport;

/// Run finished (or the policy ignores what went wrong)
pub const EXIT_SUCCESS: i32 = 0;
/// Missing configuration, or an error that ended the run
pub const EXIT_FAILURE: i32 = 1;
/// Pagination stopped on a failed page; the CSV holds partial data
pub const EXIT_PARTIAL: i32 = 2;
/// The catalog came back empty; no CSV was written
pub const EXIT_EMPTY_CATALOG: i32 = 3;

/// Maps a run result to a process exit code under `fail_on`.
///
/// Errors other than missing/invalid configuration (client setup, writing
/// the CSV) always exit [`EXIT_FAILURE`]. Configuration errors only do so
/// under [`FailOn::AnyFailure`]. A partial fetch takes precedence over an
/// empty catalog, since an empty partial fetch means the first page failed.
pub fn evaluate_exit_code(fail_on: FailOn, result: &Result<ExportReport, ExportError>) -> i32 {
    let report = match result {
        Ok(report) => report,
        Err(ExportError::Config(_)) => {
            return match fail_on {
                FailOn::AnyFailure => EXIT_FAILURE,
                FailOn::Never | FailOn::Partial => EXIT_SUCCESS,
            };
        }
        Err(_) => return EXIT_FAILURE,
    };

    match fail_on {
        FailOn::Never => EXIT_SUCCESS,
        FailOn::Partial => {
            if report.fetch.is_partial() {
                EXIT_PARTIAL
            } else {
                EXIT_SUCCESS
            }
        }
        FailOn::AnyFailure => {
            if report.fetch.is_partial() {
                EXIT_PARTIAL
            } else if report.output_path.is_none() {
                EXIT_EMPTY_CATALOG
            } else {
                EXIT_SUCCESS
            }
        }
    }
}
