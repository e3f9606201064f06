//! CSV report writer.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::github::ExportError;

use super::model::{REPORT_HEADER, ReviewCommentRecord};

/// Writes the header line followed by one line per record, each terminated by
/// `\n`.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if writing to the output fails.
pub fn write_report<W: Write>(
    writer: &mut W,
    records: &[ReviewCommentRecord],
) -> Result<(), ExportError> {
    writeln!(writer, "{REPORT_HEADER}").map_err(|e| io_error(&e))?;
    for record in records {
        writeln!(writer, "{}", record.to_csv_line()).map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Renders the complete report in memory, then writes it to `path`,
/// replacing any existing file.
///
/// Nothing touches the filesystem until every line has been rendered.
///
/// # Errors
///
/// Returns [`ExportError::Io`] when the file cannot be written, for example
/// because the directory does not exist or is not writable.
pub fn write_report_file(path: &Path, records: &[ReviewCommentRecord]) -> Result<(), ExportError> {
    let mut buffer = Vec::new();
    write_report(&mut buffer, records)?;
    fs::write(path, buffer).map_err(|e| ExportError::Io {
        message: format!("failed to write output file '{}': {e}", path.display()),
    })
}

/// Converts an I/O error to an [`ExportError::Io`].
fn io_error(error: &io::Error) -> ExportError {
    ExportError::Io {
        message: error.to_string(),
    }
}
