//! Output sink for rendered documents.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use camino::Utf8Path;
use issue2md::ConvertError;

/// Writes `document` verbatim to `output`, or to stdout when `None`.
///
/// An existing file is truncated.
///
/// # Errors
///
/// Returns [`ConvertError::Io`] when the file cannot be created or written.
pub fn write_document(output: Option<&Utf8Path>, document: &str) -> Result<(), ConvertError> {
    if let Some(path) = output {
        let file = File::create(path).map_err(|e| ConvertError::Io {
            message: format!("failed to create output file '{path}': {e}"),
        })?;
        let mut writer = BufWriter::new(file);
        write_document_to(&mut writer, document)?;
        writer.flush().map_err(|e| ConvertError::Io {
            message: format!("failed to flush output file: {e}"),
        })
    } else {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        write_document_to(&mut writer, document)?;
        writer.flush().map_err(|e| io_error(&e))
    }
}

/// Writes `document` to the given writer without adding a newline.
///
/// # Errors
///
/// Returns [`ConvertError::Io`] when the writer fails.
pub fn write_document_to<W: Write>(writer: &mut W, document: &str) -> Result<(), ConvertError> {
    writer
        .write_all(document.as_bytes())
        .map_err(|e| io_error(&e))
}

fn io_error(error: &io::Error) -> ConvertError {
    ConvertError::Io {
        message: error.to_string(),
    }
}
