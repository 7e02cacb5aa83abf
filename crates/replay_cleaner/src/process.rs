use std::{
    fs,
    path::{Path, PathBuf},
};

use session_replay::decode_session;
use tracing::{info, warn};

use crate::error::Error;
use crate::settings::Settings;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DocumentOutcome {
    Written { output: PathBuf, lines: usize },
    /// The document decoded to nothing or could not be decoded.
    Skipped,
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct BatchSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Decodes one document and writes its replay script.
///
/// Decode failures are logged and reported as [`DocumentOutcome::Skipped`];
/// only filesystem errors are returned.
pub fn process_document(path: &Path, settings: &Settings) -> Result<DocumentOutcome, Error> {
    info!(input = %path.display(), "processing");

    let bytes = fs::read(path).map_err(Error::io(path))?;
    let text = String::from_utf8_lossy(&bytes);

    let script = match decode_session(&text, &settings.replay) {
        Ok(script) => script,
        Err(err) => {
            warn!(
                input = %path.display(),
                code = ?err.code(),
                region = ?err.region(),
                error = %err,
                "could not decode session document"
            );
            return Ok(DocumentOutcome::Skipped);
        }
    };
    if script.is_empty() {
        warn!(input = %path.display(), "no events found");
        return Ok(DocumentOutcome::Skipped);
    }

    fs::create_dir_all(&settings.output_dir).map_err(Error::io(&settings.output_dir))?;
    let output = settings.output_path_for(path);
    fs::write(&output, script.render(&settings.header)).map_err(Error::io(&output))?;

    info!(
        output = %output.display(),
        lines = script.len(),
        duplicates = script.duplicates_dropped,
        "created replay script"
    );
    Ok(DocumentOutcome::Written {
        output,
        lines: script.len(),
    })
}

/// Processes every path; a failing document never stops the batch.
pub fn process_batch<'a, I>(paths: I, settings: &Settings) -> BatchSummary
where
    I: IntoIterator<Item = &'a Path>,
{
    let mut summary = BatchSummary::default();
    for path in paths {
        match process_document(path, settings) {
            Ok(DocumentOutcome::Written { .. }) => summary.written += 1,
            Ok(DocumentOutcome::Skipped) => summary.skipped += 1,
            Err(err) => {
                warn!(input = %path.display(), error = %err, "failed to process document");
                summary.failed += 1;
            }
        }
    }
    info!(
        written = summary.written,
        skipped = summary.skipped,
        failed = summary.failed,
        "batch finished"
    );
    summary
}
