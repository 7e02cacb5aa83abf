use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use crate::error::Error;

const INPUT_EXTENSION: &str = "html";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InputFile {
    pub path: PathBuf,
    pub modified: SystemTime,
}

impl InputFile {
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Lists `*.html` files directly under `dir`, sorted by file name.
pub fn discover_inputs(dir: &Path) -> Result<Vec<InputFile>, Error> {
    if !dir.is_dir() {
        return Err(Error::InputDirMissing(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(Error::io(dir))? {
        let entry = entry.map_err(Error::io(dir))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(INPUT_EXTENSION) {
            continue;
        }
        let metadata = entry.metadata().map_err(Error::io(&path))?;
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        files.push(InputFile { path, modified });
    }

    if files.is_empty() {
        return Err(Error::NoInputFiles(dir.to_path_buf()));
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Newest first; ties keep name order.
pub fn newest_first(mut files: Vec<InputFile>) -> Vec<InputFile> {
    files.sort_by(|a, b| b.modified.cmp(&a.modified));
    files
}

pub fn latest(files: Vec<InputFile>) -> Option<InputFile> {
    newest_first(files).into_iter().next()
}

/// 1-based pick from the newest-first listing.
pub fn select(files: Vec<InputFile>, selected: usize) -> Result<InputFile, Error> {
    let available = files.len();
    if selected == 0 || selected > available {
        return Err(Error::SelectionOutOfRange {
            selected,
            available,
        });
    }
    Ok(newest_first(files).swap_remove(selected - 1))
}
