use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use session_replay::{DocumentLimits, ReplayConfig, ResolverConfig, DEFAULT_HEADER};

use crate::error::Error;

pub const DEFAULT_INPUT_DIR: &str = "input";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_clean.lua";

/// On-disk TOML config. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub output_suffix: Option<String>,
    pub header: Option<String>,
    pub max_document_bytes: Option<usize>,
    pub fallbacks: ResolverConfig,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Effective settings after layering CLI flags over the config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub output_suffix: String,
    pub header: String,
    pub replay: ReplayConfig,
}

impl Settings {
    pub fn resolve(
        file: FileConfig,
        input_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Self {
        let mut limits = DocumentLimits::default();
        if let Some(max) = file.max_document_bytes {
            limits.max_document_bytes = max;
        }
        Self {
            input_dir: input_dir
                .or(file.input_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR)),
            output_dir: output_dir
                .or(file.output_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            output_suffix: file
                .output_suffix
                .unwrap_or_else(|| DEFAULT_OUTPUT_SUFFIX.to_string()),
            header: file.header.unwrap_or_else(|| DEFAULT_HEADER.to_string()),
            replay: ReplayConfig {
                limits,
                fallbacks: file.fallbacks,
            },
        }
    }

    /// `<output_dir>/<input stem><suffix>`
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.output_dir
            .join(format!("{stem}{}", self.output_suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_config_yields_defaults() {
        let settings = Settings::resolve(FileConfig::parse("").unwrap(), None, None);
        assert_eq!(settings.input_dir, PathBuf::from("input"));
        assert_eq!(settings.output_dir, PathBuf::from("output"));
        assert_eq!(settings.header, DEFAULT_HEADER);
        assert_eq!(settings.replay, ReplayConfig::default());
    }

    #[test]
    fn cli_flags_override_file_values() {
        let file = FileConfig::parse(
            r#"
input_dir = "logs"
output_dir = "scripts"
output_suffix = ".replay.lua"
max_document_bytes = 1024

[fallbacks]
path = "workspace.Missing"
"#,
        )
        .unwrap();
        let settings = Settings::resolve(file, Some(PathBuf::from("cli-in")), None);
        assert_eq!(settings.input_dir, PathBuf::from("cli-in"));
        assert_eq!(settings.output_dir, PathBuf::from("scripts"));
        assert_eq!(settings.replay.limits.max_document_bytes, 1024);
        assert_eq!(settings.replay.fallbacks.path, "workspace.Missing");
        assert_eq!(settings.replay.fallbacks.method, "FireServer");
        assert_eq!(
            settings.output_path_for(Path::new("logs/session_01.html")),
            PathBuf::from("scripts/session_01.replay.lua")
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::parse("inputdir = \"x\"").is_err());
        assert!(FileConfig::parse("[fallbacks]\nverb = \"x\"").is_err());
    }
}
