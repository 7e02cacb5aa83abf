use serde::Deserialize;

pub const DEFAULT_PATH: &str = "UnknownPath";
pub const DEFAULT_ARGS: &str = "{}";
pub const DEFAULT_METHOD: &str = "FireServer";
pub const DEFAULT_EVENT_TYPE: &str = "";

/// Values substituted when an event index has no dictionary entry.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    pub path: String,
    pub args: String,
    pub method: String,
    pub event_type: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_PATH.to_string(),
            args: DEFAULT_ARGS.to_string(),
            method: DEFAULT_METHOD.to_string(),
            event_type: DEFAULT_EVENT_TYPE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DocumentLimits {
    pub max_document_bytes: usize,
}

impl Default for DocumentLimits {
    fn default() -> Self {
        Self {
            max_document_bytes: 64 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ReplayConfig {
    pub limits: DocumentLimits,
    pub fallbacks: ResolverConfig,
}
