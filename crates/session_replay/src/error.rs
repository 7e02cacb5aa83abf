use std::fmt;

use thiserror::Error;

/// The two JSON-bearing regions embedded in a session document.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Region {
    Dictionary,
    Events,
}

impl Region {
    /// Value of the `id` attribute on the region's `<script>` tag.
    pub fn tag_id(self) -> &'static str {
        match self {
            Region::Dictionary => "dictionary-data",
            Region::Events => "event-data",
        }
    }

    pub(crate) fn from_tag_id(id: &str) -> Option<Self> {
        match id {
            "dictionary-data" => Some(Region::Dictionary),
            "event-data" => Some(Region::Events),
            _ => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_id())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ExtractionErrorCode {
    MissingRegion,
    MalformedJson,
    DocumentTooLarge,
}

/// Reasons a document yields no replay script.
///
/// These are terminal for the document that produced them only; batch callers
/// log them and move on to the next document.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("document has no `{region}` region")]
    MissingRegion { region: Region },
    #[error("`{region}` region is not valid JSON: {source}")]
    MalformedJson {
        region: Region,
        #[source]
        source: serde_json::Error,
    },
    #[error("document too large (observed_bytes={observed_bytes}, max_document_bytes={max_document_bytes})")]
    DocumentTooLarge {
        observed_bytes: usize,
        max_document_bytes: usize,
    },
}

impl ExtractionError {
    pub fn code(&self) -> ExtractionErrorCode {
        match self {
            ExtractionError::MissingRegion { .. } => ExtractionErrorCode::MissingRegion,
            ExtractionError::MalformedJson { .. } => ExtractionErrorCode::MalformedJson,
            ExtractionError::DocumentTooLarge { .. } => ExtractionErrorCode::DocumentTooLarge,
        }
    }

    /// Region the failure is attributed to, when there is one.
    pub fn region(&self) -> Option<Region> {
        match self {
            ExtractionError::MissingRegion { region }
            | ExtractionError::MalformedJson { region, .. } => Some(*region),
            ExtractionError::DocumentTooLarge { .. } => None,
        }
    }
}
