use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::DocumentLimits;
use crate::error::{ExtractionError, Region};
use crate::event::{Dictionary, RecordedEvent};

const CLOSING_TAG: &str = "</script>";

/// Parsed payloads of one session document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedSession {
    pub dictionary: Dictionary,
    pub events: Vec<RecordedEvent>,
}

fn opening_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<script type="application/json" id="(?P<id>[a-z-]+)">"#)
            .expect("opening tag pattern is valid")
    })
}

/// Returns the trimmed text between a region's opening tag and the first
/// `</script>` after it.
///
/// Payloads that need a literal `</script>` must escape it as `<\/script>`.
pub fn find_region(text: &str, region: Region) -> Option<&str> {
    let open = opening_tag()
        .captures_iter(text)
        .find(|caps| Region::from_tag_id(&caps["id"]) == Some(region))?;
    let start = open.get(0)?.end();
    let len = text[start..].find(CLOSING_TAG)?;
    Some(text[start..start + len].trim())
}

fn parse_region<T: DeserializeOwned>(region: Region, body: &str) -> Result<T, ExtractionError> {
    serde_json::from_str(body).map_err(|source| ExtractionError::MalformedJson { region, source })
}

/// Locates both regions and parses them.
///
/// A missing region is reported before any JSON is parsed, dictionary first.
pub fn extract_session(
    text: &str,
    limits: &DocumentLimits,
) -> Result<ExtractedSession, ExtractionError> {
    if text.len() > limits.max_document_bytes {
        return Err(ExtractionError::DocumentTooLarge {
            observed_bytes: text.len(),
            max_document_bytes: limits.max_document_bytes,
        });
    }

    let dictionary_body = find_region(text, Region::Dictionary).ok_or(
        ExtractionError::MissingRegion {
            region: Region::Dictionary,
        },
    )?;
    let events_body =
        find_region(text, Region::Events).ok_or(ExtractionError::MissingRegion {
            region: Region::Events,
        })?;

    let dictionary: Dictionary = parse_region(Region::Dictionary, dictionary_body)?;
    let events: Vec<RecordedEvent> = parse_region(Region::Events, events_body)?;

    debug!(
        dictionary_entries = dictionary.len(),
        events = events.len(),
        "extracted session regions"
    );
    Ok(ExtractedSession { dictionary, events })
}
