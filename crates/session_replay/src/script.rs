use tracing::debug;

use crate::config::ReplayConfig;
use crate::dedup::OrderedLineSet;
use crate::error::ExtractionError;
use crate::extract::extract_session;
use crate::resolve::Resolver;

pub const DEFAULT_HEADER: &str = "--[[
    CONTEXT: ROBLOX AUTOMATION / LOG ANALYSIS
    SOURCE: Extracted from Cobalt Executor Logs (HTML Session)

    SUMMARY:
    This script represents a CLEANED REPLAY of gameplay actions.
    It has been compacted for AI readability (HTML-Only Mode).
]]
";

/// Deduplicated replay lines for one document, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayScript {
    pub lines: Vec<String>,
    pub events_seen: usize,
    pub duplicates_dropped: usize,
}

impl ReplayScript {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Header, a blank line, then one line per record.
    pub fn render(&self, header: &str) -> String {
        let body_len: usize = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut out = String::with_capacity(header.len() + 2 + body_len);
        out.push_str(header);
        if !header.is_empty() && !header.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Extracts, resolves and deduplicates one session document.
pub fn decode_session(text: &str, config: &ReplayConfig) -> Result<ReplayScript, ExtractionError> {
    let session = extract_session(text, &config.limits)?;
    let resolver = Resolver::new(&session.dictionary, &config.fallbacks);

    let mut unique = OrderedLineSet::new();
    for event in &session.events {
        unique.insert(resolver.resolve(event).into_string());
    }

    let script = ReplayScript {
        events_seen: session.events.len(),
        duplicates_dropped: unique.duplicates(),
        lines: unique.into_lines(),
    };
    debug!(
        events = script.events_seen,
        lines = script.lines.len(),
        duplicates = script.duplicates_dropped,
        "decoded session"
    );
    Ok(script)
}
