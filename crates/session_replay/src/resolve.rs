use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::ResolverConfig;
use crate::event::{Dictionary, RecordedEvent};

const CLIENT_MARKER: &str = "client";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LineForm {
    /// `firesignal(<path>.OnClientEvent, <args>)`
    ClientEvent,
    /// `<path>:<method>(<args>)`
    ServerMethod,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResolvedLine {
    pub form: LineForm,
    pub text: String,
}

impl ResolvedLine {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for ResolvedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Flattens recorded argument text onto one line.
///
/// One outer `{ ... }` pair is removed so the call shows bare key/value pairs.
pub fn normalize_args(raw: &str) -> String {
    let mut args = raw.trim();
    if args.starts_with('{') && args.ends_with('}') && args.len() >= 2 {
        args = args[1..args.len() - 1].trim();
    }
    whitespace_run().replace_all(args, " ").into_owned()
}

fn has_client_marker(text: &str) -> bool {
    text.to_ascii_lowercase().contains(CLIENT_MARKER)
}

/// Renders events as call expressions against one dictionary.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    dictionary: &'a Dictionary,
    fallbacks: &'a ResolverConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(dictionary: &'a Dictionary, fallbacks: &'a ResolverConfig) -> Self {
        Self {
            dictionary,
            fallbacks,
        }
    }

    /// Every event yields a line; missing entries fall back to the configured defaults.
    ///
    /// A dictionary entry of `{}` renders as `()`, while a missing args entry
    /// renders the fallback verbatim, so `UnknownPath:FireServer({})` marks an
    /// event that resolved nothing.
    pub fn resolve(&self, event: &RecordedEvent) -> ResolvedLine {
        let path = self
            .dictionary
            .resolve(event.path())
            .unwrap_or(self.fallbacks.path.as_str());
        // The args fallback is already in rendered form and skips normalization.
        let args = match self.dictionary.resolve(event.args()) {
            Some(raw) => normalize_args(raw),
            None => self.fallbacks.args.clone(),
        };
        let method = self
            .dictionary
            .resolve(event.method())
            .unwrap_or(self.fallbacks.method.as_str());
        let event_type = self
            .dictionary
            .resolve(event.event_type())
            .unwrap_or(self.fallbacks.event_type.as_str());

        if has_client_marker(method) || has_client_marker(event_type) {
            ResolvedLine {
                form: LineForm::ClientEvent,
                text: format!("firesignal({path}.OnClientEvent, {args})"),
            }
        } else {
            ResolvedLine {
                form: LineForm::ServerMethod,
                text: format!("{path}:{method}({args})"),
            }
        }
    }

    pub fn resolve_all<'e, I>(&self, events: I) -> Vec<ResolvedLine>
    where
        I: IntoIterator<Item = &'e RecordedEvent>,
    {
        events.into_iter().map(|event| self.resolve(event)).collect()
    }
}
