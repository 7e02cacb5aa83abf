#![forbid(unsafe_code)]
//! Decoder for captured client-session HTML logs.
//!
//! A session document embeds two JSON regions: a string dictionary and an
//! index-compressed event table. This crate provides:
//! - Region extraction and parsing ([`extract_session`]).
//! - Per-event resolution into call-expression lines ([`Resolver`]).
//! - First-seen-order deduplication ([`OrderedLineSet`]).
//!
//! [`decode_session`] chains the three. Everything is pure and synchronous;
//! independent documents can be decoded concurrently without coordination.

mod config;
mod dedup;
mod error;
mod event;
mod extract;
mod resolve;
mod script;

pub use config::{
    DocumentLimits, ReplayConfig, ResolverConfig, DEFAULT_ARGS, DEFAULT_EVENT_TYPE,
    DEFAULT_METHOD, DEFAULT_PATH,
};
pub use dedup::{dedup_lines, OrderedLineSet};
pub use error::{ExtractionError, ExtractionErrorCode, Region};
pub use event::{Dictionary, EventIndex, RecordedEvent};
pub use extract::{extract_session, find_region, ExtractedSession};
pub use resolve::{normalize_args, LineForm, ResolvedLine, Resolver};
pub use script::{decode_session, ReplayScript, DEFAULT_HEADER};
