use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::workbench::session::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceKind {
    SnapshotReplaced,
    MarkupRejected,
    AnalysisComputed,
}

#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub kind: TraceKind,

    pub side: Option<Side>,
    pub revision: String,

    pub fingerprint: Option<String>,
    pub error: Option<String>,

    pub has_trackid: Option<bool>,
    pub candidates: Option<usize>,
}

impl TraceEvent {
    pub fn now(kind: TraceKind, revision: &str) -> Self {
        Self {
            // A clock before the epoch only skews the log, never the diff
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            kind,
            side: None,
            revision: revision.to_string(),
            fingerprint: None,
            error: None,
            has_trackid: None,
            candidates: None,
        }
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    pub fn with_fingerprint(mut self, fingerprint: impl ToString) -> Self {
        self.fingerprint = Some(fingerprint.to_string());
        self
    }

    pub fn with_error(mut self, error: impl ToString) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn with_trackid(mut self, has_trackid: bool) -> Self {
        self.has_trackid = Some(has_trackid);
        self
    }

    pub fn with_candidates(mut self, count: usize) -> Self {
        self.candidates = Some(count);
        self
    }
}
