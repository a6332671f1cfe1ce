use serde::{Deserialize, Serialize};

use crate::{
    markup::error::ParseError,
    snapshot::{
        extractor::snapshot,
        identity::{fingerprint, pair_revision},
        snapshot_model::ElementSnapshot,
    },
    trace::{
        logger::TraceLogger,
        trace::{TraceEvent, TraceKind},
    },
    workbench::analysis::{Analysis, AnalysisOptions, analyze},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Favorited / pressed / active
    On,
    Off,
}

/// The current on/off pair. Snapshots are swapped wholesale on every
/// successful paste; a rejected paste leaves the previous snapshot in place.
pub struct Workbench {
    options: AnalysisOptions,
    on: Option<ElementSnapshot>,
    off: Option<ElementSnapshot>,
    tracer: TraceLogger,
}

impl Workbench {
    pub fn new(options: AnalysisOptions) -> Self {
        Self {
            options,
            on: None,
            off: None,
            tracer: TraceLogger::disabled(),
        }
    }

    pub fn with_tracer(mut self, tracer: TraceLogger) -> Self {
        self.tracer = tracer;
        self
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    pub fn snapshot(&self, side: Side) -> Option<&ElementSnapshot> {
        match side {
            Side::On => self.on.as_ref(),
            Side::Off => self.off.as_ref(),
        }
    }

    /// The form is only rendered once both sides have been pasted.
    pub fn is_ready(&self) -> bool {
        self.on.is_some() && self.off.is_some()
    }

    pub fn revision(&self) -> String {
        pair_revision(self.on.as_ref(), self.off.as_ref())
    }

    /// Parse `markup` and make it the snapshot for `side`.
    pub fn apply_markup(&mut self, side: Side, markup: &str) -> Result<(), ParseError> {
        match snapshot(markup, self.options.key_form) {
            Ok(new) => {
                let print = fingerprint(&new);
                match side {
                    Side::On => self.on = Some(new),
                    Side::Off => self.off = Some(new),
                }
                let revision = self.revision();
                tracing::info!(?side, %revision, "snapshot replaced");
                self.tracer.log(
                    &TraceEvent::now(TraceKind::SnapshotReplaced, &revision)
                        .with_side(side)
                        .with_fingerprint(print),
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(?side, error = %e, "markup rejected, keeping previous snapshot");
                self.tracer.log(
                    &TraceEvent::now(TraceKind::MarkupRejected, &self.revision())
                        .with_side(side)
                        .with_error(&e),
                );
                Err(e)
            }
        }
    }

    /// Recomputed from scratch on every call.
    pub fn analysis(&self) -> Analysis {
        let analysis = analyze(self.on.as_ref(), self.off.as_ref(), &self.options);
        self.tracer.log(
            &TraceEvent::now(TraceKind::AnalysisComputed, &analysis.revision)
                .with_trackid(analysis.has_trackid)
                .with_candidates(analysis.selector_options().len()),
        );
        analysis
    }
}
