//! Watch mode for automatic rebuilds on file changes.
//!
//! Two independent watchers drive the two artifact pipelines: a style watcher
//! on the project root and a script watcher on the source root. Each owns a
//! small two-state debounce machine; events are filtered purely by filename
//! extension. Style changes never trigger script cleanup — the pipelines are
//! deliberately independent.

use std::path::Path;
use std::sync::mpsc::{channel, Sender};
use std::time::{Duration, Instant};

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use thiserror::Error;

use crate::paths;
use crate::pipeline::{Pipeline, PipelineError};

/// Error during watch mode
#[derive(Debug, Error)]
pub enum WatchError {
    /// Failed to initialize file watcher
    #[error("Failed to initialize file watcher: {0}")]
    Init(notify::Error),
    /// Failed to add watch path
    #[error("Failed to watch path: {0}")]
    Path(notify::Error),
    /// Event channel closed
    #[error("Watch channel error: {0}")]
    Channel(String),
    /// Fatal rebuild failure (filesystem-level; compiler problems are logged
    /// and never fatal)
    #[error(transparent)]
    Rebuild(#[from] PipelineError),
}

/// Per-watcher debounce machine with two states.
///
/// Idle: the next matching event fires a rebuild and arms the window.
/// Debouncing: matching events are dropped until the window expires; the
/// first event wins, the rest are neither queued nor coalesced. Expiry of
/// the window is the only transition back to idle, and is unconditional.
#[derive(Debug)]
pub struct Debounce {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    /// Create a debounce machine with the given window.
    pub fn new(window: Duration) -> Self {
        Self { window, deadline: None }
    }

    /// Whether the machine is idle at `now`.
    pub fn is_idle(&self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) => now >= deadline,
            None => true,
        }
    }

    /// Admit or drop an event arriving at `now`. Admitting arms the window.
    pub fn admit(&mut self, now: Instant) -> bool {
        if self.is_idle(now) {
            self.deadline = Some(now + self.window);
            true
        } else {
            false
        }
    }
}

/// Which watcher an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WatchKind {
    Style,
    Script,
}

/// Extension filter for one watcher. Matches on the filename extension only;
/// file content is never inspected.
fn matches_filter(path: &Path, exts: &[String]) -> bool {
    exts.iter().any(|ext| paths::has_extension(path, ext))
}

/// Watch for file changes and rebuild automatically.
///
/// Runs the event loop on the calling thread and blocks until interrupted
/// or a fatal rebuild error occurs. Callbacks are serialized: at most one
/// rebuild runs at a time, and a rebuild always runs to completion.
pub fn watch_and_rebuild(pipeline: &Pipeline) -> Result<(), WatchError> {
    let ctx = pipeline.context();

    let (tx, rx) = channel::<(WatchKind, notify::Result<Event>)>();

    let mut style_watcher = tagged_watcher(tx.clone(), WatchKind::Style)?;
    style_watcher
        .watch(ctx.project_root(), RecursiveMode::Recursive)
        .map_err(WatchError::Path)?;

    let mut script_watcher = tagged_watcher(tx, WatchKind::Script)?;
    script_watcher
        .watch(&ctx.src_dir(), RecursiveMode::Recursive)
        .map_err(WatchError::Path)?;

    let style_exts: Vec<String> = ctx.style_exts().to_vec();
    let script_exts = vec![ctx.source_ext().to_string()];

    let mut style_debounce = Debounce::new(ctx.debounce());
    let mut script_debounce = Debounce::new(ctx.debounce());

    pipeline.report().watching("start watching: css, js");

    loop {
        match rx.recv() {
            Ok((kind, Ok(event))) => {
                let (exts, debounce) = match kind {
                    WatchKind::Style => (&style_exts, &mut style_debounce),
                    WatchKind::Script => (&script_exts, &mut script_debounce),
                };

                if !event.paths.iter().any(|p| matches_filter(p, exts)) {
                    continue;
                }
                if !debounce.admit(Instant::now()) {
                    continue;
                }

                match kind {
                    WatchKind::Style => pipeline.style_rebuild()?,
                    WatchKind::Script => pipeline.script_rebuild()?,
                }
            }
            Ok((_, Err(error))) => {
                // Watcher backend error: log and keep watching
                pipeline.report().watching(&format!("watch error: {}", error));
            }
            Err(e) => return Err(WatchError::Channel(e.to_string())),
        }
    }
}

fn tagged_watcher(
    tx: Sender<(WatchKind, notify::Result<Event>)>,
    kind: WatchKind,
) -> Result<RecommendedWatcher, WatchError> {
    notify::recommended_watcher(move |res| {
        let _ = tx.send((kind, res));
    })
    .map_err(WatchError::Init)
}
