//! What each thread is working on, for crash reports.
//!
//! Phase and file live in a thread-local slot so every rayon worker reports
//! its own file. Run progress is global.

use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static PROCESSED: AtomicUsize = AtomicUsize::new(0);
static TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CONTEXT: RefCell<RunContext> = const { RefCell::new(RunContext::new()) };
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunContext {
    pub phase: Option<RunPhase>,
    pub current_file: Option<PathBuf>,
}

impl RunContext {
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_file: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    LoadingConfig,
    Discovery,
    Processing,
    Reporting,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RunPhase::LoadingConfig => "loading_config",
            RunPhase::Discovery => "discovery",
            RunPhase::Processing => "processing",
            RunPhase::Reporting => "reporting",
        })
    }
}

/// Files finished so far out of the files in the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
}

/// Puts the thread's previous context back when dropped.
#[must_use = "the context is restored as soon as the guard is dropped"]
pub struct ContextGuard {
    saved: RunContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        let saved = std::mem::take(&mut self.saved);
        CONTEXT.with(|ctx| *ctx.borrow_mut() = saved);
    }
}

fn update(change: impl FnOnce(&mut RunContext)) -> ContextGuard {
    CONTEXT.with(|ctx| {
        let mut ctx = ctx.borrow_mut();
        let saved = ctx.clone();
        change(&mut ctx);
        ContextGuard { saved }
    })
}

pub fn enter_phase(phase: RunPhase) -> ContextGuard {
    update(|ctx| ctx.phase = Some(phase))
}

pub fn enter_file(path: impl Into<PathBuf>) -> ContextGuard {
    let path = path.into();
    update(|ctx| ctx.current_file = Some(path))
}

pub fn current_context() -> RunContext {
    CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Reset the counters for a run over `total` files.
pub fn start_progress(total: usize) {
    PROCESSED.store(0, Ordering::Relaxed);
    TOTAL.store(total, Ordering::Relaxed);
}

pub fn file_done() {
    PROCESSED.fetch_add(1, Ordering::Relaxed);
}

pub fn progress() -> Progress {
    Progress {
        processed: PROCESSED.load(Ordering::Relaxed),
        total: TOTAL.load(Ordering::Relaxed),
    }
}
