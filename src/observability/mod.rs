//! Logging setup and crash diagnostics.
//!
//! - **Tracing**: `tracing-subscriber` with an `EnvFilter`, writing to stderr
//! - **Context tracking**: thread-local phase and file for crash reports
//! - **Panic hook**: a structured crash report naming the file being processed

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{
    current_context, enter_file, enter_phase, file_done, progress, start_progress, ContextGuard,
    Progress, RunContext, RunPhase,
};
pub use panic_hook::install_panic_hook;
pub use self::tracing::{default_directive, init_tracing};
