//! Process-wide setup run once before a command.

/// Worker stack size. Deeply nested type declarations recurse in the
/// classifier and the renderer.
const WORKER_STACK_BYTES: usize = 8 * 1024 * 1024;

/// Size the global rayon pool. `jobs == 0` lets rayon use every core.
pub fn configure_thread_pool(jobs: usize) {
    let builder = rayon::ThreadPoolBuilder::new()
        .stack_size(WORKER_STACK_BYTES)
        .num_threads(jobs);
    if let Err(e) = builder.build_global() {
        tracing::debug!("Global thread pool was already initialised: {}", e);
    }
}

/// Number of workers a `--jobs` value resolves to.
pub fn get_worker_count(jobs: usize) -> usize {
    match jobs {
        0 => rayon::current_num_threads(),
        n => n,
    }
}

/// Logging first, so the remaining steps can log.
pub fn initialize(verbosity: u8, jobs: usize) {
    crate::observability::init_tracing(verbosity);
    crate::observability::install_panic_hook();
    configure_thread_pool(jobs);
    tracing::debug!("Using {} worker threads", get_worker_count(jobs));
}
