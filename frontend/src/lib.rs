pub mod app;
pub mod components;
pub mod config;
pub mod errors;
pub mod models;
pub mod pages;
pub mod router;
pub mod utils;

use cfg_if::cfg_if;

cfg_if! {
if #[cfg(target_arch = "wasm32")] {
    use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

    #[global_allocator]
    /// SAFETY: leptos use single threaded
    /// Change to lock allocator when we have multithread in web
    static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
        unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };
}
}

/// Send `tracing` events to the browser console and the performance
/// timeline.
pub fn init_tracing() {
    use tracing_subscriber::{fmt::format::Pretty, prelude::*};
    use tracing_web::{performance_layer, MakeWebConsoleWriter};

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer =
        performance_layer().with_details_from_fields(Pretty::default());
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .init();
}
