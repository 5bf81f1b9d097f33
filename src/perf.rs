//! Performance instrumentation utilities
//!
//! Scopes are recorded through the `profiling` crate; enable the
//! `profile-with-puffin` or `profile-with-tracy` feature to collect them.

/// Time a block: records a profiling scope and logs the elapsed time at debug level.
/// Usage: timed!("operation name", { code })
#[macro_export]
macro_rules! timed {
    ($name:expr, $block:expr) => {{
        profiling::scope!($name);
        let _t = std::time::Instant::now();
        let r = $block;
        log::debug!("{}: {:?}", $name, _t.elapsed());
        r
    }};
}

/// Start the puffin HTTP server so `puffin_viewer` can connect.
///
/// The server is kept alive for the lifetime of the process.
#[cfg(feature = "profile-with-puffin")]
pub fn start_profiler() {
    puffin::set_scopes_on(true);
    let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    match puffin_http::Server::new(&addr) {
        Ok(server) => {
            log::info!("puffin server listening on {}", addr);
            std::mem::forget(server);
        }
        Err(e) => log::warn!("failed to start puffin server: {}", e),
    }
}

#[cfg(not(feature = "profile-with-puffin"))]
pub fn start_profiler() {}

/// Mark the end of a UI frame for the active profiler
pub fn finish_frame() {
    profiling::finish_frame!();
}
