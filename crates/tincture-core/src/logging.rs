//! Logging facilities for Tincture.
//!
//! Tincture uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     let scheme = tincture::generate_triadic(200.0, &mut tincture::ThreadRandom);
//! }
//! ```

/// Span names used throughout Tincture for tracing.
pub mod span_names {
    /// Scheme generation span.
    pub const SCHEME: &str = "tincture::scheme";
    /// Tonal ramp generation span.
    pub const TONER: &str = "tincture::toner";
    /// Cluster synthesis span.
    pub const MIXER: &str = "tincture::mixer";
    /// Seed palette expansion span.
    pub const EXPAND: &str = "tincture::expand";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core color type target.
    pub const CORE: &str = "tincture_core";
    /// String and object parsing target.
    pub const PARSE: &str = "tincture_core::parse";
    /// Scheme generators target.
    pub const SCHEME: &str = "tincture_harmony::scheme";
    /// Toner target.
    pub const TONER: &str = "tincture_harmony::toner";
    /// Mixer target.
    pub const MIXER: &str = "tincture_harmony::mixer";
    /// Seed palette expansion target.
    pub const EXPAND: &str = "tincture_harmony::expand";
    /// Name lookup target.
    pub const LOOKUP: &str = "tincture_harmony::lookup";
    /// Configuration loading target.
    pub const CONFIG: &str = "tincture_harmony::config";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to time a whole generation call.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "tincture::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[macro_export]
macro_rules! tincture_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "tincture_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! tincture_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "tincture_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! tincture_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "tincture_core", $($arg)*)
    };
}
