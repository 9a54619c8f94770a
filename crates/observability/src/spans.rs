//! Utility functions for tracing

/// Create a span around a color encode or decode
///
/// # Example
///
/// ```rust
/// use theme_observability::codec_span;
///
/// let span = codec_span!("decode", 128);
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! codec_span {
    ($operation:expr, $bytes:expr) => {
        ::tracing::info_span!(
            "color.codec",
            codec.operation = $operation,
            codec.bytes = $bytes,
            codec.duration_ms = ::tracing::field::Empty,
            error = ::tracing::field::Empty,
            error.message = ::tracing::field::Empty,
        )
    };
}

/// Record an error on the current span
///
/// # Example
///
/// ```rust
/// use theme_observability::record_error;
///
/// let err = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad color");
/// record_error(&err);
/// ```
pub fn record_error<E: std::error::Error>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::error!(error = %error, "Operation failed");
}

/// Record latency/duration on the current span
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
