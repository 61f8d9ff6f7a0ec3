//! Status surface seam.

/// Receiver for user-visible status lines.
///
/// Both the once-per-second elapsed ticks and the terminal outcome message go
/// through this single surface.
pub trait StatusSink: Send + Sync {
    fn publish(&self, status: &str);
}
