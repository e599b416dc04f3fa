//! Timed spans for pipeline stages

use std::time::Instant;
use tracing::{span, Level, Span};

/// Span covering one pipeline stage. Logs its duration when finished.
pub struct StageSpan {
    span: Span,
    start_time: Instant,
    stage: &'static str,
}

impl StageSpan {
    pub fn new(stage: &'static str) -> Self {
        let span = span!(Level::INFO, "render_stage", stage = stage);
        Self {
            span,
            start_time: Instant::now(),
            stage,
        }
    }

    /// Run `f` inside the span.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        self.span.in_scope(f)
    }

    /// Log completion with elapsed time and return it in milliseconds.
    pub fn finish(self) -> f64 {
        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        tracing::debug!(
            parent: &self.span,
            stage = self.stage,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            "Stage completed"
        );
        elapsed_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_span_runs_closure_and_times() {
        let stage = StageSpan::new("load");
        let value = stage.in_scope(|| 21 * 2);
        assert_eq!(value, 42);
        assert!(stage.finish() >= 0.0);
    }
}
