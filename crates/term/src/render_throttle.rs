//! Frame pacing for the interactive loop.

/// Redraw cadence for a screen that is not changing.
pub const STATIC_RENDER_INTERVAL_MS: u64 = 250;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: Option<u64>,
    last_fingerprint: u64,
}

impl Default for RenderThrottle {
    fn default() -> Self {
        Self::new(STATIC_RENDER_INTERVAL_MS)
    }
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: None,
            last_fingerprint: 0,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// - While `animating` (a roll is in progress): always render.
    /// - Otherwise render immediately when the view fingerprint changes, and
    ///   at most once per `min_static_interval_ms` when it does not.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, animating: bool) -> bool {
        let due = match self.last_render_ms {
            None => true,
            Some(_) if animating => true,
            Some(_) if fingerprint != self.last_fingerprint => true,
            Some(last) => now_ms.saturating_sub(last) >= self.min_static_interval_ms,
        };
        if due {
            self.last_render_ms = Some(now_ms);
            self.last_fingerprint = fingerprint;
        }
        due
    }

    /// Force the next call to render.
    pub fn reset(&mut self) {
        self.last_render_ms = None;
    }
}
