/// Skips redraws of frames that would look the same as the last one.
///
/// A frame is drawn when the snapshot fingerprint changes, after
/// [`RenderThrottle::invalidate`], or at least once per `idle_refresh_ms`
/// so a garbled terminal heals on its own.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    idle_refresh_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(idle_refresh_ms: u64) -> Self {
        Self {
            idle_refresh_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.idle_refresh_ms;
        if changed || stale {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
            return true;
        }
        false
    }

    /// Make the next call render regardless of fingerprint (e.g. on resize).
    pub fn invalidate(&mut self) {
        self.last_fingerprint = None;
    }
}
