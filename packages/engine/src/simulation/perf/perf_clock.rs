//! Millisecond clock for step timing: `Date.now()` in the browser,
//! `Instant` everywhere else.

#[derive(Clone, Copy)]
pub(crate) struct PerfClock {
    #[cfg(target_arch = "wasm32")]
    origin_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    origin: std::time::Instant,
}

impl PerfClock {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfClock { origin_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfClock { origin: std::time::Instant::now() }
        }
    }

    /// Milliseconds since `start`. Also serves as the per-pass clock.
    pub(crate) fn now_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.origin_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.origin.elapsed().as_secs_f64() * 1000.0
        }
    }
}
