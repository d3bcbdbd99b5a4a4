/// Duration of one frame at 60fps, in milliseconds.
pub const NOMINAL_FRAME_MS: f64 = 1000.0 / 60.0;

/// Longest frame gap the clock will report, in milliseconds.
pub const DEFAULT_MAX_FRAME_MS: f64 = 50.0;

/// Turns host frame timestamps into the `ease_multiplier` expected by
/// `StepProgressController::tick`.
///
/// The multiplier is `elapsed / nominal_frame_ms`, so a 60fps host gets `1.0` per frame and a
/// 120fps host gets `0.5`. Long gaps (tab switches, debugger pauses) are capped at
/// `max_frame_ms` so the easing never jumps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    nominal_frame_ms: f64,
    max_frame_ms: f64,
    last_ms: Option<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            nominal_frame_ms: NOMINAL_FRAME_MS,
            max_frame_ms: DEFAULT_MAX_FRAME_MS,
            last_ms: None,
        }
    }

    pub fn with_nominal_frame_ms(mut self, nominal_frame_ms: f64) -> Self {
        self.nominal_frame_ms = nominal_frame_ms.max(f64::MIN_POSITIVE);
        self
    }

    pub fn with_max_frame_ms(mut self, max_frame_ms: f64) -> Self {
        self.max_frame_ms = max_frame_ms.max(0.0);
        self
    }

    pub fn is_started(&self) -> bool {
        self.last_ms.is_some()
    }

    /// Forgets the previous frame. The next `sample` returns `1.0`.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    pub fn sample(&mut self, now_ms: u64) -> f64 {
        let Some(last) = self.last_ms.replace(now_ms) else {
            return 1.0;
        };
        let elapsed = (now_ms.saturating_sub(last) as f64).min(self.max_frame_ms);
        elapsed / self.nominal_frame_ms
    }

    /// Like `sample`, capped so that `ease * multiplier` never exceeds `1.0`.
    pub fn sample_for(&mut self, now_ms: u64, ease: f64) -> f64 {
        let multiplier = self.sample(now_ms);
        if ease > 0.0 {
            multiplier.min(1.0 / ease)
        } else {
            multiplier
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
