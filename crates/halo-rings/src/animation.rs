use std::time::{Duration, Instant};

use halo_engine::paint::blend;

/// Easing curve applied to a timeline's linear progress.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Sine-based ease: slow in, slow out.
    EaseInOut,
}

impl Easing {
    /// Maps linear progress in [0, 1] to eased progress in [0, 1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => 0.5 - 0.5 * (std::f32::consts::PI * t).cos(),
        }
    }
}

/// Repeat behavior once a timeline's duration elapses.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Repeat {
    /// Run once and hold the target value.
    #[default]
    None,
    /// Loop forever; with `autoreverse` the value swings back and forth
    /// instead of jumping to the start each cycle.
    Forever { autoreverse: bool },
}

/// Supplies the driving completion scalar, one sample per frame.
///
/// The timeline owns the easing. The renderer re-derives every visual
/// quantity from the sampled scalar, so nothing downstream ever interpolates
/// on a second timing curve — the discrete gradient snap and the conditional
/// overflow arc stay discrete mid-animation.
///
/// # Example
/// ```rust,ignore
/// let mut timeline = CompletionTimeline::new(0.0, 2.5, 3.0)
///     .easing(Easing::EaseInOut)
///     .repeat(Repeat::Forever { autoreverse: true });
/// // Each frame:
/// ring.completion = timeline.advance(clock.tick());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionTimeline {
    from: f32,
    to: f32,
    duration: f32,
    easing: Easing,
    repeat: Repeat,
    elapsed: f32,
}

impl CompletionTimeline {
    /// Animation from `from` to `to` over `duration` seconds.
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            easing: Easing::default(),
            repeat: Repeat::None,
            elapsed: 0.0,
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Completion at `elapsed` seconds — a pure function of the timeline
    /// configuration, so re-sampling the same instant always agrees.
    pub fn sample(&self, elapsed: f32) -> f32 {
        let eased = self.easing.apply(self.progress(elapsed));
        // Workspace lerp convention: value toward `from`.
        blend::lerp(self.to, self.from, eased)
    }

    /// Advances internal time by `dt` seconds and samples.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed += dt.max(0.0);
        self.sample(self.elapsed)
    }

    /// Redirects the animation toward `to`, starting from the currently
    /// sampled value. Nothing needs unwinding: the next sample simply eases
    /// out of wherever the old animation was.
    pub fn retarget(&mut self, to: f32) {
        self.from = self.sample(self.elapsed);
        self.to = to;
        self.elapsed = 0.0;
    }

    /// Linear position in [0, 1], with repeat folding applied.
    fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let cycles = (elapsed / self.duration).max(0.0);

        match self.repeat {
            Repeat::None => blend::clamp01(cycles),
            Repeat::Forever { autoreverse: true } => {
                // Triangle fold: 0 → 1 → 0 over two durations.
                let phase = cycles.rem_euclid(2.0);
                if phase <= 1.0 { phase } else { 2.0 - phase }
            }
            Repeat::Forever { autoreverse: false } => cycles.fract(),
        }
    }
}

/// Monotonic frame-delta source for driving timelines.
///
/// The step is clamped to `max_step`, so a stalled scheduler makes the
/// animation stutter at the clamped rate instead of leaping ahead — the
/// sampled scalar, not wall time, is the single source of truth, and a
/// stutter can never desync derived state.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    max_step: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_step(Duration::from_millis(250))
    }

    pub fn with_max_step(max_step: Duration) -> Self {
        Self { last: Instant::now(), max_step }
    }

    /// Seconds since the previous tick, clamped to the maximum step.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).min(self.max_step);
        self.last = now;
        dt.as_secs_f32()
    }

    /// Resets the baseline, e.g. after resuming from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
