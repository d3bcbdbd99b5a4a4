use core::fmt;

use crate::input::{DragMove, WheelEvent, normalize_wheel};
use crate::listener::Listener;
use crate::options::TuningKey;
use crate::state::{LoopState, ProgressState, SteppedProgress};
use crate::step::{approx_eq, attractor_point, clamp, lerp};
use crate::{ConfigError, ProgressOptions, Tuning};

/// Identifies a handler registered with [`StepProgressController::on_render`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderSubscription(u64);

type RenderHandler = Box<dyn Fn(&StepProgressController)>;

/// Converts unbounded wheel/drag deltas into an eased, clamped, step-quantized progress value.
///
/// The controller is headless and single-threaded:
/// - Input adapters (`apply_wheel`, `apply_drag`, `apply_delta`) move `target` and wake the loop.
/// - Your host calls `tick(ease_multiplier)` once per display frame while `is_running()`.
/// - Each tick pulls `target` toward the nearest step, eases `current` toward `target`, and
///   notifies render handlers. The loop goes idle once everything has settled on a step.
pub struct StepProgressController {
    options: ProgressOptions,
    state: ProgressState,
    loop_state: LoopState,
    disposed: bool,

    render_handlers: Vec<(RenderSubscription, RenderHandler)>,
    next_subscription: u64,
    listeners: Vec<Listener>,
}

impl StepProgressController {
    /// Validates `options` and creates an idle controller at `options.initial`.
    pub fn new(options: ProgressOptions) -> Result<Self, ConfigError> {
        if let Err(err) = options.validate() {
            pwarn!(error = %err, "StepProgressController::new: invalid options");
            return Err(err);
        }
        let initial = clamp(options.initial, options.min, options.max);
        pdebug!(
            name = ?options.name,
            min = options.min,
            max = options.max,
            step = options.step,
            initial,
            "StepProgressController::new"
        );
        Ok(Self {
            options,
            state: ProgressState {
                current: initial,
                target: initial,
            },
            loop_state: LoopState::Idle,
            disposed: false,
            render_handlers: Vec::new(),
            next_subscription: 0,
            listeners: Vec::new(),
        })
    }

    pub fn options(&self) -> &ProgressOptions {
        &self.options
    }

    pub fn name(&self) -> Option<&str> {
        self.options.name.as_deref()
    }

    pub fn min(&self) -> f64 {
        self.options.min
    }

    pub fn max(&self) -> f64 {
        self.options.max
    }

    pub fn step(&self) -> f64 {
        self.options.step
    }

    /// The smoothed progress value.
    pub fn progress(&self) -> f64 {
        self.state.current
    }

    pub fn target(&self) -> f64 {
        self.state.target
    }

    pub fn state(&self) -> ProgressState {
        self.state
    }

    pub fn min_stepped_value(&self) -> f64 {
        self.stepped().min_stepped_value
    }

    pub fn max_stepped_value(&self) -> f64 {
        self.stepped().max_stepped_value
    }

    pub fn relative_stepped_progress(&self) -> f64 {
        self.stepped().relative_stepped_progress
    }

    /// All derived values for the current progress in one snapshot.
    pub fn stepped(&self) -> SteppedProgress {
        SteppedProgress::from_progress(self.state.current, self.options.step)
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    pub fn is_running(&self) -> bool {
        self.loop_state == LoopState::Running
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Whether `current` equals `target` and `target` rests on its step.
    pub fn is_settled(&self) -> bool {
        let ProgressState { current, target } = self.state;
        current == target && approx_eq(target, self.anchor(target), self.options.settle_epsilon)
    }

    pub fn tuning(&self) -> Tuning {
        self.options.tuning
    }

    /// Replaces `ease` and `friction`. The next tick uses the new values.
    pub fn set_tuning(&mut self, tuning: Tuning) -> Result<(), ConfigError> {
        if let Err(err) = tuning.validate() {
            pwarn!(error = %err, "set_tuning: rejected");
            return Err(err);
        }
        self.options.tuning = tuning;
        Ok(())
    }

    pub fn set_ease(&mut self, ease: f64) -> Result<(), ConfigError> {
        self.set_tuning(Tuning {
            ease,
            ..self.options.tuning
        })
    }

    pub fn set_friction(&mut self, friction: f64) -> Result<(), ConfigError> {
        self.set_tuning(Tuning {
            friction,
            ..self.options.tuning
        })
    }

    /// Patches a tunable option by name (`"ease"` or `"friction"`).
    pub fn set_option(&mut self, name: &str, value: f64) -> Result<(), ConfigError> {
        let key: TuningKey = name.parse()?;
        ptrace!(option = key.as_str(), value, "set_option");
        match key {
            TuningKey::Ease => self.set_ease(value),
            TuningKey::Friction => self.set_friction(value),
        }
    }

    /// Starts the loop. Does nothing while running or after `dispose`.
    pub fn resume(&mut self) {
        if self.disposed || self.loop_state == LoopState::Running {
            return;
        }
        pdebug!(name = ?self.options.name, "loop: Idle -> Running");
        self.loop_state = LoopState::Running;
    }

    /// Stops scheduling ticks without touching the state. Input will resume the loop.
    ///
    /// This is the only way to reach `Idle` outside of a settling tick.
    pub fn pause(&mut self) {
        if self.loop_state == LoopState::Idle {
            return;
        }
        pdebug!(name = ?self.options.name, "loop: Running -> Idle (paused)");
        self.loop_state = LoopState::Idle;
    }

    /// Adds a normalized delta to `target`, saturating at the bounds, and wakes the loop.
    ///
    /// Returns `false` when the delta was dropped: zero, non-finite, or after `dispose`.
    pub fn apply_delta(&mut self, delta: f64) -> bool {
        if self.disposed {
            return false;
        }
        if !delta.is_finite() {
            pwarn!(delta, "apply_delta: discarding non-finite delta");
            return false;
        }
        if delta == 0.0 {
            return false;
        }
        let target = clamp(
            self.state.target + delta,
            self.options.min,
            self.options.max,
        );
        ptrace!(delta, target, "apply_delta");
        self.state.target = target;
        self.resume();
        true
    }

    /// Feeds a wheel event. Forward scrolling increases progress.
    pub fn apply_wheel(&mut self, event: &WheelEvent) -> bool {
        let (x, y) = normalize_wheel(event, self.options.line_height, self.options.page_height);
        let pixels = self.options.axis.pick(x, y);
        self.apply_pixels(pixels)
    }

    /// Feeds an incremental drag step. Dragging content forward moves progress backward.
    pub fn apply_drag(&mut self, drag: &DragMove) -> bool {
        let pixels = self.options.axis.pick(drag.step_x, drag.step_y);
        self.apply_drag_delta(pixels)
    }

    /// Same as `apply_drag`, with the step already projected onto the axis.
    pub fn apply_drag_delta(&mut self, pixels: f64) -> bool {
        self.apply_pixels(-pixels)
    }

    fn apply_pixels(&mut self, pixels: f64) -> bool {
        if self.disposed {
            return false;
        }
        let extent = self.options.extent.resolve();
        self.apply_delta(pixels / extent)
    }

    /// Runs one animation frame.
    ///
    /// `ease_multiplier` scales `ease` for the frame's duration (`1.0` at the nominal frame
    /// interval). The scaled ease is capped at `1.0`, so long frames land on the target instead of
    /// overshooting it. Returns `None` without doing any work when the loop is idle.
    pub fn tick(&mut self, ease_multiplier: f64) -> Option<SteppedProgress> {
        if self.disposed || self.loop_state == LoopState::Idle {
            return None;
        }
        let multiplier = if ease_multiplier.is_finite() && ease_multiplier >= 0.0 {
            ease_multiplier
        } else {
            pwarn!(ease_multiplier, "tick: invalid ease multiplier, using 1.0");
            1.0
        };

        let Tuning { ease, friction } = self.options.tuning;
        let eps = self.options.settle_epsilon;
        let mut ease = ease * multiplier;
        if ease > 1.0 {
            pwarn!(ease, "tick: ease * ease_multiplier exceeds 1, clamping");
            ease = 1.0;
        }

        let ProgressState { current, target } = self.state;

        let anchor = self.anchor(target);
        let mut target = lerp(target, anchor, friction * ease);
        if friction > 0.0 && approx_eq(target, anchor, eps) {
            target = anchor;
        }

        let mut current = lerp(current, target, ease);
        if approx_eq(current, target, eps) {
            current = target;
        }

        self.state = ProgressState { current, target };
        ptrace!(current, target, multiplier, "tick");

        if self.is_settled() {
            pdebug!(
                name = ?self.options.name,
                progress = current,
                "loop: Running -> Idle (settled)"
            );
            self.loop_state = LoopState::Idle;
        }

        self.notify_render();
        Some(self.stepped())
    }

    fn anchor(&self, value: f64) -> f64 {
        attractor_point(value, self.options.step, self.options.min, self.options.max)
    }

    /// Registers a handler fired once per completed tick.
    pub fn on_render(
        &mut self,
        handler: impl Fn(&StepProgressController) + 'static,
    ) -> RenderSubscription {
        let id = RenderSubscription(self.next_subscription);
        self.next_subscription = self.next_subscription.wrapping_add(1);
        if !self.disposed {
            self.render_handlers.push((id, Box::new(handler)));
        }
        id
    }

    /// Removes a render handler. Returns `false` if it was not registered.
    pub fn off_render(&mut self, subscription: RenderSubscription) -> bool {
        let before = self.render_handlers.len();
        self.render_handlers.retain(|(id, _)| *id != subscription);
        self.render_handlers.len() != before
    }

    fn notify_render(&self) {
        for (_, handler) in &self.render_handlers {
            handler(self);
        }
    }

    /// Hands an attached input listener to the controller, which releases it on `dispose`.
    ///
    /// After `dispose` the listener is released immediately.
    pub fn hold_listener(&mut self, mut listener: Listener) {
        if self.disposed {
            listener.remove();
            return;
        }
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Stops the loop, releases every held listener and drops all render handlers.
    ///
    /// Safe to call more than once; input and ticks become no-ops afterwards.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        pdebug!(
            name = ?self.options.name,
            listeners = self.listeners.len(),
            handlers = self.render_handlers.len(),
            "StepProgressController::dispose"
        );
        self.disposed = true;
        self.loop_state = LoopState::Idle;
        self.render_handlers.clear();
        for mut listener in self.listeners.drain(..) {
            listener.remove();
        }
    }
}

impl Drop for StepProgressController {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for StepProgressController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepProgressController")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("loop_state", &self.loop_state)
            .field("disposed", &self.disposed)
            .field("render_handlers", &self.render_handlers.len())
            .field("listeners", &self.listeners)
            .finish()
    }
}
