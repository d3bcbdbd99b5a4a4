use std::cell::{Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

use stepped_progress::{
    ConfigError, DragTracker, ProgressOptions, StepProgressController, SteppedProgress,
};

use crate::{FrameClock, InputSurface, SurfaceEvent};

type EventQueue = Rc<RefCell<Vec<SurfaceEvent>>>;

/// Routes surface events into a controller and keeps drag state between moves.
#[derive(Debug, Default)]
struct InputRouter {
    drag: DragTracker,
}

impl InputRouter {
    fn route(&mut self, c: &mut StepProgressController, event: &SurfaceEvent) {
        match *event {
            SurfaceEvent::Wheel(wheel) => {
                c.apply_wheel(&wheel);
            }
            SurfaceEvent::PointerDown { x, y } => self.drag.start(x, y),
            SurfaceEvent::PointerMove { x, y } => {
                if let Some(step) = self.drag.update(x, y) {
                    c.apply_drag(&step);
                }
            }
            SurfaceEvent::PointerUp => self.drag.end(),
        }
    }

    /// Applies queued events in arrival order.
    fn flush(&mut self, c: &mut StepProgressController, pending: &RefCell<Vec<SurfaceEvent>>) {
        let events = std::mem::take(&mut *pending.borrow_mut());
        for event in &events {
            self.route(c, event);
        }
    }
}

/// A framework-neutral binding between an [`InputSurface`] and a [`StepProgressController`].
///
/// Attaching registers one listener on the surface; the controller owns it and releases it on
/// `dispose` (or when the binding is dropped). Adapters drive it by calling `frame(now_ms)` from
/// their display-refresh callback while `is_running()` is `true`.
///
/// Events that arrive while the controller is borrowed (from inside a render handler, or while
/// the host holds `controller()`) are queued. `is_running()` stays `true` until the queue has been
/// applied by the next `frame`.
#[derive(Debug)]
pub struct Binding {
    controller: Rc<RefCell<StepProgressController>>,
    router: Rc<RefCell<InputRouter>>,
    pending: EventQueue,
    clock: FrameClock,
}

impl Binding {
    pub fn attach<S: InputSurface + ?Sized>(
        surface: &mut S,
        options: ProgressOptions,
    ) -> Result<Self, ConfigError> {
        let controller = Rc::new(RefCell::new(StepProgressController::new(options)?));
        let router = Rc::new(RefCell::new(InputRouter::default()));
        let pending: EventQueue = Rc::default();

        let weak_controller: Weak<RefCell<StepProgressController>> = Rc::downgrade(&controller);
        let weak_router = Rc::downgrade(&router);
        let weak_pending = Rc::downgrade(&pending);
        let listener = surface.listen(Box::new(move |event: &SurfaceEvent| {
            let (Some(controller), Some(router), Some(pending)) = (
                weak_controller.upgrade(),
                weak_router.upgrade(),
                weak_pending.upgrade(),
            ) else {
                return;
            };
            match (controller.try_borrow_mut(), router.try_borrow_mut()) {
                (Ok(mut c), Ok(mut router)) => {
                    router.flush(&mut c, &pending);
                    router.route(&mut c, event);
                }
                _ => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        target: "stepped_progress_adapter",
                        ?event,
                        "controller busy, queueing event"
                    );
                    pending.borrow_mut().push(*event);
                }
            };
        }));
        controller.borrow_mut().hold_listener(listener);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "stepped_progress_adapter",
            name = ?controller.borrow().name(),
            "Binding::attach"
        );

        Ok(Self {
            controller,
            router,
            pending,
            clock: FrameClock::new(),
        })
    }

    pub fn with_clock(mut self, clock: FrameClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn controller(&self) -> Ref<'_, StepProgressController> {
        self.controller.borrow()
    }

    /// Mutable access for tuning patches or render subscriptions.
    pub fn controller_mut(&self) -> RefMut<'_, StepProgressController> {
        self.controller.borrow_mut()
    }

    /// `true` while the controller is animating or queued input is waiting for the next frame.
    pub fn is_running(&self) -> bool {
        self.controller.borrow().is_running() || !self.pending.borrow().is_empty()
    }

    pub fn pending_events(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Runs one display frame.
    ///
    /// Applies queued input, then ticks the controller with the clock's ease multiplier, capped
    /// so the frame cannot overshoot. Returns `None` when the controller is idle or disposed.
    pub fn frame(&mut self, now_ms: u64) -> Option<SteppedProgress> {
        let mut c = self.controller.borrow_mut();
        self.router.borrow_mut().flush(&mut c, &self.pending);

        if !c.is_running() {
            self.clock.reset();
            return None;
        }
        let multiplier = self.clock.sample_for(now_ms, c.tuning().ease);
        let out = c.tick(multiplier);
        if !c.is_running() {
            self.clock.reset();
        }
        out
    }

    /// Disposes the controller: stops the loop, releases the surface listener and drops queued
    /// input.
    ///
    /// Safe to call more than once.
    pub fn dispose(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "stepped_progress_adapter", "Binding::dispose");
        self.controller.borrow_mut().dispose();
        self.pending.borrow_mut().clear();
        self.clock.reset();
    }
}
