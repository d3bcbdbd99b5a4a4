use std::cell::RefCell;
use std::rc::Rc;

use stepped_progress::{Listener, WheelEvent};

/// An input event delivered by the host's container element.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceEvent {
    Wheel(WheelEvent),
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
}

pub type SurfaceHandler = Box<dyn FnMut(&SurfaceEvent)>;

/// Something input listeners can be attached to (a DOM element, a window, a widget).
///
/// The returned [`Listener`] must detach `handler` when released.
pub trait InputSurface {
    fn listen(&mut self, handler: SurfaceHandler) -> Listener;
}

/// An [`InputSurface`] the host feeds by hand, e.g. from a winit or terminal event loop.
///
/// Handlers must not attach or release listeners on the same surface while being dispatched.
#[derive(Default)]
pub struct ManualSurface {
    handlers: Rc<RefCell<Vec<(u64, SurfaceHandler)>>>,
    next_id: u64,
}

impl ManualSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `event` to every attached listener, in attach order.
    pub fn dispatch(&self, event: SurfaceEvent) {
        let mut handlers = self.handlers.borrow_mut();
        for (_, handler) in handlers.iter_mut() {
            handler(&event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl InputSurface for ManualSurface {
    fn listen(&mut self, handler: SurfaceHandler) -> Listener {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.handlers.borrow_mut().push((id, handler));

        let handlers = Rc::clone(&self.handlers);
        Listener::new(move || handlers.borrow_mut().retain(|(i, _)| *i != id))
    }
}

impl core::fmt::Debug for ManualSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ManualSurface")
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}
