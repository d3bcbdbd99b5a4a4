use core::fmt;

/// A handle to an input listener attached somewhere outside the controller.
///
/// Releasing runs the detach closure exactly once, whether through [`Listener::remove`] or drop.
pub struct Listener {
    remove: Option<Box<dyn FnOnce()>>,
}

impl Listener {
    pub fn new(remove: impl FnOnce() + 'static) -> Self {
        Self {
            remove: Some(Box::new(remove)),
        }
    }

    /// A handle with nothing to detach.
    pub fn noop() -> Self {
        Self { remove: None }
    }

    pub fn is_active(&self) -> bool {
        self.remove.is_some()
    }

    /// Detaches the listener. Further calls do nothing.
    pub fn remove(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.remove();
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("active", &self.is_active())
            .finish()
    }
}
