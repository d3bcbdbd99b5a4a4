use stepped_progress::{StepProgressController, SteppedProgress};

/// Which two slides a renderer blends and how far it is between them.
///
/// This is what a slider shader consumes on every render notification: the slide at or before
/// the progress, the slide at or after it, and the mix factor between them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideBlend {
    pub prev_index: usize,
    pub next_index: usize,
    /// `0.0` shows `prev_index` only; approaching `1.0` shows `next_index`.
    pub mix: f64,
}

impl SlideBlend {
    /// Maps stepped progress onto `slide_count` slides, one slide per step starting at zero.
    ///
    /// Indices are clamped into `0..slide_count` (to `0` when there are no slides).
    pub fn from_stepped(stepped: &SteppedProgress, step: f64, slide_count: usize) -> Self {
        Self {
            prev_index: slide_index(stepped.min_stepped_value, step, slide_count),
            next_index: slide_index(stepped.max_stepped_value, step, slide_count),
            mix: stepped.relative_stepped_progress,
        }
    }

    pub fn from_controller(c: &StepProgressController, slide_count: usize) -> Self {
        Self::from_stepped(&c.stepped(), c.step(), slide_count)
    }

    /// Whether the renderer shows a single slide with no transition.
    pub fn is_resting(&self) -> bool {
        self.prev_index == self.next_index
    }
}

fn slide_index(value: f64, step: f64, slide_count: usize) -> usize {
    let last = slide_count.saturating_sub(1);
    let index = (value / step).round();
    if index <= 0.0 {
        return 0;
    }
    (index as usize).min(last)
}
