/// Default pixel height of one wheel "line" (`DeltaMode::Line`).
pub const DEFAULT_LINE_HEIGHT: f64 = 40.0;
/// Default pixel height of one wheel "page" (`DeltaMode::Page`).
pub const DEFAULT_PAGE_HEIGHT: f64 = 800.0;

/// The interaction axis of the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    /// Picks the component of `(x, y)` along this axis.
    pub fn pick(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Vertical => y,
            Self::Horizontal => x,
        }
    }
}

/// Unit of a raw wheel delta, as reported by the platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

/// A raw wheel event. Positive deltas scroll "forward" (down / right).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelEvent {
    pub delta_x: f64,
    pub delta_y: f64,
    pub mode: DeltaMode,
}

impl WheelEvent {
    pub fn pixels(delta_x: f64, delta_y: f64) -> Self {
        Self {
            delta_x,
            delta_y,
            mode: DeltaMode::Pixel,
        }
    }

    pub fn lines(delta_x: f64, delta_y: f64) -> Self {
        Self {
            delta_x,
            delta_y,
            mode: DeltaMode::Line,
        }
    }

    pub fn pages(delta_x: f64, delta_y: f64) -> Self {
        Self {
            delta_x,
            delta_y,
            mode: DeltaMode::Page,
        }
    }
}

/// Converts a wheel event into pixel deltas `(x, y)`.
pub fn normalize_wheel(event: &WheelEvent, line_height: f64, page_height: f64) -> (f64, f64) {
    let scale = match event.mode {
        DeltaMode::Pixel => 1.0,
        DeltaMode::Line => line_height,
        DeltaMode::Page => page_height,
    };
    (event.delta_x * scale, event.delta_y * scale)
}

/// Pointer movement since the previous move sample of the same drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragMove {
    pub step_x: f64,
    pub step_y: f64,
}

/// Turns absolute pointer positions into incremental [`DragMove`] steps.
///
/// Moves outside of a `start`/`end` pair are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    last: Option<(f64, f64)>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }

    pub fn start(&mut self, x: f64, y: f64) {
        self.last = Some((x, y));
    }

    /// Records a new pointer position and returns the step since the last one.
    pub fn update(&mut self, x: f64, y: f64) -> Option<DragMove> {
        let (last_x, last_y) = self.last?;
        self.last = Some((x, y));
        Some(DragMove {
            step_x: x - last_x,
            step_y: y - last_y,
        })
    }

    pub fn end(&mut self) {
        self.last = None;
    }
}
