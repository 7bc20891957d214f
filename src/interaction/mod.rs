use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, ChartResult};

/// Interaction phase of the selection-window state machine.
///
/// `Idle → Selected` on click (toggle), `Selected → Dragging` on
/// pointer-down, `Dragging → Selected` on pointer-up, `Dragging → Idle` on
/// pointer-leave. While `Dragging`, hover-tooltip resolution is suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SelectionPhase {
    #[default]
    Idle,
    Selected,
    Dragging,
}

/// User-adjustable visible sub-range with independently settable bounds.
///
/// The window always satisfies `min_val + gap <= max_val` and stays inside
/// the global domain. Updates that would violate either constraint are
/// rejected as no-ops, preserving the previous valid state; clamping would
/// silently move the opposite bound the user did not touch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionWindow {
    global_min: f64,
    global_max: f64,
    gap: f64,
    min_val: f64,
    max_val: f64,
}

impl SelectionWindow {
    /// Creates a window spanning the full global domain.
    pub fn new(global_min: f64, global_max: f64, gap: f64) -> ChartResult<Self> {
        if !global_min.is_finite() || !global_max.is_finite() || global_min >= global_max {
            return Err(ChartError::InvalidData(
                "window domain must be finite with min < max".to_owned(),
            ));
        }
        if !gap.is_finite() || gap < 0.0 || gap > global_max - global_min {
            return Err(ChartError::InvalidData(
                "window gap must be finite, >= 0 and fit the domain".to_owned(),
            ));
        }

        Ok(Self {
            global_min,
            global_max,
            gap,
            min_val: global_min,
            max_val: global_max,
        })
    }

    #[must_use]
    pub fn min_val(self) -> f64 {
        self.min_val
    }

    #[must_use]
    pub fn max_val(self) -> f64 {
        self.max_val
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.min_val, self.max_val)
    }

    #[must_use]
    pub fn global_range(self) -> (f64, f64) {
        (self.global_min, self.global_max)
    }

    #[must_use]
    pub fn gap(self) -> f64 {
        self.gap
    }

    fn accepts(self, min_val: f64, max_val: f64) -> bool {
        min_val.is_finite()
            && max_val.is_finite()
            && min_val >= self.global_min
            && max_val <= self.global_max
            && min_val + self.gap <= max_val
    }

    /// Moves the lower bound; returns `false` when the update is rejected.
    pub fn set_min_val(&mut self, min_val: f64) -> bool {
        self.set_bounds(min_val, self.max_val)
    }

    /// Moves the upper bound; returns `false` when the update is rejected.
    pub fn set_max_val(&mut self, max_val: f64) -> bool {
        self.set_bounds(self.min_val, max_val)
    }

    /// Moves both bounds; returns `false` when the update is rejected.
    pub fn set_bounds(&mut self, min_val: f64, max_val: f64) -> bool {
        if !self.accepts(min_val, max_val) {
            trace!(min_val, max_val, "rejected selection window bounds");
            return false;
        }
        self.min_val = min_val;
        self.max_val = max_val;
        true
    }

    /// Shifts the whole window by an additive domain delta.
    ///
    /// Rejected when either bound would leave the global domain, so the
    /// window width never changes under panning.
    pub fn pan_by(&mut self, delta: f64) -> bool {
        if !delta.is_finite() {
            return false;
        }
        self.set_bounds(self.min_val + delta, self.max_val + delta)
    }
}

/// Fixed-width window recentered as a whole.
///
/// Recentering that would push either edge past the global domain is
/// rejected as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenteredWindow {
    global_min: f64,
    global_max: f64,
    center: f64,
    half_width: f64,
}

impl CenteredWindow {
    pub fn new(
        global_min: f64,
        global_max: f64,
        center: f64,
        half_width: f64,
    ) -> ChartResult<Self> {
        if !global_min.is_finite() || !global_max.is_finite() || global_min >= global_max {
            return Err(ChartError::InvalidData(
                "window domain must be finite with min < max".to_owned(),
            ));
        }
        if !half_width.is_finite() || half_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "window half-width must be finite and > 0".to_owned(),
            ));
        }
        if !center.is_finite()
            || center - half_width < global_min
            || center + half_width > global_max
        {
            return Err(ChartError::InvalidData(
                "window must fit inside the global domain".to_owned(),
            ));
        }

        Ok(Self {
            global_min,
            global_max,
            center,
            half_width,
        })
    }

    #[must_use]
    pub fn center(self) -> f64 {
        self.center
    }

    #[must_use]
    pub fn half_width(self) -> f64 {
        self.half_width
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.center - self.half_width, self.center + self.half_width)
    }

    /// Recenters the window; returns `false` when the move is rejected.
    pub fn recenter(&mut self, center: f64) -> bool {
        if !center.is_finite()
            || center - self.half_width < self.global_min
            || center + self.half_width > self.global_max
        {
            trace!(center, "rejected window recenter");
            return false;
        }
        self.center = center;
        true
    }
}

/// Ephemeral drag bookkeeping, reset on release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DragState {
    pub active: bool,
    pub last_delta: f64,
    pub window_center: f64,
    pub window_half_width: f64,
}

/// Pointer-driven state for the selection window and hover readout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct WindowInteraction {
    phase: SelectionPhase,
    drag: DragState,
    cursor_x: f64,
    cursor_y: f64,
    hovering: bool,
    last_pointer_x: f64,
}

impl WindowInteraction {
    #[must_use]
    pub fn phase(self) -> SelectionPhase {
        self.phase
    }

    #[must_use]
    pub fn drag_state(self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn cursor(self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    /// Hover readout is shown while the pointer is inside the plot area and
    /// no drag is in progress.
    #[must_use]
    pub fn is_hovering(self) -> bool {
        self.hovering && self.phase != SelectionPhase::Dragging
    }

    #[must_use]
    pub fn is_selection_visible(self) -> bool {
        self.phase != SelectionPhase::Idle
    }

    /// Click toggles the visible selection rectangle on and off.
    pub fn on_click(&mut self) {
        self.phase = match self.phase {
            SelectionPhase::Idle => SelectionPhase::Selected,
            SelectionPhase::Selected => SelectionPhase::Idle,
            SelectionPhase::Dragging => SelectionPhase::Dragging,
        };
    }

    /// Pointer-down while selected starts a drag, capturing the current
    /// window shape into the drag state.
    pub fn on_pointer_down(&mut self, pointer_x: f64, window_range: (f64, f64)) {
        if self.phase != SelectionPhase::Selected {
            return;
        }
        self.phase = SelectionPhase::Dragging;
        self.last_pointer_x = pointer_x;
        self.drag = DragState {
            active: true,
            last_delta: 0.0,
            window_center: (window_range.0 + window_range.1) / 2.0,
            window_half_width: (window_range.1 - window_range.0) / 2.0,
        };
    }

    /// Advances the pointer; while dragging, returns the pixel delta since
    /// the previous move for the caller to translate into a domain pan.
    pub fn on_pointer_move(&mut self, pointer_x: f64, pointer_y: f64) -> Option<f64> {
        self.cursor_x = pointer_x;
        self.cursor_y = pointer_y;
        self.hovering = true;

        if self.phase != SelectionPhase::Dragging {
            return None;
        }

        let delta = pointer_x - self.last_pointer_x;
        self.last_pointer_x = pointer_x;
        self.drag.last_delta = delta;
        Some(delta)
    }

    /// Pointer-up ends a drag and returns to the selected state.
    pub fn on_pointer_up(&mut self) {
        if self.phase == SelectionPhase::Dragging {
            self.phase = SelectionPhase::Selected;
        }
        self.drag = DragState::default();
    }

    /// Pointer-leave cancels any drag and hides the hover readout.
    pub fn on_pointer_leave(&mut self) {
        if self.phase == SelectionPhase::Dragging {
            self.phase = SelectionPhase::Idle;
        }
        self.drag = DragState::default();
        self.hovering = false;
    }
}

/// Domain units represented by one horizontal pixel of the plot area.
#[must_use]
pub fn domain_delta_per_pixel(domain_min: f64, domain_max: f64, plot_width_px: f64) -> f64 {
    if plot_width_px <= 0.0 {
        return 0.0;
    }
    (domain_max - domain_min) / plot_width_px
}
