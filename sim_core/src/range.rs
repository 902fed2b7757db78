//! Value/position mapping for the two-handled range slider.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeHandle {
    Min,
    Max,
}

/// Clamp without panicking when `lo > hi`; `lo` wins in that case.
pub(crate) fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}

/// Maps between values in `abs_min..=abs_max` and offsets along a track `width` wide.
#[derive(Debug, Clone, Copy)]
pub struct RangeTrack {
    pub width: f32,
    pub abs_min: f32,
    pub abs_max: f32,
}

impl RangeTrack {
    pub fn new(width: f32, abs_min: f32, abs_max: f32) -> Self {
        Self {
            width,
            abs_min,
            abs_max,
        }
    }

    fn span(&self) -> f32 {
        self.abs_max - self.abs_min
    }

    /// Offset of `value` from the left of the track. Values outside the bounds
    /// sit at the ends.
    pub fn position(&self, value: f32) -> f32 {
        let span = self.span();
        if span <= 0. {
            return 0.;
        }

        let t = (clamp(value, self.abs_min, self.abs_max) - self.abs_min) / span;
        t.clamp(0., 1.) * self.width
    }

    /// The value under offset `x`. Not clamped to the bounds.
    pub fn value_at(&self, x: f32) -> f32 {
        if self.width <= 0. {
            return self.abs_min;
        }

        (x / self.width) * self.span() + self.abs_min
    }

    /// The handle closer to offset `x`. Ties go to the max handle, so two
    /// handles stacked at the same spot can still be pulled apart to the right.
    pub fn nearer_handle(&self, x: f32, min_pos: f32, max_pos: f32) -> RangeHandle {
        if (x - min_pos).abs() < (x - max_pos).abs() {
            RangeHandle::Min
        } else {
            RangeHandle::Max
        }
    }
}

/// The current `(min, max)` of a range slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeValue {
    pub min: f32,
    pub max: f32,
}

impl RangeValue {
    /// A range from two initial values. If `min > max`, max is raised to min.
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            min,
            max: max.max(min),
        }
    }

    /// Move `handle` to `value`, keeping it inside the bounds and on its own
    /// side of the other handle.
    pub fn drag(&mut self, handle: RangeHandle, value: f32, abs_min: f32, abs_max: f32) {
        match handle {
            RangeHandle::Min => self.min = clamp(value, abs_min, self.max),
            RangeHandle::Max => self.max = clamp(value, self.min, abs_max),
        }
    }

    /// Typed min. Not bounded, but pushes max up if it crosses.
    pub fn enter_min(&mut self, value: f32) {
        self.min = value;
        if self.min > self.max {
            self.max = self.min;
        }
    }

    /// Typed max. Not bounded, but pushes min down if it crosses.
    pub fn enter_max(&mut self, value: f32) {
        self.max = value;
        if self.max < self.min {
            self.min = self.max;
        }
    }
}

impl From<(f32, f32)> for RangeValue {
    fn from((min, max): (f32, f32)) -> Self {
        Self { min, max }
    }
}

impl From<RangeValue> for (f32, f32) {
    fn from(range: RangeValue) -> Self {
        (range.min, range.max)
    }
}
