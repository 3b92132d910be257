#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// Linear interpolation: `a + (b - a) * factor`.
#[must_use]
pub fn lerp(a: f64, b: f64, factor: f64) -> f64 {
    a + (b - a) * factor
}

/// Clamp `value` into `[0, max]`, treating a negative `max` as zero.
///
/// Never panics, unlike `f64::clamp` with an inverted range.
#[must_use]
pub fn clamp_to_extent(value: f64, max: f64) -> f64 {
    value.max(0.0).min(max.max(0.0))
}

/// A point in CSS pixels, either viewport- or element-relative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move a fraction of the way toward `target` on both axes.
    #[must_use]
    pub fn lerp_toward(self, target: Point, factor: f64) -> Point {
        Point {
            x: lerp(self.x, target.x, factor),
            y: lerp(self.y, target.y, factor),
        }
    }
}

/// Width/height pair. A zero size means the element has not been measured yet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Bounding box as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Convert a viewport point into coordinates relative to this box's origin.
    #[must_use]
    pub fn to_local(&self, client: Point) -> Point {
        Point {
            x: client.x - self.left,
            y: client.y - self.top,
        }
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }
}
