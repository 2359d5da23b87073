/// A position in the surface's domain.
///
/// The UI limits slider input to [-2, 2], but that is the slider's rule, not
/// this type's: any pair of reals is representable, and the evaluator itself
/// only insists on finiteness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite (neither NaN nor infinite).
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
