//! The affine transformation attached to a component reference.

/// A 2D affine transformation as six coefficients.
///
/// The coefficients are stored in the order used by fontTools,
/// `(xx, xy, yx, yy, dx, dy)`, so that a point `(x, y)` maps to
///
/// `x' = xx * x + yx * y + dx`
///
/// `y' = xy * x + yy * y + dy`
///
/// Pens that only pass components along treat this as an opaque value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform<T> {
    pub xx: T,
    pub xy: T,
    pub yx: T,
    pub yy: T,
    pub dx: T,
    pub dy: T,
}

impl<T> Transform<T> {
    /// Creates a transform from its six coefficients.
    pub const fn new(xx: T, xy: T, yx: T, yy: T, dx: T, dy: T) -> Self {
        Self {
            xx,
            xy,
            yx,
            yy,
            dx,
            dy,
        }
    }

    /// Returns the coefficients as `[xx, xy, yx, yy, dx, dy]`.
    pub fn to_array(self) -> [T; 6] {
        [self.xx, self.xy, self.yx, self.yy, self.dx, self.dy]
    }
}

impl Transform<f64> {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
}

impl Transform<f32> {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
}

impl<T> From<[T; 6]> for Transform<T> {
    fn from([xx, xy, yx, yy, dx, dy]: [T; 6]) -> Self {
        Self::new(xx, xy, yx, yy, dx, dy)
    }
}

impl<T> From<(T, T, T, T, T, T)> for Transform<T> {
    fn from((xx, xy, yx, yy, dx, dy): (T, T, T, T, T, T)) -> Self {
        Self::new(xx, xy, yx, yy, dx, dy)
    }
}

impl<T> From<Transform<T>> for [T; 6] {
    fn from(value: Transform<T>) -> Self {
        value.to_array()
    }
}

// kurbo's coefficient order happens to match ours.
#[cfg(feature = "kurbo")]
impl<T: Into<f64>> From<Transform<T>> for kurbo::Affine {
    fn from(value: Transform<T>) -> Self {
        kurbo::Affine::new(value.to_array().map(Into::into))
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Affine> for Transform<f64> {
    fn from(value: kurbo::Affine) -> Self {
        value.as_coeffs().into()
    }
}
