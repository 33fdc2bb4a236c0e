use core::ops::{Add, Neg, Sub};

/// A point in an outline, with a generic coordinate type.
///
/// Pens in this crate never look at the coordinates; `T` can be an integer
/// type for unscaled font units or a float for scaled outlines.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T> {
    /// X coordinate.
    pub x: T,
    /// Y coordinate.
    pub y: T,
}

impl<T> Point<T> {
    /// Creates a new point with the given x and y coordinates.
    #[inline(always)]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Converts `Point<T>` to `Point<U>` by applying a function to each
    /// coordinate.
    #[inline(always)]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Point<U> {
        Point {
            x: f(self.x),
            y: f(self.y),
        }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<[T; 2]> for Point<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<Point<T>> for (T, T) {
    fn from(pt: Point<T>) -> Self {
        (pt.x, pt.y)
    }
}

#[cfg(feature = "kurbo")]
impl<T: Into<f64>> From<Point<T>> for kurbo::Point {
    fn from(pt: Point<T>) -> Self {
        kurbo::Point::new(pt.x.into(), pt.y.into())
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Point> for Point<f64> {
    fn from(pt: kurbo::Point) -> Self {
        Self::new(pt.x, pt.y)
    }
}

impl<T> Add for Point<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T> Sub for Point<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T> Neg for Point<T>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}
