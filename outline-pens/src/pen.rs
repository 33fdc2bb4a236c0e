//! The pen protocol.

use core::convert::Infallible;

use crate::{Point, Transform};

/// Interface for accepting a sequence of glyph drawing commands.
///
/// This is the protocol shared by everything that produces or consumes
/// outlines: glyph decoders drive a pen, and rasterizers, format writers and
/// transformation stages implement one. It corresponds to `AbstractPen` in
/// fontTools.
/// <https://github.com/fonttools/fonttools/blob/main/Lib/fontTools/pens/basePen.py>
///
/// The type parameter `T` is the coordinate type.
///
/// Every method returns a `Result` so that a pen which checks its input can
/// reject a command. Pens that accept everything should use
/// [`Infallible`] as their error type.
pub trait Pen<T> {
    /// The error produced when this pen rejects a command.
    type Error;

    /// Begin a new subpath at `pt`.
    fn move_to(&mut self, pt: Point<T>) -> Result<(), Self::Error>;

    /// Draw a straight line from the current point to `pt`.
    fn line_to(&mut self, pt: Point<T>) -> Result<(), Self::Error>;

    /// Draw a cubic bezier segment from the current point.
    ///
    /// The last point is on-curve and the others are off-curve control
    /// points. The usual case is three points, but the number of points is
    /// up to the receiving pen to interpret.
    fn curve_to(&mut self, points: &[Point<T>]) -> Result<(), Self::Error>;

    /// Draw one or more quadratic bezier segments from the current point.
    ///
    /// All points except the last are off-curve. The last point is on-curve,
    /// or `None` for a contour made entirely of off-curve points, in which
    /// case the on-curve points are implied.
    fn qcurve_to(&mut self, points: &[Option<Point<T>>]) -> Result<(), Self::Error>;

    /// Close the current subpath.
    fn close_path(&mut self) -> Result<(), Self::Error>;

    /// End the current subpath without closing it.
    fn end_path(&mut self) -> Result<(), Self::Error>;

    /// Add a reference to the glyph `glyph_name`, placed with `transform`.
    fn add_component(
        &mut self,
        glyph_name: &str,
        transform: Transform<T>,
    ) -> Result<(), Self::Error>;
}

impl<T, P: Pen<T> + ?Sized> Pen<T> for &mut P {
    type Error = P::Error;

    fn move_to(&mut self, pt: Point<T>) -> Result<(), Self::Error> {
        (**self).move_to(pt)
    }

    fn line_to(&mut self, pt: Point<T>) -> Result<(), Self::Error> {
        (**self).line_to(pt)
    }

    fn curve_to(&mut self, points: &[Point<T>]) -> Result<(), Self::Error> {
        (**self).curve_to(points)
    }

    fn qcurve_to(&mut self, points: &[Option<Point<T>>]) -> Result<(), Self::Error> {
        (**self).qcurve_to(points)
    }

    fn close_path(&mut self) -> Result<(), Self::Error> {
        (**self).close_path()
    }

    fn end_path(&mut self) -> Result<(), Self::Error> {
        (**self).end_path()
    }

    fn add_component(
        &mut self,
        glyph_name: &str,
        transform: Transform<T>,
    ) -> Result<(), Self::Error> {
        (**self).add_component(glyph_name, transform)
    }
}

impl<T, P: Pen<T> + ?Sized> Pen<T> for Box<P> {
    type Error = P::Error;

    fn move_to(&mut self, pt: Point<T>) -> Result<(), Self::Error> {
        (**self).move_to(pt)
    }

    fn line_to(&mut self, pt: Point<T>) -> Result<(), Self::Error> {
        (**self).line_to(pt)
    }

    fn curve_to(&mut self, points: &[Point<T>]) -> Result<(), Self::Error> {
        (**self).curve_to(points)
    }

    fn qcurve_to(&mut self, points: &[Option<Point<T>>]) -> Result<(), Self::Error> {
        (**self).qcurve_to(points)
    }

    fn close_path(&mut self) -> Result<(), Self::Error> {
        (**self).close_path()
    }

    fn end_path(&mut self) -> Result<(), Self::Error> {
        (**self).end_path()
    }

    fn add_component(
        &mut self,
        glyph_name: &str,
        transform: Transform<T>,
    ) -> Result<(), Self::Error> {
        (**self).add_component(glyph_name, transform)
    }
}

/// Pen that drops all drawing output into the ether.
#[derive(Copy, Clone, Default, Debug)]
pub struct NullPen;

impl<T> Pen<T> for NullPen {
    type Error = Infallible;

    fn move_to(&mut self, _pt: Point<T>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn line_to(&mut self, _pt: Point<T>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn curve_to(&mut self, _points: &[Point<T>]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn qcurve_to(&mut self, _points: &[Option<Point<T>>]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn end_path(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn add_component(
        &mut self,
        _glyph_name: &str,
        _transform: Transform<T>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
