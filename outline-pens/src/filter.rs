//! Pens that pass commands on to another pen.

use crate::{Pen, Point, Transform};

/// Hooks for a pen that intercepts commands on their way to another pen.
///
/// Each method receives the downstream pen along with the command's
/// arguments. The default implementations forward the command unmodified,
/// so an implementation only needs to override the commands it changes.
/// Drive a filter with [`FilterPen::with_filter`].
///
/// ```
/// use outline_pens::{FilterPen, Pen, PenCommand, PenFilter, Point};
///
/// /// Moves everything it draws 100 units to the right.
/// struct Shift;
///
/// impl PenFilter<i32> for Shift {
///     fn move_to<P>(&mut self, out: &mut P, pt: Point<i32>) -> Result<(), P::Error>
///     where
///         P: Pen<i32> + ?Sized,
///     {
///         out.move_to(pt + Point::new(100, 0))
///     }
///
///     fn line_to<P>(&mut self, out: &mut P, pt: Point<i32>) -> Result<(), P::Error>
///     where
///         P: Pen<i32> + ?Sized,
///     {
///         out.line_to(pt + Point::new(100, 0))
///     }
/// }
///
/// let mut recording: Vec<PenCommand<i32>> = Vec::new();
/// let mut pen = FilterPen::with_filter(&mut recording, Shift);
/// pen.move_to(Point::new(0, 0)).unwrap();
/// pen.line_to(Point::new(5, 5)).unwrap();
/// pen.close_path().unwrap();
/// assert_eq!(
///     recording,
///     [
///         PenCommand::MoveTo(Point::new(100, 0)),
///         PenCommand::LineTo(Point::new(105, 5)),
///         PenCommand::ClosePath,
///     ]
/// );
/// ```
pub trait PenFilter<T> {
    fn move_to<P>(&mut self, out: &mut P, pt: Point<T>) -> Result<(), P::Error>
    where
        P: Pen<T> + ?Sized,
    {
        out.move_to(pt)
    }

    fn line_to<P>(&mut self, out: &mut P, pt: Point<T>) -> Result<(), P::Error>
    where
        P: Pen<T> + ?Sized,
    {
        out.line_to(pt)
    }

    fn curve_to<P>(&mut self, out: &mut P, points: &[Point<T>]) -> Result<(), P::Error>
    where
        P: Pen<T> + ?Sized,
    {
        out.curve_to(points)
    }

    fn qcurve_to<P>(&mut self, out: &mut P, points: &[Option<Point<T>>]) -> Result<(), P::Error>
    where
        P: Pen<T> + ?Sized,
    {
        out.qcurve_to(points)
    }

    fn close_path<P>(&mut self, out: &mut P) -> Result<(), P::Error>
    where
        P: Pen<T> + ?Sized,
    {
        out.close_path()
    }

    fn end_path<P>(&mut self, out: &mut P) -> Result<(), P::Error>
    where
        P: Pen<T> + ?Sized,
    {
        out.end_path()
    }

    fn add_component<P>(
        &mut self,
        out: &mut P,
        glyph_name: &str,
        transform: Transform<T>,
    ) -> Result<(), P::Error>
    where
        P: Pen<T> + ?Sized,
    {
        out.add_component(glyph_name, transform)
    }
}

/// The filter that changes nothing.
#[derive(Copy, Clone, Default, Debug)]
pub struct Passthrough;

impl<T> PenFilter<T> for Passthrough {}

/// A pen that hands every command to a [`PenFilter`] and from there to
/// another pen.
///
/// With the default [`Passthrough`] filter every command reaches the
/// downstream pen unmodified and in the order it was received. Errors from
/// the downstream pen are returned as is; a `FilterPen` has no failure
/// modes of its own.
///
/// `FilterPen` is itself a [`Pen`], so filters can be stacked.
///
/// ```
/// use outline_pens::{FilterPen, Pen, PenCommand, Point, Transform};
///
/// let mut rec: Vec<PenCommand<i32>> = Vec::new();
/// let mut pen = FilterPen::new(&mut rec);
///
/// pen.move_to(Point::new(0, 0)).unwrap();
/// pen.line_to(Point::new(1, 1)).unwrap();
/// pen.curve_to(&[Point::new(2, 2), Point::new(3, 3), Point::new(4, 4)]).unwrap();
/// pen.qcurve_to(&[
///     Some(Point::new(5, 5)),
///     Some(Point::new(6, 6)),
///     Some(Point::new(7, 7)),
///     Some(Point::new(8, 8)),
/// ])
/// .unwrap();
/// pen.close_path().unwrap();
/// pen.move_to(Point::new(9, 9)).unwrap();
/// pen.end_path().unwrap();
/// pen.add_component("foo", Transform::new(1, 0, 0, 1, 0, 0)).unwrap();
///
/// let names: Vec<_> = rec.iter().map(PenCommand::name).collect();
/// assert_eq!(
///     names,
///     ["moveTo", "lineTo", "curveTo", "qCurveTo", "closePath", "moveTo", "endPath", "addComponent"]
/// );
/// assert_eq!(
///     rec[7],
///     PenCommand::AddComponent {
///         glyph_name: "foo".into(),
///         transform: Transform::new(1, 0, 0, 1, 0, 0),
///     }
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct FilterPen<P, F = Passthrough> {
    out_pen: P,
    filter: F,
}

impl<P> FilterPen<P> {
    /// Creates a pen that forwards everything to `out_pen`.
    pub fn new(out_pen: P) -> Self {
        Self::with_filter(out_pen, Passthrough)
    }
}

impl<P, F> FilterPen<P, F> {
    /// Creates a pen that routes commands through `filter` to `out_pen`.
    pub fn with_filter(out_pen: P, filter: F) -> Self {
        Self { out_pen, filter }
    }

    /// The pen receiving the filtered commands.
    pub fn out_pen(&self) -> &P {
        &self.out_pen
    }

    pub fn out_pen_mut(&mut self) -> &mut P {
        &mut self.out_pen
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut F {
        &mut self.filter
    }

    /// Consumes the filter, returning the downstream pen.
    pub fn into_inner(self) -> P {
        self.out_pen
    }

    pub fn into_parts(self) -> (P, F) {
        (self.out_pen, self.filter)
    }
}

impl<T, P, F> Pen<T> for FilterPen<P, F>
where
    P: Pen<T>,
    F: PenFilter<T>,
{
    type Error = P::Error;

    fn move_to(&mut self, pt: Point<T>) -> Result<(), Self::Error> {
        self.filter.move_to(&mut self.out_pen, pt)
    }

    fn line_to(&mut self, pt: Point<T>) -> Result<(), Self::Error> {
        self.filter.line_to(&mut self.out_pen, pt)
    }

    fn curve_to(&mut self, points: &[Point<T>]) -> Result<(), Self::Error> {
        self.filter.curve_to(&mut self.out_pen, points)
    }

    fn qcurve_to(&mut self, points: &[Option<Point<T>>]) -> Result<(), Self::Error> {
        self.filter.qcurve_to(&mut self.out_pen, points)
    }

    fn close_path(&mut self) -> Result<(), Self::Error> {
        self.filter.close_path(&mut self.out_pen)
    }

    fn end_path(&mut self) -> Result<(), Self::Error> {
        self.filter.end_path(&mut self.out_pen)
    }

    fn add_component(
        &mut self,
        glyph_name: &str,
        transform: Transform<T>,
    ) -> Result<(), Self::Error> {
        self.filter.add_component(&mut self.out_pen, glyph_name, transform)
    }
}
