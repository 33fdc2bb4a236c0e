//! A pen that builds a [`kurbo::BezPath`].

use kurbo::{Affine, BezPath, Rect, Shape};

use crate::{error::PathError, Pen, Point, Transform};

/// A component reference collected by a [`BezPathPen`].
#[derive(Clone, Debug, PartialEq)]
pub struct Component {
    pub glyph_name: String,
    pub transform: Affine,
}

/// Pen that collects outline commands into a [`BezPath`].
///
/// Unlike the recording and filter pens, this pen checks what it is given:
/// segments need an open subpath, cubic segments need one to three points,
/// and an implied on-curve point may only end a quadratic segment.
/// Quadratic segments with several off-curve points are split at the
/// implied on-curve midpoints, the TrueType convention.
///
/// Components are not resolved; they are kept in [`components`](Self::components).
#[derive(Clone, Debug, Default)]
pub struct BezPathPen {
    path: BezPath,
    current: Option<kurbo::Point>,
    components: Vec<Component>,
}

impl BezPathPen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &BezPath {
        &self.path
    }

    pub fn into_path(self) -> BezPath {
        self.path
    }

    /// The components added so far, in order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// The bounding box of the drawn contours, not including components.
    pub fn bounding_box(&self) -> Rect {
        self.path.bounding_box()
    }

    fn current_point(&self) -> Result<kurbo::Point, PathError> {
        self.current.ok_or(PathError::MissingMove)
    }

    /// Emits quadratic segments ending at `on_curve`, inserting an on-curve
    /// point between each pair of consecutive off-curve points.
    fn push_quadratics(&mut self, off_curve: &[kurbo::Point], on_curve: kurbo::Point) {
        let Some((last, rest)) = off_curve.split_last() else {
            self.path.line_to(on_curve);
            return;
        };
        for (ix, control) in rest.iter().enumerate() {
            self.path.quad_to(*control, control.midpoint(off_curve[ix + 1]));
        }
        self.path.quad_to(*last, on_curve);
    }
}

fn reject(err: PathError) -> Result<(), PathError> {
    log::debug!("rejected pen command: {err}");
    Err(err)
}

impl<T: Copy + Into<f64>> Pen<T> for BezPathPen {
    type Error = PathError;

    fn move_to(&mut self, pt: Point<T>) -> Result<(), PathError> {
        let pt: kurbo::Point = pt.into();
        self.path.move_to(pt);
        self.current = Some(pt);
        Ok(())
    }

    fn line_to(&mut self, pt: Point<T>) -> Result<(), PathError> {
        if self.current.is_none() {
            return reject(PathError::MissingMove);
        }
        let pt: kurbo::Point = pt.into();
        self.path.line_to(pt);
        self.current = Some(pt);
        Ok(())
    }

    fn curve_to(&mut self, points: &[Point<T>]) -> Result<(), PathError> {
        if self.current.is_none() {
            return reject(PathError::MissingMove);
        }
        let points: Vec<kurbo::Point> = points.iter().map(|pt| (*pt).into()).collect();
        let end = match points[..] {
            [p0] => {
                self.path.line_to(p0);
                p0
            }
            [p0, p1] => {
                self.path.quad_to(p0, p1);
                p1
            }
            [p0, p1, p2] => {
                self.path.curve_to(p0, p1, p2);
                p2
            }
            _ => return reject(PathError::CurveArity(points.len())),
        };
        self.current = Some(end);
        Ok(())
    }

    fn qcurve_to(&mut self, points: &[Option<Point<T>>]) -> Result<(), PathError> {
        let Some((last, off_curve)) = points.split_last() else {
            return reject(PathError::EmptyQuadratic);
        };
        if let Some(ix) = off_curve.iter().position(Option::is_none) {
            return reject(PathError::MisplacedImpliedPoint(ix));
        }
        let off_curve: Vec<kurbo::Point> = off_curve
            .iter()
            .flatten()
            .map(|pt| (*pt).into())
            .collect();
        let on_curve: kurbo::Point = match last {
            Some(pt) => {
                if self.current.is_none() {
                    return reject(PathError::MissingMove);
                }
                (*pt).into()
            }
            // a contour without on-curve points starts halfway between
            // its last and first off-curve points
            None => {
                let (Some(first), Some(end)) = (off_curve.first(), off_curve.last()) else {
                    return reject(PathError::EmptyQuadratic);
                };
                let start = end.midpoint(*first);
                self.path.move_to(start);
                start
            }
        };
        self.push_quadratics(&off_curve, on_curve);
        self.current = Some(on_curve);
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), PathError> {
        self.current_point()?;
        self.path.close_path();
        self.current = None;
        Ok(())
    }

    fn end_path(&mut self) -> Result<(), PathError> {
        self.current = None;
        Ok(())
    }

    fn add_component(
        &mut self,
        glyph_name: &str,
        transform: Transform<T>,
    ) -> Result<(), PathError> {
        self.components.push(Component {
            glyph_name: glyph_name.into(),
            transform: transform.into(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{replay, FilterPen, PenCommand};
    use kurbo::PathEl;
    use pretty_assertions::assert_eq;

    fn pt(x: f64, y: f64) -> Point<f64> {
        Point::new(x, y)
    }

    fn kpt(x: f64, y: f64) -> kurbo::Point {
        kurbo::Point::new(x, y)
    }

    #[test]
    fn simple_contours() {
        let mut pen = BezPathPen::new();
        pen.move_to(pt(0.0, 0.0)).unwrap();
        pen.line_to(pt(100.0, 0.0)).unwrap();
        let curve = [pt(120.0, 20.0), pt(120.0, 80.0), pt(100.0, 100.0)];
        pen.curve_to(&curve[..]).unwrap();
        Pen::<f64>::close_path(&mut pen).unwrap();
        pen.move_to(pt(10.0, 10.0)).unwrap();
        pen.curve_to(&[pt(20.0, 20.0), pt(30.0, 10.0)]).unwrap();
        pen.curve_to(&[pt(40.0, 10.0)]).unwrap();
        Pen::<f64>::end_path(&mut pen).unwrap();
        assert_eq!(
            pen.path().elements(),
            &[
                PathEl::MoveTo(kpt(0.0, 0.0)),
                PathEl::LineTo(kpt(100.0, 0.0)),
                PathEl::CurveTo(kpt(120.0, 20.0), kpt(120.0, 80.0), kpt(100.0, 100.0)),
                PathEl::ClosePath,
                PathEl::MoveTo(kpt(10.0, 10.0)),
                PathEl::QuadTo(kpt(20.0, 20.0), kpt(30.0, 10.0)),
                PathEl::LineTo(kpt(40.0, 10.0)),
            ]
        );
    }

    #[test]
    fn integer_coordinates() {
        let mut pen = BezPathPen::new();
        pen.move_to(Point::new(-5i16, 3)).unwrap();
        pen.line_to(Point::new(7i16, 11)).unwrap();
        assert_eq!(
            pen.into_path().elements(),
            &[PathEl::MoveTo(kpt(-5.0, 3.0)), PathEl::LineTo(kpt(7.0, 11.0))]
        );
    }

    #[test]
    fn implied_on_curve_points() {
        let mut pen = BezPathPen::new();
        pen.move_to(pt(0.0, 0.0)).unwrap();
        pen.qcurve_to(&[
            Some(pt(0.0, 10.0)),
            Some(pt(10.0, 20.0)),
            Some(pt(20.0, 20.0)),
        ])
        .unwrap();
        pen.qcurve_to(&[Some(pt(30.0, 0.0))]).unwrap();
        assert_eq!(
            pen.path().elements(),
            &[
                PathEl::MoveTo(kpt(0.0, 0.0)),
                PathEl::QuadTo(kpt(0.0, 10.0), kpt(5.0, 15.0)),
                PathEl::QuadTo(kpt(10.0, 20.0), kpt(20.0, 20.0)),
                PathEl::LineTo(kpt(30.0, 0.0)),
            ]
        );
    }

    #[test]
    fn off_curve_only_contour() {
        let mut pen = BezPathPen::new();
        pen.qcurve_to(&[
            Some(pt(0.0, 10.0)),
            Some(pt(10.0, 10.0)),
            Some(pt(10.0, 0.0)),
            Some(pt(0.0, 0.0)),
            None,
        ])
        .unwrap();
        Pen::<f64>::close_path(&mut pen).unwrap();
        assert_eq!(
            pen.path().elements(),
            &[
                PathEl::MoveTo(kpt(0.0, 5.0)),
                PathEl::QuadTo(kpt(0.0, 10.0), kpt(5.0, 10.0)),
                PathEl::QuadTo(kpt(10.0, 10.0), kpt(10.0, 5.0)),
                PathEl::QuadTo(kpt(10.0, 0.0), kpt(5.0, 0.0)),
                PathEl::QuadTo(kpt(0.0, 0.0), kpt(0.0, 5.0)),
                PathEl::ClosePath,
            ]
        );
        assert_eq!(pen.bounding_box(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn collects_components() {
        let mut pen = BezPathPen::new();
        pen.add_component("a", Transform::new(1, 0, 0, 1, 0, 0)).unwrap();
        pen.add_component("acutecomb", Transform::new(1, 0, 0, 1, 250, 300)).unwrap();
        assert!(pen.path().elements().is_empty());
        assert_eq!(
            pen.components(),
            &[
                Component {
                    glyph_name: "a".into(),
                    transform: Affine::IDENTITY,
                },
                Component {
                    glyph_name: "acutecomb".into(),
                    transform: Affine::translate((250.0, 300.0)),
                },
            ]
        );
    }

    #[test]
    fn rejects_malformed_input() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut pen = BezPathPen::new();
        assert_eq!(pen.line_to(pt(1.0, 1.0)), Err(PathError::MissingMove));
        assert_eq!(
            pen.qcurve_to(&[Some(pt(1.0, 1.0))]),
            Err(PathError::MissingMove)
        );
        assert_eq!(Pen::<f64>::close_path(&mut pen), Err(PathError::MissingMove));
        pen.move_to(pt(0.0, 0.0)).unwrap();
        assert_eq!(
            Pen::<f64>::curve_to(&mut pen, &[]),
            Err(PathError::CurveArity(0))
        );
        let four = [pt(1.0, 1.0), pt(2.0, 2.0), pt(3.0, 3.0), pt(4.0, 4.0)];
        assert_eq!(pen.curve_to(&four[..]), Err(PathError::CurveArity(4)));
        assert_eq!(
            Pen::<f64>::qcurve_to(&mut pen, &[]),
            Err(PathError::EmptyQuadratic)
        );
        assert_eq!(
            Pen::<f64>::qcurve_to(&mut pen, &[None]),
            Err(PathError::EmptyQuadratic)
        );
        assert_eq!(
            pen.qcurve_to(&[Some(pt(1.0, 1.0)), None, Some(pt(2.0, 2.0))]),
            Err(PathError::MisplacedImpliedPoint(1))
        );
        // nothing but the move made it into the path
        assert_eq!(pen.path().elements(), &[PathEl::MoveTo(kpt(0.0, 0.0))]);
        Pen::<f64>::end_path(&mut pen).unwrap();
        assert_eq!(pen.line_to(pt(1.0, 1.0)), Err(PathError::MissingMove));
    }

    #[test]
    fn errors_reach_caller_through_filters() {
        let commands = vec![
            PenCommand::MoveTo(pt(0.0, 0.0)),
            PenCommand::LineTo(pt(1.0, 0.0)),
            PenCommand::CurveTo(vec![pt(1.0, 1.0); 5]),
            PenCommand::LineTo(pt(0.0, 1.0)),
        ];
        let mut pen = FilterPen::new(FilterPen::new(BezPathPen::new()));
        assert_eq!(replay(&commands, &mut pen), Err(PathError::CurveArity(5)));
        assert_eq!(
            pen.into_inner().into_inner().path().elements(),
            &[PathEl::MoveTo(kpt(0.0, 0.0)), PathEl::LineTo(kpt(1.0, 0.0))]
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            PathError::CurveArity(4).to_string(),
            "Cubic segment with 4 points, expected between 1 and 3"
        );
        assert_eq!(
            PathError::MisplacedImpliedPoint(0).to_string(),
            "Implied on-curve point at index 0 is not the last point of the segment"
        );
    }
}
