//! Recording and replaying pen commands.

use core::convert::Infallible;

use crate::{Pen, Point, Transform};

/// A single pen command with owned arguments.
///
/// A `Vec<PenCommand<T>>` is a pen that records everything it is given, the
/// equivalent of fontTools' `RecordingPen`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PenCommand<T> {
    MoveTo(Point<T>),
    LineTo(Point<T>),
    CurveTo(Vec<Point<T>>),
    QCurveTo(Vec<Option<Point<T>>>),
    ClosePath,
    EndPath,
    AddComponent {
        glyph_name: String,
        transform: Transform<T>,
    },
}

impl<T> PenCommand<T> {
    /// The fontTools name of the pen method this command represents.
    pub fn name(&self) -> &'static str {
        match self {
            PenCommand::MoveTo(_) => "moveTo",
            PenCommand::LineTo(_) => "lineTo",
            PenCommand::CurveTo(_) => "curveTo",
            PenCommand::QCurveTo(_) => "qCurveTo",
            PenCommand::ClosePath => "closePath",
            PenCommand::EndPath => "endPath",
            PenCommand::AddComponent { .. } => "addComponent",
        }
    }

    /// Issues this command to `pen`.
    pub fn apply<P>(&self, pen: &mut P) -> Result<(), P::Error>
    where
        P: Pen<T> + ?Sized,
        T: Clone,
    {
        match self {
            PenCommand::MoveTo(pt) => pen.move_to(pt.clone()),
            PenCommand::LineTo(pt) => pen.line_to(pt.clone()),
            PenCommand::CurveTo(points) => pen.curve_to(points),
            PenCommand::QCurveTo(points) => pen.qcurve_to(points),
            PenCommand::ClosePath => pen.close_path(),
            PenCommand::EndPath => pen.end_path(),
            PenCommand::AddComponent {
                glyph_name,
                transform,
            } => pen.add_component(glyph_name, transform.clone()),
        }
    }
}

/// Issues each of `commands` to `pen`, in order.
///
/// Stops at the first command the pen rejects and returns its error.
pub fn replay<'a, T, P>(
    commands: impl IntoIterator<Item = &'a PenCommand<T>>,
    pen: &mut P,
) -> Result<(), P::Error>
where
    T: Clone + 'a,
    P: Pen<T> + ?Sized,
{
    let mut count = 0usize;
    for command in commands {
        command.apply(pen)?;
        count += 1;
    }
    log::trace!("replayed {count} pen commands");
    Ok(())
}

impl<T: Clone> Pen<T> for Vec<PenCommand<T>> {
    type Error = Infallible;

    fn move_to(&mut self, pt: Point<T>) -> Result<(), Self::Error> {
        self.push(PenCommand::MoveTo(pt));
        Ok(())
    }

    fn line_to(&mut self, pt: Point<T>) -> Result<(), Self::Error> {
        self.push(PenCommand::LineTo(pt));
        Ok(())
    }

    fn curve_to(&mut self, points: &[Point<T>]) -> Result<(), Self::Error> {
        self.push(PenCommand::CurveTo(points.to_vec()));
        Ok(())
    }

    fn qcurve_to(&mut self, points: &[Option<Point<T>>]) -> Result<(), Self::Error> {
        self.push(PenCommand::QCurveTo(points.to_vec()));
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), Self::Error> {
        self.push(PenCommand::ClosePath);
        Ok(())
    }

    fn end_path(&mut self) -> Result<(), Self::Error> {
        self.push(PenCommand::EndPath);
        Ok(())
    }

    fn add_component(
        &mut self,
        glyph_name: &str,
        transform: Transform<T>,
    ) -> Result<(), Self::Error> {
        self.push(PenCommand::AddComponent {
            glyph_name: glyph_name.into(),
            transform,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pt(x: i32, y: i32) -> Point<i32> {
        Point::new(x, y)
    }

    fn sample_glyph() -> Vec<PenCommand<i32>> {
        vec![
            PenCommand::MoveTo(pt(0, 0)),
            PenCommand::LineTo(pt(100, 0)),
            PenCommand::CurveTo(vec![pt(120, 20), pt(120, 80), pt(100, 100)]),
            PenCommand::QCurveTo(vec![Some(pt(50, 150)), Some(pt(0, 100))]),
            PenCommand::ClosePath,
            PenCommand::MoveTo(pt(10, 10)),
            PenCommand::LineTo(pt(20, 20)),
            PenCommand::EndPath,
            PenCommand::AddComponent {
                glyph_name: "acutecomb".into(),
                transform: Transform::new(1, 0, 0, 1, 30, 200),
            },
        ]
    }

    #[test]
    fn names() {
        let names: Vec<_> = sample_glyph().iter().map(PenCommand::name).collect();
        assert_eq!(
            names,
            [
                "moveTo",
                "lineTo",
                "curveTo",
                "qCurveTo",
                "closePath",
                "moveTo",
                "lineTo",
                "endPath",
                "addComponent"
            ]
        );
    }

    #[test]
    fn replay_into_recording() {
        let _ = env_logger::builder().is_test(true).try_init();
        let commands = sample_glyph();
        let mut recording: Vec<PenCommand<i32>> = Vec::new();
        replay(&commands, &mut recording).unwrap();
        assert_eq!(recording, commands);
    }

    /// Accepts `limit` commands, then rejects everything.
    struct Quota {
        limit: usize,
        seen: usize,
    }

    impl Quota {
        fn take(&mut self) -> Result<(), usize> {
            if self.seen == self.limit {
                return Err(self.seen);
            }
            self.seen += 1;
            Ok(())
        }
    }

    impl Pen<i32> for Quota {
        type Error = usize;

        fn move_to(&mut self, _pt: Point<i32>) -> Result<(), usize> {
            self.take()
        }
        fn line_to(&mut self, _pt: Point<i32>) -> Result<(), usize> {
            self.take()
        }
        fn curve_to(&mut self, _points: &[Point<i32>]) -> Result<(), usize> {
            self.take()
        }
        fn qcurve_to(&mut self, _points: &[Option<Point<i32>>]) -> Result<(), usize> {
            self.take()
        }
        fn close_path(&mut self) -> Result<(), usize> {
            self.take()
        }
        fn end_path(&mut self) -> Result<(), usize> {
            self.take()
        }
        fn add_component(&mut self, _name: &str, _t: Transform<i32>) -> Result<(), usize> {
            self.take()
        }
    }

    #[test]
    fn replay_stops_at_first_error() {
        let mut pen = Quota { limit: 3, seen: 0 };
        assert_eq!(replay(&sample_glyph(), &mut pen), Err(3));
        assert_eq!(pen.seen, 3);
    }
}
