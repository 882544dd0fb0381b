//! Geometry of a pose wireframe: how big to draw it and in which order.
//!
//! Pixel output is left to a [`Canvas`]; this module only produces scaled,
//! transformed [`DrawInstruction`]s.

use crate::{error::Error, pose::Pose, pose::Point, transform::AffineTransform};

/// Area of a pose that fills most of the frame, as a fraction of the frame.
pub const TYPICAL_LARGE_POSE_AREA: f32 = 0.35;

/// Largest drawing scale, used for poses at least as large as the typical area.
pub const MAX_SCALE: f32 = 1.0;

/// Smallest drawing scale, used for poses with no area.
pub const MIN_SCALE: f32 = 0.6;

pub const DEFAULT_LANDMARK_RADIUS: &str = "14";
pub const DEFAULT_CONNECTION_WIDTH: &str = "12";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub mod colors {
    use super::Rgb;

    pub const LANDMARK_FILL: Rgb = Rgb(255, 255, 255);
    pub const LANDMARK_STROKE: Rgb = Rgb(85, 85, 85);

    /// Gradient stroked along every connection, from start to end.
    pub const CONNECTION_GRADIENT: [(Rgb, f32); 6] = [
        (Rgb(52, 199, 89), 0.0),   // green
        (Rgb(255, 204, 0), 0.2),   // yellow
        (Rgb(255, 149, 0), 0.33),  // orange
        (Rgb(255, 59, 48), 0.5),   // red
        (Rgb(175, 82, 222), 0.66), // purple
        (Rgb(0, 122, 255), 0.8),   // blue
    ];
}

/// Size multiplier for wireframe marks, derived from the pose area.
///
/// Linear between [`MIN_SCALE`] at zero area and [`MAX_SCALE`] at
/// [`TYPICAL_LARGE_POSE_AREA`], clamped above. NaN or non-positive areas
/// draw at [`MIN_SCALE`].
pub fn drawing_scale(area: f32) -> f32 {
    let ratio = area / TYPICAL_LARGE_POSE_AREA;
    if ratio.is_nan() || ratio <= 0.0 {
        MIN_SCALE
    } else if ratio >= 1.0 {
        MAX_SCALE
    } else {
        ratio * (MAX_SCALE - MIN_SCALE) + MIN_SCALE
    }
}

/// Split the line from `start` to `end` into one piece per stop of
/// [`colors::CONNECTION_GRADIENT`], each running from its stop to the next
/// (the last to `end`) in that stop's color.
pub fn gradient_segments(start: Point, end: Point) -> Result<Vec<(Point, Point, Rgb)>, Error> {
    let lerp = |t: f32| {
        Point::new(
            start.x() + (end.x() - start.x()) * t,
            start.y() + (end.y() - start.y()) * t,
        )
    };
    let stops = &colors::CONNECTION_GRADIENT;
    stops
        .iter()
        .enumerate()
        .map(|(i, &(color, from))| -> Result<_, Error> {
            let to = stops.get(i + 1).map_or(1.0, |&(_, next)| next);
            Ok((lerp(from)?, lerp(to)?, color))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawInstruction {
    /// A connection, stroked with [`colors::CONNECTION_GRADIENT`] as laid out
    /// by [`gradient_segments`].
    Line { start: Point, end: Point, width: f32 },
    /// A landmark, filled with [`colors::LANDMARK_FILL`] and outlined with
    /// [`colors::LANDMARK_STROKE`].
    Marker { center: Point, radius: f32 },
}

/// Consumer of draw instructions.
pub trait Canvas {
    fn draw(&mut self, instruction: &DrawInstruction) -> Result<(), Error>;
}

/// Records instructions instead of drawing them.
impl Canvas for Vec<DrawInstruction> {
    fn draw(&mut self, instruction: &DrawInstruction) -> Result<(), Error> {
        self.push(*instruction);
        Ok(())
    }
}

/// Nominal sizes of wireframe marks, before scaling.
#[derive(Debug, Clone, Copy, structopt::StructOpt)]
pub struct Style {
    /// Landmark marker radius in pixels at full scale.
    #[structopt(long, default_value = DEFAULT_LANDMARK_RADIUS)]
    pub landmark_radius: f32,
    /// Connection line width in pixels at full scale.
    #[structopt(long, default_value = DEFAULT_CONNECTION_WIDTH)]
    pub connection_width: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            landmark_radius: DEFAULT_LANDMARK_RADIUS.parse().unwrap(),
            connection_width: DEFAULT_CONNECTION_WIDTH.parse().unwrap(),
        }
    }
}

impl Style {
    /// Instructions for one pose: every connection, then every landmark, so
    /// markers sit on top of line ends.
    pub fn wireframe(
        &self,
        pose: &Pose,
        transform: &AffineTransform,
    ) -> Result<Vec<DrawInstruction>, Error> {
        let scale = drawing_scale(pose.area());
        let width = self.connection_width * scale;
        let radius = self.landmark_radius * scale;

        let mut instructions =
            Vec::with_capacity(pose.connections().len() + pose.landmarks().len());

        for connection in pose.connections() {
            instructions.push(DrawInstruction::Line {
                start: transform.apply(connection.start())?,
                end: transform.apply(connection.end())?,
                width,
            });
        }

        for landmark in pose.landmarks() {
            instructions.push(DrawInstruction::Marker {
                center: transform.apply(landmark.location())?,
                radius,
            });
        }

        Ok(instructions)
    }
}

/// Draw every pose onto `canvas`, in order.
pub fn render_poses<C>(
    canvas: &mut C,
    poses: &[Pose],
    style: &Style,
    transform: &AffineTransform,
) -> Result<(), Error>
where
    C: Canvas + ?Sized,
{
    for pose in poses {
        for instruction in style.wireframe(pose, transform)? {
            canvas.draw(&instruction)?;
        }
    }
    Ok(())
}

#[cfg(feature = "gui")]
mod opencv_canvas {
    use super::{colors, gradient_segments, Canvas, DrawInstruction, Rgb};
    use crate::{error::Error, pose::Point};
    use num_traits::ToPrimitive;
    use opencv::{
        core::{Mat, Point2i, Scalar},
        imgproc::{FILLED, LINE_AA},
    };

    fn bgr(Rgb(r, g, b): Rgb) -> Scalar {
        Scalar::from((f64::from(b), f64::from(g), f64::from(r)))
    }

    fn to_point2i(point: Point) -> Result<Point2i, Error> {
        Ok(Point2i::new(
            point
                .x()
                .round()
                .to_i32()
                .ok_or(Error::ConvertPointToPoint2i(point))?,
            point
                .y()
                .round()
                .to_i32()
                .ok_or(Error::ConvertPointToPoint2i(point))?,
        ))
    }

    fn thickness(value: f32) -> i32 {
        value.round().to_i32().unwrap_or(1).max(1)
    }

    impl Canvas for Mat {
        fn draw(&mut self, instruction: &DrawInstruction) -> Result<(), Error> {
            match *instruction {
                DrawInstruction::Line { start, end, width } => {
                    for (from, to, color) in gradient_segments(start, end)? {
                        opencv::imgproc::line(
                            self,
                            to_point2i(from)?,
                            to_point2i(to)?,
                            bgr(color),
                            thickness(width),
                            LINE_AA,
                            0, // shift
                        )
                        .map_err(Error::DrawLine)?;
                    }
                    Ok(())
                }
                DrawInstruction::Marker { center, radius } => {
                    let center = to_point2i(center)?;
                    let radius = thickness(radius);
                    opencv::imgproc::circle(
                        self,
                        center,
                        radius,
                        bgr(colors::LANDMARK_FILL),
                        FILLED,
                        LINE_AA,
                        0, // shift
                    )
                    .map_err(Error::DrawCircle)?;
                    opencv::imgproc::circle(
                        self,
                        center,
                        radius,
                        bgr(colors::LANDMARK_STROKE),
                        2, // thickness
                        LINE_AA,
                        0, // shift
                    )
                    .map_err(Error::DrawCircle)
                }
            }
        }
    }
}
