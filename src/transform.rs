use crate::{error::Error, pose::Point};

/// 2x3 affine matrix mapping normalized pose coordinates onto a canvas.
///
/// | a b tx |
/// | c d ty |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    pub fn identity() -> Self {
        Self::scale(1.0, 1.0)
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            a: sx,
            b: 0.0,
            c: 0.0,
            d: sy,
            tx: 0.0,
            ty: 0.0,
        }
    }

    pub fn translation(tx: f32, ty: f32) -> Self {
        Self {
            tx,
            ty,
            ..Self::identity()
        }
    }

    /// Maps `[0, 1] x [0, 1]` onto a `width x height` canvas.
    pub fn for_canvas(width: u32, height: u32) -> Self {
        Self::scale(width as f32, height as f32)
    }

    /// Apply `self`, then `other`.
    pub fn then(self, other: Self) -> Self {
        Self {
            a: other.a * self.a + other.b * self.c,
            b: other.a * self.b + other.b * self.d,
            c: other.c * self.a + other.d * self.c,
            d: other.c * self.b + other.d * self.d,
            tx: other.a * self.tx + other.b * self.ty + other.tx,
            ty: other.c * self.tx + other.d * self.ty + other.ty,
        }
    }

    pub fn apply(&self, point: Point) -> Result<Point, Error> {
        Point::new(
            self.a * point.x() + self.b * point.y() + self.tx,
            self.c * point.x() + self.d * point.y() + self.ty,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::AffineTransform;
    use crate::pose::Point;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn identity_keeps_points() {
        let point = Point::new(0.3, 0.7).unwrap();
        assert_eq!(AffineTransform::identity().apply(point).unwrap(), point);
    }

    #[test]
    fn canvas_scales_to_pixels() {
        let point = Point::new(0.5, 0.25).unwrap();
        let mapped = AffineTransform::for_canvas(640, 480).apply(point).unwrap();
        assert_approx_eq!(mapped.x(), 320.0);
        assert_approx_eq!(mapped.y(), 120.0);
    }

    #[test]
    fn composition_applies_in_order() {
        let flip_y = AffineTransform {
            d: -1.0,
            ty: 1.0,
            ..AffineTransform::identity()
        };
        let transform = flip_y.then(AffineTransform::scale(100.0, 200.0));
        let mapped = transform.apply(Point::new(0.25, 0.25).unwrap()).unwrap();
        assert_approx_eq!(mapped.x(), 25.0);
        assert_approx_eq!(mapped.y(), 150.0);

        let shifted = AffineTransform::scale(2.0, 2.0).then(AffineTransform::translation(1.0, -1.0));
        let mapped = shifted.apply(Point::new(0.5, 0.5).unwrap()).unwrap();
        assert_approx_eq!(mapped.x(), 2.0);
        assert_approx_eq!(mapped.y(), 0.0);
    }
}
