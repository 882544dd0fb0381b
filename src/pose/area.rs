use crate::pose::Landmark;

/// Rough area of a landmark set: the area of the bounding box around every
/// landmark location. Returns `0.0` for an empty set.
pub fn estimate_area(landmarks: &[Landmark]) -> f32 {
    let mut locations = landmarks.iter().map(Landmark::location);
    let first = match locations.next() {
        Some(first) => first,
        None => return 0.0,
    };

    let (min_x, max_x, min_y, max_y) = locations.fold(
        (first.x(), first.x(), first.y(), first.y()),
        |(min_x, max_x, min_y, max_y), point| {
            (
                min_x.min(point.x()),
                max_x.max(point.x()),
                min_y.min(point.y()),
                max_y.max(point.y()),
            )
        },
    );

    (max_x - min_x) * (max_y - min_y)
}
