//! Built-in output format implementations.

mod people_combined;
mod people_standard;
mod roi_flat;
mod roi_json;

#[cfg(test)]
mod tests;

pub use people_combined::PeopleCombinedFormat;
pub use people_standard::PeopleStandardFormat;
pub use roi_flat::RoiFlatFormat;
pub use roi_json::RoiJsonFormat;

use crate::geometry::Point;

/// Round a logical point to whole output pixels.
///
/// Halves round up, toward positive infinity, so `-0.5` becomes `0`.
pub(crate) fn integer_point(point: Point) -> (i64, i64) {
    (round_half_up(point.x), round_half_up(point.y))
}

fn round_half_up(value: f32) -> i64 {
    (value + 0.5).floor() as i64
}

/// `x;y;x;y;...` for a run of logical points.
pub(crate) fn semicolon_list(points: impl IntoIterator<Item = Point>) -> String {
    points
        .into_iter()
        .map(integer_point)
        .map(|(x, y)| format!("{};{}", x, y))
        .collect::<Vec<_>>()
        .join(";")
}
