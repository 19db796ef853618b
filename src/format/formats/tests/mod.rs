//! Unit tests for output format implementations.
//!
//! Sessions are built through the engine on a surface the same size as the
//! output, so logical coordinates equal the clicked ones.


use super::{integer_point, semicolon_list};
use crate::geometry::{Extent, Point};
use crate::session::{AnnotationSession, Mode, OutputSize};

const SIZE: u32 = 100;

pub(super) fn surface() -> Extent {
    Extent::new(SIZE as f32, SIZE as f32)
}

pub(super) fn session() -> AnnotationSession {
    AnnotationSession::new(OutputSize::new(SIZE, SIZE))
}

/// Click the points then finish the current shape.
pub(super) fn draw(session: &mut AnnotationSession, points: &[(f32, f32)]) {
    for &(x, y) in points {
        session.add_point(Point::new(x, y), surface()).unwrap();
    }
    session.finish().unwrap();
}

pub(super) fn people_session(lines: &[&[(f32, f32)]]) -> AnnotationSession {
    let mut session = session();
    session.set_mode(Mode::People);
    for line in lines {
        draw(&mut session, line);
    }
    session
}

#[test]
fn test_integer_point_rounds_halves_up() {
    assert_eq!(integer_point(Point::new(0.5, 2.5)), (1, 3));
    assert_eq!(integer_point(Point::new(-0.5, -1.5)), (0, -1));
    assert_eq!(integer_point(Point::new(-0.75, 3.25)), (-1, 3));
    assert_eq!(
        semicolon_list([Point::new(-0.5, 0.0), Point::new(99.5, 100.0)]),
        "0;0;100;100"
    );
}
