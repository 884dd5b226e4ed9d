//! Chart transforms, composed from imageproc projections
//!
//! A transform is a plain [`Projection`] value handed to every drawing call,
//! so no canvas-wide transform state can leak from one call into the next.
//! Composition follows imageproc: `p * q` applies `q` first.

use imageproc::geometric_transformations::Projection;

pub fn identity() -> Projection {
    Projection::translate(0.0, 0.0)
}

/// Mirror the Y axis inside a surface of the given height, turning a Y-up
/// space into the Y-down device space.
pub fn flip_y(height: f32) -> Projection {
    Projection::translate(0.0, height) * Projection::scale(1.0, -1.0)
}

/// Rotation about (cx, cy). Device space is Y-down, so a negative angle
/// turns counter-clockwise on screen.
pub fn rotation_about(radians: f32, cx: f32, cy: f32) -> Projection {
    Projection::translate(cx, cy) * Projection::rotate(radians) * Projection::translate(-cx, -cy)
}

#[cfg(test)]
pub(crate) fn assert_close(actual: (f32, f32), expected: (f32, f32)) {
    assert!(
        (actual.0 - expected.0).abs() < 1e-3 && (actual.1 - expected.1).abs() < 1e-3,
        "expected {expected:?}, got {actual:?}"
    );
}

/// Whether two transforms agree on a few reference points
#[cfg(test)]
pub(crate) fn same_transform(a: &Projection, b: &Projection) -> bool {
    [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (100.0, 37.0)]
        .into_iter()
        .all(|p| {
            let (pa, pb) = (*a * p, *b * p);
            (pa.0 - pb.0).abs() < 1e-3 && (pa.1 - pb.1).abs() < 1e-3
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_product_applies_right_first() {
        let t = Projection::translate(10.0, 0.0) * Projection::scale(2.0, 2.0);
        assert_close(t * (1.0, 1.0), (12.0, 2.0));

        let t = Projection::scale(2.0, 2.0) * Projection::translate(10.0, 0.0);
        assert_close(t * (1.0, 1.0), (22.0, 2.0));
    }

    #[test]
    fn test_rotation_about_center_moves_top_to_left() {
        let t = rotation_about(-FRAC_PI_2, 512.0, 512.0);
        assert_close(t * (512.0, 32.0), (32.0, 512.0));
        // Fixed point
        assert_close(t * (512.0, 512.0), (512.0, 512.0));
    }

    #[test]
    fn test_flip_y() {
        let t = flip_y(100.0);
        assert_close(t * (3.0, 0.0), (3.0, 100.0));
        assert_close(t * (3.0, 100.0), (3.0, 0.0));
    }

    #[test]
    fn test_invert_round_trips_points() {
        let t = flip_y(1024.0) * Projection::translate(64.0, 64.0) * Projection::scale(896.0, 896.0);
        let (x, y) = t * (0.4, 0.6);
        assert_close(t.invert() * (x, y), (0.4, 0.6));
    }

    #[test]
    fn test_identity_and_same_transform() {
        assert_close(identity() * (5.0, 7.0), (5.0, 7.0));
        assert!(same_transform(&identity(), &Projection::scale(1.0, 1.0)));
        assert!(!same_transform(&identity(), &flip_y(1.0)));
    }
}
