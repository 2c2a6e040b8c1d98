//! Per-face colors for the terrain surface. Purely cosmetic: a gradient
//! across the lattice derived from the cell's index ratios.

use terrain::config::GRID_POINTS;

/// RGBA for one triangle of cell `(i, j)`.
///
/// Red rises west-to-east, green falls with it, blue rises south-to-north.
/// The two triangles of a cell get slightly different alpha so the additive
/// blend shows the diagonal seam.
pub fn face_color(i: usize, j: usize, second_triangle: bool) -> [f32; 4] {
    let n = GRID_POINTS as f32;
    let r = i as f32 / n;
    let b = j as f32 / n;
    let alpha = if second_triangle { 0.8 } else { 0.7 };
    [r, 1.0 - r, b, alpha]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_in_unit_range() {
        for (i, j) in [(0, 0), (GRID_POINTS - 1, GRID_POINTS - 1), (10, 31)] {
            for tri in [false, true] {
                let c = face_color(i, j, tri);
                for ch in c {
                    assert!((0.0..=1.0).contains(&ch), "channel out of range: {ch}");
                }
            }
        }
    }

    #[test]
    fn test_red_and_green_are_complementary() {
        for i in 0..GRID_POINTS {
            let c = face_color(i, 5, false);
            assert!((c[0] + c[1] - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_triangle_pair_differs_only_in_alpha() {
        let a = face_color(12, 20, false);
        let b = face_color(12, 20, true);
        assert_eq!(a[..3], b[..3]);
        assert_eq!(a[3], 0.7);
        assert_eq!(b[3], 0.8);
    }
}
