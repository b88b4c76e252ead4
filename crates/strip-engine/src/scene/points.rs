use rand::Rng;

use crate::coords::Vec2;

/// Number of points in the startup shape.
pub const DEFAULT_POINT_COUNT: usize = 100;

/// Picks one coordinate for index `i`: `i * 4` on an even draw, `i / 4`
/// (integer division) on an odd one.
#[inline]
fn pick_coordinate<R: Rng + ?Sized>(rng: &mut R, i: u32) -> f32 {
    let draw: u32 = rng.r#gen();
    if draw % 2 == 0 { (i * 4) as f32 } else { (i / 4) as f32 }
}

/// Generates `count` logical points.
///
/// X and Y use independent draws, so the shape has no intended structure.
/// Coordinates are always non-negative and bounded by `4 * (count - 1)`.
pub fn generate_points<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Vec2> {
    (0..count as u32)
        .map(|i| {
            let x = pick_coordinate(rng, i);
            let y = pick_coordinate(rng, i);
            Vec2::new(x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_count_yields_one_hundred_points() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_points(&mut rng, DEFAULT_POINT_COUNT).len(), 100);
    }

    #[test]
    fn coordinates_are_non_negative_across_seeds() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            for p in generate_points(&mut rng, DEFAULT_POINT_COUNT) {
                assert!(p.x >= 0.0 && p.y >= 0.0, "negative point {p:?} for seed {seed}");
            }
        }
    }

    #[test]
    fn each_coordinate_is_one_of_the_two_formulas() {
        let mut rng = StdRng::seed_from_u64(42);
        for (i, p) in generate_points(&mut rng, DEFAULT_POINT_COUNT).iter().enumerate() {
            let i = i as u32;
            let allowed = [(i * 4) as f32, (i / 4) as f32];
            assert!(allowed.contains(&p.x), "x={} at i={i}", p.x);
            assert!(allowed.contains(&p.y), "y={} at i={i}", p.y);
        }
    }

    #[test]
    fn both_formulas_occur_across_seeds() {
        let (mut scaled, mut divided) = (false, false);
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            for (i, p) in generate_points(&mut rng, DEFAULT_POINT_COUNT).iter().enumerate().skip(1) {
                let i = i as u32;
                for c in [p.x, p.y] {
                    scaled |= c == (i * 4) as f32;
                    divided |= c == (i / 4) as f32;
                }
            }
        }
        assert!(scaled, "no coordinate took i * 4");
        assert!(divided, "no coordinate took i / 4");
    }

    #[test]
    fn first_point_is_origin_regardless_of_draw() {
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(generate_points(&mut rng, 1)[0], Vec2::zero());
        }
    }

    #[test]
    fn same_seed_is_deterministic() {
        let a = generate_points(&mut StdRng::seed_from_u64(3), 50);
        let b = generate_points(&mut StdRng::seed_from_u64(3), 50);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_points(&mut rng, 0).is_empty());
    }
}
