//! Decorative "flowing cubes" drifting across the banner.
//!
//! Each cube drifts left to right on its own loop and spins through its
//! faces on a second, independent loop. Start delays are negative so the
//! banner is already populated on the first frame.

use rand::Rng;

/// Number of cubes in the banner.
pub const CUBE_COUNT: usize = 30;

const MIN_TOP_PERCENT: f64 = 5.0;
const MAX_TOP_PERCENT: f64 = 85.0;

/// Face of a cube as seen by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeFace {
    Front,
    Right,
    Back,
    Left,
    Top,
    Bottom,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        Self::Front,
        Self::Right,
        Self::Back,
        Self::Left,
        Self::Top,
        Self::Bottom,
    ];

    pub fn glyph(&self) -> char {
        match self {
            Self::Front => '■',
            Self::Right => '▣',
            Self::Back => '□',
            Self::Left => '▤',
            Self::Top => '▥',
            Self::Bottom => '▦',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowingCube {
    /// Vertical position as a percentage of the banner height.
    pub top_percent: f64,
    /// Seconds for one left-to-right pass.
    pub flow_secs: f64,
    /// Seconds for one full spin.
    pub rotate_secs: f64,
    /// Start offset in seconds, in `(-flow_secs, 0]`.
    pub delay_secs: f64,
    pub opacity: f64,
}

impl FlowingCube {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let flow_secs = rng.gen_range(10.0..25.0);
        Self {
            top_percent: rng.gen_range(MIN_TOP_PERCENT..MAX_TOP_PERCENT),
            flow_secs,
            rotate_secs: rng.gen_range(15.0..35.0),
            delay_secs: -rng.gen_range(0.0..flow_secs),
            opacity: rng.gen_range(0.3..0.7),
        }
    }

    /// Horizontal progress in `[0, 1)` after `elapsed_secs`.
    pub fn position(&self, elapsed_secs: f64) -> f64 {
        cycle(elapsed_secs - self.delay_secs, self.flow_secs)
    }

    /// Face shown after `elapsed_secs`. Shares the flow delay.
    pub fn face(&self, elapsed_secs: f64) -> CubeFace {
        let turn = cycle(elapsed_secs - self.delay_secs, self.rotate_secs);
        let index = ((turn * CubeFace::ALL.len() as f64) as usize).min(CubeFace::ALL.len() - 1);
        CubeFace::ALL[index]
    }
}

fn cycle(t: f64, period: f64) -> f64 {
    if period <= 0.0 {
        return 0.0;
    }
    (t / period).rem_euclid(1.0)
}

/// Generate the banner's cubes.
pub fn create_flowing_cubes<R: Rng>(rng: &mut R, count: usize) -> Vec<FlowingCube> {
    (0..count).map(|_| FlowingCube::random(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_cube_parameters_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let cubes = create_flowing_cubes(&mut rng, CUBE_COUNT);
        assert_eq!(cubes.len(), CUBE_COUNT);
        for cube in &cubes {
            assert!((5.0..85.0).contains(&cube.top_percent));
            assert!((10.0..25.0).contains(&cube.flow_secs));
            assert!((15.0..35.0).contains(&cube.rotate_secs));
            assert!(cube.delay_secs <= 0.0 && cube.delay_secs > -cube.flow_secs);
            assert!((0.3..0.7).contains(&cube.opacity));
        }
    }

    #[test]
    fn test_position_wraps() {
        let cube = FlowingCube {
            top_percent: 50.0,
            flow_secs: 10.0,
            rotate_secs: 12.0,
            delay_secs: -2.5,
            opacity: 0.5,
        };
        assert!((cube.position(0.0) - 0.25).abs() < 1e-9);
        assert!((cube.position(7.5) - 0.0).abs() < 1e-9);
        assert!((cube.position(12.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_face_cycles_through_all() {
        let cube = FlowingCube {
            top_percent: 50.0,
            flow_secs: 10.0,
            rotate_secs: 6.0,
            delay_secs: 0.0,
            opacity: 0.5,
        };
        let faces: Vec<CubeFace> = (0..6).map(|s| cube.face(s as f64 + 0.5)).collect();
        assert_eq!(faces, CubeFace::ALL.to_vec());
    }
}
