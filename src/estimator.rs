// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The distance-estimating iterator.
//!
//! For a point `c` we iterate `z -> z² + c` starting from `z = c`,
//! carrying the derivative `dz/dc` along with it.  If the orbit leaves
//! the escape radius we know three useful things about the point: how
//! long it took (smoothed into a fractional "dwell"), how far it is
//! from the boundary of the set (from the derivative), and the angle at
//! which it left.  If the orbit never leaves, the point is treated as
//! part of the set.
//!
//! Orbits that settle into a cycle would otherwise burn the entire
//! iteration budget, which is most of the cost of the big black (here,
//! white) heart of the set.  A second orbit runs at twice the speed of
//! the first; if the two ever land on exactly the same value, the orbit
//! is periodic and can't escape.
//!
//! The comparison is an exact floating point equality.  That matches the
//! reference renders, but it means the iteration at which a cycle is
//! caught can differ between platforms with different rounding, which
//! can move a handful of boundary pixels between inside and outside.

use num::Complex;

/// What the iterator learned about an escaping point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Escape {
    /// Estimated distance to the boundary of the set, in plane units.
    pub distance: f64,
    /// Smoothed escape time, always at least 1.
    pub dwell: f64,
    /// The angle of the final iterate, in (-π, π].
    pub phase: f64,
}

/// The fate of a single point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Orbit {
    /// The orbit stayed inside the escape radius for the whole budget.
    /// If it was caught cycling, `cycle` holds the iteration count at
    /// which that happened.
    Bounded {
        /// The iteration at which the slow and fast orbits met, if they did.
        cycle: Option<usize>,
    },
    /// The orbit left the escape radius.
    Escaped(Escape),
}

impl Orbit {
    /// True for points we treat as members of the set.
    pub fn is_interior(&self) -> bool {
        match *self {
            Orbit::Bounded { .. } => true,
            Orbit::Escaped(_) => false,
        }
    }
}

/// The escape radius used when nobody asks for another one.
pub const DEFAULT_ESCAPE_RADIUS: f64 = 10.0;

/// Iterate the point `c` for at most `max_iterations` steps.  The
/// count starts at 1 because the orbit starts at `c` rather than 0.
///
/// `escape_radius` must be greater than 1; the renderer checks this
/// before calling in here.
pub fn estimate(c: Complex<f64>, max_iterations: usize, escape_radius: f64) -> Orbit {
    let mut iterations = 1;
    let mut z = c;
    let mut dz = Complex::new(1.0, 0.0);
    let mut z_fast = z;

    while z.norm() <= escape_radius && iterations < max_iterations {
        dz = z * dz * 2.0 + 1.0;
        z = z * z + c;
        iterations += 1;

        z_fast = z_fast * z_fast + c;
        z_fast = z_fast * z_fast + c;

        if z == z_fast {
            return Orbit::Bounded {
                cycle: Some(iterations),
            };
        }
    }

    if iterations >= max_iterations {
        return Orbit::Bounded { cycle: None };
    }

    let magnitude = z.norm();
    Orbit::Escaped(Escape {
        distance: magnitude * magnitude.ln() / dz.norm(),
        dwell: iterations as f64 + magnitude.log2().log2() - escape_radius.log2().log2(),
        phase: z.arg(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(orbit: Orbit) -> Escape {
        match orbit {
            Orbit::Escaped(escape) => escape,
            Orbit::Bounded { .. } => panic!("expected {:?} to escape", orbit),
        }
    }

    #[test]
    fn origin_is_a_fixed_point() {
        for &limit in &[2, 3, 1000, 1_000_000] {
            assert_eq!(
                estimate(Complex::new(0.0, 0.0), limit, DEFAULT_ESCAPE_RADIUS),
                Orbit::Bounded { cycle: Some(2) }
            );
        }
    }

    #[test]
    fn cycles_are_caught_before_the_budget_runs_out() {
        // -1 bounces between 0 and -1 forever.
        let orbit = estimate(Complex::new(-1.0, 0.0), 1_000_000, DEFAULT_ESCAPE_RADIUS);
        match orbit {
            Orbit::Bounded { cycle: Some(n) } => assert!(n < 10),
            _ => panic!("period two orbit not detected: {:?}", orbit),
        }
        // The tip of the set sits on the fixed point 2.
        let orbit = estimate(Complex::new(-2.0, 0.0), 1_000_000, DEFAULT_ESCAPE_RADIUS);
        assert_eq!(orbit, Orbit::Bounded { cycle: Some(2) });
    }

    #[test]
    fn exhausted_budget_is_bounded() {
        // Inside the main cardioid but converging slowly enough that the
        // two orbits never agree exactly in ten steps.
        let orbit = estimate(Complex::new(-0.7, 0.2), 10, DEFAULT_ESCAPE_RADIUS);
        assert_eq!(orbit, Orbit::Bounded { cycle: None });
        assert!(orbit.is_interior());
    }

    #[test]
    fn a_budget_of_one_classifies_everything_as_bounded() {
        let orbit = estimate(Complex::new(5.0, 5.0), 1, DEFAULT_ESCAPE_RADIUS);
        assert_eq!(orbit, Orbit::Bounded { cycle: None });
    }

    #[test]
    fn dwell_is_smoothed_between_integer_counts() {
        // 1, 2, 5, 26: escapes with the counter at 4.
        let escape = escaped(estimate(Complex::new(1.0, 0.0), 100, 10.0));
        assert!(escape.dwell > 4.0 && escape.dwell < 6.0, "{:?}", escape);
        assert!((escape.dwell - 4.5008).abs() < 1e-3, "{:?}", escape);
        assert_eq!(escape.phase, 0.0);
    }

    #[test]
    fn large_points_escape_almost_at_once() {
        // 5+5i lands on 5+55i after a single step.
        let escape = escaped(estimate(Complex::new(5.0, 5.0), 100, 10.0));
        assert!(escape.dwell > 2.0 && escape.dwell < 3.0, "{:?}", escape);
        assert!(escape.phase > 0.0 && escape.phase < ::std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn distance_estimate_follows_the_derivative() {
        // 1 -> 2 -> 5 -> 26, dz: 1 -> 3 -> 13 -> 131.
        let escape = escaped(estimate(Complex::new(1.0, 0.0), 100, 10.0));
        let expected = 26.0 * 26f64.ln() / 131.0;
        assert!((escape.distance - expected).abs() < 1e-12, "{:?}", escape);
    }

    #[test]
    fn escaping_points_are_well_formed() {
        let points = [
            Complex::new(0.4, 0.4),
            Complex::new(-2.5, -1.75),
            Complex::new(0.2501, 0.0),
            Complex::new(-0.75, 0.1),
            Complex::new(-1.5, -1.5),
        ];
        for c in points.iter() {
            let escape = escaped(estimate(*c, 10_000, DEFAULT_ESCAPE_RADIUS));
            assert!(escape.distance >= 0.0, "{} {:?}", c, escape);
            assert!(escape.dwell >= 1.0, "{} {:?}", c, escape);
            assert!(escape.phase > -::std::f64::consts::PI, "{} {:?}", c, escape);
            assert!(escape.phase <= ::std::f64::consts::PI, "{} {:?}", c, escape);
        }
    }
}
