//! Sampling an expression over a range of `x` values, producing the points of its curve.

use graphx_parser::parser::ast::expr::Expr;
use log::debug;
use super::{eval::Eval, point::GraphPoint};

/// The largest number of points [`sample`] produces for one expression.
pub const MAX_POINTS: usize = 1_000_000;

/// The range and resolution over which to sample an expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleOptions {
    /// The first `x` value to sample.
    pub min_x: f64,

    /// The largest `x` value that may be sampled.
    pub max_x: f64,

    /// The distance between consecutive `x` values.
    pub delta_x: f64,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            min_x: -10.0,
            max_x: 10.0,
            delta_x: 0.01,
        }
    }
}

impl SampleOptions {
    /// Returns true if sampling with these options produces any points.
    ///
    /// Options whose range would need more than [`MAX_POINTS`] points are not valid.
    pub fn is_valid(&self) -> bool {
        self.delta_x.is_finite()
            && self.delta_x > 0.0
            && self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_x <= self.max_x
            && self.steps() < MAX_POINTS as f64
    }

    /// The number of whole steps of `delta_x` between `min_x` and `max_x`.
    fn steps(&self) -> f64 {
        ((self.max_x - self.min_x) / self.delta_x).floor()
    }
}

/// Evaluates `expr` at `min_x`, `min_x + delta_x`, `min_x + 2 * delta_x`, and so on, while `x`
/// does not exceed `max_x`.
///
/// Every point is kept, including those whose `y` value is infinite or NaN, so the caller can
/// decide how to draw discontinuities. Invalid options (see [`SampleOptions::is_valid`]) produce
/// no points.
pub fn sample(expr: &Expr, options: SampleOptions) -> Vec<GraphPoint<f64>> {
    if !options.is_valid() {
        debug!("not sampling `{}` with invalid options {:?}", expr, options);
        return Vec::new();
    }

    // computing each x from its index avoids accumulating rounding error over many steps
    let points = (0..=options.steps() as u64)
        .map(|i| options.min_x + i as f64 * options.delta_x)
        .take_while(|&x| x <= options.max_x)
        .map(|x| GraphPoint(x, expr.evaluate(x)))
        .collect::<Vec<_>>();

    debug!("sampled {} points of `{}`", points.len(), expr);
    points
}

#[cfg(test)]
mod tests {
    use graphx_parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn samples_inclusive_range() {
        let expr = parse("x^2").unwrap();
        let points = sample(&expr, SampleOptions { min_x: -2.0, max_x: 2.0, delta_x: 1.0 });
        assert_eq!(points, vec![
            GraphPoint(-2.0, 4.0),
            GraphPoint(-1.0, 1.0),
            GraphPoint(0.0, 0.0),
            GraphPoint(1.0, 1.0),
            GraphPoint(2.0, 4.0),
        ]);
    }

    #[test]
    fn keeps_non_finite_points() {
        let expr = parse("1/x").unwrap();
        let points = sample(&expr, SampleOptions { min_x: -1.0, max_x: 1.0, delta_x: 0.5 });
        assert_eq!(points.len(), 5);
        assert_eq!(points[2], GraphPoint(0.0, f64::INFINITY));
        assert!(!points[2].is_finite());
        assert!(points[3].is_finite());
    }

    #[test]
    fn default_window() {
        let expr = parse("x").unwrap();
        let points = sample(&expr, SampleOptions::default());
        assert!(points.len() >= 2000);
        assert_eq!(points[0], GraphPoint(-10.0, -10.0));
        assert!(points.iter().all(|point| point.0 <= 10.0));
    }

    #[test]
    fn point_count_is_bounded() {
        let expr = parse("x").unwrap();
        let options = SampleOptions { min_x: 0.0, max_x: 1.0, delta_x: 1.0 / 999_990.0 };
        assert!(options.is_valid());
        let points = sample(&expr, options);
        assert!(points.len() <= MAX_POINTS);
        assert!(points.len() >= 999_990);

        // steps too small to move `x` still end
        let stuck = SampleOptions { min_x: 1e20, max_x: 1e20, delta_x: 1.0 };
        assert_eq!(sample(&expr, stuck), vec![GraphPoint(1e20, 1e20)]);
    }

    #[test]
    fn invalid_options() {
        let expr = parse("x").unwrap();
        for options in [
            SampleOptions { min_x: 0.0, max_x: 1.0, delta_x: 0.0 },
            SampleOptions { min_x: 0.0, max_x: 1.0, delta_x: -1.0 },
            SampleOptions { min_x: 0.0, max_x: 1.0, delta_x: f64::NAN },
            SampleOptions { min_x: 2.0, max_x: 1.0, delta_x: 0.1 },
            SampleOptions { min_x: -10.0, max_x: 10.0, delta_x: 1e-300 },
            SampleOptions { min_x: 0.0, max_x: f64::MAX, delta_x: 1.0 },
        ] {
            assert!(sample(&expr, options).is_empty(), "{options:?}");
        }
    }
}
