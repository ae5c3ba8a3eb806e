use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RootFindingError {
    #[error("Root not bracketed: f({a}) = {fa}, f({b}) = {fb}")]
    NotBracketed { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("Function is not finite at the bracket end: f({x}) = {fx}")]
    NonFinite { x: f64, fx: f64 },

    #[error("Root finder failed to converge after {iterations} iterations")]
    NoConvergence { iterations: usize },
}

/// Stopping rules for [`brent_root_find`].
///
/// The search terminates once the bracket half-width drops below
/// `(xtol + rtol·|x|)/2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrentOptions {
    pub xtol: f64,
    pub rtol: f64,
    pub max_iterations: usize,
}

impl Default for BrentOptions {
    fn default() -> Self {
        Self {
            xtol: 2e-12,
            rtol: 4.0 * f64::EPSILON,
            max_iterations: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult {
    pub root: f64,
    pub iterations: usize,
    pub function_calls: usize,
}

/// Brent's bracketed root search combining bisection, secant steps and inverse
/// quadratic interpolation.
///
/// Both ends must evaluate to finite values of opposite sign (or zero).
pub fn brent_root_find<F>(
    f: F,
    a: f64,
    b: f64,
    options: &BrentOptions,
) -> Result<RootResult, RootFindingError>
where
    F: Fn(f64) -> f64,
{
    let mut x_pre = a;
    let mut x_cur = b;
    let mut f_pre = f(x_pre);
    let mut f_cur = f(x_cur);
    let mut calls = 2;

    for (x, fx) in [(x_pre, f_pre), (x_cur, f_cur)] {
        if !fx.is_finite() {
            return Err(RootFindingError::NonFinite { x, fx });
        }
    }
    if f_pre * f_cur > 0.0 {
        return Err(RootFindingError::NotBracketed {
            a,
            b,
            fa: f_pre,
            fb: f_cur,
        });
    }
    if f_pre == 0.0 {
        return Ok(RootResult {
            root: x_pre,
            iterations: 0,
            function_calls: calls,
        });
    }
    if f_cur == 0.0 {
        return Ok(RootResult {
            root: x_cur,
            iterations: 0,
            function_calls: calls,
        });
    }

    let mut x_blk = 0.0;
    let mut f_blk = 0.0;
    let mut s_pre = 0.0;
    let mut s_cur = 0.0;

    for iteration in 0..options.max_iterations {
        if f_pre != 0.0 && f_cur != 0.0 && (f_pre.is_sign_negative() != f_cur.is_sign_negative())
        {
            x_blk = x_pre;
            f_blk = f_pre;
            s_pre = x_cur - x_pre;
            s_cur = s_pre;
        }
        if f_blk.abs() < f_cur.abs() {
            x_pre = x_cur;
            x_cur = x_blk;
            x_blk = x_pre;

            f_pre = f_cur;
            f_cur = f_blk;
            f_blk = f_pre;
        }

        let delta = 0.5 * (options.xtol + options.rtol * x_cur.abs());
        let s_bis = 0.5 * (x_blk - x_cur);
        if f_cur == 0.0 || s_bis.abs() < delta {
            return Ok(RootResult {
                root: x_cur,
                iterations: iteration + 1,
                function_calls: calls,
            });
        }

        if s_pre.abs() > delta && f_cur.abs() < f_pre.abs() {
            let s_try = if x_pre == x_blk {
                -f_cur * (x_cur - x_pre) / (f_cur - f_pre)
            } else {
                let d_pre = (f_pre - f_cur) / (x_pre - x_cur);
                let d_blk = (f_blk - f_cur) / (x_blk - x_cur);
                -f_cur * (f_blk * d_blk - f_pre * d_pre) / (d_blk * d_pre * (f_blk - f_pre))
            };
            if 2.0 * s_try.abs() < s_pre.abs().min(3.0 * s_bis.abs() - delta) {
                s_pre = s_cur;
                s_cur = s_try;
            } else {
                s_pre = s_bis;
                s_cur = s_bis;
            }
        } else {
            s_pre = s_bis;
            s_cur = s_bis;
        }

        x_pre = x_cur;
        f_pre = f_cur;
        if s_cur.abs() > delta {
            x_cur += s_cur;
        } else {
            x_cur += if s_bis > 0.0 { delta } else { -delta };
        }
        f_cur = f(x_cur);
        calls += 1;
    }

    Err(RootFindingError::NoConvergence {
        iterations: options.max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn finds_square_root_of_two() {
        let result =
            brent_root_find(|x| x * x - 2.0, 0.0, 2.0, &BrentOptions::default()).unwrap();
        assert_abs_diff_eq!(result.root, 2f64.sqrt(), epsilon = 1e-11);
    }

    #[test]
    fn respects_loose_absolute_tolerance() {
        let options = BrentOptions {
            xtol: 1e-5,
            max_iterations: 1000,
            ..Default::default()
        };
        let result = brent_root_find(|x: f64| x.cos() - x, 0.0, 1.0, &options).unwrap();
        assert_abs_diff_eq!(result.root, 0.739_085_133_215_160_6, epsilon = 1e-5);
    }

    #[test]
    fn returns_endpoint_when_it_is_an_exact_root() {
        let result = brent_root_find(|x| x - 1.0, 1.0, 3.0, &BrentOptions::default()).unwrap();
        assert_eq!(result.root, 1.0);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn fails_when_root_is_not_bracketed() {
        let result = brent_root_find(|x| x * x + 1.0, -1.0, 1.0, &BrentOptions::default());
        assert!(matches!(result, Err(RootFindingError::NotBracketed { .. })));
    }

    #[test]
    fn rejects_non_finite_bracket_ends() {
        let options = BrentOptions::default();
        let nan_at_zero = |x: f64| if x == 0.0 { f64::NAN } else { -1.0 };
        let nan_end = brent_root_find(nan_at_zero, 0.0, 1.0, &options);
        assert!(matches!(nan_end, Err(RootFindingError::NonFinite { x, .. }) if x == 0.0));

        let infinite_end = brent_root_find(|x| (1.0 - x).ln(), 0.5, 1.0, &options);
        assert!(matches!(infinite_end, Err(RootFindingError::NonFinite { x, .. }) if x == 1.0));
    }

    #[test]
    fn fails_when_iteration_budget_is_exhausted() {
        let options = BrentOptions {
            xtol: 0.0,
            rtol: 0.0,
            max_iterations: 2,
        };
        let result = brent_root_find(|x: f64| x.powi(3) - 0.3, 0.0, 10.0, &options);
        assert!(matches!(
            result,
            Err(RootFindingError::NoConvergence { iterations: 2 })
        ));
    }
}
