use std::f64::consts::PI;

const EULER_MASCHERONI: f64 = 0.577_215_664_901_532_9;

const LANCZOS_G: f64 = 7.0;
const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// The gamma function Γ(x) for real arguments (Lanczos approximation, g = 7).
///
/// Accurate to roughly 15 significant digits over the positive reals; negative
/// non-integer arguments go through the reflection formula. Poles return `NaN`.
pub fn gamma(x: f64) -> f64 {
    if x <= 0.0 && x.fract() == 0.0 {
        return f64::NAN;
    }
    if x < 0.5 {
        return PI / ((PI * x).sin() * gamma(1.0 - x));
    }

    let x = x - 1.0;
    let mut sum = LANCZOS_COEFFICIENTS[0];
    for (k, &c) in LANCZOS_COEFFICIENTS.iter().enumerate().skip(1) {
        sum += c / (x + k as f64);
    }
    let t = x + LANCZOS_G + 0.5;
    (2.0 * PI).sqrt() * t.powf(x + 0.5) * (-t).exp() * sum
}

/// n! as a float; exact up to 22!.
pub fn factorial(n: u32) -> f64 {
    (2..=n).fold(1.0, |acc, k| acc * k as f64)
}

/// Binomial coefficient C(n, k) as a float.
pub fn binomial(n: u32, k: u32) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, j| acc * (n - j) as f64 / (j + 1) as f64)
}

/// Digamma ψ(n) at a positive integer: −γ + Σ_{k<n} 1/k.
pub fn digamma_int(n: u32) -> f64 {
    (1..n).fold(-EULER_MASCHERONI, |acc, k| acc + 1.0 / k as f64)
}

/// Trigamma ψ'(n) at a positive integer: π²/6 − Σ_{k<n} 1/k².
pub fn trigamma_int(n: u32) -> f64 {
    (1..n).fold(PI * PI / 6.0, |acc, k| acc - 1.0 / (k as f64 * k as f64))
}

/// Ratio x / sinh(x), continued through its series near zero.
pub fn x_over_sinh(x: f64) -> f64 {
    if x.abs() < 1e-4 {
        1.0 - x * x / 6.0
    } else {
        x / x.sinh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gamma_matches_factorial_at_integers() {
        for n in 1..15u32 {
            assert_relative_eq!(gamma(n as f64 + 1.0), factorial(n), max_relative = 1e-13);
        }
    }

    #[test]
    fn gamma_at_half_integers_matches_closed_form() {
        assert_relative_eq!(gamma(0.5), PI.sqrt(), max_relative = 1e-14);
        assert_relative_eq!(gamma(2.5), 0.75 * PI.sqrt(), max_relative = 1e-14);
    }

    #[test]
    fn gamma_uses_reflection_for_negative_arguments() {
        assert_relative_eq!(gamma(-0.5), -2.0 * PI.sqrt(), max_relative = 1e-13);
        assert!(gamma(-2.0).is_nan());
        assert!(gamma(0.0).is_nan());
    }

    #[test]
    fn factorial_of_zero_and_one_is_one() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(1), 1.0);
        assert_eq!(factorial(5), 120.0);
    }

    #[test]
    fn binomial_coefficients_are_symmetric() {
        assert_eq!(binomial(6, 2), 15.0);
        assert_eq!(binomial(6, 4), 15.0);
        assert_eq!(binomial(2, 3), 0.0);
    }

    #[test]
    fn digamma_and_trigamma_match_known_values() {
        assert_relative_eq!(digamma_int(1), -EULER_MASCHERONI, max_relative = 1e-15);
        assert_relative_eq!(digamma_int(2), 1.0 - EULER_MASCHERONI, max_relative = 1e-15);
        assert_relative_eq!(trigamma_int(1), PI * PI / 6.0, max_relative = 1e-15);
        assert_relative_eq!(trigamma_int(2), PI * PI / 6.0 - 1.0, max_relative = 1e-15);
    }

    #[test]
    fn x_over_sinh_is_continuous_at_series_switch() {
        let below = x_over_sinh(0.999_99e-4);
        let above = x_over_sinh(1.000_01e-4);
        assert_relative_eq!(below, above, max_relative = 1e-12);
        assert_eq!(x_over_sinh(0.0), 1.0);
    }
}
