use super::elastic::scattering_weight;
use super::esa;
use super::models::{KtScale, OmegaModel, OmegaScale};
use super::velocity_prefactor;
use crate::core::constants::K_BOLTZMANN;
use crate::core::data::InteractionData;
use crate::core::numerics::special::{digamma_int, factorial, gamma, trigamma_int};
use crate::kinetics::error::KineticsError;
use std::f64::consts::PI;

/// Angular factor of Ω^(l,r) for a rigid sphere, `1 − (1 + (−1)^l)/(2(l + 1))`.
fn angular_factor(l: u32) -> f64 {
    let parity = if l % 2 == 0 { 2.0 } else { 0.0 };
    1.0 - parity / (2.0 * (f64::from(l) + 1.0))
}

fn prefactor(t: f64, idata: &InteractionData, scale: OmegaScale) -> f64 {
    let kt_scale = match scale {
        OmegaScale::DimensionalNoKt => KtScale::NoKt,
        OmegaScale::Dimensional | OmegaScale::Dimensionless => KtScale::Full,
    };
    velocity_prefactor(t, idata.reduced_mass, kt_scale)
}

/// Ω^(l,r) of rigid spheres of diameter `sigma`:
/// `√(kT/2πμ)·(r+1)!/2·πσ²·(1 − (1 + (−1)^l)/(2(l + 1)))`.
pub fn omega_rigid_sphere(
    t: f64,
    l: u32,
    r: u32,
    sigma: f64,
    idata: &InteractionData,
    scale: OmegaScale,
) -> f64 {
    prefactor(t, idata, scale) * factorial(r + 1) / 2.0 * PI * sigma * sigma * angular_factor(l)
}

fn unsupported(model: OmegaModel, l: u32, r: u32) -> KineticsError {
    KineticsError::UnsupportedIntegral {
        model: model.to_string(),
        l,
        r,
    }
}

fn check_domain(model: OmegaModel, l: u32, r: u32) -> Result<(), KineticsError> {
    let supported = match model {
        OmegaModel::RigidSphere => l >= 1 && r >= 1,
        OmegaModel::LennardJones
        | OmegaModel::ModifiedLennardJones
        | OmegaModel::Vss
        | OmegaModel::Switch => l == r && (l == 1 || l == 2),
        OmegaModel::BornMayer => (l == 1 || l == 2) && r >= 1,
        OmegaModel::Esa => esa::SUPPORTED_PAIRS.contains(&(l, r)),
    };
    if supported {
        Ok(())
    } else {
        Err(unsupported(model, l, r))
    }
}

/// Neufeld's fits of the reduced Lennard-Jones integrals Ω*(1,1) and Ω*(2,2).
fn lennard_jones_reduced(l: u32, t_star: f64) -> f64 {
    if l == 1 {
        1.06036 / t_star.powf(0.15610)
            + 0.19300 * (-0.47635 * t_star).exp()
            + 1.03587 * (-1.52996 * t_star).exp()
            + 1.76474 * (-3.89411 * t_star).exp()
    } else {
        1.16145 / t_star.powf(0.14874)
            + 0.52487 * (-0.77320 * t_star).exp()
            + 2.16178 * (-2.43787 * t_star).exp()
    }
}

/// Born–Mayer integral relative to the rigid-sphere value of diameter 1/β:
/// `A² − 2Aψ(r+2) + ψ(r+2)² + ψ'(r+2)` with `A = ln(φ₀/kT)`.
fn born_mayer_reduced(t: f64, r: u32, idata: &InteractionData) -> f64 {
    let a = (idata.bm_phi0 / (K_BOLTZMANN * t)).ln();
    let psi = digamma_int(r + 2);
    a * a - 2.0 * a * psi + psi * psi + trigamma_int(r + 2)
}

/// Dimensional value with the requested kT scaling, before any dimensionless
/// normalisation.
fn dimensional(
    t: f64,
    l: u32,
    r: u32,
    idata: &InteractionData,
    model: OmegaModel,
    scale: OmegaScale,
) -> Result<f64, KineticsError> {
    let value = match model {
        OmegaModel::RigidSphere => omega_rigid_sphere(t, l, r, idata.sigma, idata, scale),
        OmegaModel::LennardJones => {
            lennard_jones_reduced(l, t / idata.lj_eps)
                * omega_rigid_sphere(t, l, r, idata.sigma, idata, scale)
        }
        OmegaModel::BornMayer => {
            let range = 1.0 / idata.bm_beta;
            born_mayer_reduced(t, r, idata) * omega_rigid_sphere(t, l, r, range, idata, scale)
        }
        OmegaModel::Switch => {
            let inner = if t < idata.switch_temperature {
                OmegaModel::LennardJones
            } else {
                OmegaModel::BornMayer
            };
            dimensional(t, l, r, idata, inner, scale)?
        }
        OmegaModel::ModifiedLennardJones => {
            let t_sw = idata.switch_temperature;
            if t < t_sw {
                dimensional(t, l, r, idata, OmegaModel::LennardJones, scale)?
            } else {
                let lj = dimensional(t_sw, l, r, idata, OmegaModel::LennardJones, scale)?;
                let bm = dimensional(t_sw, l, r, idata, OmegaModel::BornMayer, scale)?;
                dimensional(t, l, r, idata, OmegaModel::BornMayer, scale)? * lj / bm
            }
        }
        OmegaModel::Vss => {
            let omega = idata.vss_omega;
            prefactor(t, idata, scale)
                * scattering_weight(l, idata.vss_alpha)
                * PI
                * idata.vss_dref
                * idata.vss_dref
                * (idata.vss_tref / t).powf(omega - 0.5)
                * gamma(f64::from(r) + 2.5 - omega)
                / (2.0 * gamma(2.5 - omega))
        }
        OmegaModel::Esa => {
            let t_star = t / idata.esa_eps0;
            let reduced = esa::reduced_omega(l, r, idata.esa_beta, t_star)
                .ok_or_else(|| unsupported(model, l, r))?;
            let sigma = esa::collision_diameter(idata.esa_beta, idata.esa_re);
            reduced * omega_rigid_sphere(t, l, r, sigma, idata, scale)
        }
    };
    Ok(value)
}

/// Collision integral Ω^(l,r) of the chosen potential.
///
/// `Dimensionless` divides by the rigid-sphere integral of the model's own
/// collision diameter (`σ` of the pair, or `x₀·r_e` for ESA). Pairs outside a
/// model's domain fail with [`KineticsError::UnsupportedIntegral`].
pub fn omega(
    t: f64,
    l: u32,
    r: u32,
    idata: &InteractionData,
    model: OmegaModel,
    scale: OmegaScale,
) -> Result<f64, KineticsError> {
    check_domain(model, l, r)?;
    let value = dimensional(t, l, r, idata, model, scale)?;
    if scale != OmegaScale::Dimensionless {
        return Ok(value);
    }
    let sigma = match model {
        OmegaModel::Esa => esa::collision_diameter(idata.esa_beta, idata.esa_re),
        _ => idata.sigma,
    };
    Ok(value / omega_rigid_sphere(t, l, r, sigma, idata, scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinetics::crosssection::elastic::elastic_integral;
    use crate::kinetics::crosssection::models::CrossSectionModel;
    use crate::kinetics::crosssection::tests::nitrogen_pair;
    use approx::assert_relative_eq;

    #[test]
    fn rigid_sphere_omega_11_equals_elastic_integral() {
        let idata = nitrogen_pair();
        let t = 1000.0;
        let omega11 = omega(t, 1, 1, &idata, OmegaModel::RigidSphere, OmegaScale::Dimensional)
            .unwrap();
        let integral = elastic_integral(t, 1, &idata, CrossSectionModel::RigidSphere, KtScale::Full);
        assert_relative_eq!(omega11, integral, max_relative = 1e-12);
    }

    #[test]
    fn rigid_sphere_omega_22_is_twice_the_base_value() {
        let idata = nitrogen_pair();
        let t = 1000.0;
        let omega22 = omega(t, 2, 2, &idata, OmegaModel::RigidSphere, OmegaScale::Dimensional)
            .unwrap();
        let base = prefactor(t, &idata, OmegaScale::Dimensional) * idata.rigid_sphere_area();
        assert_relative_eq!(omega22, 2.0 * base, max_relative = 1e-12);
    }

    #[test]
    fn dimensionless_rigid_sphere_is_one() {
        let idata = nitrogen_pair();
        for (l, r) in [(1, 1), (2, 3), (4, 7)] {
            let value = omega(500.0, l, r, &idata, OmegaModel::RigidSphere, OmegaScale::Dimensionless)
                .unwrap();
            assert_relative_eq!(value, 1.0, max_relative = 1e-14);
        }
    }

    #[test]
    fn no_kt_scale_drops_square_root_of_kt() {
        let idata = nitrogen_pair();
        let t = 2500.0;
        let full = omega(t, 2, 2, &idata, OmegaModel::Esa, OmegaScale::Dimensional).unwrap();
        let no_kt = omega(t, 2, 2, &idata, OmegaModel::Esa, OmegaScale::DimensionalNoKt).unwrap();
        assert_relative_eq!(full, no_kt * (K_BOLTZMANN * t).sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn domain_table_is_enforced() {
        let idata = nitrogen_pair();
        let t = 1000.0;
        let scale = OmegaScale::Dimensional;
        for model in [
            OmegaModel::LennardJones,
            OmegaModel::ModifiedLennardJones,
            OmegaModel::Vss,
            OmegaModel::Switch,
        ] {
            assert!(omega(t, 1, 1, &idata, model, scale).is_ok());
            assert!(omega(t, 2, 2, &idata, model, scale).is_ok());
            assert!(matches!(
                omega(t, 1, 2, &idata, model, scale),
                Err(KineticsError::UnsupportedIntegral { l: 1, r: 2, .. })
            ));
            assert!(omega(t, 3, 3, &idata, model, scale).is_err());
        }
        assert!(omega(t, 2, 5, &idata, OmegaModel::BornMayer, scale).is_ok());
        assert!(omega(t, 3, 3, &idata, OmegaModel::BornMayer, scale).is_err());
        assert!(omega(t, 5, 9, &idata, OmegaModel::RigidSphere, scale).is_ok());
        assert!(omega(t, 0, 1, &idata, OmegaModel::RigidSphere, scale).is_err());
        assert!(omega(t, 4, 4, &idata, OmegaModel::Esa, scale).is_ok());
        assert!(omega(t, 2, 5, &idata, OmegaModel::Esa, scale).is_err());
    }

    #[test]
    fn lennard_jones_reduced_omega_11_matches_tabulated_value() {
        let idata = nitrogen_pair();
        let value = omega(
            idata.lj_eps * 1.5,
            1,
            1,
            &idata,
            OmegaModel::LennardJones,
            OmegaScale::Dimensionless,
        )
        .unwrap();
        assert_relative_eq!(value, 1.198, epsilon = 0.01);
    }

    #[test]
    fn switch_uses_born_mayer_above_switch_temperature() {
        let idata = nitrogen_pair();
        let scale = OmegaScale::Dimensional;
        let hot = 2.0 * idata.switch_temperature;
        let cold = 0.5 * idata.switch_temperature;
        assert_eq!(
            omega(hot, 1, 1, &idata, OmegaModel::Switch, scale).unwrap(),
            omega(hot, 1, 1, &idata, OmegaModel::BornMayer, scale).unwrap()
        );
        assert_eq!(
            omega(cold, 2, 2, &idata, OmegaModel::Switch, scale).unwrap(),
            omega(cold, 2, 2, &idata, OmegaModel::LennardJones, scale).unwrap()
        );
    }

    #[test]
    fn modified_lennard_jones_is_continuous_at_switch_temperature() {
        let idata = nitrogen_pair();
        let t_sw = idata.switch_temperature;
        let scale = OmegaScale::Dimensional;
        let below = omega(t_sw * (1.0 - 1e-9), 2, 2, &idata, OmegaModel::ModifiedLennardJones, scale)
            .unwrap();
        let above = omega(t_sw, 2, 2, &idata, OmegaModel::ModifiedLennardJones, scale).unwrap();
        assert_relative_eq!(below, above, max_relative = 1e-7);
    }

    #[test]
    fn vss_omega_11_matches_momentum_transfer_integral() {
        let idata = nitrogen_pair();
        let t = 3000.0;
        let omega11 = omega(t, 1, 1, &idata, OmegaModel::Vss, OmegaScale::Dimensional).unwrap();
        let total = elastic_integral(t, 1, &idata, CrossSectionModel::Vss, KtScale::Full);
        let momentum = total * 2.0 / (1.0 + idata.vss_alpha);
        assert_relative_eq!(omega11, momentum, max_relative = 1e-6);
    }
}
