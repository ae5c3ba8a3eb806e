use super::models::{CrossSectionModel, KtScale};
use super::{velocity_prefactor, weighted_integral};
use crate::core::data::InteractionData;
use crate::core::numerics::special::gamma;
use std::f64::consts::PI;

/// Area the model's cross-section is measured against.
pub(crate) fn reference_area(idata: &InteractionData, model: CrossSectionModel) -> f64 {
    let d = match model {
        CrossSectionModel::RigidSphere => idata.sigma,
        CrossSectionModel::Vss => idata.vss_dref,
        CrossSectionModel::Gss => idata.gss_dref,
    };
    let area = PI * d * d;
    if area > 0.0 { area } else { 1.0 }
}

/// Total elastic cross-section [m²] at dimensionless speed `g` and temperature `t`.
///
/// - RS: `πσ²`.
/// - VSS: `πd²·(T_ref/(T·g²))^(ω−½) / Γ(5/2 − ω)`.
/// - GSS: `πd²·[a₁(ε/(kT·g²))^ω₁ + a₂(ε/(kT·g²))^ω₂]`.
pub fn crosssection_elastic(t: f64, g: f64, idata: &InteractionData, model: CrossSectionModel) -> f64 {
    match model {
        CrossSectionModel::RigidSphere => idata.rigid_sphere_area(),
        CrossSectionModel::Vss => {
            let omega = idata.vss_omega;
            PI * idata.vss_dref * idata.vss_dref * (idata.vss_tref / (t * g * g)).powf(omega - 0.5)
                / gamma(2.5 - omega)
        }
        CrossSectionModel::Gss => {
            let x = idata.gss_eps_ref / (t * g * g);
            PI * idata.gss_dref
                * idata.gss_dref
                * (idata.gss_a1 * x.powf(idata.gss_omega1) + idata.gss_a2 * x.powf(idata.gss_omega2))
        }
    }
}

/// Deflection exponent α of the model's scattering law, 1 for isotropic scattering.
pub(crate) fn scattering_alpha(idata: &InteractionData, model: CrossSectionModel) -> f64 {
    match model {
        CrossSectionModel::RigidSphere => 1.0,
        CrossSectionModel::Vss => idata.vss_alpha,
        CrossSectionModel::Gss => idata.gss_alpha,
    }
}

/// Share of the total cross-section carried by the transport cross-section of
/// order `l` when the deflection is `χ = 2·arccos((b/d)^(1/α))`: `2/(1 + α)` for
/// `l = 1`, `4α/((α + 1)(α + 2))` for `l = 2`.
pub(crate) fn scattering_weight(l: u32, alpha: f64) -> f64 {
    if l == 1 {
        2.0 / (1.0 + alpha)
    } else {
        4.0 * alpha / ((alpha + 1.0) * (alpha + 2.0))
    }
}

/// Momentum-transfer (diffusion) cross-section [m²].
pub fn crosssection_momentum_transfer(
    t: f64,
    g: f64,
    idata: &InteractionData,
    model: CrossSectionModel,
) -> f64 {
    crosssection_elastic(t, g, idata, model) * scattering_weight(1, scattering_alpha(idata, model))
}

/// Viscosity cross-section [m²].
pub fn crosssection_viscosity(
    t: f64,
    g: f64,
    idata: &InteractionData,
    model: CrossSectionModel,
) -> f64 {
    crosssection_elastic(t, g, idata, model) * scattering_weight(2, scattering_alpha(idata, model))
}

/// `√(kT/2πμ)·∫₀^∞ g^(3+2·deg)·e^(−g²)·σ_el(g) dg`.
///
/// The rigid-sphere case is evaluated in closed form, `πσ²·(deg+1)!/2`.
pub fn elastic_integral(
    t: f64,
    deg: u32,
    idata: &InteractionData,
    model: CrossSectionModel,
    scale: KtScale,
) -> f64 {
    let prefactor = velocity_prefactor(t, idata.reduced_mass, scale);
    if model == CrossSectionModel::RigidSphere {
        return prefactor * idata.rigid_sphere_area() * gamma(f64::from(deg) + 2.0) / 2.0;
    }
    let area = reference_area(idata, model);
    let value = weighted_integral(0.0, deg, |g| crosssection_elastic(t, g, idata, model) / area);
    prefactor * area * value
}
