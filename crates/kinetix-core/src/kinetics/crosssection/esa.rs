//! Phenomenological-potential (Pirani, m = 6) fits of the reduced collision
//! integrals, Laricchiuta et al., Chem. Phys. Lett. 445 (2007) 133.
//!
//! `ln Ω*(l,s) = (a₁ + a₂x)·S((x − a₃)/a₄) + a₅·S((x − a₆)/a₇)` with
//! `x = ln(kT/ε₀)` and `S(u) = eᵘ/(eᵘ + e⁻ᵘ)`. Each `aₖ` is a polynomial in the
//! softness β: linear for `a₁..a₄`, quadratic for `a₅..a₇`. Every supported
//! (l, s) pair has its own row.

use phf::{Map, phf_map};

type Coefficients = [[f64; 3]; 7];

static FIT_COEFFICIENTS: Map<&'static str, Coefficients> = phf_map! {
    "1,1" => [
        [7.884756e-1, -2.438494e-2, 0.0],
        [-2.952759e-1, -1.744149e-3, 0.0],
        [5.020892e-1, 4.316985e-2, 0.0],
        [-9.042460e-1, -4.017103e-2, 0.0],
        [-3.373058, 2.458538e-1, -4.850047e-3],
        [4.161981, 2.202737e-1, -1.718010e-2],
        [2.462523, 3.231308e-1, -2.281072e-2],
    ],
    "1,2" => [
        [7.123565e-1, -2.688875e-2, 0.0],
        [-2.910530e-1, -2.065175e-3, 0.0],
        [4.187065e-2, 4.060236e-2, 0.0],
        [-9.287685e-1, -2.342270e-2, 0.0],
        [-3.598542, 2.545120e-1, -4.685966e-3],
        [3.934824, 2.699944e-1, -2.009886e-2],
        [2.578084, 3.449024e-1, -2.292710e-2],
    ],
    "1,3" => [
        [6.606022e-1, -2.831448e-2, 0.0],
        [-2.870900e-1, -2.232827e-3, 0.0],
        [-2.519690e-1, 3.778211e-2, 0.0],
        [-9.173046e-1, -1.864476e-2, 0.0],
        [-3.776812, 2.552528e-1, -4.237220e-3],
        [3.768103, 3.155025e-1, -2.218849e-2],
        [2.695440, 3.597998e-1, -2.267102e-2],
    ],
    "1,4" => [
        [6.268016e-1, -2.945078e-2, 0.0],
        [-2.830834e-1, -2.361273e-3, 0.0],
        [-4.559927e-1, 3.705640e-2, 0.0],
        [-9.334638e-1, -1.797329e-2, 0.0],
        [-3.947019, 2.446843e-1, -3.176374e-3],
        [3.629926, 3.761272e-1, -2.451016e-2],
        [2.824905, 3.781709e-1, -2.251978e-2],
    ],
    "1,5" => [
        [5.956859e-1, -2.915893e-2, 0.0],
        [-2.804989e-1, -2.298968e-3, 0.0],
        [-5.965551e-1, 3.724395e-2, 0.0],
        [-8.946001e-1, -2.550731e-2, 0.0],
        [-4.076798, 1.983892e-1, -5.014065e-3],
        [3.458362, 4.770695e-1, -2.678054e-2],
        [2.982260, 4.127638e-1, -2.300462e-2],
    ],
    "2,2" => [
        [7.898524e-1, -2.114115e-2, 0.0],
        [-2.998325e-1, -1.243977e-3, 0.0],
        [7.077103e-1, 3.583907e-2, 0.0],
        [-8.946857e-1, -2.473947e-2, 0.0],
        [-2.958969, 2.303358e-1, -5.226562e-3],
        [4.348412, 1.920321e-1, -1.496557e-2],
        [2.205440, 2.567027e-1, -1.861359e-2],
    ],
    "2,3" => [
        [7.269006e-1, -2.233866e-2, 0.0],
        [-2.972304e-1, -1.392888e-3, 0.0],
        [3.904230e-1, 3.231655e-2, 0.0],
        [-9.442201e-1, -1.333146e-2, 0.0],
        [-3.137828, 2.353561e-1, -4.653920e-3],
        [4.037989, 2.579999e-1, -1.732187e-2],
        [2.421229, 2.767343e-1, -1.838739e-2],
    ],
    "2,4" => [
        [6.829159e-1, -2.328487e-2, 0.0],
        [-2.943232e-1, -1.455122e-3, 0.0],
        [9.702806e-2, 3.239079e-2, 0.0],
        [-9.524194e-1, -1.104733e-2, 0.0],
        [-3.298451, 2.390002e-1, -4.193346e-3],
        [3.864116, 3.117236e-1, -1.963837e-2],
        [2.555941, 2.994664e-1, -1.861735e-2],
    ],
    "3,3" => [
        [7.565367e-1, -2.277888e-2, 0.0],
        [-2.846893e-1, -1.290441e-3, 0.0],
        [5.267023e-1, 3.456063e-2, 0.0],
        [-8.899416e-1, -2.286307e-2, 0.0],
        [-3.145233, 2.468961e-1, -5.216866e-3],
        [4.151047, 2.156018e-1, -1.686998e-2],
        [2.388025, 3.044924e-1, -2.047929e-2],
    ],
    "4,4" => [
        [7.331800e-1, -2.222700e-2, 0.0],
        [-2.785600e-1, -1.342800e-3, 0.0],
        [4.121600e-1, 3.351200e-2, 0.0],
        [-8.893100e-1, -2.178700e-2, 0.0],
        [-3.285500, 2.488800e-1, -4.961400e-3],
        [4.020700, 2.428300e-1, -1.791700e-2],
        [2.490400, 3.177400e-1, -2.071700e-2],
    ],
};

/// The (l, s) pairs with a phenomenological fit.
pub(crate) const SUPPORTED_PAIRS: [(u32, u32); 10] = [
    (1, 1),
    (1, 2),
    (1, 3),
    (1, 4),
    (1, 5),
    (2, 2),
    (2, 3),
    (2, 4),
    (3, 3),
    (4, 4),
];

/// `ln Ω*` of one fit at `x = ln T*`.
fn ln_reduced_omega(coefficients: &Coefficients, beta: f64, x: f64) -> f64 {
    let a: [f64; 7] = std::array::from_fn(|k| {
        let c = coefficients[k];
        c[0] + c[1] * beta + c[2] * beta * beta
    });
    let step = |u: f64| 0.5 * (1.0 + u.tanh());
    (a[0] + a[1] * x) * step((x - a[2]) / a[3]) + a[4] * step((x - a[5]) / a[6])
}

/// Reduced collision integral Ω*(l, s) at reduced temperature `t_star = kT/ε₀`.
/// `None` outside [`SUPPORTED_PAIRS`].
pub(crate) fn reduced_omega(l: u32, s: u32, beta: f64, t_star: f64) -> Option<f64> {
    let key = format!("{l},{s}");
    let coefficients = FIT_COEFFICIENTS.get(key.as_str())?;
    Some(ln_reduced_omega(coefficients, beta, t_star.ln()).exp())
}

/// Collision diameter of the phenomenological potential, `x₀·r_e` with
/// `x₀ = 0.8002·β^0.049256`.
pub(crate) fn collision_diameter(beta: f64, r_e: f64) -> f64 {
    0.8002 * beta.powf(0.049256) * r_e
}
