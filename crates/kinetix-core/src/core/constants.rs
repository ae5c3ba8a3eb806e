//! Physical constants and unit conversion factors (SI, CODATA 2014).

/// Boltzmann constant [J/K].
pub const K_BOLTZMANN: f64 = 1.380_648_52e-23;
/// Planck constant [J·s].
pub const H_PLANCK: f64 = 6.626_070_040e-34;
/// Reduced Planck constant [J·s].
pub const H_BAR: f64 = H_PLANCK / (2.0 * std::f64::consts::PI);
/// Avogadro constant [1/mol].
pub const N_AVOGADRO: f64 = 6.022_140_857e23;
/// Speed of light in vacuum [m/s].
pub const C_LIGHT: f64 = 299_792_458.0;

/// Electron volts to joules.
pub const EV_TO_J: f64 = 1.602_176_620_8e-19;
/// Atomic mass units to kilograms.
pub const AMU_TO_KG: f64 = 1.660_539_040e-27;
/// Angstroms to meters.
pub const ANGSTROM_TO_M: f64 = 1e-10;
/// Scale of the tabulated moment of inertia [kg·m²].
pub const INERTIA_SCALE: f64 = 1e-46;
/// Wavenumbers (cm⁻¹) to joules.
pub const WAVENUMBER_TO_J: f64 = 100.0 * H_PLANCK * C_LIGHT;
/// One standard atmosphere [Pa].
pub const ATM_TO_PA: f64 = 101_325.0;

/// Scale applied to tabulated Arrhenius pre-exponential factors on load.
pub const ARRHENIUS_SCALE: f64 = 1e16 / N_AVOGADRO;
