//! # Kinetix Core Library
//!
//! State-resolved collision kinetics for reacting diatomic gas mixtures:
//! cross-sections, transition probabilities, rate constants, relaxation times and
//! the thermodynamic forces of vibrational, rotational and dissociation processes,
//! as used by non-equilibrium (e.g. hypersonic) flow solvers.
//!
//! ## Architectural Philosophy
//!
//! The library is organized in three layers, each depending only on those below it.
//!
//! - **[`core`]: The Foundation.** Physical constants, numerical kernels
//!   (quadrature, root finding, special functions), data providers for the species,
//!   interaction and dissociation tables, and the particle model (`Atom`,
//!   `MoleculeSts`, `MoleculeOneT`, `MoleculeMultiT`).
//!
//! - **[`kinetics`]: The Physics.** Pure functions of temperature, species and level
//!   indices: FHO/SSH probabilities, cross-sections and Ω-integrals, rate constants,
//!   relaxation times and affinities.
//!
//! - **[`workflows`]: The Public API.** Complete procedures built from the layers
//!   below, such as temperature scans of a collision pair and the dissociation
//!   equilibrium of a binary mixture, with progress reporting.
//!
//! ## Threading
//!
//! Molecules memoize their partition functions in `Cell`-based caches and are
//! therefore `!Sync`. Use one instance per thread.

pub mod core;
pub mod kinetics;
pub mod workflows;
