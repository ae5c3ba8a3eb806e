//! # Particles
//!
//! In-memory species model: physical constants, level structure, and the
//! temperature-dependent averages the kinetics layer consumes.
//!
//! ## Composition
//!
//! Every particle carries a [`SpeciesConstants`]. Molecules add a
//! [`MolecularStructure`] (rotational and vibrational level energies) and one or
//! two single-entry caches:
//!
//! | Type               | Vibrational distribution        | Caches                             |
//! |--------------------|---------------------------------|------------------------------------|
//! | [`Atom`]           | —                               | —                                  |
//! | [`MoleculeSts`]    | levels tracked individually     | rotational (`T`)                   |
//! | [`MoleculeOneT`]   | Boltzmann at `T`                | rotational, vibrational (`T`)      |
//! | [`MoleculeMultiT`] | Treanor at `(T, T1)`, truncated | rotational, vibrational (`T`, `T1`)|
//!
//! Shared rotational queries live on the [`Molecule`] trait. Code that must branch
//! on the flavour matches over [`MoleculeKind`] or [`QuasiMolecule`].
//!
//! ## Caching
//!
//! Getters take the temperature(s) they depend on. A cached entry is returned only
//! when its key matches the query exactly; otherwise it is recomputed and replaced.
//! `renorm_sts`/`renorm` force recomputation. Molecules are therefore `!Sync`:
//! use one instance per thread.

pub mod cache;
pub mod kind;
pub mod multi_t;
pub mod one_t;
pub mod rotational;
pub mod species;
pub mod structure;
pub mod sts;

pub use kind::{KindTag, MoleculeKind, QuasiMolecule, UModel};
pub use multi_t::MoleculeMultiT;
pub use one_t::MoleculeOneT;
pub use rotational::Molecule;
pub use species::{Atom, SpeciesConstants};
pub use structure::{MolecularStructure, VibrationalModel};
pub use sts::MoleculeSts;
