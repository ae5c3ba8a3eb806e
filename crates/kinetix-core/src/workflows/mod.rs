//! # Workflows Module
//!
//! High-level procedures built on the kinetics layer. Each workflow takes its data
//! through the provider traits of [`crate::core::data`], validates its inputs up
//! front and reports progress through a [`progress::ProgressReporter`].
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Scan parameters and model selection, assembled
//!   with [`config::ScanConfigBuilder`].
//! - **Temperature Scan** ([`scan`]) - Rate constants, Ω-integrals and relaxation
//!   times of one collision pair over a temperature range.
//! - **Dissociation Equilibrium** ([`equilibrium`]) - Equilibrium atomic fraction of
//!   a binary `A₂ ⇌ 2A` mixture.
//! - **Progress Monitoring** ([`progress`]) - Phase and task events for front ends.

pub mod config;
pub mod equilibrium;
pub mod progress;
pub mod scan;
