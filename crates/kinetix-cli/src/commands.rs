pub mod data;
pub mod equilibrium;
pub mod omega;
pub mod scan;
