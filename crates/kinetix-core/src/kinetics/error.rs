use crate::core::data::DataError;
use crate::core::numerics::roots::RootFindingError;
use crate::core::particles::KindTag;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KineticsError {
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Omega integral ({l}, {r}) is not available for the {model} model")]
    UnsupportedIntegral { model: String, l: u32, r: u32 },

    #[error("Molecule kinds must match: expected {expected}, found {found}")]
    TypeMismatch { expected: KindTag, found: KindTag },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Root finding failed: {source}")]
    Convergence {
        #[from]
        source: RootFindingError,
    },

    #[error("Data error: {source}")]
    Data {
        #[from]
        source: DataError,
    },
}
