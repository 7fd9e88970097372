pub mod error;
pub mod types;

#[cfg(feature = "plan")]
pub mod payment_plan;

#[cfg(feature = "mortgage")]
pub mod mortgage;

#[cfg(feature = "report")]
pub mod report;

pub use error::PreconError;
pub use types::*;

/// Standard result type for all precon operations
pub type PreconResult<T> = Result<T, PreconError>;
