pub mod errors;
pub mod traits;
pub mod types;

pub use errors::{Error, Result, ResultExt, StrategyError};
pub use traits::CipherStrategy;
pub use types::{CipherKey, CipherMethod, CollaboratorValidation, StrategyCandidate};
