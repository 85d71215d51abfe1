pub mod source;
pub mod summary;
pub mod page;

pub use source::*;
pub use summary::*;
pub use page::*;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("invalid retention percentage: {0}")]
    InvalidPercent(String),
}
