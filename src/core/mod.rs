pub mod greeter;
pub mod harness;

pub use crate::domain::model::{CheckOutcome, TestReport};
pub use crate::domain::ports::Greeter;
pub use crate::utils::error::Result;
