pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::greeter::{greet, HelloWorld, GREETING};
pub use core::harness::{run_tests, TestHarness};
pub use core::{CheckOutcome, Greeter, TestReport};
pub use utils::error::{HarnessError, Result};
