/// Operation invocation command.
pub mod call;
/// Shape conversion command.
pub mod convert;
/// Shape descriptor command.
pub mod describe;
/// Operation listing command.
pub mod ops;

mod error;
#[cfg(test)]
mod test_support;
mod util;

pub use error::{CliError, Result};
