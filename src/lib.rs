pub mod catalog;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod packages;
pub mod utils;

pub use errors::{Error, Result};
