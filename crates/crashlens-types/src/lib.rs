pub mod log;
pub mod selection;

pub use log::*;
pub use selection::*;
