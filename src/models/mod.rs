pub mod tables;
pub mod token;

pub use tables::*;
pub use token::*;
