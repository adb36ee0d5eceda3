pub mod index;
pub mod parser;
pub mod types;

pub use index::*;
pub use parser::*;
pub use types::*;
