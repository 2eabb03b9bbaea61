// HTTP routes
pub mod health;
pub mod parse;

pub use health::*;
pub use parse::*;
