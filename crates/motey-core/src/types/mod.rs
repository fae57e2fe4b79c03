mod extension;
pub use extension::*;

mod token;
pub use token::*;
