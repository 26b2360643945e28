mod card;
mod marker;

pub use card::*;
pub use marker::*;
