mod generate;
mod inspect;

pub use generate::*;
pub use inspect::*;
