mod dts;

pub use dts::*;
