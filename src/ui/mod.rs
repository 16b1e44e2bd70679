pub mod colors;

pub use colors::*;
