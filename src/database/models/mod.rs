pub mod verse;

pub use verse::*;
