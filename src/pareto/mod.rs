pub mod frontier;
pub use frontier::*;
