pub mod proposer;
pub use proposer::*;
