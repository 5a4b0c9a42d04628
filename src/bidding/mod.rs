pub mod bid;
pub use bid::*;

pub mod domain;
pub use domain::*;

pub mod issue;
pub use issue::*;
