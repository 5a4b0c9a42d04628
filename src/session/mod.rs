pub mod config;
pub use config::*;

pub mod decision;
pub use decision::*;

pub mod engine;
pub use engine::*;

pub mod event;
pub use event::*;

pub mod state;
pub use state::*;

pub mod summary;
pub use summary::*;
