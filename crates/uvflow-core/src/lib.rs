pub mod config;
pub mod error;
pub mod io;
pub mod paths;
pub mod project;
pub mod runner;
pub mod skill;
pub mod translate;
pub mod types;

pub use error::{Result, UvflowError};
