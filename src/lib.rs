pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod quiz;
pub mod share;

pub use error::{MuseError, Result};
