//! Error handling for Tether.
//! One error enum per subsystem, one file per enum.

pub mod config_error;
pub mod link_error;
pub mod wordsim_error;

pub use config_error::ConfigError;
pub use link_error::LinkError;
pub use wordsim_error::WordSimError;
