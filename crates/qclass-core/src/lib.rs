pub mod config;
pub mod logging;

pub mod classifier;
pub mod driver;
pub mod prompt;
pub mod retry;
pub mod transport;
pub mod wire;
