pub mod batch_config;
pub mod constants;
pub mod error;
pub mod frame;
