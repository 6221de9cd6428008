pub mod configuration;

pub mod configuration_error;

pub mod session_config;
