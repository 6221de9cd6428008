/// String based error for binary level failures.
pub mod custom_error;
