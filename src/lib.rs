pub mod constants;
pub mod message;
pub mod tracing_init;
pub mod util;

pub use message::{encode, WsprMessage, WsprMessageError};
