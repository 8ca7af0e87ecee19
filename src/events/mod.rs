pub mod handler;
pub mod key_bindings;
pub mod reader;
