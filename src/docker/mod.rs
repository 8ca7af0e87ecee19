pub mod client;
pub mod containers;
pub mod runtime;

#[cfg(test)]
pub mod fake;
