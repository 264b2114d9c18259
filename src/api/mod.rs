//! Answer service boundary: HTTP client, wire types, background workers.

pub mod client;
pub mod wire;
pub mod worker;
