// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod config;
pub mod lang;
pub mod runtime;
pub mod score;
pub mod session;
