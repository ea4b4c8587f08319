/// Shared kernel - error types, file guards and the crate-wide `Result` alias
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
