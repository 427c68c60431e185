// ABOUTME: Root module for toolgate - a reloadable tool-registry server.
// ABOUTME: Re-exports all public types from submodules.

pub mod error;
pub mod prelude;
pub mod server;
pub mod tool;
pub mod tools;

pub use error::ToolgateError;
