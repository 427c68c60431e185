// ABOUTME: Tool module - descriptors, registry, dispatch, and the result envelope.
// ABOUTME: Core abstraction for listing, reloading, and invoking capabilities.

mod descriptor;
mod dispatch;
mod registry;
mod result;
mod schema;
mod source;
mod traits;

pub use descriptor::*;
pub use dispatch::*;
pub use registry::*;
pub use result::*;
pub use schema::*;
pub use source::*;
pub use traits::*;

#[cfg(test)]
mod registry_test;
#[cfg(test)]
mod result_test;
#[cfg(test)]
mod schema_test;
