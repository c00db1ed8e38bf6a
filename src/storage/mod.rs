//! Storage layer
//!
//! The persistence collaborator behind the cache, plus an in-memory
//! implementation used by the binary and the tests.

mod memory;
mod traits;

pub use memory::MemoryStore;
pub use traits::ContentStore;
