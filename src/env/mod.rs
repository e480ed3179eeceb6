//! Ready-made implementations of the external collaborator traits.

mod memory;

pub use memory::InMemoryExternals;
