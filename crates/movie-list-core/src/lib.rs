pub mod collection;
pub mod workflow;

pub use collection::{append_unique_by_title, CollectionStore, InMemoryCollection};
pub use workflow::WorkflowState;
