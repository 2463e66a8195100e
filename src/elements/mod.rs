// Gateway module for elements - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod storage;
mod types;

// Public re-exports - the ONLY way to access element functionality
pub use storage::{read_element_list, ElementIndex, ElementStorage, GroupMap};
pub use types::{Element, ElementBucket, ElementKind, ElementList, ElementReflection};
