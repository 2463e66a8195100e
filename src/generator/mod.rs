// Gateway module for generator - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod loader;
mod page;
mod subnames;

// Public re-exports - the ONLY way to access generator functionality
pub use loader::{LoaderError, NamespaceAndPackageLoader};
pub use page::build_element_page;
pub use subnames::{direct_children, is_direct_child};
