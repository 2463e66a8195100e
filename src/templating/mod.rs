// Gateway module for templating - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod factory;
mod template;

// Public re-exports - the ONLY way to access templating functionality
pub use factory::TemplateFactory;
pub use template::{Grouping, GroupingKind, Template};
