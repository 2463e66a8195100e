pub mod app;
pub mod cli;
pub mod constants;
pub mod elements;
pub mod generator;
pub mod templating;
pub mod utils;

pub use app::{load_config, Config};
pub use elements::{Element, ElementBucket, ElementIndex, ElementStorage};
pub use generator::{build_element_page, LoaderError, NamespaceAndPackageLoader};
pub use templating::{Grouping, Template, TemplateFactory};
pub use utils::ApiGenError;
