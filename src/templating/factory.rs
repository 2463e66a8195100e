use serde_json::Value;

use crate::constants::{PARAM_NAMESPACES, PARAM_PACKAGES};
use crate::elements::{ElementIndex, GroupMap};

use super::template::Template;

/// Creates page templates seeded with the run-wide grouping lists
pub struct TemplateFactory<'a, I: ElementIndex> {
    index: &'a I,
}

impl<'a, I: ElementIndex> TemplateFactory<'a, I> {
    pub fn new(index: &'a I) -> Self {
        Self { index }
    }

    /// Create a template carrying the full `namespaces` and `packages` lists
    pub fn create(&self, name: impl Into<String>) -> Template {
        let mut template = Template::new(name);
        template
            .set_parameter(PARAM_NAMESPACES, group_names(self.index.namespaces()))
            .set_parameter(PARAM_PACKAGES, group_names(self.index.packages()));
        template
    }
}

fn group_names(groups: &GroupMap) -> Value {
    Value::Array(groups.keys().cloned().map(Value::String).collect())
}
