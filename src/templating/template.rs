use serde_json::{Map, Value};
use std::fmt;
use tracing::warn;

use crate::constants::{PARAM_NAMESPACE, PARAM_PACKAGE};

/// Which kind of grouping a page is organised by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupingKind {
    Namespace,
    Package,
}

impl fmt::Display for GroupingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupingKind::Namespace => f.write_str("namespace"),
            GroupingKind::Package => f.write_str("package"),
        }
    }
}

/// The single grouping context of a template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Grouping {
    #[default]
    None,
    Namespace(String),
    Package(String),
}

impl Grouping {
    pub fn kind(&self) -> Option<GroupingKind> {
        match self {
            Grouping::None => None,
            Grouping::Namespace(_) => Some(GroupingKind::Namespace),
            Grouping::Package(_) => Some(GroupingKind::Package),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Grouping::None => None,
            Grouping::Namespace(name) | Grouping::Package(name) => Some(name.as_str()),
        }
    }

    fn namespace_value(&self) -> Value {
        match self {
            Grouping::Namespace(name) => Value::String(name.clone()),
            _ => Value::Null,
        }
    }

    fn package_value(&self) -> Value {
        match self {
            Grouping::Package(name) => Value::String(name.clone()),
            _ => Value::Null,
        }
    }
}

/// Rendering context of one documentation page
///
/// The `namespace` and `package` parameters mirror the template's
/// [`Grouping`] and can only be changed through [`Template::set_grouping`].
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    name: String,
    grouping: Grouping,
    parameters: Map<String, Value>,
}

impl Template {
    /// Create an empty template for the page `name`
    pub fn new(name: impl Into<String>) -> Self {
        let mut template = Self {
            name: name.into(),
            grouping: Grouping::None,
            parameters: Map::new(),
        };
        template.write_grouping();
        template
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grouping(&self) -> &Grouping {
        &self.grouping
    }

    /// Switch the grouping; the other grouping parameter becomes null
    pub fn set_grouping(&mut self, grouping: Grouping) -> &mut Self {
        self.grouping = grouping;
        self.write_grouping();
        self
    }

    pub fn parameters(&self) -> &Map<String, Value> {
        &self.parameters
    }

    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }

    /// Merge `parameters` into the template, later values win
    pub fn set_parameters(&mut self, parameters: Map<String, Value>) -> &mut Self {
        for (key, value) in parameters {
            if key == PARAM_NAMESPACE || key == PARAM_PACKAGE {
                warn!("Ignoring '{}' parameter on template {}, use set_grouping", key, self.name);
                continue;
            }
            self.parameters.insert(key, value);
        }
        self
    }

    /// Set a single parameter
    pub fn set_parameter(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        let mut parameters = Map::new();
        parameters.insert(key.to_string(), value.into());
        self.set_parameters(parameters)
    }

    /// Read a parameter holding a list of strings
    ///
    /// Returns `None` when the key is missing or not a list. Non-string
    /// entries are skipped.
    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        let items = self.parameters.get(key)?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
        )
    }

    /// Render the parameters as JSON
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(&self.parameters)
        } else {
            serde_json::to_string(&self.parameters)
        }
    }

    fn write_grouping(&mut self) {
        self.parameters
            .insert(PARAM_NAMESPACE.to_string(), self.grouping.namespace_value());
        self.parameters
            .insert(PARAM_PACKAGE.to_string(), self.grouping.package_value());
    }
}
