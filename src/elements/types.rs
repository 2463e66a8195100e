use serde::Deserialize;
use std::fmt;

use crate::constants::{CLASSES, CONSTANTS, EXCEPTIONS, FUNCTIONS, INTERFACES, TRAITS};

/// Kind of a documented code element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Class,
    Interface,
    Trait,
    Exception,
    Constant,
    Function,
}

impl ElementKind {
    /// Every kind, in template parameter order
    pub const ALL: [ElementKind; 6] = [
        ElementKind::Class,
        ElementKind::Interface,
        ElementKind::Trait,
        ElementKind::Exception,
        ElementKind::Constant,
        ElementKind::Function,
    ];

    /// Parameter key of the bucket category this kind lands in
    pub fn category(&self) -> &'static str {
        match self {
            ElementKind::Class => CLASSES,
            ElementKind::Interface => INTERFACES,
            ElementKind::Trait => TRAITS,
            ElementKind::Exception => EXCEPTIONS,
            ElementKind::Constant => CONSTANTS,
            ElementKind::Function => FUNCTIONS,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ElementKind::Class => "class",
            ElementKind::Interface => "interface",
            ElementKind::Trait => "trait",
            ElementKind::Exception => "exception",
            ElementKind::Constant => "constant",
            ElementKind::Function => "function",
        };
        f.write_str(label)
    }
}

/// The six element categories attached to one namespace or package
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementBucket {
    pub classes: Vec<String>,
    pub interfaces: Vec<String>,
    pub traits: Vec<String>,
    pub exceptions: Vec<String>,
    pub constants: Vec<String>,
    pub functions: Vec<String>,
}

impl ElementBucket {
    /// Append an element name to the category matching its kind
    pub fn push(&mut self, kind: ElementKind, name: String) {
        self.category_mut(kind).push(name);
    }

    /// Names stored under one category
    pub fn category(&self, kind: ElementKind) -> &[String] {
        match kind {
            ElementKind::Class => &self.classes,
            ElementKind::Interface => &self.interfaces,
            ElementKind::Trait => &self.traits,
            ElementKind::Exception => &self.exceptions,
            ElementKind::Constant => &self.constants,
            ElementKind::Function => &self.functions,
        }
    }

    fn category_mut(&mut self, kind: ElementKind) -> &mut Vec<String> {
        match kind {
            ElementKind::Class => &mut self.classes,
            ElementKind::Interface => &mut self.interfaces,
            ElementKind::Trait => &mut self.traits,
            ElementKind::Exception => &mut self.exceptions,
            ElementKind::Constant => &mut self.constants,
            ElementKind::Function => &mut self.functions,
        }
    }

    /// Total number of elements across all categories
    pub fn len(&self) -> usize {
        self.classes.len()
            + self.interfaces.len()
            + self.traits.len()
            + self.exceptions.len()
            + self.constants.len()
            + self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Anything that belongs to a namespace and a package
pub trait Element {
    /// Namespace name, or the ungrouped sentinel
    fn pseudo_namespace_name(&self) -> &str;

    /// Package name, or the ungrouped sentinel
    fn pseudo_package_name(&self) -> &str;
}

/// A single element as extracted from the documented sources
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ElementReflection {
    /// Fully qualified name (e.g. `App\Http\Kernel`)
    pub name: String,
    pub kind: ElementKind,
    /// Declaring namespace, absent for global code
    #[serde(default)]
    pub namespace: Option<String>,
    /// `@package` annotation, if any
    #[serde(default)]
    pub package: Option<String>,
    /// Name reported when the element has no namespace or package
    #[serde(skip, default = "default_ungrouped_name")]
    ungrouped_name: String,
}

fn default_ungrouped_name() -> String {
    crate::constants::DEFAULT_UNGROUPED_NAME.to_string()
}

impl ElementReflection {
    pub fn new(name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            name: name.into(),
            kind,
            namespace: None,
            package: None,
            ungrouped_name: default_ungrouped_name(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Override the sentinel reported for ungrouped elements
    pub fn set_ungrouped_name(&mut self, name: impl Into<String>) {
        self.ungrouped_name = name.into();
    }

    fn grouping_or_ungrouped<'a>(&'a self, name: &'a Option<String>) -> &'a str {
        match name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.ungrouped_name,
        }
    }
}

impl Element for ElementReflection {
    fn pseudo_namespace_name(&self) -> &str {
        self.grouping_or_ungrouped(&self.namespace)
    }

    fn pseudo_package_name(&self) -> &str {
        self.grouping_or_ungrouped(&self.package)
    }
}

/// On-disk list of extracted elements
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElementList {
    #[serde(default)]
    pub elements: Vec<ElementReflection>,
}
