use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::constants::{DEFAULT_UNGROUPED_NAME, NAME_SEPARATOR};

use super::types::{Element, ElementBucket, ElementList, ElementReflection};

/// Grouping name -> element bucket, in index order
pub type GroupMap = IndexMap<String, ElementBucket>;

/// Read-only view over the namespaces and packages of a generation run
pub trait ElementIndex {
    /// All namespaces, empty when the code base does not use them
    fn namespaces(&self) -> &GroupMap;

    /// All packages, empty when the code base does not use them
    fn packages(&self) -> &GroupMap;
}

/// Element index built once per run from the extracted element list
#[derive(Debug, Clone, Default)]
pub struct ElementStorage {
    namespaces: GroupMap,
    packages: GroupMap,
    elements: IndexMap<String, ElementReflection>,
    ungrouped_name: String,
}

impl ElementStorage {
    /// Build the index using the default ungrouped sentinel
    pub fn new(elements: Vec<ElementReflection>) -> Self {
        Self::with_ungrouped_name(elements, DEFAULT_UNGROUPED_NAME)
    }

    /// Build the index, reporting ungrouped elements under `ungrouped_name`
    pub fn with_ungrouped_name(elements: Vec<ElementReflection>, ungrouped_name: &str) -> Self {
        let mut storage = Self {
            ungrouped_name: ungrouped_name.to_string(),
            ..Self::default()
        };

        // Real groupings that happen to carry the sentinel name
        let mut declared_namespace = false;
        let mut declared_package = false;

        for mut element in elements {
            if storage.elements.contains_key(&element.name) {
                warn!("Skipping duplicate element {}", element.name);
                continue;
            }
            element.set_ungrouped_name(ungrouped_name);
            declared_namespace |= element.namespace.as_deref() == Some(ungrouped_name);
            declared_package |= element.package.as_deref() == Some(ungrouped_name);

            let namespace = element.pseudo_namespace_name().to_string();
            let package = element.pseudo_package_name().to_string();

            add_with_parents(&mut storage.namespaces, &namespace, ungrouped_name)
                .push(element.kind, element.name.clone());
            add_with_parents(&mut storage.packages, &package, ungrouped_name)
                .push(element.kind, element.name.clone());

            storage.elements.insert(element.name.clone(), element);
        }

        sort_groups(&mut storage.namespaces);
        sort_groups(&mut storage.packages);

        // A lone sentinel group means the grouping is unused
        if !declared_namespace && is_only_ungrouped(&storage.namespaces, ungrouped_name) {
            storage.namespaces.clear();
        }
        if !declared_package && is_only_ungrouped(&storage.packages, ungrouped_name) {
            storage.packages.clear();
        }

        debug!(
            "Indexed {} elements into {} namespaces and {} packages",
            storage.elements.len(),
            storage.namespaces.len(),
            storage.packages.len()
        );

        storage
    }

    /// Load the element list from a JSON file and index it
    pub fn from_file(path: &Path, ungrouped_name: &str) -> Result<Self> {
        let list = read_element_list(path)?;
        Ok(Self::with_ungrouped_name(list.elements, ungrouped_name))
    }

    /// Bucket of a single namespace
    pub fn namespace(&self, name: &str) -> Option<&ElementBucket> {
        self.namespaces.get(name)
    }

    /// Bucket of a single package
    pub fn package(&self, name: &str) -> Option<&ElementBucket> {
        self.packages.get(name)
    }

    /// Look up an element by its fully qualified name
    pub fn find_element(&self, name: &str) -> Option<&ElementReflection> {
        self.elements.get(name)
    }

    /// Grouping name used for elements outside any namespace/package
    pub fn ungrouped_name(&self) -> &str {
        &self.ungrouped_name
    }
}

impl ElementIndex for ElementStorage {
    fn namespaces(&self) -> &GroupMap {
        &self.namespaces
    }

    fn packages(&self) -> &GroupMap {
        &self.packages
    }
}

/// Read an element list document
pub fn read_element_list(path: &Path) -> Result<ElementList> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read element index: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse element index: {}", path.display()))
}

/// Insert `name` and every ancestor of it, returning the bucket of `name`
fn add_with_parents<'a>(groups: &'a mut GroupMap, name: &str, ungrouped_name: &str) -> &'a mut ElementBucket {
    if name != ungrouped_name {
        let mut end = 0;
        while let Some(pos) = name[end..].find(NAME_SEPARATOR) {
            let parent = &name[..end + pos];
            if !parent.is_empty() && !groups.contains_key(parent) {
                groups.insert(parent.to_string(), ElementBucket::default());
            }
            end += pos + NAME_SEPARATOR.len_utf8();
        }
    }

    groups.entry(name.to_string()).or_default()
}

fn sort_groups(groups: &mut GroupMap) {
    groups.sort_by(|a, _, b, _| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
}

fn is_only_ungrouped(groups: &GroupMap, ungrouped_name: &str) -> bool {
    groups.len() == 1 && groups.contains_key(ungrouped_name)
}
