use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::{PARAM_NAMESPACES, PARAM_PACKAGES, PARAM_SUBNAMESPACES, PARAM_SUBPACKAGES};
use crate::elements::{Element, ElementBucket, ElementIndex, ElementKind};
use crate::templating::{Grouping, GroupingKind, Template};

use super::subnames::direct_children;

/// Errors raised while loading a grouping into a template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    /// The element names a grouping the index does not know about
    #[error("{kind} '{name}' is not present in the element index")]
    LookupFailure { kind: GroupingKind, name: String },
}

/// Loads the namespace or package of an element into a page template
pub struct NamespaceAndPackageLoader<'a, I: ElementIndex> {
    index: &'a I,
}

impl<'a, I: ElementIndex> NamespaceAndPackageLoader<'a, I> {
    pub fn new(index: &'a I) -> Self {
        Self { index }
    }

    /// Populate `template` with the grouping of `element`
    ///
    /// Namespaces win over packages. When the index has neither, the
    /// template is left as it is. A failed lookup leaves the template
    /// untouched.
    pub fn load_namespace_or_package<'t, E: Element + ?Sized>(
        &self,
        template: &'t mut Template,
        element: &E,
    ) -> Result<&'t mut Template, LoaderError> {
        let namespaces = self.index.namespaces();
        if !namespaces.is_empty() {
            let name = element.pseudo_namespace_name();
            let bucket = namespaces.get(name).ok_or_else(|| LoaderError::LookupFailure {
                kind: GroupingKind::Namespace,
                name: name.to_string(),
            })?;
            debug!("Loading namespace '{}' into template {}", name, template.name());
            return Ok(self.load_with_namespace(template, name, bucket));
        }

        let packages = self.index.packages();
        if !packages.is_empty() {
            let name = element.pseudo_package_name();
            let bucket = packages.get(name).ok_or_else(|| LoaderError::LookupFailure {
                kind: GroupingKind::Package,
                name: name.to_string(),
            })?;
            debug!("Loading package '{}' into template {}", name, template.name());
            return Ok(self.load_with_package(template, name, bucket));
        }

        debug!("No namespaces or packages indexed, template {} unchanged", template.name());
        Ok(template)
    }

    /// Populate `template` with namespace `name` and its elements
    pub fn load_with_namespace<'t>(
        &self,
        template: &'t mut Template,
        name: &str,
        bucket: &ElementBucket,
    ) -> &'t mut Template {
        let children = subnames_of(template, PARAM_NAMESPACES, name);
        template
            .set_grouping(Grouping::Namespace(name.to_string()))
            .set_parameter(PARAM_SUBNAMESPACES, children);
        load_elements(template, bucket)
    }

    /// Populate `template` with package `name` and its elements
    pub fn load_with_package<'t>(
        &self,
        template: &'t mut Template,
        name: &str,
        bucket: &ElementBucket,
    ) -> &'t mut Template {
        let children = subnames_of(template, PARAM_PACKAGES, name);
        template
            .set_grouping(Grouping::Package(name.to_string()))
            .set_parameter(PARAM_SUBPACKAGES, children);
        load_elements(template, bucket)
    }
}

fn subnames_of(template: &Template, list_key: &str, name: &str) -> Vec<String> {
    match template.string_list(list_key) {
        Some(all_names) => direct_children(name, &all_names),
        None => {
            warn!(
                "Template {} has no '{}' list, no children computed for '{}'",
                template.name(),
                list_key,
                name
            );
            Vec::new()
        }
    }
}

fn load_elements<'t>(template: &'t mut Template, bucket: &ElementBucket) -> &'t mut Template {
    let mut parameters = Map::new();
    for kind in ElementKind::ALL {
        let names = bucket.category(kind);
        parameters.insert(
            kind.category().to_string(),
            Value::Array(names.iter().cloned().map(Value::String).collect()),
        );
    }
    template.set_parameters(parameters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{ElementKind, ElementReflection, ElementStorage, GroupMap};
    use crate::templating::TemplateFactory;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// Index with hand-built maps
    #[derive(Default)]
    struct StaticIndex {
        namespaces: GroupMap,
        packages: GroupMap,
    }

    impl ElementIndex for StaticIndex {
        fn namespaces(&self) -> &GroupMap {
            &self.namespaces
        }

        fn packages(&self) -> &GroupMap {
            &self.packages
        }
    }

    struct Named {
        namespace: &'static str,
        package: &'static str,
    }

    impl Element for Named {
        fn pseudo_namespace_name(&self) -> &str {
            self.namespace
        }

        fn pseudo_package_name(&self) -> &str {
            self.package
        }
    }

    fn bucket_with_class(name: &str) -> ElementBucket {
        let mut bucket = ElementBucket::default();
        bucket.push(ElementKind::Class, name.to_string());
        bucket
    }

    #[test]
    fn test_namespace_takes_priority() {
        let mut index = StaticIndex::default();
        for name in ["App", "App\\Foo", "App\\Foo\\Bar", "App\\Baz"] {
            index.namespaces.insert(name.to_string(), ElementBucket::default());
        }
        index.namespaces.insert("App".to_string(), bucket_with_class("App\\X"));
        index.packages.insert("Core".to_string(), bucket_with_class("Y"));

        let mut template = TemplateFactory::new(&index).create("namespace");
        let loader = NamespaceAndPackageLoader::new(&index);
        let element = Named { namespace: "App", package: "Core" };
        loader.load_namespace_or_package(&mut template, &element).unwrap();

        assert_eq!(template.grouping(), &Grouping::Namespace("App".to_string()));
        assert_eq!(template.parameter("namespace"), Some(&json!("App")));
        assert_eq!(template.parameter("package"), Some(&Value::Null));
        assert_eq!(
            template.parameter("subnamespaces"),
            Some(&json!(["App\\Foo", "App\\Baz"]))
        );
        assert_eq!(template.parameter("classes"), Some(&json!(["App\\X"])));
        assert_eq!(template.parameter("functions"), Some(&json!([])));
        assert_eq!(template.parameter("subpackages"), None);
    }

    #[test]
    fn test_falls_back_to_package() {
        let mut index = StaticIndex::default();
        index.packages.insert("Core".to_string(), bucket_with_class("Kernel"));
        index.packages.insert("Core\\Http".to_string(), ElementBucket::default());

        let mut template = TemplateFactory::new(&index).create("package");
        template.set_grouping(Grouping::Namespace("Stale".to_string()));
        let loader = NamespaceAndPackageLoader::new(&index);
        let element = Named { namespace: "None", package: "Core" };
        loader.load_namespace_or_package(&mut template, &element).unwrap();

        assert_eq!(template.parameter("namespace"), Some(&Value::Null));
        assert_eq!(template.parameter("package"), Some(&json!("Core")));
        assert_eq!(template.parameter("subpackages"), Some(&json!(["Core\\Http"])));
        assert_eq!(template.parameter("classes"), Some(&json!(["Kernel"])));
    }

    #[test]
    fn test_empty_index_leaves_template_alone() {
        let index = StaticIndex::default();
        let mut template = Template::new("class");
        template.set_parameter("title", "Kernel");
        let before = template.clone();

        let loader = NamespaceAndPackageLoader::new(&index);
        let element = Named { namespace: "App", package: "Core" };
        loader.load_namespace_or_package(&mut template, &element).unwrap();

        assert_eq!(template, before);
    }

    #[test]
    fn test_missing_namespace_is_lookup_failure() {
        let mut index = StaticIndex::default();
        index.namespaces.insert("App".to_string(), bucket_with_class("App\\X"));

        let mut template = TemplateFactory::new(&index).create("class");
        template.set_parameter("classes", json!(["Previous"]));
        let before = template.clone();

        let loader = NamespaceAndPackageLoader::new(&index);
        let element = Named { namespace: "Lib", package: "Core" };
        let err = loader.load_namespace_or_package(&mut template, &element).unwrap_err();

        assert_eq!(
            err,
            LoaderError::LookupFailure {
                kind: GroupingKind::Namespace,
                name: "Lib".to_string()
            }
        );
        assert_eq!(err.to_string(), "namespace 'Lib' is not present in the element index");
        assert_eq!(template, before);
    }

    #[test]
    fn test_missing_package_is_lookup_failure() {
        let mut index = StaticIndex::default();
        index.packages.insert("Core".to_string(), ElementBucket::default());

        let mut template = TemplateFactory::new(&index).create("class");
        template.set_parameter("functions", json!(["previous_fn"]));
        let before = template.clone();

        let loader = NamespaceAndPackageLoader::new(&index);
        let element = Named { namespace: "None", package: "Extra" };
        let err = loader.load_namespace_or_package(&mut template, &element).unwrap_err();

        assert!(matches!(
            err,
            LoaderError::LookupFailure { kind: GroupingKind::Package, ref name } if name == "Extra"
        ));
        assert_eq!(template, before);
    }

    #[test]
    fn test_bucket_copied_verbatim() {
        let mut bucket = ElementBucket::default();
        for name in ["Z", "A", "M"] {
            bucket.push(ElementKind::Interface, name.to_string());
        }
        bucket.push(ElementKind::Constant, "App\\VERSION".to_string());

        let index = StaticIndex::default();
        let loader = NamespaceAndPackageLoader::new(&index);
        let mut template = Template::new("namespace");
        loader.load_with_namespace(&mut template, "App", &bucket);

        assert_eq!(template.parameter("interfaces"), Some(&json!(["Z", "A", "M"])));
        assert_eq!(template.parameter("constants"), Some(&json!(["App\\VERSION"])));
        // no full list on the template, so no children
        assert_eq!(template.parameter("subnamespaces"), Some(&json!([])));
    }

    #[test]
    fn test_with_element_storage() {
        let storage = ElementStorage::new(vec![
            ElementReflection::new("App\\Kernel", ElementKind::Class).with_namespace("App"),
            ElementReflection::new("App\\Http\\Request", ElementKind::Class)
                .with_namespace("App\\Http"),
            ElementReflection::new("App\\HttpException", ElementKind::Exception)
                .with_namespace("App"),
            ElementReflection::new("legacy_helper", ElementKind::Function),
        ]);

        let factory = TemplateFactory::new(&storage);
        let loader = NamespaceAndPackageLoader::new(&storage);

        let kernel = storage.find_element("App\\Kernel").unwrap();
        let mut template = factory.create("class");
        loader.load_namespace_or_package(&mut template, kernel).unwrap();
        assert_eq!(template.parameter("subnamespaces"), Some(&json!(["App\\Http"])));
        assert_eq!(template.parameter("classes"), Some(&json!(["App\\Kernel"])));
        assert_eq!(template.parameter("exceptions"), Some(&json!(["App\\HttpException"])));

        let helper = storage.find_element("legacy_helper").unwrap();
        let mut template = factory.create("function");
        loader.load_namespace_or_package(&mut template, helper).unwrap();
        assert_eq!(template.parameter("namespace"), Some(&json!("None")));
        assert_eq!(template.parameter("functions"), Some(&json!(["legacy_helper"])));
    }
}
