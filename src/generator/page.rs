use tracing::debug;

use crate::elements::ElementStorage;
use crate::templating::{Template, TemplateFactory};
use crate::utils::ApiGenError;

use super::loader::NamespaceAndPackageLoader;

/// Build the template of an element page, grouping context included
pub fn build_element_page(storage: &ElementStorage, element_name: &str) -> Result<Template, ApiGenError> {
    let element = storage
        .find_element(element_name)
        .ok_or_else(|| ApiGenError::ElementNotFound(element_name.to_string()))?;

    let mut template = TemplateFactory::new(storage).create(element.kind.to_string());
    template.set_parameter(element.kind.to_string().as_str(), element.name.as_str());

    NamespaceAndPackageLoader::new(storage).load_namespace_or_package(&mut template, element)?;
    debug!("Built {} page for {}", element.kind, element.name);

    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{ElementKind, ElementReflection};
    use crate::generator::LoaderError;
    use crate::templating::GroupingKind;
    use serde_json::json;

    fn storage() -> ElementStorage {
        ElementStorage::new(vec![
            ElementReflection::new("Shop\\Cart", ElementKind::Class).with_namespace("Shop"),
            ElementReflection::new("Shop\\Payment\\Gateway", ElementKind::Interface)
                .with_namespace("Shop\\Payment"),
        ])
    }

    #[test]
    fn test_build_element_page() {
        let template = build_element_page(&storage(), "Shop\\Cart").unwrap();

        assert_eq!(template.name(), "class");
        assert_eq!(template.parameter("class"), Some(&json!("Shop\\Cart")));
        assert_eq!(template.parameter("namespace"), Some(&json!("Shop")));
        assert_eq!(template.parameter("subnamespaces"), Some(&json!(["Shop\\Payment"])));
        assert_eq!(template.parameter("classes"), Some(&json!(["Shop\\Cart"])));
    }

    #[test]
    fn test_unknown_element() {
        let err = build_element_page(&storage(), "Shop\\Missing").unwrap_err();
        assert!(matches!(err, ApiGenError::ElementNotFound(ref name) if name == "Shop\\Missing"));
        assert_eq!(err.to_string(), "Element not found: Shop\\Missing");
    }

    #[test]
    fn test_lookup_failure_converts() {
        let err: ApiGenError = LoaderError::LookupFailure {
            kind: GroupingKind::Package,
            name: "Core".to_string(),
        }
        .into();

        assert_eq!(
            err.to_string(),
            "Loader error: package 'Core' is not present in the element index"
        );
    }
}
