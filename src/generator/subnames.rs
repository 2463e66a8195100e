use crate::constants::NAME_SEPARATOR;

/// Direct children of `name` among `all_names`
///
/// A child is `name`, one separator, then one non-empty segment with no
/// further separator. `name` is matched literally and is never its own
/// child. The order of `all_names` is kept.
pub fn direct_children<S: AsRef<str>>(name: &str, all_names: &[S]) -> Vec<String> {
    all_names
        .iter()
        .map(|candidate| candidate.as_ref())
        .filter(|candidate| is_direct_child(name, candidate))
        .map(str::to_string)
        .collect()
}

/// Whether `candidate` sits exactly one level below `name`
pub fn is_direct_child(name: &str, candidate: &str) -> bool {
    candidate
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix(NAME_SEPARATOR))
        .is_some_and(|segment| !segment.is_empty() && !segment.contains(NAME_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_only_immediate_children() {
        let names = ["App", "App\\Foo", "App\\Foo\\Bar", "App\\Baz"];
        assert_eq!(
            direct_children("App", &names),
            vec!["App\\Foo".to_string(), "App\\Baz".to_string()]
        );
    }

    #[test]
    fn test_empty_list() {
        let names: [&str; 0] = [];
        assert!(direct_children("App", &names).is_empty());
    }

    #[test]
    fn test_name_is_literal() {
        let names = ["A.B\\C", "AxB\\C", "A.B\\D"];
        assert_eq!(
            direct_children("A.B", &names),
            vec!["A.B\\C".to_string(), "A.B\\D".to_string()]
        );
    }

    #[test]
    fn test_prefix_must_end_at_separator() {
        assert!(!is_direct_child("App", "Application\\Foo"));
        assert!(!is_direct_child("App", "App\\"));
        assert!(!is_direct_child("App", "App\\\\Foo"));
        assert!(!is_direct_child("App", "App"));
        assert!(is_direct_child("App\\Foo", "App\\Foo\\Bar"));
    }

    #[test]
    fn test_keeps_input_order() {
        let names = vec![
            "Lib\\Zeta".to_string(),
            "Lib\\Alpha".to_string(),
            "Lib\\Mid".to_string(),
        ];
        assert_eq!(direct_children("Lib", &names), names);
    }
}
