/// Constants module to avoid magic strings in the codebase

// Grouping names
pub const NAME_SEPARATOR: char = '\\';
pub const DEFAULT_UNGROUPED_NAME: &str = "None";

// Template parameter keys
pub const PARAM_NAMESPACE: &str = "namespace";
pub const PARAM_PACKAGE: &str = "package";
pub const PARAM_NAMESPACES: &str = "namespaces";
pub const PARAM_PACKAGES: &str = "packages";
pub const PARAM_SUBNAMESPACES: &str = "subnamespaces";
pub const PARAM_SUBPACKAGES: &str = "subpackages";

// Element category keys
pub const CLASSES: &str = "classes";
pub const INTERFACES: &str = "interfaces";
pub const TRAITS: &str = "traits";
pub const EXCEPTIONS: &str = "exceptions";
pub const CONSTANTS: &str = "constants";
pub const FUNCTIONS: &str = "functions";

// Config locations
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_DIR: &str = ".apigen";
pub const ENV_PREFIX: &str = "APIGEN_";
pub const DEFAULT_INDEX_PATH: &str = "elements.json";
