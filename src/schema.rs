use std::path::{Path, PathBuf};

use jsonschema::validator_for;
use serde_json::Value;

use crate::error::{HarnessError, SchemaLoadError};

/// Logical names of the bundled response schemas.
pub const SCHEMA_NAMES: [&str; 8] = [
    "users_list",
    "get_single_user",
    "post_users",
    "list_resource",
    "update_users",
    "update_user_by_patch",
    "successful_register",
    "unsuccessful_register",
];

/// Resolves a logical schema name to a parsed JSON Schema document.
///
/// Implementations must not cache mutable state between calls; every
/// `load` produces a fresh document owned by the caller.
pub trait SchemaStore {
    fn load(&self, name: &str) -> Result<Value, SchemaLoadError>;
}

/// Reads `<root>/<name>.json` from disk on every call.
#[derive(Debug, Clone)]
pub struct DirSchemaStore {
    root: PathBuf,
}

impl DirSchemaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }
}

impl SchemaStore for DirSchemaStore {
    fn load(&self, name: &str) -> Result<Value, SchemaLoadError> {
        let path = self.path_for(name);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SchemaLoadError::NotFound {
                    name: name.to_string(),
                    path,
                });
            }
            Err(source) => {
                return Err(SchemaLoadError::Io {
                    name: name.to_string(),
                    path,
                    source,
                });
            }
        };
        tracing::debug!(schema = name, path = %path.display(), "loaded schema from disk");
        parse_schema(name, &raw)
    }
}

/// Schemas compiled into the binary; usable from any working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSchemaStore;

impl EmbeddedSchemaStore {
    fn source(name: &str) -> Option<&'static str> {
        let raw = match name {
            "users_list" => include_str!("../schemas/users_list.json"),
            "get_single_user" => include_str!("../schemas/get_single_user.json"),
            "post_users" => include_str!("../schemas/post_users.json"),
            "list_resource" => include_str!("../schemas/list_resource.json"),
            "update_users" => include_str!("../schemas/update_users.json"),
            "update_user_by_patch" => include_str!("../schemas/update_user_by_patch.json"),
            "successful_register" => include_str!("../schemas/successful_register.json"),
            "unsuccessful_register" => include_str!("../schemas/unsuccessful_register.json"),
            _ => return None,
        };
        Some(raw)
    }
}

impl SchemaStore for EmbeddedSchemaStore {
    fn load(&self, name: &str) -> Result<Value, SchemaLoadError> {
        let raw = Self::source(name).ok_or_else(|| SchemaLoadError::NotFound {
            name: name.to_string(),
            path: PathBuf::from(format!("<embedded>/{name}.json")),
        })?;
        parse_schema(name, raw)
    }
}

fn parse_schema(name: &str, raw: &str) -> Result<Value, SchemaLoadError> {
    serde_json::from_str(raw).map_err(|source| SchemaLoadError::Parse {
        name: name.to_string(),
        source,
    })
}

/// Validate a JSON instance against a JSON Schema document.
///
/// The draft is taken from the schema's `$schema` keyword (2020-12 when absent).
/// All violations are collected, not just the first one.
pub fn validate(name: &str, schema: &Value, instance: &Value) -> Result<(), HarnessError> {
    let validator = validator_for(schema).map_err(|e| SchemaLoadError::Invalid {
        name: name.to_string(),
        message: e.to_string(),
    })?;

    let errors: Vec<String> = validator.iter_errors(instance).map(|e| e.to_string()).collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(HarnessError::SchemaValidation {
            schema: name.to_string(),
            errors,
        })
    }
}
