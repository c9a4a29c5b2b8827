//! Registry of the scalar types known to a schema
//!
//! Built once while the schema is assembled and then shared read-only.

use graphql_scalars_diagnostics::SchemaError;
use std::collections::HashMap;
use std::sync::Arc;

use crate::scalars::{BooleanType, FloatType, IdType, IntType, StringType};
use crate::{STANDARD_SCALAR_NAMES, ScalarType};

/// Shared handle to a scalar implementation
pub type ScalarRef = Arc<dyn ScalarType>;

/// Maps scalar names to their coercion units
#[derive(Debug, Clone)]
pub struct ScalarRegistry {
    scalars: HashMap<String, ScalarRef>,
}

impl Default for ScalarRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScalarRegistry {
    /// Registry with no scalars at all
    pub fn empty() -> Self {
        Self {
            scalars: HashMap::new(),
        }
    }

    /// Registry holding the five built-in scalars
    pub fn standard() -> Self {
        let builtins: [ScalarRef; 5] = [
            Arc::new(IntType),
            Arc::new(FloatType),
            Arc::new(StringType),
            Arc::new(BooleanType),
            Arc::new(IdType),
        ];
        Self {
            scalars: builtins
                .into_iter()
                .map(|scalar| (scalar.name().to_string(), scalar))
                .collect(),
        }
    }

    pub fn is_standard_name(name: &str) -> bool {
        STANDARD_SCALAR_NAMES.contains(&name)
    }

    /// Add a new scalar. Fails if the name is invalid or already taken.
    pub fn register(&mut self, scalar: impl ScalarType + 'static) -> Result<(), SchemaError> {
        self.register_ref(Arc::new(scalar))
    }

    pub fn register_ref(&mut self, scalar: ScalarRef) -> Result<(), SchemaError> {
        let name = scalar.name();
        validate_name(name)?;
        if self.scalars.contains_key(name) {
            return Err(SchemaError::DuplicateScalar {
                name: name.to_string(),
            });
        }
        log::debug!("registered scalar {name} ({})", scalar.kind());
        self.scalars.insert(name.to_string(), scalar);
        Ok(())
    }

    /// Replace a built-in scalar with another implementation of the same name.
    ///
    /// Returns the implementation that was replaced, if it was still present.
    pub fn override_standard(
        &mut self,
        scalar: impl ScalarType + 'static,
    ) -> Result<Option<ScalarRef>, SchemaError> {
        let name = scalar.name().to_string();
        if !Self::is_standard_name(&name) {
            return Err(SchemaError::UnknownStandardScalar { name });
        }
        log::info!("overriding standard scalar {name}");
        Ok(self.scalars.insert(name, Arc::new(scalar)))
    }

    pub fn get(&self, name: &str) -> Option<ScalarRef> {
        self.scalars.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scalars.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.scalars.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered scalars, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &ScalarRef> {
        self.scalars.values()
    }

    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }
}

/// GraphQL names are `[_A-Za-z][_0-9A-Za-z]*`; `__` is reserved for introspection
fn validate_name(name: &str) -> Result<(), SchemaError> {
    let invalid = |reason: &str| SchemaError::InvalidScalarName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = name.chars();
    match chars.next() {
        None => return Err(invalid("name is empty")),
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        Some(_) => return Err(invalid("must start with a letter or underscore")),
    }
    if !chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) {
        return Err(invalid("may only contain letters, digits and underscores"));
    }
    if name.starts_with("__") {
        return Err(invalid("names starting with \"__\" are reserved"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CustomScalar, ScalarKind};

    #[test]
    fn test_standard_registry() {
        let registry = ScalarRegistry::standard();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.names(), ["Boolean", "Float", "ID", "Int", "String"]);
        assert_eq!(registry.get("ID").map(|s| s.kind()), Some(ScalarKind::Id));
        assert!(registry.get("Date").is_none());

        let mut kinds: Vec<_> = registry.iter().map(|s| s.kind()).collect();
        kinds.sort_by_key(|kind| kind.to_string());
        assert_eq!(
            kinds,
            [ScalarKind::Boolean, ScalarKind::Float, ScalarKind::Id, ScalarKind::Int, ScalarKind::String]
        );
    }

    #[test]
    fn test_register_custom() {
        let mut registry = ScalarRegistry::default();
        registry
            .register(CustomScalar::builder("Date").build())
            .unwrap();
        assert!(registry.contains("Date"));

        let err = registry
            .register(CustomScalar::builder("Date").build())
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateScalar {
                name: "Date".to_string()
            }
        );
    }

    #[test]
    fn test_register_cannot_shadow_builtin() {
        let mut registry = ScalarRegistry::standard();
        let err = registry
            .register(CustomScalar::builder("Int").build())
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateScalar { .. }));
    }

    #[test]
    fn test_override_standard() {
        let mut registry = ScalarRegistry::standard();
        let previous = registry
            .override_standard(CustomScalar::builder("ID").build())
            .unwrap();
        assert_eq!(previous.map(|s| s.kind()), Some(ScalarKind::Id));
        assert_eq!(registry.get("ID").map(|s| s.kind()), Some(ScalarKind::Custom));

        let err = registry
            .override_standard(CustomScalar::builder("Date").build())
            .unwrap_err();
        assert!(matches!(err, SchemaError::UnknownStandardScalar { .. }));
    }

    #[test]
    fn test_invalid_names() {
        let mut registry = ScalarRegistry::empty();
        for name in ["", "1st", "has-dash", "__Internal"] {
            let err = registry
                .register(CustomScalar::builder(name).build())
                .unwrap_err();
            assert!(
                matches!(err, SchemaError::InvalidScalarName { .. }),
                "{name:?}"
            );
        }
        registry
            .register(CustomScalar::builder("_Any").build())
            .unwrap();
        assert_eq!(registry.names(), ["_Any"]);
    }
}
