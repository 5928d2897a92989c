//! Strongly-typed schema model + JSON loading. No `serde_json::Value`
//! escapes this module.
//!
//! A schema document is either one object or an array of objects:
//!
//! ```json
//! { "name": "Movie", "fields": [ { "name": "id", "type": "INT" },
//!                                { "name": "title", "type": "STRING" } ] }
//! ```
//!
//! Field order is significant: it fixes the order of the emitted accessors.
//! Schemas are immutable once loaded; the generator only ever borrows them.

use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::naming;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// Closed set of field types. The single axis the codegen dispatch matches
/// on; adding a variant without updating that match is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldType {
    Boolean,
    Bytes,
    Double,
    Float,
    Int,
    Long,
    Reference,
    String,
}

impl FieldType {
    /// Number of accessor methods the delegate emits for a field of this
    /// type (primitive+boxed pairs and getter+equality pairs count as 2).
    pub fn accessor_count(self) -> usize {
        match self {
            FieldType::Boolean
            | FieldType::Double
            | FieldType::Float
            | FieldType::Int
            | FieldType::Long
            | FieldType::String => 2,
            FieldType::Bytes | FieldType::Reference => 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectSchema {
    name: String,
    fields: Vec<Field>,
}

impl ObjectSchema {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self { name: name.into(), fields }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field_name(&self, index: usize) -> &str {
        &self.fields[index].name
    }

    pub fn field_type(&self, index: usize) -> FieldType {
        self.fields[index].field_type
    }
}

/// Schemas keyed by name, in first-seen order. The multi-type generation
/// pass iterates this map, so load order fixes output order.
pub type SchemaRegistry = IndexMap<String, ObjectSchema>;

// ————————————————————————————————————————————————————————————————————————————
// LOADING
// ————————————————————————————————————————————————————————————————————————————

#[derive(Deserialize)]
#[serde(untagged)]
enum SchemaDocument {
    One(ObjectSchema),
    Many(Vec<ObjectSchema>),
}

/// Parse one schema document (object or array), reporting the JSON path on
/// failure.
pub fn parse_document(path: &Path, src: &str) -> Result<Vec<ObjectSchema>> {
    let de = &mut serde_json::Deserializer::from_str(src);
    match serde_path_to_error::deserialize::<_, SchemaDocument>(de) {
        Ok(SchemaDocument::One(schema)) => Ok(vec![schema]),
        Ok(SchemaDocument::Many(schemas)) => Ok(schemas),
        Err(err) => {
            let json_path = err.path().to_string();
            Err(Error::SchemaParse {
                path: path.to_path_buf(),
                json_path,
                source: err.into_inner(),
            })
        }
    }
}

/// Read every path into a single registry. Duplicate schema names across
/// files are an error, not a silent overwrite.
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<SchemaRegistry> {
    let mut registry = SchemaRegistry::new();
    for path in paths {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        for schema in parse_document(path, &src)? {
            let name = schema.name().to_string();
            if registry.insert(name.clone(), schema).is_some() {
                return Err(Error::DuplicateSchema {
                    name,
                    path: path.to_path_buf(),
                });
            }
        }
    }
    Ok(registry)
}

// ————————————————————————————————————————————————————————————————————————————
// VALIDATION
// ————————————————————————————————————————————————————————————————————————————

/// Reject schemas in which two distinct field names sanitize to the same
/// method-name fragment. The generator itself is collision-oblivious, so
/// this must run before its output reaches a compiler.
pub fn check_fragment_collisions(schema: &ObjectSchema) -> Result<()> {
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(schema.num_fields());
    for field in schema.fields() {
        let fragment = naming::method_fragment(&field.name);
        if let Some(first) = seen.insert(fragment.clone(), &field.name) {
            return Err(Error::FragmentCollision {
                schema: schema.name().to_string(),
                fragment,
                first: first.to_string(),
                second: field.name.clone(),
            });
        }
    }
    Ok(())
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn tmp() -> PathBuf {
        PathBuf::from("test.json")
    }

    #[test]
    fn parse_single_object_document() {
        let src = r#"{ "name": "Movie", "fields": [
            { "name": "id", "type": "INT" },
            { "name": "title", "type": "STRING" }
        ] }"#;
        let schemas = parse_document(&tmp(), src).unwrap();
        assert_eq!(schemas.len(), 1);
        let movie = &schemas[0];
        assert_eq!(movie.name(), "Movie");
        assert_eq!(movie.num_fields(), 2);
        assert_eq!(movie.field_name(0), "id");
        assert_eq!(movie.field_type(0), FieldType::Int);
        assert_eq!(movie.field_type(1), FieldType::String);
    }

    #[test]
    fn parse_array_document() {
        let src = r#"[
            { "name": "Movie", "fields": [] },
            { "name": "Actor", "fields": [ { "name": "name", "type": "STRING" } ] }
        ]"#;
        let schemas = parse_document(&tmp(), src).unwrap();
        assert_eq!(schemas.len(), 2);
        assert_eq!(schemas[1].name(), "Actor");
    }

    #[test]
    fn parse_error_is_reported() {
        let src = r#"{ "name": "Movie", "fields": [ { "name": "id", "type": "INTS" } ] }"#;
        let err = parse_document(&tmp(), src).unwrap_err();
        assert!(matches!(err, Error::SchemaParse { .. }), "got {err:?}");
    }

    #[test]
    fn field_type_accessor_counts() {
        assert_eq!(FieldType::Int.accessor_count(), 2);
        assert_eq!(FieldType::Boolean.accessor_count(), 2);
        assert_eq!(FieldType::String.accessor_count(), 2);
        assert_eq!(FieldType::Bytes.accessor_count(), 1);
        assert_eq!(FieldType::Reference.accessor_count(), 1);
    }

    #[test]
    fn fragment_collision_is_detected() {
        // "first name" and "first_name" both sanitize to `First_name`
        let schema = ObjectSchema::new(
            "Person",
            vec![
                Field { name: "first name".into(), field_type: FieldType::String },
                Field { name: "first_name".into(), field_type: FieldType::String },
            ],
        );
        let err = check_fragment_collisions(&schema).unwrap_err();
        match err {
            Error::FragmentCollision { schema, fragment, first, second } => {
                assert_eq!(schema, "Person");
                assert_eq!(fragment, "First_name");
                assert_eq!(first, "first name");
                assert_eq!(second, "first_name");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn distinct_fragments_pass() {
        let schema = ObjectSchema::new(
            "Person",
            vec![
                Field { name: "firstName".into(), field_type: FieldType::String },
                Field { name: "lastName".into(), field_type: FieldType::String },
            ],
        );
        assert!(check_fragment_collisions(&schema).is_ok());
    }
}
