//! Delegate lookup source generation.
//!
//! Pure text assembly: `(package name, schema) → Java source` with no I/O
//! and no shared state, so identical inputs always yield byte-identical
//! output and concurrent invocations need no coordination. All semantic
//! behavior lives in the wrapped type API; every emitted accessor body is a
//! one-line forward with the same method name and the same `ordinal`
//! argument.
//!
//! The per-field `match` is the heart of this module. It is exhaustive over
//! `FieldType` on purpose: a new field type that nobody taught the
//! dispatch about must fail the build, not silently drop an accessor.

use crate::naming;
use crate::schema::{Field, FieldType, ObjectSchema};

// ————————————————————————————————————————————————————————————————————————————
// GENERATOR
// ————————————————————————————————————————————————————————————————————————————

/// Emits a `{Type}DelegateLookupImpl` class: extends the fixed abstract
/// delegate base, implements the derived `{Type}Delegate` interface, and
/// forwards every typed field read to a wrapped `{Type}TypeAPI`.
pub struct DelegateLookupGenerator<'a> {
    package_name: &'a str,
    schema: &'a ObjectSchema,
    class_name: String,
}

impl<'a> DelegateLookupGenerator<'a> {
    pub fn new(package_name: &'a str, schema: &'a ObjectSchema) -> Self {
        let class_name = naming::delegate_lookup_impl_name(schema.name());
        Self { package_name, schema, class_name }
    }

    /// Derived output class name; stable across calls.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Build the full source unit.
    pub fn generate(&self) -> String {
        let type_api = naming::type_api_class_name(self.schema.name());
        let mut out = String::new();

        out.push_str(&format!("package {};\n\n", self.package_name));

        out.push_str(&format!("import {};\n", naming::ABSTRACT_DELEGATE_CLASS));
        out.push_str(&format!("import {};\n", naming::TYPE_DATA_ACCESS_CLASS));
        out.push_str(&format!("import {};\n", naming::OBJECT_SCHEMA_CLASS));

        out.push_str("\n@SuppressWarnings(\"all\")\n");
        out.push_str(&format!(
            "public class {} extends {} implements {} {{\n\n",
            self.class_name,
            naming::simple_class_name(naming::ABSTRACT_DELEGATE_CLASS),
            naming::delegate_interface_name(self.schema.name()),
        ));

        out.push_str(&format!("    private final {type_api} typeAPI;\n\n"));

        out.push_str(&format!("    public {}({type_api} typeAPI) {{\n", self.class_name));
        out.push_str("        this.typeAPI = typeAPI;\n");
        out.push_str("    }\n\n");

        for field in self.schema.fields() {
            push_field_accessors(&mut out, field);
        }

        // Fixed trailer, emitted once regardless of field count. The schema
        // and the data-access capability are sourced through the type API,
        // never from a separately held reference.
        push_method(&mut out, None, &type_api, "getTypeAPI", "", "typeAPI");
        push_method(
            &mut out,
            Some("@Override"),
            naming::simple_class_name(naming::OBJECT_SCHEMA_CLASS),
            "getSchema",
            "",
            "typeAPI.getTypeDataAccess().getSchema()",
        );
        push_method(
            &mut out,
            Some("@Override"),
            naming::simple_class_name(naming::TYPE_DATA_ACCESS_CLASS),
            "getTypeDataAccess",
            "",
            "typeAPI.getTypeDataAccess()",
        );

        out.push_str("}\n");
        out
    }
}

// ————————————————————————————————————————————————————————————————————————————
// PER-FIELD DISPATCH
// ————————————————————————————————————————————————————————————————————————————

/// Accessor signatures per field type:
/// - BOOLEAN and the numerics get a primitive getter plus a `Boxed` getter,
/// - BYTES gets a single getter,
/// - STRING gets a getter plus an `is{X}Equal(ordinal, testValue)` test,
/// - REFERENCE gets `get{X}Ordinal` only; the referenced value is resolved
///   elsewhere.
fn push_field_accessors(out: &mut String, field: &Field) {
    let fragment = naming::method_fragment(&field.name);
    match field.field_type {
        FieldType::Boolean => push_primitive_pair(out, &fragment, "boolean", "Boolean"),
        FieldType::Double => push_primitive_pair(out, &fragment, "double", "Double"),
        FieldType::Float => push_primitive_pair(out, &fragment, "float", "Float"),
        FieldType::Int => push_primitive_pair(out, &fragment, "int", "Integer"),
        FieldType::Long => push_primitive_pair(out, &fragment, "long", "Long"),
        FieldType::Bytes => push_getter(out, "byte[]", &format!("get{fragment}")),
        FieldType::String => {
            push_getter(out, "String", &format!("get{fragment}"));
            let name = format!("is{fragment}Equal");
            push_method(
                out,
                None,
                "boolean",
                &name,
                "int ordinal, String testValue",
                &format!("typeAPI.{name}(ordinal, testValue)"),
            );
        }
        FieldType::Reference => push_getter(out, "int", &format!("get{fragment}Ordinal")),
    }
}

fn push_primitive_pair(out: &mut String, fragment: &str, primitive: &str, boxed: &str) {
    push_getter(out, primitive, &format!("get{fragment}"));
    push_getter(out, boxed, &format!("get{fragment}Boxed"));
}

/// Single-argument forwarding getter: same method name on both sides.
fn push_getter(out: &mut String, return_type: &str, name: &str) {
    push_method(out, None, return_type, name, "int ordinal", &format!("typeAPI.{name}(ordinal)"));
}

fn push_method(
    out: &mut String,
    annotation: Option<&str>,
    return_type: &str,
    name: &str,
    params: &str,
    body: &str,
) {
    if let Some(annotation) = annotation {
        out.push_str("    ");
        out.push_str(annotation);
        out.push('\n');
    }
    out.push_str(&format!("    public {return_type} {name}({params}) {{\n"));
    out.push_str(&format!("        return {body};\n"));
    out.push_str("    }\n\n");
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn schema(name: &str, fields: &[(&str, FieldType)]) -> ObjectSchema {
        ObjectSchema::new(
            name,
            fields
                .iter()
                .map(|(n, t)| Field { name: (*n).to_string(), field_type: *t })
                .collect(),
        )
    }

    fn accessor_method_count(source: &str) -> usize {
        // every method line starts with `    public `; subtract the
        // constructor and the three trailer accessors
        source.lines().filter(|l| l.starts_with("    public ")).count() - 1 - 3
    }

    #[test]
    fn movie_schema_generates_expected_source() {
        let movie = schema("Movie", &[("id", FieldType::Int), ("title", FieldType::String)]);
        let generator = DelegateLookupGenerator::new("com.acme.movies", &movie);
        assert_eq!(generator.class_name(), "MovieDelegateLookupImpl");

        let expected = "\
package com.acme.movies;

import org.delegen.runtime.objects.delegate.AbstractObjectDelegate;
import org.delegen.runtime.dataaccess.ObjectTypeDataAccess;
import org.delegen.runtime.schema.ObjectSchema;

@SuppressWarnings(\"all\")
public class MovieDelegateLookupImpl extends AbstractObjectDelegate implements MovieDelegate {

    private final MovieTypeAPI typeAPI;

    public MovieDelegateLookupImpl(MovieTypeAPI typeAPI) {
        this.typeAPI = typeAPI;
    }

    public int getId(int ordinal) {
        return typeAPI.getId(ordinal);
    }

    public Integer getIdBoxed(int ordinal) {
        return typeAPI.getIdBoxed(ordinal);
    }

    public String getTitle(int ordinal) {
        return typeAPI.getTitle(ordinal);
    }

    public boolean isTitleEqual(int ordinal, String testValue) {
        return typeAPI.isTitleEqual(ordinal, testValue);
    }

    public MovieTypeAPI getTypeAPI() {
        return typeAPI;
    }

    @Override
    public ObjectSchema getSchema() {
        return typeAPI.getTypeDataAccess().getSchema();
    }

    @Override
    public ObjectTypeDataAccess getTypeDataAccess() {
        return typeAPI.getTypeDataAccess();
    }

}
";
        assert_eq!(generator.generate(), expected);
    }

    #[test]
    fn generation_is_deterministic() {
        let s = schema(
            "Mixed",
            &[
                ("flag", FieldType::Boolean),
                ("payload", FieldType::Bytes),
                ("score", FieldType::Double),
                ("owner", FieldType::Reference),
            ],
        );
        let generator = DelegateLookupGenerator::new("com.acme", &s);
        assert_eq!(generator.generate(), generator.generate());
    }

    #[test]
    fn numeric_and_boolean_fields_emit_primitive_and_boxed_pair() {
        let cases = [
            (FieldType::Boolean, "boolean", "Boolean"),
            (FieldType::Double, "double", "Double"),
            (FieldType::Float, "float", "Float"),
            (FieldType::Int, "int", "Integer"),
            (FieldType::Long, "long", "Long"),
        ];
        for (field_type, primitive, boxed) in cases {
            let s = schema("T", &[("value", field_type)]);
            let source = DelegateLookupGenerator::new("p", &s).generate();
            assert!(
                source.contains(&format!("public {primitive} getValue(int ordinal)")),
                "missing primitive getter for {field_type:?}:\n{source}"
            );
            assert!(
                source.contains(&format!("public {boxed} getValueBoxed(int ordinal)")),
                "missing boxed getter for {field_type:?}:\n{source}"
            );
            assert_eq!(accessor_method_count(&source), 2);
        }
    }

    #[test]
    fn bytes_field_emits_single_getter() {
        let s = schema("Blob", &[("data", FieldType::Bytes)]);
        let source = DelegateLookupGenerator::new("p", &s).generate();
        assert!(source.contains("public byte[] getData(int ordinal)"));
        assert!(!source.contains("getDataBoxed"));
        assert_eq!(accessor_method_count(&source), 1);
    }

    #[test]
    fn string_field_emits_getter_and_equality_test() {
        let s = schema("Tag", &[("label", FieldType::String)]);
        let source = DelegateLookupGenerator::new("p", &s).generate();
        assert!(source.contains("public String getLabel(int ordinal)"));
        assert!(source.contains("public boolean isLabelEqual(int ordinal, String testValue)"));
        assert!(source.contains("return typeAPI.isLabelEqual(ordinal, testValue);"));
        assert_eq!(accessor_method_count(&source), 2);
    }

    #[test]
    fn reference_field_emits_ordinal_getter_only() {
        let s = schema("Cast", &[("actor", FieldType::Reference)]);
        let source = DelegateLookupGenerator::new("p", &s).generate();
        assert!(source.contains("public int getActorOrdinal(int ordinal)"));
        assert!(source.contains("return typeAPI.getActorOrdinal(ordinal);"));
        // no value getter for references
        assert!(!source.contains("getActor(int ordinal)"));
        assert_eq!(accessor_method_count(&source), 1);
    }

    #[test]
    fn empty_schema_still_emits_trailer() {
        let s = schema("Empty", &[]);
        let source = DelegateLookupGenerator::new("p", &s).generate();
        assert_eq!(accessor_method_count(&source), 0);
        assert_eq!(source.matches("public EmptyTypeAPI getTypeAPI()").count(), 1);
        assert_eq!(source.matches("public ObjectSchema getSchema()").count(), 1);
        assert_eq!(source.matches("public ObjectTypeDataAccess getTypeDataAccess()").count(), 1);
    }

    #[test]
    fn accessor_count_matches_field_type_weights() {
        let fields = [
            ("a", FieldType::Boolean),
            ("b", FieldType::Bytes),
            ("c", FieldType::Double),
            ("d", FieldType::Float),
            ("e", FieldType::Int),
            ("f", FieldType::Long),
            ("g", FieldType::Reference),
            ("h", FieldType::String),
        ];
        let s = schema("Everything", &fields);
        let source = DelegateLookupGenerator::new("p", &s).generate();
        let expected: usize = fields.iter().map(|(_, t)| t.accessor_count()).sum();
        assert_eq!(accessor_method_count(&source), expected);
    }

    #[test]
    fn field_names_are_sanitized_into_method_fragments() {
        let s = schema("Movie", &[("release year", FieldType::Int)]);
        let source = DelegateLookupGenerator::new("p", &s).generate();
        assert!(source.contains("public int getRelease_year(int ordinal)"));
        assert!(source.contains("public Integer getRelease_yearBoxed(int ordinal)"));
    }
}
