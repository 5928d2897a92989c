//! Identifier sanitization and naming conventions for generated sources.
//!
//! Everything here is a pure function of its string argument; the codegen
//! layer treats these as opaque and never second-guesses their output.
//! Two distinct field names that sanitize to the same fragment would emit
//! two accessors with identical signatures, so the schema layer checks for
//! that before any source text is produced (see `schema::check_fragment_collisions`).

// ————————————————————————————————————————————————————————————————————————————
// RUNTIME CLASSES
// ————————————————————————————————————————————————————————————————————————————

/// Abstract base class every generated delegate extends. Fixed, never derived.
pub const ABSTRACT_DELEGATE_CLASS: &str =
    "org.delegen.runtime.objects.delegate.AbstractObjectDelegate";

/// Runtime schema class returned by the generated `getSchema()`.
pub const OBJECT_SCHEMA_CLASS: &str = "org.delegen.runtime.schema.ObjectSchema";

/// Runtime data-access capability returned by the generated `getTypeDataAccess()`.
pub const TYPE_DATA_ACCESS_CLASS: &str =
    "org.delegen.runtime.dataaccess.ObjectTypeDataAccess";

/// Last segment of a dotted fully-qualified class name.
pub fn simple_class_name(fqcn: &str) -> &str {
    fqcn.rsplit('.').next().unwrap_or(fqcn)
}

// ————————————————————————————————————————————————————————————————————————————
// SANITIZATION
// ————————————————————————————————————————————————————————————————————————————

/// Uppercase the first character, leave the rest untouched.
pub fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Replace every character that is not valid in a Java identifier with `_`,
/// and prefix `_` if the result would start with a digit.
pub fn sanitize_identifier(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
            out.push(c);
        } else {
            out.push('_');
        }
    }
    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Method-name fragment for a field: `sanitize(uppercase_first(name))`.
/// `release year` → `Release_year`, used as `getRelease_year(...)`.
pub fn method_fragment(field_name: &str) -> String {
    sanitize_identifier(&uppercase_first(field_name))
}

// ————————————————————————————————————————————————————————————————————————————
// DERIVED TYPE NAMES
// ————————————————————————————————————————————————————————————————————————————

fn type_fragment(type_name: &str) -> String {
    sanitize_identifier(&uppercase_first(type_name))
}

/// Class name of the generated delegate lookup implementation.
pub fn delegate_lookup_impl_name(type_name: &str) -> String {
    format!("{}DelegateLookupImpl", type_fragment(type_name))
}

/// Name of the delegate interface the generated class declares conformance to.
pub fn delegate_interface_name(type_name: &str) -> String {
    format!("{}Delegate", type_fragment(type_name))
}

/// Name of the per-type API class the generated delegate wraps and forwards to.
pub fn type_api_class_name(type_name: &str) -> String {
    format!("{}TypeAPI", type_fragment(type_name))
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
