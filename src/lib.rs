//! Schema-driven source generator for object delegate lookup classes.
//!
//! Given an object schema (named, ordered list of typed fields), emit the
//! Java source of a delegate: a thin accessor class that forwards typed
//! field reads to a per-type data-access object ("type API"), addressed by
//! a positional record ordinal.
//!
//! Pipeline: load schema documents ([`schema`]) → validate sanitized
//! fragments ([`schema::check_fragment_collisions`]) → generate units
//! ([`codegen`], [`emit::generate_all`]) → write `.java` files
//! ([`emit::write_unit`]). Generation is a pure function of
//! `(package name, schema)`: byte-identical output for identical inputs.

pub mod cli;
pub mod codegen;
pub mod emit;
pub mod error;
pub mod naming;
pub mod schema;
