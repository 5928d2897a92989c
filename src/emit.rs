//! Generated units and file emission.
//!
//! A unit is recomputed on every pass, never cached. The multi-schema pass
//! runs the generators in parallel; each invocation only borrows its schema,
//! so no coordination is needed, and the collected output keeps registry
//! order regardless of scheduling.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::codegen::DelegateLookupGenerator;
use crate::error::{Error, Result};
use crate::schema::SchemaRegistry;

/// One generated source unit: the derived class name tells a caller where
/// the text belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub class_name: String,
    pub source: String,
}

/// Generate a delegate lookup unit for every schema in the registry, in
/// registry (load) order.
pub fn generate_all(package_name: &str, schemas: &SchemaRegistry) -> Vec<GeneratedUnit> {
    let ordered: Vec<_> = schemas.values().collect();
    ordered
        .into_par_iter()
        .map(|schema| {
            let generator = DelegateLookupGenerator::new(package_name, schema);
            GeneratedUnit {
                class_name: generator.class_name().to_string(),
                source: generator.generate(),
            }
        })
        .collect()
}

/// Directory for a Java package under `out_dir` (`com.acme` → `com/acme`).
pub fn package_dir(out_dir: &Path, package_name: &str) -> PathBuf {
    let mut dir = out_dir.to_path_buf();
    for part in package_name.split('.').filter(|p| !p.is_empty()) {
        dir.push(part);
    }
    dir
}

/// Write one unit to `<out_dir>/<package path>/<ClassName>.java`, creating
/// directories as needed. Returns the written path.
pub fn write_unit(out_dir: &Path, package_name: &str, unit: &GeneratedUnit) -> Result<PathBuf> {
    let dir = package_dir(out_dir, package_name);
    std::fs::create_dir_all(&dir).map_err(|source| Error::Write {
        path: dir.clone(),
        source,
    })?;
    let path = dir.join(format!("{}.java", unit.class_name));
    std::fs::write(&path, &unit.source).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
