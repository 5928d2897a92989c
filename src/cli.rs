//! Minimal CLI: load schemas → (check | generate)
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use crate::schema::{self, SchemaRegistry};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate delegate lookup sources from object schema documents
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// load schemas, run the sanitized-fragment collision check, report accessor counts
    Check(CheckArgs),
    /// generate one delegate lookup source per schema
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// One or more schema documents. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug)]
struct CheckArgs {
    #[command(flatten)]
    input_settings: InputSettings,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    input_settings: InputSettings,

    /// package for the generated sources, emitted verbatim
    #[arg(long, short)]
    package: String,

    /// output directory (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load(&self) -> anyhow::Result<SchemaRegistry> {
        let source_paths = resolve_file_path_patterns(&self.input)?;
        let registry = schema::load_files(&source_paths)?;
        for object_schema in registry.values() {
            schema::check_fragment_collisions(object_schema)?;
        }
        Ok(registry)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Check(target) => {
                let registry = target.input_settings.load()?;
                for object_schema in registry.values() {
                    let accessors: usize = object_schema
                        .fields()
                        .iter()
                        .map(|f| f.field_type.accessor_count())
                        .sum();
                    println!(
                        "{} {}: {} fields, {} field accessors",
                        "ok".green(),
                        object_schema.name(),
                        object_schema.num_fields(),
                        accessors,
                    );
                }
                Ok(())
            }
            Command::Generate(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                let registry = target.input_settings.load()?;
                let units = crate::emit::generate_all(&target.package, &registry);

                if let Some(out) = target.out.as_ref() {
                    for unit in &units {
                        let path = crate::emit::write_unit(out, &target.package, unit)?;
                        eprintln!(
                            "{} {} -> {}",
                            "generated".green(),
                            unit.class_name,
                            path.display(),
                        );
                    }
                } else {
                    for unit in &units {
                        println!("{}", unit.source);
                    }
                }
                Ok(())
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn resolve_file_path_patterns<I>(patterns: I) -> crate::error::Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            let entries =
                glob::glob(pattern).map_err(|source| crate::error::Error::GlobPattern {
                    pattern: pattern.to_string(),
                    source,
                })?;
            for entry in entries {
                match entry {
                    Ok(path) => {
                        matched_any = true;
                        out.push(path);
                    }
                    Err(e) => {
                        let path = e.path().to_path_buf();
                        return Err(crate::error::Error::Read { path, source: e.into_error() });
                    }
                }
            }
            if !matched_any {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                return Err(crate::error::Error::GlobEmpty { pattern: pattern.to_string() });
            }
        } else {
            // Treat as a literal path
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
