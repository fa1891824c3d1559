//! Discovery, rendering and the batch driver around `dbgen-schema`.
//!
//! A run is all-or-nothing: if any type in a source file fails validation,
//! no output is produced for any of them.

pub mod discover;
mod macros;
pub mod render;

pub use dbgen_config as config;
pub use dbgen_schema as schema;

use dbgen_config::Config;
use dbgen_schema::{
    annotation::Interpreter, build::build_models, declaration::TypeDeclaration,
    error::SchemaError, node::Model,
};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;
use tracing::debug;

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: syn::Error,
    },

    #[error("{file}: {type_name}: generic types are not supported")]
    Generic { file: String, type_name: String },

    #[error("{file}: {source}")]
    Schema {
        file: String,
        #[source]
        source: SchemaError,
    },

    #[error("{type_name}: '{name}' is not a valid identifier")]
    Ident { type_name: String, name: String },

    #[error("{file}: types '{first}' and '{second}' both render to '{file_name}'")]
    OutputCollision {
        file: String,
        file_name: String,
        first: String,
        second: String,
    },
}

///
/// GeneratedFile
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedFile {
    pub file_name: String,
    pub contents: String,
}

///
/// Generator
///

#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: Config,
    interpreter: Interpreter,
}

impl Generator {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let interpreter = Interpreter::new(config.annotations.namespace.clone());

        Self {
            config,
            interpreter,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Raw declarations for every candidate struct in `source`.
    pub fn discover(
        &self,
        file_name: &str,
        source: &str,
    ) -> Result<Vec<TypeDeclaration>, BuildError> {
        discover::discover(file_name, source, &self.config.types)
    }

    /// Validated models for every candidate struct in `source`.
    pub fn extract(&self, file_name: &str, source: &str) -> Result<Vec<Model>, BuildError> {
        let decls = self.discover(file_name, source)?;

        build_models(&self.interpreter, &decls).map_err(|source| BuildError::Schema {
            file: file_name.to_string(),
            source,
        })
    }

    /// Rendered accessor files, one per model.
    pub fn generate(
        &self,
        file_name: &str,
        source: &str,
    ) -> Result<Vec<GeneratedFile>, BuildError> {
        let models = self.extract(file_name, source)?;

        let mut owners = BTreeMap::new();
        let mut files = Vec::with_capacity(models.len());
        for model in &models {
            let output = self.config.output.file_name(&model.entity_type());
            if let Some(first) = owners.insert(output.clone(), model.name()) {
                return Err(BuildError::OutputCollision {
                    file: file_name.to_string(),
                    file_name: output,
                    first: first.to_string(),
                    second: model.name().to_string(),
                });
            }

            let tokens = render::render(model)?;
            files.push(GeneratedFile {
                file_name: output,
                contents: format!("{}{tokens}\n", render::GENERATED_HEADER),
            });
        }

        Ok(files)
    }

    /// `extract` over a file on disk.
    pub fn extract_path(&self, path: &Path) -> Result<Vec<Model>, BuildError> {
        let source = read_source(path)?;

        self.extract(&path.display().to_string(), &source)
    }

    /// `generate` over a file on disk.
    pub fn generate_path(&self, path: &Path) -> Result<Vec<GeneratedFile>, BuildError> {
        let source = read_source(path)?;

        self.generate(&path.display().to_string(), &source)
    }
}

fn read_source(path: &Path) -> Result<String, BuildError> {
    fs::read_to_string(path).map_err(|source| BuildError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write generated files into `dir`, which must exist.
///
/// Callers generate everything first, so a failed run writes nothing.
pub fn write_files(dir: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>, BuildError> {
    files
        .iter()
        .map(|file| {
            let path = dir.join(&file.file_name);
            fs::write(&path, &file.contents).map_err(|source| BuildError::Write {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "wrote generated file");

            Ok(path)
        })
        .collect()
}
