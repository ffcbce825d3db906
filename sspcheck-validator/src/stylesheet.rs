use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use xee_interpreter::interpreter::Program;
use xee_xpath::context::StaticContextBuilder;

use crate::error::{CompilationError, Diagnostic};

/// A Schematron-derived XSLT ruleset, compiled once and reused.
///
/// Compiling a stylesheet is expensive relative to running it, so the
/// compiled program is built exactly once and shared read-only by every
/// validation run derived from it. Per-run state (context item, bound
/// parameters) lives in the dynamic context a run builds for itself.
#[derive(Debug)]
pub struct CompiledStylesheet {
    path: PathBuf,
    program: Program,
}

impl CompiledStylesheet {
    /// Load and compile the ruleset at `path`.
    ///
    /// The file must be a valid XSLT stylesheet that emits SVRL output.
    /// A missing or unreadable file, or a stylesheet the compiler rejects,
    /// fails here, before any document can be validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CompilationError> {
        let path = path.as_ref();
        let xslt_file = File::open(path).map_err(|error| CompilationError::Read {
            path: path.to_path_buf(),
            error,
        })?;
        let mut buf_reader = BufReader::new(xslt_file);
        let mut xslt = String::new();
        buf_reader
            .read_to_string(&mut xslt)
            .map_err(|error| CompilationError::Read {
                path: path.to_path_buf(),
                error,
            })?;

        let static_context_builder = StaticContextBuilder::default();
        let static_context = static_context_builder.build();
        let program =
            xee_xslt_compiler::parse(static_context, &xslt).map_err(|e| {
                CompilationError::Invalid {
                    path: path.to_path_buf(),
                    diagnostic: Diagnostic::from_engine(e),
                }
            })?;
        log::debug!("compiled stylesheet {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            program,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn program(&self) -> &Program {
        &self.program
    }
}
