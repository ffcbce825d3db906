use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use xee_interpreter::sequence::SerializationParameters;
use xee_xpath::{Documents, Itemable};

use crate::error::{Diagnostic, ValidationError};
use crate::params::ValidationParameters;
use crate::stylesheet::CompiledStylesheet;
use crate::svrl::{extract_failed_assertions, ValidationResult};

/// Runs a compiled ruleset against SSP documents.
///
/// The validator owns the compiled stylesheet; each `validate` call builds
/// its own documents collection and dynamic context, so calls never share
/// mutable state.
#[derive(Debug)]
pub struct Validator {
    stylesheet: CompiledStylesheet,
}

impl Validator {
    pub fn new(stylesheet: CompiledStylesheet) -> Self {
        Self { stylesheet }
    }

    pub fn stylesheet(&self) -> &CompiledStylesheet {
        &self.stylesheet
    }

    /// Validate the document at `ssp_path`, returning every failed
    /// assertion in report order.
    ///
    /// The document is processed as-is; there is no pre-validation against
    /// any schema. A failed transform yields no partial result.
    pub fn validate(
        &self,
        ssp_path: impl AsRef<Path>,
        params: &ValidationParameters,
    ) -> Result<ValidationResult, ValidationError> {
        let ssp_path = ssp_path.as_ref();
        let xml = read_input(ssp_path)?;
        log::debug!("validating {}", ssp_path.display());
        let svrl = self.transform(&xml, params)?;
        let result = extract_failed_assertions(&svrl)?;
        log::debug!(
            "{}: {} failed assertion(s)",
            ssp_path.display(),
            result.len()
        );
        Ok(result)
    }

    /// Run the ruleset against the input document, capturing the SVRL
    /// output in memory.
    fn transform(
        &self,
        xml: &str,
        params: &ValidationParameters,
    ) -> Result<String, ValidationError> {
        let mut documents = Documents::new();
        let doc = documents
            .add_string_without_uri(xml)
            .map_err(|e| ValidationError::Transform {
                diagnostic: Diagnostic::message(e.to_string()),
            })?;
        let item = doc
            .to_item(&documents)
            .map_err(|e| ValidationError::Transform {
                diagnostic: Diagnostic::from_engine(e),
            })?;

        let program = self.stylesheet.program();
        let mut builder = program.dynamic_context_builder();
        builder.context_item(item);
        builder.documents(documents.documents().clone());
        builder.variables(params.to_variables());
        let context = builder.build();

        let runnable = program.runnable(&context);
        let sequence = runnable
            .many(documents.xot_mut())
            .map_err(|e| ValidationError::Transform {
                diagnostic: Diagnostic::from_engine(e),
            })?;

        sequence
            .serialize(SerializationParameters::new(), documents.xot_mut())
            .map_err(|e| ValidationError::Transform {
                diagnostic: Diagnostic::from_engine_value(e),
            })
    }
}

fn read_input(path: &Path) -> Result<String, ValidationError> {
    let xml_file = File::open(path).map_err(|error| ValidationError::InputNotFound {
        path: path.to_path_buf(),
        error,
    })?;
    let mut buf_reader = BufReader::new(xml_file);
    let mut xml = String::new();
    buf_reader
        .read_to_string(&mut xml)
        .map_err(|error| ValidationError::InputNotFound {
            path: path.to_path_buf(),
            error,
        })?;
    Ok(xml)
}
