use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sspcheck_validator::{
    CompilationError, CompiledStylesheet, ValidationError, ValidationParameters, Validator,
};

use crate::error::render_diagnostic;

#[derive(Debug, Parser)]
pub(crate) struct Validate {
    /// OSCAL System Security Plan document to validate
    pub(crate) ssp: PathBuf,

    /// Compiled Schematron ruleset (an XSLT stylesheet emitting SVRL)
    #[arg(long, short)]
    pub(crate) stylesheet: PathBuf,

    /// Directory of baseline reference documents
    #[arg(long)]
    pub(crate) baselines: Option<PathBuf>,

    /// Directory of registry resource documents
    #[arg(long)]
    pub(crate) resources: Option<PathBuf>,

    /// Allow the ruleset to dereference remote resource URIs
    #[arg(long)]
    pub(crate) use_remote_resources: bool,
}

impl Validate {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let stylesheet = match CompiledStylesheet::load(&self.stylesheet) {
            Ok(stylesheet) => stylesheet,
            Err(CompilationError::Invalid { diagnostic, .. }) => {
                let source = self.stylesheet_source()?;
                render_diagnostic(&source, &diagnostic);
                std::process::exit(2);
            }
            Err(error) => {
                eprintln!("error: {:#}", error);
                std::process::exit(2);
            }
        };

        let mut params = ValidationParameters::new(
            path_string(&self.baselines),
            path_string(&self.resources),
        );
        params.use_remote_resources = self.use_remote_resources;

        let validator = Validator::new(stylesheet);
        let result = match validator.validate(&self.ssp, &params) {
            Ok(result) => result,
            Err(ValidationError::Transform { diagnostic }) if diagnostic.span.is_some() => {
                let source = self.stylesheet_source()?;
                render_diagnostic(&source, &diagnostic);
                std::process::exit(2);
            }
            Err(error) => {
                eprintln!("error: {:#}", error);
                std::process::exit(2);
            }
        };

        if result.is_conforming() {
            println!("{}: ok", self.ssp.display());
            return Ok(());
        }

        for assertion in &result {
            match assertion.test.as_deref() {
                Some(test) => println!("failed-assert: {}", test),
                None => println!("failed-assert"),
            }
            if let Some(text) = assertion.text.as_deref() {
                println!("    {}", text);
            }
        }
        println!(
            "{}: {} failed assertion(s)",
            self.ssp.display(),
            result.len()
        );
        std::process::exit(1);
    }

    fn stylesheet_source(&self) -> anyhow::Result<String> {
        std::fs::read_to_string(&self.stylesheet).with_context(|| {
            format!(
                "Failed to read stylesheet file: {}",
                self.stylesheet.display()
            )
        })
    }
}

fn path_string(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_default()
}
