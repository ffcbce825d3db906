//! Validate OSCAL System Security Plan documents against a Schematron
//! ruleset compiled to XSLT.
//!
//! The pipeline has three stages: compile the ruleset once into a
//! [`CompiledStylesheet`], run it against an input document with
//! [`Validator::validate`], and collect the `svrl:failed-assert` elements
//! of the SVRL output into a [`ValidationResult`].
//!
//! ```no_run
//! use sspcheck_validator::{CompiledStylesheet, ValidationParameters, Validator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let stylesheet = CompiledStylesheet::load("rules/ssp.xsl")?;
//! let validator = Validator::new(stylesheet);
//! let params = ValidationParameters::new("/content/baselines", "/content/resources");
//! let result = validator.validate("ssp.xml", &params)?;
//! for assertion in &result {
//!     println!("{:?}", assertion.test);
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod params;
mod stylesheet;
mod svrl;
mod validator;

pub use crate::error::{CompilationError, Diagnostic, QueryError, ValidationError};
pub use crate::params::ValidationParameters;
pub use crate::stylesheet::CompiledStylesheet;
pub use crate::svrl::{
    extract_failed_assertions, FailedAssertion, ValidationResult, SVRL_NAMESPACE,
};
pub use crate::validator::Validator;
