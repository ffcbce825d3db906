use xee_xpath::context::StaticContextBuilder;
use xee_xpath::{Documents, Queries, Query};
use xee_xpath_load::convert_string;

use crate::error::{Diagnostic, QueryError};

/// The SVRL namespace, as produced by Schematron-derived rulesets.
pub const SVRL_NAMESPACE: &str = "http://purl.oclc.org/dsdl/svrl";

const FAILED_ASSERT: &str = "//svrl:failed-assert";

/// One violated Schematron rule, as reported in the SVRL output.
///
/// An assertion looks something like:
///
/// ```xml
/// <svrl:failed-assert xmlns:svrl="http://purl.oclc.org/dsdl/svrl"
///     test=". => empty()" id="incorrect-role-association" role="error">
///   <svrl:text>Assertion description</svrl:text>
/// </svrl:failed-assert>
/// ```
///
/// Every field is optional: SVRL producers routinely omit attributes, and
/// a `failed-assert` without a `test` attribute is reported as-is rather
/// than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedAssertion {
    /// The assertion expression that failed.
    pub test: Option<String>,
    /// Rule identifier.
    pub id: Option<String>,
    /// Severity role, such as `error` or `warning`.
    pub role: Option<String>,
    /// XPath location of the offending node in the validated document.
    pub location: Option<String>,
    /// Human-readable description of the failed assertion.
    pub text: Option<String>,
}

/// The outcome of validating one document: every failed assertion, in
/// document order of the SVRL report.
///
/// An empty result means the document satisfied all rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    failed_assertions: Vec<FailedAssertion>,
}

impl ValidationResult {
    pub fn is_conforming(&self) -> bool {
        self.failed_assertions.is_empty()
    }

    pub fn failed_assertions(&self) -> &[FailedAssertion] {
        &self.failed_assertions
    }

    pub fn len(&self) -> usize {
        self.failed_assertions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failed_assertions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FailedAssertion> {
        self.failed_assertions.iter()
    }
}

impl From<Vec<FailedAssertion>> for ValidationResult {
    fn from(failed_assertions: Vec<FailedAssertion>) -> Self {
        Self { failed_assertions }
    }
}

impl IntoIterator for ValidationResult {
    type Item = FailedAssertion;
    type IntoIter = std::vec::IntoIter<FailedAssertion>;

    fn into_iter(self) -> Self::IntoIter {
        self.failed_assertions.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a FailedAssertion;
    type IntoIter = std::slice::Iter<'a, FailedAssertion>;

    fn into_iter(self) -> Self::IntoIter {
        self.failed_assertions.iter()
    }
}

/// Collect every `svrl:failed-assert` element in the report, at any depth,
/// in document order.
///
/// The query is fixed; if it fails to compile or evaluate that is a defect
/// in this crate, not a problem with the report.
pub fn extract_failed_assertions(svrl: &str) -> Result<ValidationResult, QueryError> {
    let mut documents = Documents::new();
    let doc = documents
        .add_string_without_uri(svrl)
        .map_err(|e| QueryError::MalformedReport {
            message: e.to_string(),
        })?;

    let mut static_context_builder = StaticContextBuilder::default();
    static_context_builder.namespaces(vec![("svrl", SVRL_NAMESPACE)]);
    let queries = Queries::new(static_context_builder);

    let test_query = queries.option("@test/string()", convert_string).map_err(compile_error)?;
    let id_query = queries.option("@id/string()", convert_string).map_err(compile_error)?;
    let role_query = queries.option("@role/string()", convert_string).map_err(compile_error)?;
    let location_query = queries
        .option("@location/string()", convert_string)
        .map_err(compile_error)?;
    let text_query = queries
        .option("svrl:text[1]/string()", convert_string)
        .map_err(compile_error)?;

    let failed_assert_query = queries
        .many(FAILED_ASSERT, move |documents, item| {
            let test = test_query.execute(documents, item)?;
            let id = id_query.execute(documents, item)?;
            let role = role_query.execute(documents, item)?;
            let location = location_query.execute(documents, item)?;
            let text = text_query.execute(documents, item)?;
            Ok(FailedAssertion {
                test,
                id,
                role,
                location,
                text,
            })
        })
        .map_err(compile_error)?;

    let failed_assertions =
        failed_assert_query
            .execute(&mut documents, doc)
            .map_err(|e| QueryError::Evaluate {
                diagnostic: Diagnostic::from_engine(e),
            })?;
    Ok(ValidationResult::from(failed_assertions))
}

fn compile_error(e: xee_xpath::error::Error) -> QueryError {
    QueryError::Compile {
        diagnostic: Diagnostic::from_engine(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_conforming() {
        let svrl = r#"<svrl:schematron-output xmlns:svrl="http://purl.oclc.org/dsdl/svrl"/>"#;
        let result = extract_failed_assertions(svrl).unwrap();
        assert!(result.is_conforming());
        assert!(result.failed_assertions().is_empty());
    }

    #[test]
    fn collects_assertions_in_document_order() {
        let svrl = r#"<svrl:schematron-output xmlns:svrl="http://purl.oclc.org/dsdl/svrl">
            <svrl:active-pattern/>
            <svrl:fired-rule context="metadata"/>
            <svrl:failed-assert test="title" id="has-title" role="error">
                <svrl:text>A title is required.</svrl:text>
            </svrl:failed-assert>
            <svrl:fired-rule context="system-characteristics"/>
            <svrl:failed-assert test="security-sensitivity-level" location="/ssp/system-characteristics"/>
        </svrl:schematron-output>"#;
        let result = extract_failed_assertions(svrl).unwrap();
        assert_eq!(result.len(), 2);

        let first = &result.failed_assertions()[0];
        assert_eq!(first.test.as_deref(), Some("title"));
        assert_eq!(first.id.as_deref(), Some("has-title"));
        assert_eq!(first.role.as_deref(), Some("error"));
        assert_eq!(first.text.as_deref(), Some("A title is required."));
        assert_eq!(first.location, None);

        let second = &result.failed_assertions()[1];
        assert_eq!(second.test.as_deref(), Some("security-sensitivity-level"));
        assert_eq!(
            second.location.as_deref(),
            Some("/ssp/system-characteristics")
        );
        assert_eq!(second.text, None);
    }

    #[test]
    fn missing_test_attribute_is_lenient() {
        let svrl = r#"<svrl:schematron-output xmlns:svrl="http://purl.oclc.org/dsdl/svrl">
            <svrl:failed-assert><svrl:text>No test attribute here.</svrl:text></svrl:failed-assert>
        </svrl:schematron-output>"#;
        let result = extract_failed_assertions(svrl).unwrap();
        assert_eq!(result.len(), 1);
        let assertion = &result.failed_assertions()[0];
        assert_eq!(assertion.test, None);
        assert_eq!(assertion.text.as_deref(), Some("No test attribute here."));
    }

    #[test]
    fn matches_at_any_depth() {
        let svrl = r#"<svrl:schematron-output xmlns:svrl="http://purl.oclc.org/dsdl/svrl">
            <wrapper><deeper>
                <svrl:failed-assert test="nested"/>
            </deeper></wrapper>
        </svrl:schematron-output>"#;
        let result = extract_failed_assertions(svrl).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.failed_assertions()[0].test.as_deref(), Some("nested"));
    }

    #[test]
    fn ignores_failed_assert_outside_svrl_namespace() {
        let svrl = r#"<svrl:schematron-output xmlns:svrl="http://purl.oclc.org/dsdl/svrl">
            <failed-assert test="not-svrl"/>
            <other:failed-assert xmlns:other="http://example.com/ns" test="also-not-svrl"/>
        </svrl:schematron-output>"#;
        let result = extract_failed_assertions(svrl).unwrap();
        assert!(result.is_conforming());
    }

    #[test]
    fn malformed_report_is_a_query_error() {
        let err = extract_failed_assertions("<svrl:unclosed").unwrap_err();
        assert!(matches!(err, QueryError::MalformedReport { .. }));
    }
}
