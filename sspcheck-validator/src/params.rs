use xee_interpreter::atomic;
use xee_interpreter::context::Variables;
use xee_interpreter::sequence;
use xee_name::Name;

// Variable names are the stylesheet's external contract; they must match
// the compiled ruleset verbatim.
const BASELINES_BASE_PATH: &str = "baselines-base-path";
const REGISTRY_BASE_PATH: &str = "registry-base-path";
const PARAM_USE_REMOTE_RESOURCES: &str = "param-use-remote-resources";

/// Per-run options bound onto the transformation.
///
/// The compiled ruleset resolves baseline and registry documents relative
/// to the two directory paths. Remote dereferencing is off unless
/// explicitly enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationParameters {
    /// Directory of baseline reference documents.
    pub baselines_path: String,
    /// Directory of shared registry resource documents.
    pub resources_path: String,
    /// Permit the ruleset to dereference remote resource URIs.
    pub use_remote_resources: bool,
}

impl ValidationParameters {
    pub fn new(baselines_path: impl Into<String>, resources_path: impl Into<String>) -> Self {
        Self {
            baselines_path: baselines_path.into(),
            resources_path: resources_path.into(),
            use_remote_resources: false,
        }
    }

    /// The variable bindings handed to each transformation run.
    pub(crate) fn to_variables(&self) -> Variables {
        let mut variables = Variables::new();
        variables.insert(
            Name::name(BASELINES_BASE_PATH),
            string_sequence(&self.baselines_path),
        );
        variables.insert(
            Name::name(REGISTRY_BASE_PATH),
            string_sequence(&self.resources_path),
        );
        variables.insert(
            Name::name(PARAM_USE_REMOTE_RESOURCES),
            sequence::Sequence::from(sequence::Item::Atomic(atomic::Atomic::from(
                self.use_remote_resources,
            ))),
        );
        variables
    }
}

fn string_sequence(value: &str) -> sequence::Sequence {
    sequence::Sequence::from(sequence::Item::Atomic(atomic::Atomic::from(
        value.to_string(),
    )))
}
