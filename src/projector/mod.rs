use crate::{
    error::{Error, Result},
    form::{non_blank, PodFormState},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

pub mod docs;
pub mod emit;
pub mod prepare;
pub mod scalar;
pub mod typed;
pub mod writer;

pub use prepare::{prepare, PreparedPod};
pub use typed::to_pod;
pub use writer::is_annotation;

/// Optional manifest sections. A disabled section is never emitted.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeatureSet {
    pub annotations: bool,
    pub tolerations: bool,
    pub init_containers: bool,
    pub probes: bool,
    pub lifecycle: bool,
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self {
            annotations: true,
            tolerations: true,
            init_containers: true,
            probes: true,
            lifecycle: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Add study notes and documentation links before each block
    pub annotate: bool,
    pub features: FeatureSet,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOutput {
    pub yaml: String,
    pub apply_command: String,
    /// File the "save" action writes the manifest to
    pub file_name: String,
}

/// `<podName>.yaml`, or `pod.yaml` when the name is blank
pub fn file_name(state: &PodFormState) -> String {
    format!("{}.yaml", non_blank(&state.pod_name).unwrap_or("pod"))
}

pub fn apply_command(state: &PodFormState) -> String {
    format!("kubectl apply -f {}", file_name(state))
}

/// Render the manifest. Never fails: an internal fault replaces the YAML with
/// a diagnostic and is logged.
pub fn render(state: &PodFormState, options: &RenderOptions) -> RenderOutput {
    let yaml = match try_render(state, options) {
        Ok(yaml) => yaml,
        Err(e) => {
            error!("YAML generation failed: {}", e);
            diagnostic(&e)
        }
    };

    RenderOutput {
        yaml,
        apply_command: apply_command(state),
        file_name: file_name(state),
    }
}

pub fn try_render(state: &PodFormState, options: &RenderOptions) -> Result<String> {
    let pod = prepare(state, &options.features);
    let yaml = emit::emit(&pod, options.annotate)?;
    debug!(
        pod = pod.name,
        annotate = options.annotate,
        bytes = yaml.len(),
        "Rendered pod manifest"
    );
    Ok(yaml)
}

fn diagnostic(err: &Error) -> String {
    format!("# Error while generating YAML:\n# {}\n", err)
}

/// Drop every annotation line, leaving only the structural YAML
pub fn strip_annotations(yaml: &str) -> String {
    yaml.lines()
        .filter(|line| !is_annotation(line))
        .map(|line| format!("{}\n", line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::samples;

    #[test]
    fn test_apply_command() {
        let state = samples::ubuntu_sleeper();
        let out = render(&state, &RenderOptions::default());
        assert_eq!(out.apply_command, "kubectl apply -f ubuntu-sleeper.yaml");
        assert_eq!(out.file_name, "ubuntu-sleeper.yaml");

        let blank = PodFormState::default();
        assert_eq!(apply_command(&blank), "kubectl apply -f pod.yaml");
    }

    #[test]
    fn test_empty_form_renders_defaults() {
        let out = render(&PodFormState::default(), &RenderOptions::default());
        assert_eq!(
            out.yaml,
            "apiVersion: v1\nkind: Pod\nmetadata:\n  name: my-pod\nspec:\n  containers:\n  - name: main-container\n    image: nginx\n"
        );
    }

    #[test]
    fn test_diagnostic_is_a_comment_block() {
        let text = diagnostic(&Error::Render("boom".into()));
        assert!(text.starts_with("# Error while generating YAML:"));
        assert!(text.lines().all(is_annotation));
    }

    #[test]
    fn test_strip_annotations() {
        let yaml = "# note\nspec:\n  # nested\n  restartPolicy: Never\n";
        assert_eq!(strip_annotations(yaml), "spec:\n  restartPolicy: Never\n");
    }
}
