use crate::error::{Error, Result};
use std::path::Path;

pub mod container;
pub mod pod;
pub mod samples;
pub mod validate;

mod lenient;

pub use container::{
    Container, EnvFrom, EnvFromType, Lifecycle, Probe, ProbeName, ProbeType, ResourceQuantities,
    Resources, VolumeMount,
};
pub use pod::{
    ImagePullSecret, InitContainer, KeyValue, PodFormState, PodSecurityContext, RestartPolicy,
    Toleration, TolerationOperator, Volume, VolumeType,
};
pub use samples::Sample;
pub use validate::{missing_required, volume_mount_options, RequiredField};

/// Trimmed value, or `None` when the input is empty or whitespace-only
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Same as [`non_blank`] for fields the form may omit entirely
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().and_then(non_blank)
}

/// Read a state record from a `.json`, `.yaml` or `.yml` file
pub fn load_state(path: &Path) -> Result<PodFormState> {
    let text = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => {
            serde_json::from_str(&text).map_err(|e| Error::StateFormat(e.to_string()))
        }
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&text)?),
        _ => Err(Error::UnsupportedInput {
            path: path.display().to_string(),
            reason: "expected a .json, .yaml or .yml file".to_string(),
        }),
    }
}
