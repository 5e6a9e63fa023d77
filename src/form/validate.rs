use super::{non_blank, PodFormState};
use std::fmt;

/// Inputs the form marks as required
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredField {
    PodName,
    ContainerName,
    Image,
}

impl RequiredField {
    /// Value the projector substitutes when the input is left blank
    pub fn fallback(&self) -> &'static str {
        match self {
            RequiredField::PodName => "my-pod",
            RequiredField::ContainerName => "main-container",
            RequiredField::Image => "nginx",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::PodName => f.write_str("pod name"),
            RequiredField::ContainerName => f.write_str("container name"),
            RequiredField::Image => f.write_str("container image"),
        }
    }
}

/// Required inputs left blank, in form order
pub fn missing_required(state: &PodFormState) -> Vec<RequiredField> {
    [
        (RequiredField::PodName, state.pod_name.as_str()),
        (RequiredField::ContainerName, state.container.name.as_str()),
        (RequiredField::Image, state.container.image.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| non_blank(value).is_none())
    .map(|(field, _)| field)
    .collect()
}

/// Declared volume names offered by the volume-mount selector, in insertion order
pub fn volume_mount_options(state: &PodFormState) -> Vec<&str> {
    state
        .volumes
        .iter()
        .filter_map(|v| non_blank(&v.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{samples, Volume, VolumeType};

    #[test]
    fn test_missing_required() {
        let state = PodFormState::default();
        assert_eq!(
            missing_required(&state),
            vec![
                RequiredField::PodName,
                RequiredField::ContainerName,
                RequiredField::Image
            ]
        );
        assert!(missing_required(&samples::nginx()).is_empty());
        assert_eq!(RequiredField::Image.fallback(), "nginx");
    }

    #[test]
    fn test_volume_mount_options() {
        let state = PodFormState {
            volumes: vec![
                Volume {
                    name: "cache".into(),
                    volume_type: VolumeType::EmptyDir,
                    source_name: None,
                },
                Volume {
                    name: " ".into(),
                    ..Default::default()
                },
                Volume {
                    name: "cfg".into(),
                    volume_type: VolumeType::ConfigMap,
                    source_name: None,
                },
            ],
            ..Default::default()
        };
        assert_eq!(volume_mount_options(&state), vec!["cache", "cfg"]);
    }
}
