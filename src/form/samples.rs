use super::{Container, KeyValue, PodFormState, ResourceQuantities, Resources};
use crate::error::Error;
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sample {
    Nginx,
    UbuntuSleeper,
}

impl Sample {
    pub fn state(&self) -> PodFormState {
        match self {
            Sample::Nginx => nginx(),
            Sample::UbuntuSleeper => ubuntu_sleeper(),
        }
    }
}

impl FromStr for Sample {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nginx" => Ok(Sample::Nginx),
            "ubuntu" | "ubuntu-sleeper" | "ubuntu_sleeper" => Ok(Sample::UbuntuSleeper),
            other => Err(Error::UnknownSample(other.to_string())),
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sample::Nginx => f.write_str("nginx"),
            Sample::UbuntuSleeper => f.write_str("ubuntu-sleeper"),
        }
    }
}

/// Web server with requests and limits set
pub fn nginx() -> PodFormState {
    PodFormState {
        pod_name: "nginx-sample-pod".to_string(),
        labels: vec![KeyValue::new("app", "my-nginx")],
        container: Container {
            name: "nginx-container".to_string(),
            image: "nginx:1.27.1".to_string(),
            resources: Resources {
                requests: ResourceQuantities {
                    cpu: Some("100m".to_string()),
                    memory: Some("128Mi".to_string()),
                },
                limits: ResourceQuantities {
                    cpu: Some("200m".to_string()),
                    memory: Some("256Mi".to_string()),
                },
            },
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Ubuntu container that sleeps forever, handy for `kubectl exec`
pub fn ubuntu_sleeper() -> PodFormState {
    PodFormState {
        pod_name: "ubuntu-sleeper".to_string(),
        labels: vec![KeyValue::new("app", "ubuntu")],
        container: Container {
            name: "ubuntu-container".to_string(),
            image: "ubuntu:latest".to_string(),
            command: vec!["sleep".to_string()],
            args: vec!["infinity".to_string()],
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_names() {
        assert_eq!("nginx".parse::<Sample>().unwrap(), Sample::Nginx);
        assert_eq!("Ubuntu".parse::<Sample>().unwrap(), Sample::UbuntuSleeper);
        assert_eq!(
            "ubuntu-sleeper".parse::<Sample>().unwrap(),
            Sample::UbuntuSleeper
        );
        assert!(matches!(
            "redis".parse::<Sample>(),
            Err(Error::UnknownSample(_))
        ));
    }

    #[test]
    fn test_sample_states() {
        assert_eq!(Sample::Nginx.state(), nginx());
        let sleeper = Sample::UbuntuSleeper.state();
        assert_eq!(sleeper.container.command, vec!["sleep"]);
        assert_eq!(sleeper.container.args, vec!["infinity"]);
    }
}
