use super::{container::Container, lenient};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of the whole pod form, rebuilt from the controls before every render
#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PodFormState {
    #[serde(deserialize_with = "lenient::string")]
    #[schemars(with = "String")]
    pub pod_name: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    #[schemars(with = "Option<String>")]
    pub namespace: Option<String>,
    pub labels: Vec<KeyValue>,
    pub annotations: Vec<KeyValue>,
    pub service_account_name: Option<String>,
    pub node_selector: Vec<KeyValue>,
    pub restart_policy: RestartPolicy,
    pub pod_security_context: PodSecurityContext,
    pub tolerations: Vec<Toleration>,
    pub volumes: Vec<Volume>,
    pub image_pull_secrets: Vec<ImagePullSecret>,
    pub init_containers: Vec<InitContainer>,
    pub container: Container,
}

/// One key/value row (labels, annotations, node selector, env)
#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema, PartialEq)]
#[serde(default)]
pub struct KeyValue {
    #[serde(deserialize_with = "lenient::string")]
    #[schemars(with = "String")]
    pub key: String,
    #[serde(deserialize_with = "lenient::string")]
    #[schemars(with = "String")]
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, JsonSchema, PartialEq, Eq)]
pub enum RestartPolicy {
    #[default]
    Always,
    OnFailure,
    Never,
}

impl RestartPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestartPolicy::Always => "Always",
            RestartPolicy::OnFailure => "OnFailure",
            RestartPolicy::Never => "Never",
        }
    }
}

impl fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pod-level security settings, each an integer typed into a text box
#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PodSecurityContext {
    #[serde(deserialize_with = "lenient::opt_string")]
    #[schemars(with = "Option<String>")]
    pub run_as_user: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    #[schemars(with = "Option<String>")]
    pub run_as_group: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    #[schemars(with = "Option<String>")]
    pub fs_group: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema, PartialEq)]
#[serde(default)]
pub struct Toleration {
    #[serde(deserialize_with = "lenient::string")]
    #[schemars(with = "String")]
    pub key: String,
    pub operator: TolerationOperator,
    #[serde(deserialize_with = "lenient::opt_string")]
    #[schemars(with = "Option<String>")]
    pub value: Option<String>,
    pub effect: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, JsonSchema, PartialEq, Eq)]
pub enum TolerationOperator {
    #[default]
    Equal,
    Exists,
}

impl TolerationOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            TolerationOperator::Equal => "Equal",
            TolerationOperator::Exists => "Exists",
        }
    }
}

/// A pod volume; `source_name` names the ConfigMap, Secret or claim backing it
#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Volume {
    #[serde(deserialize_with = "lenient::string")]
    #[schemars(with = "String")]
    pub name: String,
    #[serde(rename = "type")]
    pub volume_type: VolumeType,
    #[serde(deserialize_with = "lenient::opt_string")]
    #[schemars(with = "Option<String>")]
    pub source_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum VolumeType {
    #[default]
    EmptyDir,
    ConfigMap,
    Secret,
    PersistentVolumeClaim,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema, PartialEq)]
#[serde(default)]
pub struct ImagePullSecret {
    #[serde(deserialize_with = "lenient::string")]
    #[schemars(with = "String")]
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema, PartialEq)]
#[serde(default)]
pub struct InitContainer {
    #[serde(deserialize_with = "lenient::string")]
    #[schemars(with = "String")]
    pub name: String,
    pub image: String,
}
