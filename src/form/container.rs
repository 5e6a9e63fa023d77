use super::{lenient, KeyValue};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The pod's main (and only) application container
#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Container {
    #[serde(deserialize_with = "lenient::string")]
    #[schemars(with = "String")]
    pub name: String,
    pub image: String,
    /// One argv token per entry
    pub command: Vec<String>,
    pub args: Vec<String>,
    pub env: Vec<KeyValue>,
    pub env_from: Vec<EnvFrom>,
    pub resources: Resources,
    pub probes: Vec<Probe>,
    pub volume_mounts: Vec<VolumeMount>,
    pub lifecycle: Lifecycle,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema, PartialEq)]
#[serde(default)]
pub struct EnvFrom {
    #[serde(rename = "type")]
    pub source: EnvFromType,
    #[serde(deserialize_with = "lenient::string")]
    #[schemars(with = "String")]
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EnvFromType {
    #[default]
    ConfigMapRef,
    SecretRef,
}

impl EnvFromType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvFromType::ConfigMapRef => "configMapRef",
            EnvFromType::SecretRef => "secretRef",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema, PartialEq)]
#[serde(default)]
pub struct Resources {
    pub requests: ResourceQuantities,
    pub limits: ResourceQuantities,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema, PartialEq)]
#[serde(default)]
pub struct ResourceQuantities {
    #[serde(deserialize_with = "lenient::opt_string")]
    #[schemars(with = "Option<String>")]
    pub cpu: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    #[schemars(with = "Option<String>")]
    pub memory: Option<String>,
}

/// Health check settings for one of the three probe slots.
///
/// Numeric fields hold the raw text of their inputs. `path` and `port` apply
/// to `httpGet`, `port` alone to `tcpSocket`, and `command` (comma-separated)
/// to `exec`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Probe {
    pub name: ProbeName,
    #[serde(rename = "type")]
    pub probe_type: ProbeType,
    #[serde(deserialize_with = "lenient::opt_string")]
    #[schemars(with = "Option<String>")]
    pub initial_delay_seconds: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    #[schemars(with = "Option<String>")]
    pub period_seconds: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    #[schemars(with = "Option<String>")]
    pub timeout_seconds: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    #[schemars(with = "Option<String>")]
    pub failure_threshold: Option<String>,
    pub path: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    #[schemars(with = "Option<String>")]
    pub port: Option<String>,
    pub command: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProbeName {
    #[default]
    Liveness,
    Readiness,
    Startup,
}

impl ProbeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeName::Liveness => "liveness",
            ProbeName::Readiness => "readiness",
            ProbeName::Startup => "startup",
        }
    }

    /// Container field the probe lands in, e.g. `livenessProbe`
    pub fn field_name(&self) -> &'static str {
        match self {
            ProbeName::Liveness => "livenessProbe",
            ProbeName::Readiness => "readinessProbe",
            ProbeName::Startup => "startupProbe",
        }
    }
}

impl fmt::Display for ProbeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ProbeType {
    #[default]
    None,
    HttpGet,
    TcpSocket,
    Exec,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeMount {
    #[serde(deserialize_with = "lenient::string")]
    #[schemars(with = "String")]
    pub name: String,
    pub mount_path: String,
}

/// Lifecycle hooks, each a comma-separated command line
#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Lifecycle {
    pub post_start: Option<String>,
    pub pre_stop: Option<String>,
}

/// Split a comma-separated command into trimmed, non-empty tokens
pub fn split_command(command: &str) -> Vec<&str> {
    command
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}
