use super::{scalar::parse_int, FeatureSet};
use crate::form::{
    container::split_command, non_blank, present, EnvFromType, KeyValue, PodFormState, Probe,
    ProbeName, ProbeType, ResourceQuantities, RestartPolicy, TolerationOperator, VolumeType,
};

pub const DEFAULT_POD_NAME: &str = "my-pod";
pub const DEFAULT_CONTAINER_NAME: &str = "main-container";
pub const DEFAULT_IMAGE: &str = "nginx";
pub const DEFAULT_HTTP_PATH: &str = "/";
pub const DEFAULT_HTTP_PORT: i32 = 80;

/// Form state with every default and filter rule applied; each entry left here is emitted
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedPod<'a> {
    pub name: &'a str,
    pub namespace: Option<&'a str>,
    pub labels: Vec<Pair<'a>>,
    pub annotations: Vec<Pair<'a>>,
    pub service_account_name: Option<&'a str>,
    /// `None` when the policy is the implicit `Always`
    pub restart_policy: Option<RestartPolicy>,
    pub image_pull_secrets: Vec<&'a str>,
    pub security_context: Option<SecurityContext>,
    pub node_selector: Vec<Pair<'a>>,
    pub tolerations: Vec<PreparedToleration<'a>>,
    pub volumes: Vec<PreparedVolume<'a>>,
    pub init_containers: Vec<PreparedInitContainer<'a>>,
    pub container: PreparedContainer<'a>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pair<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SecurityContext {
    pub run_as_user: Option<i64>,
    pub run_as_group: Option<i64>,
    pub fs_group: Option<i64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreparedToleration<'a> {
    pub key: &'a str,
    pub operator: TolerationOperator,
    /// Only kept for the `Equal` operator
    pub value: Option<&'a str>,
    pub effect: Option<&'a str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreparedVolume<'a> {
    pub name: &'a str,
    pub source: VolumeSource<'a>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeSource<'a> {
    EmptyDir,
    ConfigMap(&'a str),
    Secret(&'a str),
    PersistentVolumeClaim(&'a str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreparedInitContainer<'a> {
    pub name: &'a str,
    pub image: &'a str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PreparedContainer<'a> {
    pub name: &'a str,
    pub image: &'a str,
    pub command: Vec<&'a str>,
    pub args: Vec<&'a str>,
    pub env: Vec<Pair<'a>>,
    pub env_from: Vec<(EnvFromType, &'a str)>,
    pub requests: Option<Quantities<'a>>,
    pub limits: Option<Quantities<'a>>,
    pub probes: Vec<PreparedProbe<'a>>,
    pub volume_mounts: Vec<PreparedVolumeMount<'a>>,
    pub post_start: Option<Vec<&'a str>>,
    pub pre_stop: Option<Vec<&'a str>>,
}

impl PreparedContainer<'_> {
    pub fn has_resources(&self) -> bool {
        self.requests.is_some() || self.limits.is_some()
    }

    pub fn has_lifecycle(&self) -> bool {
        self.post_start.is_some() || self.pre_stop.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quantities<'a> {
    pub cpu: Option<&'a str>,
    pub memory: Option<&'a str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedProbe<'a> {
    pub name: ProbeName,
    pub handler: ProbeHandler<'a>,
    pub initial_delay_seconds: Option<i32>,
    pub period_seconds: Option<i32>,
    pub timeout_seconds: Option<i32>,
    pub failure_threshold: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeHandler<'a> {
    HttpGet { path: &'a str, port: i32 },
    TcpSocket { port: i32 },
    Exec { command: Vec<&'a str> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreparedVolumeMount<'a> {
    pub name: &'a str,
    pub mount_path: &'a str,
}

pub fn prepare<'a>(state: &'a PodFormState, features: &FeatureSet) -> PreparedPod<'a> {
    let psc = &state.pod_security_context;
    let security_context = SecurityContext {
        run_as_user: present(&psc.run_as_user).and_then(parse_int),
        run_as_group: present(&psc.run_as_group).and_then(parse_int),
        fs_group: present(&psc.fs_group).and_then(parse_int),
    };

    PreparedPod {
        name: non_blank(&state.pod_name).unwrap_or(DEFAULT_POD_NAME),
        namespace: present(&state.namespace),
        labels: pairs(&state.labels),
        annotations: if features.annotations {
            pairs(&state.annotations)
        } else {
            vec![]
        },
        service_account_name: present(&state.service_account_name),
        restart_policy: match state.restart_policy {
            RestartPolicy::Always => None,
            other => Some(other),
        },
        image_pull_secrets: state
            .image_pull_secrets
            .iter()
            .filter_map(|s| non_blank(&s.name))
            .collect(),
        security_context: (security_context != SecurityContext::default())
            .then_some(security_context),
        node_selector: pairs(&state.node_selector),
        tolerations: if features.tolerations {
            tolerations(state)
        } else {
            vec![]
        },
        volumes: volumes(state),
        init_containers: if features.init_containers {
            state
                .init_containers
                .iter()
                .filter_map(|c| {
                    Some(PreparedInitContainer {
                        name: non_blank(&c.name)?,
                        image: non_blank(&c.image)?,
                    })
                })
                .collect()
        } else {
            vec![]
        },
        container: container(state, features),
    }
}

fn pairs(rows: &[KeyValue]) -> Vec<Pair<'_>> {
    rows.iter()
        .filter_map(|row| {
            Some(Pair {
                key: non_blank(&row.key)?,
                value: row.value.trim(),
            })
        })
        .collect()
}

/// Env values reach the process verbatim, so surrounding whitespace is kept
fn env_pairs(rows: &[KeyValue]) -> Vec<Pair<'_>> {
    rows.iter()
        .filter_map(|row| {
            Some(Pair {
                key: non_blank(&row.key)?,
                value: row.value.as_str(),
            })
        })
        .collect()
}

fn tolerations(state: &PodFormState) -> Vec<PreparedToleration<'_>> {
    state
        .tolerations
        .iter()
        .filter_map(|t| {
            let key = non_blank(&t.key)?;
            let value = match t.operator {
                TolerationOperator::Equal => Some(t.value.as_deref().unwrap_or("")),
                TolerationOperator::Exists => None,
            };
            Some(PreparedToleration {
                key,
                operator: t.operator,
                value,
                effect: present(&t.effect),
            })
        })
        .collect()
}

fn volumes(state: &PodFormState) -> Vec<PreparedVolume<'_>> {
    state
        .volumes
        .iter()
        .filter_map(|v| {
            let name = non_blank(&v.name)?;
            let source = match v.volume_type {
                VolumeType::EmptyDir => VolumeSource::EmptyDir,
                VolumeType::ConfigMap => VolumeSource::ConfigMap(present(&v.source_name)?),
                VolumeType::Secret => VolumeSource::Secret(present(&v.source_name)?),
                VolumeType::PersistentVolumeClaim => {
                    VolumeSource::PersistentVolumeClaim(present(&v.source_name)?)
                }
            };
            Some(PreparedVolume { name, source })
        })
        .collect()
}

fn quantities(q: &ResourceQuantities) -> Option<Quantities<'_>> {
    let quantities = Quantities {
        cpu: present(&q.cpu),
        memory: present(&q.memory),
    };
    (quantities.cpu.is_some() || quantities.memory.is_some()).then_some(quantities)
}

fn tokens(values: &[String]) -> Vec<&str> {
    values
        .iter()
        .filter(|v| !v.trim().is_empty())
        .map(String::as_str)
        .collect()
}

fn hook(command: &Option<String>) -> Option<Vec<&str>> {
    let command = split_command(present(command)?);
    (!command.is_empty()).then_some(command)
}

fn container<'a>(state: &'a PodFormState, features: &FeatureSet) -> PreparedContainer<'a> {
    let c = &state.container;

    let mut probes: Vec<PreparedProbe<'a>> = vec![];
    if features.probes {
        for probe in &c.probes {
            if probes.iter().any(|p| p.name == probe.name) {
                continue;
            }
            if let Some(prepared) = prepare_probe(probe) {
                probes.push(prepared);
            }
        }
    }

    let (post_start, pre_stop) = if features.lifecycle {
        (hook(&c.lifecycle.post_start), hook(&c.lifecycle.pre_stop))
    } else {
        (None, None)
    };

    PreparedContainer {
        name: non_blank(&c.name).unwrap_or(DEFAULT_CONTAINER_NAME),
        image: non_blank(&c.image).unwrap_or(DEFAULT_IMAGE),
        command: tokens(&c.command),
        args: tokens(&c.args),
        env: env_pairs(&c.env),
        env_from: c
            .env_from
            .iter()
            .filter_map(|e| Some((e.source, non_blank(&e.name)?)))
            .collect(),
        requests: quantities(&c.resources.requests),
        limits: quantities(&c.resources.limits),
        probes,
        volume_mounts: c
            .volume_mounts
            .iter()
            .filter_map(|m| {
                Some(PreparedVolumeMount {
                    name: non_blank(&m.name)?,
                    mount_path: non_blank(&m.mount_path)?,
                })
            })
            .collect(),
        post_start,
        pre_stop,
    }
}

fn valid_port(port: &Option<String>) -> Option<i32> {
    present(port)
        .and_then(parse_int::<i32>)
        .filter(|p| (1..=65535).contains(p))
}

/// `None` for a disabled (`type: none`) or incomplete probe
fn prepare_probe(probe: &Probe) -> Option<PreparedProbe<'_>> {
    let handler = match probe.probe_type {
        ProbeType::None => return None,
        ProbeType::HttpGet => ProbeHandler::HttpGet {
            path: present(&probe.path).unwrap_or(DEFAULT_HTTP_PATH),
            port: valid_port(&probe.port).unwrap_or(DEFAULT_HTTP_PORT),
        },
        ProbeType::TcpSocket => ProbeHandler::TcpSocket {
            port: valid_port(&probe.port)?,
        },
        ProbeType::Exec => {
            let command = split_command(present(&probe.command)?);
            if command.is_empty() {
                return None;
            }
            ProbeHandler::Exec { command }
        }
    };

    let timing = |v: &Option<String>| present(v).and_then(parse_int::<i32>);
    Some(PreparedProbe {
        name: probe.name,
        handler,
        initial_delay_seconds: timing(&probe.initial_delay_seconds),
        period_seconds: timing(&probe.period_seconds),
        timeout_seconds: timing(&probe.timeout_seconds),
        failure_threshold: timing(&probe.failure_threshold),
    })
}
