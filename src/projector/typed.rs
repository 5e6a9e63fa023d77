use super::{
    prepare::{
        prepare, Pair, PreparedContainer, PreparedPod, PreparedProbe, ProbeHandler, Quantities,
        VolumeSource,
    },
    FeatureSet,
};
use crate::form::{EnvFromType, PodFormState, ProbeName};
use k8s_openapi::{
    api::core::v1::{
        ConfigMapEnvSource, ConfigMapVolumeSource, Container, EmptyDirVolumeSource, EnvFromSource,
        EnvVar, ExecAction, HTTPGetAction, Lifecycle, LifecycleHandler, LocalObjectReference,
        PersistentVolumeClaimVolumeSource, Pod, PodSecurityContext, PodSpec, Probe,
        ResourceRequirements, SecretEnvSource, SecretVolumeSource, TCPSocketAction, Toleration,
        Volume, VolumeMount,
    },
    apimachinery::pkg::{
        api::resource::Quantity, apis::meta::v1::ObjectMeta, util::intstr::IntOrString,
    },
};
use std::collections::BTreeMap;

/// Build the manifest as a typed `Pod`, following the same rules as the YAML output
pub fn to_pod(state: &PodFormState, features: &FeatureSet) -> Pod {
    build_pod(&prepare(state, features))
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

fn string_map(pairs: &[Pair<'_>]) -> Option<BTreeMap<String, String>> {
    if pairs.is_empty() {
        return None;
    }
    Some(
        pairs
            .iter()
            .map(|p| (p.key.to_string(), p.value.to_string()))
            .collect(),
    )
}

fn strings(items: &[&str]) -> Option<Vec<String>> {
    non_empty(items.iter().map(|s| s.to_string()).collect())
}

pub fn build_pod(pod: &PreparedPod<'_>) -> Pod {
    let volumes = pod
        .volumes
        .iter()
        .map(|v| {
            let mut volume = Volume {
                name: v.name.to_string(),
                ..Default::default()
            };
            match v.source {
                VolumeSource::EmptyDir => {
                    volume.empty_dir = Some(EmptyDirVolumeSource::default());
                }
                VolumeSource::ConfigMap(name) => {
                    volume.config_map = Some(ConfigMapVolumeSource {
                        name: name.to_string(),
                        ..Default::default()
                    });
                }
                VolumeSource::Secret(name) => {
                    volume.secret = Some(SecretVolumeSource {
                        secret_name: Some(name.to_string()),
                        ..Default::default()
                    });
                }
                VolumeSource::PersistentVolumeClaim(name) => {
                    volume.persistent_volume_claim = Some(PersistentVolumeClaimVolumeSource {
                        claim_name: name.to_string(),
                        ..Default::default()
                    });
                }
            }
            volume
        })
        .collect();

    let tolerations = pod
        .tolerations
        .iter()
        .map(|t| Toleration {
            key: Some(t.key.to_string()),
            operator: Some(t.operator.as_str().to_string()),
            value: t.value.map(str::to_string),
            effect: t.effect.map(str::to_string),
            ..Default::default()
        })
        .collect();

    let init_containers = pod
        .init_containers
        .iter()
        .map(|c| Container {
            name: c.name.to_string(),
            image: Some(c.image.to_string()),
            ..Default::default()
        })
        .collect();

    let security_context = pod.security_context.map(|sc| PodSecurityContext {
        run_as_user: sc.run_as_user,
        run_as_group: sc.run_as_group,
        fs_group: sc.fs_group,
        ..Default::default()
    });

    Pod {
        metadata: ObjectMeta {
            name: Some(pod.name.to_string()),
            namespace: pod.namespace.map(str::to_string),
            labels: string_map(&pod.labels),
            annotations: string_map(&pod.annotations),
            ..Default::default()
        },
        spec: Some(PodSpec {
            service_account_name: pod.service_account_name.map(str::to_string),
            restart_policy: pod.restart_policy.map(|p| p.as_str().to_string()),
            image_pull_secrets: non_empty(
                pod.image_pull_secrets
                    .iter()
                    .map(|name| LocalObjectReference {
                        name: name.to_string(),
                    })
                    .collect(),
            ),
            security_context,
            node_selector: string_map(&pod.node_selector),
            tolerations: non_empty(tolerations),
            volumes: non_empty(volumes),
            init_containers: non_empty(init_containers),
            containers: vec![build_container(&pod.container)],
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn build_resources(
    requests: Option<&Quantities<'_>>,
    limits: Option<&Quantities<'_>>,
) -> ResourceRequirements {
    let to_map = |q: &Quantities<'_>| {
        let mut map = BTreeMap::new();
        if let Some(cpu) = q.cpu {
            map.insert("cpu".to_string(), Quantity(cpu.to_string()));
        }
        if let Some(memory) = q.memory {
            map.insert("memory".to_string(), Quantity(memory.to_string()));
        }
        map
    };

    ResourceRequirements {
        requests: requests.map(to_map),
        limits: limits.map(to_map),
        ..Default::default()
    }
}

fn exec(command: &[&str]) -> ExecAction {
    ExecAction {
        command: strings(command),
    }
}

fn build_probe(p: &PreparedProbe<'_>) -> Probe {
    let mut probe = Probe {
        initial_delay_seconds: p.initial_delay_seconds,
        period_seconds: p.period_seconds,
        timeout_seconds: p.timeout_seconds,
        failure_threshold: p.failure_threshold,
        ..Default::default()
    };
    match &p.handler {
        ProbeHandler::HttpGet { path, port } => {
            probe.http_get = Some(HTTPGetAction {
                path: Some(path.to_string()),
                port: IntOrString::Int(*port),
                ..Default::default()
            });
        }
        ProbeHandler::TcpSocket { port } => {
            probe.tcp_socket = Some(TCPSocketAction {
                port: IntOrString::Int(*port),
                ..Default::default()
            });
        }
        ProbeHandler::Exec { command } => {
            probe.exec = Some(exec(command));
        }
    }
    probe
}

fn build_container(c: &PreparedContainer<'_>) -> Container {
    let env = c
        .env
        .iter()
        .map(|e| EnvVar {
            name: e.key.to_string(),
            value: Some(e.value.to_string()),
            ..Default::default()
        })
        .collect();

    let env_from = c
        .env_from
        .iter()
        .map(|(source, name)| match source {
            EnvFromType::ConfigMapRef => EnvFromSource {
                config_map_ref: Some(ConfigMapEnvSource {
                    name: name.to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            },
            EnvFromType::SecretRef => EnvFromSource {
                secret_ref: Some(SecretEnvSource {
                    name: name.to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            },
        })
        .collect();

    let volume_mounts = c
        .volume_mounts
        .iter()
        .map(|m| VolumeMount {
            name: m.name.to_string(),
            mount_path: m.mount_path.to_string(),
            ..Default::default()
        })
        .collect();

    let mut container = Container {
        name: c.name.to_string(),
        image: Some(c.image.to_string()),
        command: strings(&c.command),
        args: strings(&c.args),
        env: non_empty(env),
        env_from: non_empty(env_from),
        resources: c
            .has_resources()
            .then(|| build_resources(c.requests.as_ref(), c.limits.as_ref())),
        volume_mounts: non_empty(volume_mounts),
        lifecycle: c.has_lifecycle().then(|| Lifecycle {
            post_start: c.post_start.as_deref().map(|cmd| LifecycleHandler {
                exec: Some(exec(cmd)),
                ..Default::default()
            }),
            pre_stop: c.pre_stop.as_deref().map(|cmd| LifecycleHandler {
                exec: Some(exec(cmd)),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    };

    for p in &c.probes {
        let probe = Some(build_probe(p));
        match p.name {
            ProbeName::Liveness => container.liveness_probe = probe,
            ProbeName::Readiness => container.readiness_probe = probe,
            ProbeName::Startup => container.startup_probe = probe,
        }
    }

    container
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{samples, ProbeType};

    #[test]
    fn test_nginx_sample_pod() {
        let pod = to_pod(&samples::nginx(), &FeatureSet::default());

        assert_eq!(pod.metadata.name.as_deref(), Some("nginx-sample-pod"));
        assert_eq!(
            pod.metadata.labels.as_ref().unwrap().get("app").map(String::as_str),
            Some("my-nginx")
        );

        let spec = pod.spec.unwrap();
        assert_eq!(spec.restart_policy, None);
        assert_eq!(spec.containers.len(), 1);

        let container = &spec.containers[0];
        assert_eq!(container.name, "nginx-container");
        assert_eq!(container.image.as_deref(), Some("nginx:1.27.1"));

        let resources = container.resources.as_ref().unwrap();
        let requests = resources.requests.as_ref().unwrap();
        assert_eq!(requests.get("cpu"), Some(&Quantity("100m".to_string())));
        assert_eq!(requests.get("memory"), Some(&Quantity("128Mi".to_string())));
        let limits = resources.limits.as_ref().unwrap();
        assert_eq!(limits.get("cpu"), Some(&Quantity("200m".to_string())));
    }

    #[test]
    fn test_probe_slots() {
        let mut state = samples::nginx();
        state.container.probes = vec![
            crate::form::Probe {
                name: ProbeName::Readiness,
                probe_type: ProbeType::TcpSocket,
                port: Some("8080".into()),
                ..Default::default()
            },
            crate::form::Probe {
                name: ProbeName::Startup,
                probe_type: ProbeType::HttpGet,
                ..Default::default()
            },
        ];
        let spec = to_pod(&state, &FeatureSet::default()).spec.unwrap();
        let container = &spec.containers[0];

        assert!(container.liveness_probe.is_none());
        let readiness = container.readiness_probe.as_ref().unwrap();
        assert_eq!(
            readiness.tcp_socket.as_ref().unwrap().port,
            IntOrString::Int(8080)
        );
        let startup = container.startup_probe.as_ref().unwrap();
        let http = startup.http_get.as_ref().unwrap();
        assert_eq!(http.path.as_deref(), Some("/"));
        assert_eq!(http.port, IntOrString::Int(80));
    }
}
