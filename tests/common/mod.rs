use podgen::form::{
    Container, EnvFrom, EnvFromType, ImagePullSecret, InitContainer, KeyValue, Lifecycle,
    PodFormState, PodSecurityContext, Probe, ProbeName, ProbeType, ResourceQuantities, Resources,
    RestartPolicy, Toleration, TolerationOperator, Volume, VolumeMount, VolumeType,
};

/// A form with every section filled in, including rows that must be filtered out
pub fn kitchen_sink() -> PodFormState {
    PodFormState {
        pod_name: "web".into(),
        namespace: Some("shop".into()),
        labels: vec![
            KeyValue::new("app", "web"),
            KeyValue::new("", "dropped-label"),
            KeyValue::new("tier", "3"),
        ],
        annotations: vec![KeyValue::new("example.com/managed", "true")],
        service_account_name: Some("web-sa".into()),
        node_selector: vec![KeyValue::new("disktype", "ssd")],
        restart_policy: RestartPolicy::OnFailure,
        pod_security_context: PodSecurityContext {
            run_as_user: Some("1000".into()),
            run_as_group: Some("".into()),
            fs_group: Some("2000".into()),
        },
        tolerations: vec![
            Toleration {
                key: "dedicated".into(),
                operator: TolerationOperator::Equal,
                value: Some("web".into()),
                effect: Some("NoSchedule".into()),
            },
            Toleration {
                key: "gpu".into(),
                operator: TolerationOperator::Exists,
                value: Some("dropped-value".into()),
                effect: None,
            },
        ],
        volumes: vec![
            Volume {
                name: "cache".into(),
                volume_type: VolumeType::EmptyDir,
                source_name: None,
            },
            Volume {
                name: "cfg".into(),
                volume_type: VolumeType::ConfigMap,
                source_name: Some("web-config".into()),
            },
            Volume {
                name: "creds".into(),
                volume_type: VolumeType::Secret,
                source_name: Some("web-creds".into()),
            },
            Volume {
                name: "data".into(),
                volume_type: VolumeType::PersistentVolumeClaim,
                source_name: Some("web-data".into()),
            },
            Volume {
                name: "incomplete".into(),
                volume_type: VolumeType::Secret,
                source_name: None,
            },
        ],
        image_pull_secrets: vec![ImagePullSecret {
            name: "regcred".into(),
        }],
        init_containers: vec![
            InitContainer {
                name: "migrate".into(),
                image: "web:1.2.0".into(),
            },
            InitContainer {
                name: "no-image".into(),
                image: "".into(),
            },
        ],
        container: Container {
            name: "web".into(),
            image: "registry.example.com/web:1.2.0".into(),
            command: vec!["/bin/sh".into(), "".into(), "-c".into()],
            args: vec!["exec web --port=8080".into()],
            env: vec![
                KeyValue::new("MODE", "production"),
                KeyValue::new("GREETING", "say \"hi\""),
            ],
            env_from: vec![
                EnvFrom {
                    source: EnvFromType::ConfigMapRef,
                    name: "web-env".into(),
                },
                EnvFrom {
                    source: EnvFromType::SecretRef,
                    name: "web-secrets".into(),
                },
            ],
            resources: Resources {
                requests: ResourceQuantities {
                    cpu: Some("250m".into()),
                    memory: None,
                },
                limits: ResourceQuantities::default(),
            },
            probes: vec![
                Probe {
                    name: ProbeName::Liveness,
                    probe_type: ProbeType::HttpGet,
                    path: Some("/healthz".into()),
                    port: Some("8080".into()),
                    initial_delay_seconds: Some("5".into()),
                    period_seconds: Some("10".into()),
                    ..Default::default()
                },
                Probe {
                    name: ProbeName::Readiness,
                    probe_type: ProbeType::TcpSocket,
                    port: Some("8080".into()),
                    failure_threshold: Some("3".into()),
                    ..Default::default()
                },
                Probe {
                    name: ProbeName::Startup,
                    probe_type: ProbeType::Exec,
                    command: Some("cat, /tmp/ready".into()),
                    timeout_seconds: Some("2".into()),
                    ..Default::default()
                },
            ],
            volume_mounts: vec![
                VolumeMount {
                    name: "cfg".into(),
                    mount_path: "/etc/web".into(),
                },
                VolumeMount {
                    name: "cache".into(),
                    mount_path: "".into(),
                },
            ],
            lifecycle: Lifecycle {
                post_start: Some("/bin/sh, -c, echo started".into()),
                pre_stop: Some(" , ".into()),
            },
        },
    }
}
