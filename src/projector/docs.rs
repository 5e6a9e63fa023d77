/// Manifest block that carries a study note in annotate mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topic {
    Metadata,
    Labels,
    Annotations,
    Spec,
    ServiceAccountName,
    RestartPolicy,
    ImagePullSecrets,
    SecurityContext,
    NodeSelector,
    Tolerations,
    Volumes,
    InitContainers,
    Containers,
    Command,
    Args,
    Env,
    EnvFrom,
    Resources,
    Probes,
    VolumeMounts,
    Lifecycle,
}

impl Topic {
    pub fn note(&self) -> &'static str {
        match self {
            Topic::Metadata => "Data that identifies the object, such as its name and namespace",
            Topic::Labels => "Key/value pairs used to organize and select objects",
            Topic::Annotations => "Arbitrary non-identifying metadata for tools and libraries",
            Topic::Spec => "The desired state of the Pod",
            Topic::ServiceAccountName => "Service account the Pod uses to talk to the API server",
            Topic::RestartPolicy => {
                "What happens when a container exits (Always, OnFailure, Never)"
            }
            Topic::ImagePullSecrets => "Registry credentials used to pull private images",
            Topic::SecurityContext => "Security settings applied to every container in the Pod",
            Topic::NodeSelector => "Schedule the Pod only onto nodes carrying these labels",
            Topic::Tolerations => "Allow scheduling onto nodes whose taints match",
            Topic::Volumes => "Storage volumes the containers can mount",
            Topic::InitContainers => "Containers that run to completion before the app starts",
            Topic::Containers => "Containers running in the Pod (at least one is required)",
            Topic::Command => "Overrides the image ENTRYPOINT",
            Topic::Args => "Overrides the image CMD",
            Topic::Env => "Environment variables set as key/value pairs",
            Topic::EnvFrom => "Load every key of a ConfigMap or Secret as environment variables",
            Topic::Resources => "CPU and memory the container requests and is limited to",
            Topic::Probes => "Container health check",
            Topic::VolumeMounts => "Where declared volumes appear inside the container",
            Topic::Lifecycle => "Commands run right after start and right before stop",
        }
    }

    pub fn doc_url(&self) -> Option<&'static str> {
        let url = match self {
            Topic::Metadata => {
                "https://k8s.io/docs/concepts/overview/working-with-objects/kubernetes-objects/"
            }
            Topic::Labels => "https://k8s.io/docs/concepts/overview/working-with-objects/labels/",
            Topic::Annotations => {
                "https://k8s.io/docs/concepts/overview/working-with-objects/annotations/"
            }
            Topic::Spec => return None,
            Topic::ServiceAccountName => {
                "https://k8s.io/docs/tasks/configure-pod-container/configure-service-account/"
            }
            Topic::RestartPolicy => {
                "https://k8s.io/docs/concepts/workloads/pods/pod-lifecycle/#restart-policy"
            }
            Topic::ImagePullSecrets => {
                "https://k8s.io/docs/tasks/configure-pod-container/pull-image-private-registry/"
            }
            Topic::SecurityContext => {
                "https://k8s.io/docs/tasks/configure-pod-container/security-context/"
            }
            Topic::NodeSelector => {
                "https://k8s.io/docs/concepts/scheduling-eviction/assign-pod-node/#nodeselector"
            }
            Topic::Tolerations => {
                "https://k8s.io/docs/concepts/scheduling-eviction/taint-and-toleration/"
            }
            Topic::Volumes => "https://k8s.io/docs/concepts/storage/volumes/",
            Topic::InitContainers => "https://k8s.io/docs/concepts/workloads/pods/init-containers/",
            Topic::Containers => "https://k8s.io/docs/concepts/workloads/pods/#containers",
            Topic::Command | Topic::Args => {
                "https://k8s.io/docs/tasks/inject-data-application/define-command-argument-container/"
            }
            Topic::Env => {
                "https://k8s.io/docs/tasks/inject-data-application/environment-variable-expose-pod-information/"
            }
            Topic::EnvFrom => {
                "https://k8s.io/docs/tasks/configure-pod-container/configure-pod-configmap/#configure-all-key-value-pairs-in-a-configmap-as-container-environment-variables"
            }
            Topic::Resources => {
                "https://k8s.io/docs/concepts/configuration/manage-resources-containers/"
            }
            Topic::Probes => {
                "https://k8s.io/docs/tasks/configure-pod-container/configure-liveness-readiness-startup-probes/"
            }
            Topic::VolumeMounts => "https://k8s.io/docs/concepts/storage/volumes/#using-a-volume",
            Topic::Lifecycle => {
                "https://k8s.io/docs/tasks/configure-pod-container/attach-handler-lifecycle-event/"
            }
        };
        Some(url)
    }
}
