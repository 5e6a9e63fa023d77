use super::{
    docs::Topic,
    prepare::{
        Pair, PreparedContainer, PreparedPod, PreparedProbe, ProbeHandler, Quantities,
        VolumeSource,
    },
    scalar::{flow_list, plain, quoted},
    writer::YamlWriter,
};
use std::fmt;

/// Write a prepared pod as YAML in fixed field order
pub fn emit(pod: &PreparedPod<'_>, annotate: bool) -> Result<String, fmt::Error> {
    let mut w = YamlWriter::new(annotate);
    w.field(0, "apiVersion", "v1")?;
    w.field(0, "kind", "Pod")?;
    metadata(&mut w, pod)?;
    spec(&mut w, pod)?;
    container(&mut w, &pod.container)?;
    Ok(w.finish())
}

fn mapping(w: &mut YamlWriter, indent: usize, key: &str, pairs: &[Pair<'_>]) -> fmt::Result {
    w.heading(indent, key)?;
    for pair in pairs {
        w.field(indent + 2, &plain(pair.key), plain(pair.value))?;
    }
    Ok(())
}

fn metadata(w: &mut YamlWriter, pod: &PreparedPod<'_>) -> fmt::Result {
    w.note(0, Topic::Metadata)?;
    w.heading(0, "metadata")?;
    w.field(2, "name", plain(pod.name))?;
    if let Some(namespace) = pod.namespace {
        w.field(2, "namespace", plain(namespace))?;
    }
    if !pod.labels.is_empty() {
        w.note(2, Topic::Labels)?;
        mapping(w, 2, "labels", &pod.labels)?;
    }
    if !pod.annotations.is_empty() {
        w.note(2, Topic::Annotations)?;
        mapping(w, 2, "annotations", &pod.annotations)?;
    }
    Ok(())
}

fn spec(w: &mut YamlWriter, pod: &PreparedPod<'_>) -> fmt::Result {
    w.note(0, Topic::Spec)?;
    w.heading(0, "spec")?;

    if let Some(sa) = pod.service_account_name {
        w.note(2, Topic::ServiceAccountName)?;
        w.field(2, "serviceAccountName", plain(sa))?;
    }
    if let Some(policy) = pod.restart_policy {
        w.note(2, Topic::RestartPolicy)?;
        w.field(2, "restartPolicy", policy)?;
    }
    if !pod.image_pull_secrets.is_empty() {
        w.note(2, Topic::ImagePullSecrets)?;
        w.heading(2, "imagePullSecrets")?;
        for name in &pod.image_pull_secrets {
            w.line(2, format_args!("- name: {}", plain(name)))?;
        }
    }
    if let Some(sc) = pod.security_context {
        w.note(2, Topic::SecurityContext)?;
        w.heading(2, "securityContext")?;
        if let Some(uid) = sc.run_as_user {
            w.field(4, "runAsUser", uid)?;
        }
        if let Some(gid) = sc.run_as_group {
            w.field(4, "runAsGroup", gid)?;
        }
        if let Some(fs_group) = sc.fs_group {
            w.field(4, "fsGroup", fs_group)?;
        }
    }
    if !pod.node_selector.is_empty() {
        w.note(2, Topic::NodeSelector)?;
        mapping(w, 2, "nodeSelector", &pod.node_selector)?;
    }
    if !pod.tolerations.is_empty() {
        w.note(2, Topic::Tolerations)?;
        w.heading(2, "tolerations")?;
        for t in &pod.tolerations {
            w.line(2, format_args!("- key: {}", quoted(t.key)))?;
            w.field(4, "operator", quoted(t.operator.as_str()))?;
            if let Some(value) = t.value {
                w.field(4, "value", quoted(value))?;
            }
            if let Some(effect) = t.effect {
                w.field(4, "effect", quoted(effect))?;
            }
        }
    }
    if !pod.volumes.is_empty() {
        w.note(2, Topic::Volumes)?;
        w.heading(2, "volumes")?;
        for v in &pod.volumes {
            w.line(2, format_args!("- name: {}", plain(v.name)))?;
            match v.source {
                VolumeSource::EmptyDir => w.field(4, "emptyDir", "{}")?,
                VolumeSource::ConfigMap(name) => {
                    w.heading(4, "configMap")?;
                    w.field(6, "name", plain(name))?;
                }
                VolumeSource::Secret(name) => {
                    w.heading(4, "secret")?;
                    w.field(6, "secretName", plain(name))?;
                }
                VolumeSource::PersistentVolumeClaim(name) => {
                    w.heading(4, "persistentVolumeClaim")?;
                    w.field(6, "claimName", plain(name))?;
                }
            }
        }
    }
    if !pod.init_containers.is_empty() {
        w.note(2, Topic::InitContainers)?;
        w.heading(2, "initContainers")?;
        for c in &pod.init_containers {
            w.line(2, format_args!("- name: {}", plain(c.name)))?;
            w.field(4, "image", plain(c.image))?;
        }
    }
    Ok(())
}

fn quantities(w: &mut YamlWriter, key: &str, q: &Quantities<'_>) -> fmt::Result {
    w.heading(6, key)?;
    if let Some(cpu) = q.cpu {
        w.field(8, "cpu", quoted(cpu))?;
    }
    if let Some(memory) = q.memory {
        w.field(8, "memory", quoted(memory))?;
    }
    Ok(())
}

fn container(w: &mut YamlWriter, c: &PreparedContainer<'_>) -> fmt::Result {
    w.note(2, Topic::Containers)?;
    w.heading(2, "containers")?;
    w.line(2, format_args!("- name: {}", plain(c.name)))?;
    w.field(4, "image", plain(c.image))?;

    if !c.command.is_empty() {
        w.note(4, Topic::Command)?;
        w.field(4, "command", flow_list(&c.command))?;
    }
    if !c.args.is_empty() {
        w.note(4, Topic::Args)?;
        w.field(4, "args", flow_list(&c.args))?;
    }
    if !c.env.is_empty() {
        w.note(4, Topic::Env)?;
        w.heading(4, "env")?;
        for env in &c.env {
            w.line(4, format_args!("- name: {}", plain(env.key)))?;
            w.field(6, "value", quoted(env.value))?;
        }
    }
    if !c.env_from.is_empty() {
        w.note(4, Topic::EnvFrom)?;
        w.heading(4, "envFrom")?;
        for (source, name) in &c.env_from {
            w.line(4, format_args!("- {}:", source.as_str()))?;
            w.field(8, "name", plain(name))?;
        }
    }
    if c.has_resources() {
        w.note(4, Topic::Resources)?;
        w.heading(4, "resources")?;
        if let Some(requests) = &c.requests {
            quantities(w, "requests", requests)?;
        }
        if let Some(limits) = &c.limits {
            quantities(w, "limits", limits)?;
        }
    }
    for probe in &c.probes {
        self::probe(w, probe)?;
    }
    if !c.volume_mounts.is_empty() {
        w.note(4, Topic::VolumeMounts)?;
        w.heading(4, "volumeMounts")?;
        for m in &c.volume_mounts {
            w.line(4, format_args!("- name: {}", plain(m.name)))?;
            w.field(6, "mountPath", quoted(m.mount_path))?;
        }
    }
    if c.has_lifecycle() {
        w.note(4, Topic::Lifecycle)?;
        w.heading(4, "lifecycle")?;
        for (key, command) in [("postStart", &c.post_start), ("preStop", &c.pre_stop)] {
            if let Some(command) = command {
                w.heading(6, key)?;
                w.heading(8, "exec")?;
                w.field(10, "command", flow_list(command))?;
            }
        }
    }
    Ok(())
}

fn probe(w: &mut YamlWriter, p: &PreparedProbe<'_>) -> fmt::Result {
    let field = p.name.field_name();
    w.note_with(4, &format!("{}: {}", field, Topic::Probes.note()), Topic::Probes)?;
    w.heading(4, field)?;
    match &p.handler {
        ProbeHandler::HttpGet { path, port } => {
            w.heading(6, "httpGet")?;
            w.field(8, "path", plain(path))?;
            w.field(8, "port", port)?;
        }
        ProbeHandler::TcpSocket { port } => {
            w.heading(6, "tcpSocket")?;
            w.field(8, "port", port)?;
        }
        ProbeHandler::Exec { command } => {
            w.heading(6, "exec")?;
            w.field(8, "command", flow_list(command))?;
        }
    }
    let timings = [
        ("initialDelaySeconds", p.initial_delay_seconds),
        ("periodSeconds", p.period_seconds),
        ("timeoutSeconds", p.timeout_seconds),
        ("failureThreshold", p.failure_threshold),
    ];
    for (key, value) in timings {
        if let Some(value) = value {
            w.field(6, key, value)?;
        }
    }
    Ok(())
}
