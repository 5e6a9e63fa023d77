mod common;

use k8s_openapi::api::core::v1::Pod;
use podgen::{
    form::{samples, KeyValue},
    projector::{render, to_pod, FeatureSet, RenderOptions},
    PodFormState,
};

fn parsed(state: &PodFormState, annotate: bool) -> Pod {
    let options = RenderOptions {
        annotate,
        ..Default::default()
    };
    let yaml = render(state, &options).yaml;
    serde_yaml::from_str(&yaml).unwrap_or_else(|e| panic!("{e}\n{yaml}"))
}

#[test]
fn test_rendered_yaml_matches_typed_pod() {
    for state in [
        PodFormState::default(),
        samples::nginx(),
        samples::ubuntu_sleeper(),
        common::kitchen_sink(),
    ] {
        let typed = to_pod(&state, &FeatureSet::default());
        assert_eq!(parsed(&state, false), typed);
        assert_eq!(parsed(&state, true), typed);
    }
}

#[test]
fn test_kitchen_sink_typed_fields() {
    let pod = parsed(&common::kitchen_sink(), false);
    assert_eq!(pod.metadata.namespace.as_deref(), Some("shop"));
    let labels = pod.metadata.labels.unwrap();
    assert_eq!(labels.get("tier").map(String::as_str), Some("3"));

    let spec = pod.spec.unwrap();
    assert_eq!(spec.restart_policy.as_deref(), Some("OnFailure"));
    assert_eq!(spec.security_context.unwrap().run_as_user, Some(1000));
    assert_eq!(spec.volumes.unwrap().len(), 4);
    assert_eq!(spec.init_containers.unwrap().len(), 1);

    let tolerations = spec.tolerations.unwrap();
    assert_eq!(tolerations[1].operator.as_deref(), Some("Exists"));
    assert_eq!(tolerations[1].value, None);

    let container = &spec.containers[0];
    let env = container.env.as_ref().unwrap();
    assert_eq!(env[1].value.as_deref(), Some("say \"hi\""));
    assert_eq!(container.env_from.as_ref().unwrap().len(), 2);

    let liveness = container.liveness_probe.as_ref().unwrap();
    assert_eq!(liveness.initial_delay_seconds, Some(5));
    assert_eq!(liveness.http_get.as_ref().unwrap().path.as_deref(), Some("/healthz"));

    let lifecycle = container.lifecycle.as_ref().unwrap();
    assert!(lifecycle.pre_stop.is_none());
    assert_eq!(
        lifecycle.post_start.as_ref().unwrap().exec.as_ref().unwrap().command,
        Some(vec![
            "/bin/sh".to_string(),
            "-c".to_string(),
            "echo started".to_string()
        ])
    );
}

#[test]
fn test_unicode_line_separators_survive_parsing() {
    let odd = "a\u{2028}b\u{2029}c";
    let mut state = samples::nginx();
    state.labels = vec![KeyValue::new(odd, odd)];
    state.container.env = vec![KeyValue::new(odd, odd)];

    let pod = parsed(&state, true);
    assert_eq!(pod, to_pod(&state, &FeatureSet::default()));
    let labels = pod.metadata.labels.unwrap();
    assert_eq!(labels.get(odd).map(String::as_str), Some(odd));
    let env = pod.spec.unwrap().containers[0].env.clone().unwrap();
    assert_eq!(env[0].name, odd);
    assert_eq!(env[0].value.as_deref(), Some(odd));
}

#[test]
fn test_padded_env_value_is_preserved() {
    let mut state = samples::nginx();
    state.container.env = vec![KeyValue::new("PAD", "  x  ")];

    let yaml = render(&state, &RenderOptions::default()).yaml;
    assert!(yaml.contains("value: \"  x  \""), "{yaml}");
    let pod = parsed(&state, false);
    let env = pod.spec.unwrap().containers[0].env.clone().unwrap();
    assert_eq!(env[0].value.as_deref(), Some("  x  "));
}
