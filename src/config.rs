use crate::{error::Result, projector::FeatureSet};
use serde::Deserialize;
use std::path::PathBuf;

/// Runtime settings for the generator, read from `podgen.{toml,yaml,json}` and `PODGEN_*`
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Prefix every block with an explanatory comment and documentation link
    pub annotate: bool,

    /// File backing the saved form state
    pub store_path: PathBuf,

    /// Optional manifest sections the projector is allowed to emit
    pub features: FeatureSet,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            annotate: false,
            store_path: PathBuf::from(".podgen-state.json"),
            features: FeatureSet::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn load() -> Result<Self> {
        Self::load_from("podgen")
    }

    /// Load from `<basename>.{toml,yaml,json}` (optional) layered under the environment
    pub fn load_from(basename: &str) -> Result<Self> {
        let config = ::config::Config::builder()
            .add_source(::config::File::with_name(basename).required(false))
            .add_source(
                ::config::Environment::with_prefix("PODGEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs, sync::Mutex};

    // Process environment is shared by every test thread
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults_without_sources() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("absent");
        let config = GeneratorConfig::load_from(base.to_str().unwrap()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert!(config.features.probes);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("podgen.toml");
        fs::write(
            &path,
            "annotate = true\nstore_path = \"state.json\"\n\n[features]\nlifecycle = false\n",
        )
        .unwrap();

        let base = dir.path().join("podgen");
        let config = GeneratorConfig::load_from(base.to_str().unwrap()).unwrap();
        assert!(config.annotate);
        assert_eq!(config.store_path, PathBuf::from("state.json"));
        assert!(!config.features.lifecycle);
        assert!(config.features.tolerations);
    }

    #[test]
    fn test_environment_overrides_file() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("podgen.toml"),
            "store_path = \"from-file.json\"\n\n[features]\nprobes = true\n",
        )
        .unwrap();

        env::set_var("PODGEN_FEATURES__PROBES", "false");
        env::set_var("PODGEN_STORE_PATH", "/tmp/podgen-env.json");
        env::set_var("PODGEN_ANNOTATE", "true");
        let base = dir.path().join("podgen");
        let config = GeneratorConfig::load_from(base.to_str().unwrap());
        env::remove_var("PODGEN_FEATURES__PROBES");
        env::remove_var("PODGEN_STORE_PATH");
        env::remove_var("PODGEN_ANNOTATE");

        let config = config.unwrap();
        assert!(config.annotate);
        assert_eq!(config.store_path, PathBuf::from("/tmp/podgen-env.json"));
        assert!(!config.features.probes);
        assert!(config.features.lifecycle);
    }
}
