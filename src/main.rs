use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use podgen::{
    config::GeneratorConfig,
    form::{self, PodFormState, Sample},
    projector::{self, RenderOptions},
    store::{FileStore, StateStore},
    telemetry,
};
use std::{fs, path::PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "podgen")]
#[command(about = "Render a Kubernetes Pod manifest from a form-state record")]
#[command(version)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// File holding the saved form state (overrides configuration)
    #[arg(long, global = true, env = "PODGEN_STORE_PATH")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the manifest for a state file, a sample, or the saved state
    Render {
        /// State record (.json, .yaml or .yml)
        #[arg(short, long, conflicts_with = "sample")]
        state: Option<PathBuf>,

        /// Built-in sample: nginx or ubuntu
        #[arg(long)]
        sample: Option<Sample>,

        /// Add study notes and documentation links
        #[arg(short, long)]
        annotate: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Yaml)]
        format: Format,

        /// Write `<pod name>.yaml` into this directory instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Remember this state for the next run
        #[arg(long)]
        save: bool,
    },

    /// Print a sample form state as JSON
    Sample {
        /// nginx or ubuntu
        name: Sample,
    },

    /// Forget the saved form state
    Reset,

    /// Print the JSON Schema of the form-state record
    Schema,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    let config = GeneratorConfig::load().context("loading podgen configuration")?;
    let store_path = cli.store.unwrap_or_else(|| config.store_path.clone());
    let mut states = StateStore::new(FileStore::new(store_path));

    match cli.command {
        Commands::Render {
            state,
            sample,
            annotate,
            format,
            out,
            save,
        } => {
            let state = match (state, sample) {
                (Some(path), _) => form::load_state(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                (None, Some(sample)) => sample.state(),
                (None, None) => states.load().unwrap_or_default(),
            };

            for field in form::missing_required(&state) {
                warn!("The {} is empty; using \"{}\"", field, field.fallback());
            }

            let options = RenderOptions {
                annotate: annotate || config.annotate,
                features: config.features,
            };
            render(&state, &options, format, out)?;

            if save {
                states.save(&state)?;
            }
        }
        Commands::Sample { name } => {
            println!("{}", serde_json::to_string_pretty(&name.state())?);
        }
        Commands::Reset => states.clear()?,
        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&podgen::state_schema())?);
        }
    }

    Ok(())
}

fn render(
    state: &PodFormState,
    options: &RenderOptions,
    format: Format,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let output = projector::render(state, options);
    let body = match format {
        Format::Yaml => output.yaml,
        Format::Json => {
            let pod = projector::to_pod(state, &options.features);
            format!("{}\n", serde_json::to_string_pretty(&pod)?)
        }
    };

    match out {
        Some(dir) => {
            let file_name = match format {
                Format::Yaml => output.file_name,
                Format::Json => match output.file_name.strip_suffix(".yaml") {
                    Some(stem) => format!("{}.json", stem),
                    None => output.file_name,
                },
            };
            let path = dir.join(file_name);
            fs::create_dir_all(&dir)?;
            fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", body),
    }

    eprintln!("{}", output.apply_command);
    Ok(())
}
