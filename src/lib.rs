pub mod config;
pub mod error;
pub mod form;
pub mod projector;
pub mod store;
pub mod telemetry;

pub use form::PodFormState;
pub use projector::{render, RenderOptions, RenderOutput};

/// JSON Schema describing the saved form-state record
pub fn state_schema() -> schemars::Schema {
    schemars::schema_for!(PodFormState)
}
