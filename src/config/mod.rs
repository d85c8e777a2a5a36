/// Generation settings loaded from an optional TOML file
pub mod generation;

pub use generation::{GeneratorConfig, load_config, load_default_config};
