//! CLI configuration loading

mod loader;

pub use loader::{CliConfigLoader, RawConfig};
