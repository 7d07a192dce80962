//! TOML studio settings: locating, seeding and parsing.

mod loader;
mod paths;
mod template;

#[cfg(test)]
mod tests;

pub use loader::{parse_studio_toml, ConfigSource};
pub use paths::{default_config_path, seed_default_config};
