pub mod config;
pub mod error;
pub mod registry;
pub mod types;

pub use config::{SITE_TOML, SiteConfig, load_registry, parse_site_toml};
pub use error::{Error, Result};
pub use registry::{EntryPointRegistry, RegistryBuilder};
pub use types::*;
