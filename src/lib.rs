pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{storage::LocalStorage, toml_config::TomlConfig};
pub use core::{etl::EtlEngine, pipeline::CatalogPipeline};
pub use domain::accessory::{build_catalog, AccessoryDescriptor, Catalog};
pub use domain::model::{AccessoryDocument, Context, FlatRecord, RawAccessory, RawService};
pub use domain::service::ServiceDescriptor;
pub use domain::service_type::classify;
pub use utils::error::{EtlError, Result};
