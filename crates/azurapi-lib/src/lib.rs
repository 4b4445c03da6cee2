//! AzurAPI dataset library entry points.
//!
//! This crate loads the Azur Lane reference dataset (ships, equipment,
//! chapters, memories and version info) from a local cache or a remote
//! source, and answers lookups over it. Higher-level consumers such as the CLI
//! should only depend on the items exported here.
//!

#![deny(warnings)]

pub mod api;
pub mod chapter;
pub mod dataset;
pub mod equipment;
pub mod error;
pub mod faction;
pub mod language;
pub mod memory;
pub mod ship;
pub mod source;
pub mod version;

pub use api::AzurApi;
pub use chapter::{ChapterList, StageAddress};
pub use dataset::{default_data_dir, fetch_dataset, load_dataset, resolve_data_dir, Dataset, Document};
pub use equipment::Equipment;
pub use error::{Error, Result};
pub use faction::{resolve_faction, FACTIONS};
pub use language::{Language, NameValue, Names};
pub use memory::Memories;
pub use ship::{normalize_ship_id, Ship};
pub use source::DataSource;
pub use version::{CollectionVersion, UpdateStatus, VersionInfo, VersionNumber};
