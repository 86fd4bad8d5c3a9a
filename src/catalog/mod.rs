//! Disease catalog storage.
//!
//! The catalog holds every known disease with its defining symptoms,
//! severity tier, recommended specialist, and medicines, plus the symptom
//! vocabulary and a small doctor directory. An embedded catalog is compiled
//! into the binary, but custom catalogs can also be loaded from JSON files.
//!
//! The whole catalog is read in one pass and kept in memory, so matching a
//! query never goes back to storage.
//!
//! ## Example
//!
//! ```rust,no_run
//! use symptom_matcher::DiseaseCatalog;
//! use std::path::Path;
//!
//! // Load embedded catalog
//! let catalog = DiseaseCatalog::load_embedded().unwrap();
//!
//! for disease in &catalog.diseases {
//!     println!("{} ({})", disease.name, disease.severity);
//! }
//!
//! // Case-insensitive lookup
//! let flu = catalog.get("influenza (flu)");
//!
//! // Load from custom file
//! let custom = DiseaseCatalog::load_from_file(Path::new("my_catalog.json")).unwrap();
//! ```

pub mod store;
