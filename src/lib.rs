//! Client for the Open Data Uganda API.
//!
//! The remote service exposes Uganda's administrative divisions as a
//! read-only REST hierarchy: districts, counties, subcounties, parishes
//! and villages. Every accessor is a single blocking GET that decodes a
//! JSON envelope into typed records.
//!
//! ## Usage
//! ```no_run
//! let client = opendataug::Client::new("secret_api_key");
//!
//! let districts = client.list_districts()?;
//! for district in &districts {
//!     println!("{} ({})", district.name, district.region_name);
//! }
//!
//! let counties = client.list_counties_by_district(&districts[0].id)?;
//! # Ok::<(), opendataug::Error>(())
//! ```

mod client;
mod config;
mod endpoint;
mod envelope;
mod error;

pub use client::Client;
pub use config::Config;
pub use endpoint::{County, District, Parish, Subcounty, Village};
pub use envelope::{Envelope, Meta};
pub use error::{Error, Result};
