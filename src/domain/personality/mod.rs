//! Personality module - type codes and the content shown for them.
//!
//! - `type_code` - The sixteen codes as a closed enum
//! - `profile` - Name, description and travel style per code
//! - `catalog` - Static lookup from code to profile
//! - `sharing` - Share URLs and share payloads

mod catalog;
mod profile;
mod sharing;
mod type_code;

pub use catalog::{PersonalityCatalog, TypeDirectory};
pub use profile::{PersonalityProfile, TravelStyle};
pub use sharing::{ShareData, ShareLink, RESULTS_PATH, TYPE_PARAM};
pub use type_code::TypeCode;
