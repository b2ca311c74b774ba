//! Service catalog entries

use serde::{Deserialize, Serialize};

/// A purchasable service offering. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    /// Default provider that receives reservations for this entry
    pub provider_id: String,
    pub provider_name: String,
    /// FCFA
    pub price: u64,
    pub category: String,
    pub rating: f32,
}
