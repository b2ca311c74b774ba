//! Built-in demo data
//!
//! Used when the config file does not provide its own catalog or
//! provider directory.

use chrono::Utc;

use crate::config::ProviderSeed;
use crate::domain::{CatalogEntry, Client, Provider, ProviderStatus};

fn entry(
    id: &str,
    title: &str,
    provider_id: &str,
    provider_name: &str,
    price: u64,
    category: &str,
    rating: f32,
) -> CatalogEntry {
    CatalogEntry {
        id: id.to_string(),
        title: title.to_string(),
        provider_id: provider_id.to_string(),
        provider_name: provider_name.to_string(),
        price,
        category: category.to_string(),
        rating,
    }
}

pub fn demo_catalog() -> Vec<CatalogEntry> {
    vec![
        entry("electricite", "Électricité", "prov-1", "David Electric", 25_000, "Technique", 4.8),
        entry("plomberie", "Plomberie à domicile", "prov-2", "Propre & Net", 30_000, "Réparation", 4.9),
        entry("menage", "Ménage à domicile", "prov-4", "Aqua Service", 15_000, "Entretien", 4.7),
        entry("jardinage", "Jardinage & Entretien", "prov-5", "Vert Nature", 20_000, "Jardinage", 4.6),
        entry("informatique", "Dépannage Informatique", "prov-6", "PC Express", 35_000, "Technique", 4.5),
        entry("chauffe-eau", "Réparation des chauffe-eau", "prov-3", "Jordan Marc", 40_000, "Réparation", 4.8),
    ]
}

fn seed(
    id: &str,
    name: &str,
    service: &str,
    rating: f32,
    status: ProviderStatus,
    total_jobs_completed: u32,
) -> ProviderSeed {
    ProviderSeed {
        id: id.to_string(),
        name: name.to_string(),
        services: vec![service.to_string()],
        rating,
        status,
        total_jobs_completed,
    }
}

/// Jordan Marc starts pending, so the water-heater entry is not
/// bookable until an admin approves him.
pub fn demo_providers() -> Vec<ProviderSeed> {
    vec![
        seed("prov-1", "David Electric", "Électricité", 4.8, ProviderStatus::Active, 156),
        seed("prov-2", "Propre & Net", "Plomberie", 4.9, ProviderStatus::Active, 203),
        seed("prov-3", "Jordan Marc", "Réparation chauffe-eau", 4.7, ProviderStatus::Pending, 0),
        seed("prov-4", "Aqua Service", "Ménage à domicile", 4.7, ProviderStatus::Active, 88),
        seed("prov-5", "Vert Nature", "Jardinage & Entretien", 4.6, ProviderStatus::Active, 41),
        seed("prov-6", "PC Express", "Dépannage Informatique", 4.5, ProviderStatus::Active, 67),
    ]
}

impl From<ProviderSeed> for Provider {
    fn from(seed: ProviderSeed) -> Self {
        let mut provider = Provider::new(seed.id, seed.name, seed.services, seed.status);
        provider.rating = seed.rating.clamp(0.0, 5.0);
        provider.total_jobs_completed = seed.total_jobs_completed;
        provider
    }
}

fn client(id: &str, first: &str, last: &str, phone: &str, email: &str, district: &str) -> Client {
    Client {
        id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        city: "Douala".to_string(),
        district: district.to_string(),
        registered_at: Utc::now(),
    }
}

pub fn demo_clients() -> Vec<Client> {
    vec![
        client("client-1", "Jean", "Dupont", "+237 6 70 00 00 01", "jean.dupont@example.cm", "Akwa"),
        client("client-2", "Marie", "Kouam", "+237 6 70 00 00 02", "marie.kouam@example.cm", "Bonanjo"),
        client("client-3", "Paul", "Mbarga", "+237 6 70 00 00 03", "paul.mbarga@example.cm", "Bonapriso"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_catalog_provider_is_in_the_directory() {
        let providers: HashSet<String> = demo_providers().into_iter().map(|p| p.id).collect();
        for entry in demo_catalog() {
            assert!(providers.contains(&entry.provider_id), "{}", entry.id);
        }
    }

    #[test]
    fn seed_rating_is_clamped() {
        let mut s = demo_providers().remove(0);
        s.rating = 7.5;
        let provider = Provider::from(s);
        assert_eq!(provider.rating, 5.0);
        assert_eq!(provider.total_jobs_completed, 156);
    }
}
