use super::aggregate::Project;
use crate::domain::common::{iso_date, pick};
use crate::enums::ProjectStatus;

const NAMES: [&str; 12] = [
    "Harbor Bridge Retrofit",
    "Riverside Tower",
    "Airport Terminal B",
    "Metro Depot Expansion",
    "Northgate Hospital Wing",
    "Lakeside Water Plant",
    "Civic Library",
    "Eastfield Logistics Hub",
    "Sunset Residences",
    "Highway 9 Overpass",
    "Grand Arena Roof",
    "Old Mill Conversion",
];

const CLIENTS: [&str; 5] = [
    "City Council",
    "Meridian Holdings",
    "Port Authority",
    "Evergreen Health",
    "Atlas Developments",
];

const MANAGERS: [&str; 6] = [
    "A. Okafor",
    "J. Lindqvist",
    "M. Rossi",
    "S. Patel",
    "T. Nakamura",
    "R. Alvarez",
];

const REGIONS: [&str; 4] = ["North", "South", "East", "West"];

const STATUSES: [ProjectStatus; 4] = [
    ProjectStatus::Active,
    ProjectStatus::Planning,
    ProjectStatus::Active,
    ProjectStatus::OnHold,
];

/// Stable projects dataset used by the projects board.
pub fn dataset() -> Vec<Project> {
    (0..36)
        .map(|i| {
            let budget = 250_000.0 + (i as f64 * 137_500.0) % 4_750_000.0;
            let progress = ((i * 17) % 101) as u8;
            let status = if progress == 100 {
                ProjectStatus::Completed
            } else {
                pick(&STATUSES, i)
            };
            let spent = budget * (progress as f64 / 100.0) * (0.85 + (i % 5) as f64 * 0.08);
            Project {
                code: format!("PRJ-{:03}", i + 1),
                name: format!("{} {}", pick(&NAMES, i), i / NAMES.len() + 1),
                client: pick(&CLIENTS, i * 3).to_string(),
                site_manager: pick(&MANAGERS, i * 5).to_string(),
                region: pick(&REGIONS, i).to_string(),
                status,
                budget,
                spent: spent.round(),
                start_date: iso_date((i as u64) * 19),
                progress,
            }
        })
        .collect()
}
