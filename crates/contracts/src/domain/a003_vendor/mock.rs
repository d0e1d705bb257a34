use super::aggregate::Vendor;
use crate::domain::common::pick;

/// (name, trade)
const VENDORS: [(&str, &str); 14] = [
    ("Granite Supply Co.", "Concrete"),
    ("Northern Steelworks", "Steel"),
    ("BrightSpark Electrical", "Electrical"),
    ("AquaFlow Plumbing", "Plumbing"),
    ("Timberline Lumber", "Timber"),
    ("Crane & Hoist Rentals", "Equipment"),
    ("ClimateCore HVAC", "HVAC"),
    ("Keystone Aggregates", "Concrete"),
    ("Ironclad Fabrication", "Steel"),
    ("Volt Line Contractors", "Electrical"),
    ("Pipeworks United", "Plumbing"),
    ("Oak & Beam Joinery", "Timber"),
    ("Heavy Lift Partners", "Equipment"),
    ("Airstream Mechanical", "HVAC"),
];

const CITIES: [&str; 5] = ["Leeds", "Bristol", "Glasgow", "Cardiff", "Norwich"];

pub fn dataset() -> Vec<Vendor> {
    VENDORS
        .iter()
        .enumerate()
        .map(|(i, (name, trade))| {
            let slug: String = name
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_lowercase();
            Vendor {
                id: format!("VND-{:02}", i + 1),
                name: name.to_string(),
                trade: trade.to_string(),
                city: pick(&CITIES, i * 2).to_string(),
                contact_email: format!("orders@{slug}.example"),
                rating: 3.0 + ((i * 7) % 21) as f64 / 10.0,
                open_orders: ((i * 5) % 13) as u32,
                preferred: i % 3 == 0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratings_in_range() {
        assert!(dataset().iter().all(|v| (1.0..=5.0).contains(&v.rating)));
    }

    #[test]
    fn test_emails_are_slugged() {
        let vendors = dataset();
        assert_eq!(vendors[0].contact_email, "orders@granitesupplyco.example");
    }
}
