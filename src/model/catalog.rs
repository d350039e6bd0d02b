//! Built-in suggestions offered while filling in an event.

use super::category::Category;

/// Event names offered by the name suggestion dropdown.
pub static NAME_SUGGESTIONS: &[&str] = &[
    "Goa Adventure 2025",
    "Sharma Family Wedding",
    "Bangalore Office Retreat",
    "Hyderabad Food Tour",
    "Puri Jagannath Pilgrimage",
    "Team Building Weekend",
    "College Reunion 2025",
    "Annual Family Trip",
];

/// Destinations offered before the user has typed anything.
pub static POPULAR_DESTINATIONS: &[&str] = &[
    "Goa, India",
    "Jaipur, India",
    "Manali, India",
    "Dubai, UAE",
    "London, UK",
    "Mumbai, India",
    "Delhi, India",
    "Bangalore, India",
];

/// A searchable destination entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub name: &'static str,
    pub kind: &'static str,
    pub country: &'static str,
}

static DESTINATIONS: &[Destination] = &[
    Destination {
        name: "Mumbai, Maharashtra",
        kind: "City",
        country: "India",
    },
    Destination {
        name: "Delhi, India",
        kind: "City",
        country: "India",
    },
    Destination {
        name: "Goa, India",
        kind: "State",
        country: "India",
    },
    Destination {
        name: "Bangalore, Karnataka",
        kind: "City",
        country: "India",
    },
    Destination {
        name: "Manali, Himachal Pradesh",
        kind: "Hill Station",
        country: "India",
    },
    Destination {
        name: "Dubai, UAE",
        kind: "City",
        country: "UAE",
    },
    Destination {
        name: "London, UK",
        kind: "City",
        country: "UK",
    },
    Destination {
        name: "Singapore",
        kind: "City-State",
        country: "Singapore",
    },
];

/// Returns destinations whose name contains `query`, ignoring case.
/// A blank query matches everything.
pub fn search_destinations(query: &str) -> Vec<&'static Destination> {
    let query = query.trim().to_lowercase();
    DESTINATIONS
        .iter()
        .filter(|d| query.is_empty() || d.name.to_lowercase().contains(&query))
        .collect()
}

/// A rough cost range for a typical event of some kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetHint {
    pub example: &'static str,
    pub estimate: &'static str,
}

static TRAVEL_HINTS: &[BudgetHint] = &[
    BudgetHint {
        example: "3-day Goa trip for 4",
        estimate: "₹50,000 - ₹80,000",
    },
    BudgetHint {
        example: "Weekend city break",
        estimate: "₹15,000 - ₹25,000",
    },
    BudgetHint {
        example: "International trip",
        estimate: "$2,000 - $5,000",
    },
];

static PARTY_HINTS: &[BudgetHint] = &[
    BudgetHint {
        example: "Birthday party for 20",
        estimate: "₹20,000 - ₹40,000",
    },
    BudgetHint {
        example: "Small celebration",
        estimate: "₹5,000 - ₹15,000",
    },
    BudgetHint {
        example: "Wedding reception",
        estimate: "₹2,00,000 - ₹5,00,000",
    },
];

static BUSINESS_HINTS: &[BudgetHint] = &[
    BudgetHint {
        example: "Conference for 50",
        estimate: "₹1,00,000 - ₹2,50,000",
    },
    BudgetHint {
        example: "Team meeting",
        estimate: "₹10,000 - ₹30,000",
    },
    BudgetHint {
        example: "Workshop",
        estimate: "₹25,000 - ₹75,000",
    },
];

/// Budget estimates for `category`. Categories without their own table use
/// the travel estimates.
pub fn budget_hints(category: Category) -> &'static [BudgetHint] {
    match category {
        Category::Party => PARTY_HINTS,
        Category::Business => BUSINESS_HINTS,
        _ => TRAVEL_HINTS,
    }
}
