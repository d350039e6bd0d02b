use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of event being planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Travel,
    Party,
    Spiritual,
    Business,
    Education,
    Personal,
    /// Catch-all tag. No custom label is captured alongside it.
    Other,
}

static ALL_CATEGORIES: &[Category] = &[
    Category::Travel,
    Category::Party,
    Category::Spiritual,
    Category::Business,
    Category::Education,
    Category::Personal,
    Category::Other,
];

impl Category {
    /// Returns the stable lowercase identifier of this category.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Travel => "travel",
            Category::Party => "party",
            Category::Spiritual => "spiritual",
            Category::Business => "business",
            Category::Education => "education",
            Category::Personal => "personal",
            Category::Other => "other",
        }
    }

    /// Returns the human-readable name shown in pickers and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Travel => "Travel",
            Category::Party => "Party",
            Category::Spiritual => "Spiritual",
            Category::Business => "Business",
            Category::Education => "Education",
            Category::Personal => "Personal Project",
            Category::Other => "Other/Custom",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Travel => "🎒",
            Category::Party => "🎉",
            Category::Spiritual => "🕉",
            Category::Business => "💼",
            Category::Education => "📚",
            Category::Personal => "🛠",
            Category::Other => "✏",
        }
    }

    /// Returns example event kinds for this category.
    pub fn subtitle(&self) -> &'static str {
        match self {
            Category::Travel => "Leisure, Adventure, Road Trip",
            Category::Party => "Birthday, Anniversary, Wedding",
            Category::Spiritual => "Temple Visit, Yoga Retreat",
            Category::Business => "Conference, Team Building",
            Category::Education => "Study Tour, Course",
            Category::Personal => "DIY, Volunteering",
            Category::Other => "Anything else",
        }
    }

    /// Returns all categories in picker order.
    pub fn all() -> &'static [Category] {
        ALL_CATEGORIES
    }
}

#[mutants::skip]
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
