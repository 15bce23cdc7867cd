//! Category defaults.

/// Color assigned when a category is created or updated without one.
pub const DEFAULT_COLOR: &str = "blue";

/// A category inserted on first start when the table is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedCategory {
    pub name: &'static str,
    pub color: &'static str,
}

/// Categories seeded into an empty database, in display order. The first
/// entry gets `sort_order` 1.
pub const DEFAULT_CATEGORIES: [SeedCategory; 5] = [
    SeedCategory {
        name: "Creative Writing",
        color: "magenta",
    },
    SeedCategory {
        name: "Coding Assistant",
        color: "blue",
    },
    SeedCategory {
        name: "Data Analysis",
        color: "cyan",
    },
    SeedCategory {
        name: "Image Generation",
        color: "purple",
    },
    SeedCategory {
        name: "General",
        color: "gold",
    },
];

/// Serde default for the optional `color` field on category payloads.
pub fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}
