//! News item categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Topic category of a news item, used for viewer preference sorting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Health,
    Politics,
    Technology,
    Society,
    Environment,
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 6] = [
        Category::Health,
        Category::Politics,
        Category::Technology,
        Category::Society,
        Category::Environment,
        Category::Other,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Health => "Health",
            Category::Politics => "Politics",
            Category::Technology => "Technology",
            Category::Society => "Society",
            Category::Environment => "Environment",
            Category::Other => "Other",
        };
        write!(f, "{s}")
    }
}
