use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    FoodAndDining,
    Transportation,
    Shopping,
    Entertainment,
    BillsAndUtilities,
    Healthcare,
    Travel,
    Education,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(pub String);

impl Category {
    /// Form order.
    pub const ALL: [Category; 9] = [
        Category::FoodAndDining,
        Category::Transportation,
        Category::Shopping,
        Category::Entertainment,
        Category::BillsAndUtilities,
        Category::Healthcare,
        Category::Travel,
        Category::Education,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::FoodAndDining => "Food & Dining",
            Category::Transportation => "Transportation",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::BillsAndUtilities => "Bills & Utilities",
            Category::Healthcare => "Healthcare",
            Category::Travel => "Travel",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Category::FoodAndDining => "bg-orange-100 text-orange-800 border-orange-200",
            Category::Transportation => "bg-blue-100 text-blue-800 border-blue-200",
            Category::Shopping => "bg-purple-100 text-purple-800 border-purple-200",
            Category::Entertainment => "bg-pink-100 text-pink-800 border-pink-200",
            Category::BillsAndUtilities => "bg-red-100 text-red-800 border-red-200",
            Category::Healthcare => "bg-green-100 text-green-800 border-green-200",
            Category::Travel => "bg-indigo-100 text-indigo-800 border-indigo-200",
            Category::Education => "bg-yellow-100 text-yellow-800 border-yellow-200",
            Category::Other => "bg-gray-100 text-gray-800 border-gray-200",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

// Stored labels outside the closed set are read back as `Other`.
impl From<String> for Category {
    fn from(label: String) -> Self {
        label.parse().unwrap_or(Category::Other)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub amount: f64,
    pub description: String,
    pub category: Category,
    pub date: NaiveDate,
}

impl Expense {
    /// The id is the creation timestamp in milliseconds.
    pub fn new(
        amount: f64,
        description: impl Into<String>,
        category: Category,
        date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Self {
        Expense {
            id: created_at.timestamp_millis().to_string(),
            amount,
            description: description.into(),
            category,
            date,
        }
    }
}
