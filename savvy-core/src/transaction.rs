//! Transaction types for the expense/lifestyle ledger

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Fixed expense categories assigned by the AI classifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Food")]
    Food,
    #[serde(rename = "Travel")]
    Travel,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Bills")]
    Bills,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Health")]
    Health,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Travel,
        Category::Shopping,
        Category::Bills,
        Category::Entertainment,
        Category::Health,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }
}

/// Junk/Healthy/Neutral sub-classification, applied only to Food expenses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FoodTag {
    #[serde(rename = "Junk")]
    Junk,
    #[serde(rename = "Healthy")]
    Healthy,
    #[serde(rename = "Neutral")]
    Neutral,
}

impl FoodTag {
    pub fn label(&self) -> &'static str {
        match self {
            FoodTag::Junk => "Junk",
            FoodTag::Healthy => "Healthy",
            FoodTag::Neutral => "Neutral",
        }
    }
}

/// Classification result for a single expense, as returned by the AI
/// classifier (or substituted on failure). Field names match the wire
/// shape the classifier is prompted to emit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Classification {
    pub category: Category,
    #[serde(rename = "foodTag", default)]
    pub food_tag: Option<FoodTag>,
    #[serde(rename = "estimatedCalories", default)]
    pub estimated_calories: f64,
    #[serde(rename = "isImpulse", default)]
    pub is_impulse: bool,
    #[serde(default = "Classification::fallback_suggestion")]
    pub suggestion: String,
}

impl Classification {
    fn fallback_suggestion() -> String {
        "Could not analyze transaction. Please categorize manually.".to_string()
    }

    /// Fixed default used whenever the classifier is unreachable or its
    /// output can't be parsed. The write path proceeds with this.
    pub fn fallback() -> Self {
        Self {
            category: Category::Other,
            food_tag: None,
            estimated_calories: 0.0,
            is_impulse: false,
            suggestion: Self::fallback_suggestion(),
        }
    }

    /// Drop inconsistencies the model sometimes produces: a food tag on a
    /// non-Food category, or a negative calorie estimate.
    pub fn normalized(mut self) -> Self {
        if self.category != Category::Food {
            self.food_tag = None;
        }
        if !self.estimated_calories.is_finite() || self.estimated_calories < 0.0 {
            self.estimated_calories = 0.0;
        }
        self
    }
}

/// One logged expense. Append-only: classification fields are set once at
/// creation and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Store-assigned identifier
    pub id: String,
    /// Owning user
    #[serde(rename = "ownerId")]
    pub owner_id: String,
    /// Free-text description ("McDonald's", "Nike Shoes", ...)
    pub name: String,
    /// Positive expense amount
    pub amount: f64,
    /// Calendar date of the expense (day granularity)
    pub date: NaiveDate,
    pub category: Category,
    #[serde(rename = "foodTag")]
    pub food_tag: Option<FoodTag>,
    #[serde(rename = "isImpulse")]
    pub is_impulse: bool,
    #[serde(rename = "estimatedCalories")]
    pub estimated_calories: f64,
    pub suggestion: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Build a transaction from user input plus a classification result.
    /// The id is assigned by the store on append.
    pub fn new(
        owner_id: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        classification: Classification,
    ) -> Self {
        let c = classification.normalized();
        Self {
            id: String::new(),
            owner_id: owner_id.into(),
            name: name.into(),
            amount,
            date,
            category: c.category,
            food_tag: c.food_tag,
            is_impulse: c.is_impulse,
            estimated_calories: c.estimated_calories,
            suggestion: c.suggestion,
            created_at: Utc::now(),
        }
    }

    pub fn is_junk_food(&self) -> bool {
        self.food_tag == Some(FoodTag::Junk)
    }

    /// A usable amount for aggregation. Malformed records contribute zero
    /// rather than poisoning sums.
    pub fn sane_amount(&self) -> f64 {
        if self.amount.is_finite() && self.amount > 0.0 {
            self.amount
        } else {
            0.0
        }
    }
}
