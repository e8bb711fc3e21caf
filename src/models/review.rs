// src/models/review.rs
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Fixed author label for business-owner replies.
pub const OWNER_AUTHOR: &str = "사장님";

/// Substituted when a review is submitted without a customer name.
pub const ANONYMOUS_NAME: &str = "익명";

/// Rating substituted when none is provided.
pub fn default_rating() -> Number {
    Number::from(5)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,           // "rev001", "rev" + 8 hex chars, or "<cohort>_NNN"
    pub customer_name: String,
    pub review_text: String,
    pub date: String,         // YYYY-MM-DD
    pub rating: Number,       // stored as given, no range check
    pub reply: Option<Reply>, // serialized as null when absent
}

/// Business-owner reply embedded in a review. Either fully present or absent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub date: String, // YYYY-MM-DD HH:MM
    pub author: String,
}

/// Body of POST /api/reviews. Every field is optional; missing values get
/// the documented defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct NewReview {
    pub customer_name: Option<String>,
    pub review_text: Option<String>,
    pub rating: Option<Number>,
}
