//! Descriptive content attached to each type code.

use serde::{Deserialize, Serialize};

use super::TypeCode;

/// How a type likes to travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelStyle {
    pub preferences: Vec<String>,
    pub destinations: Vec<String>,
    pub activities: Vec<String>,
    pub planning_style: String,
    pub budget_approach: String,
    pub accommodation_style: String,
    pub travel_companions: Vec<String>,
}

/// Display content for one type code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub code: TypeCode,
    pub name: String,
    pub description: String,
    pub characteristics: Vec<String>,
    pub travel_style: TravelStyle,
    #[serde(default)]
    pub image_url: Option<String>,
}
