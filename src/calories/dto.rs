use serde::{Deserialize, Serialize};

/// One food entry as submitted by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    /// Amount eaten in grams
    pub amount_g: f64,
    #[serde(default)]
    pub calories_per_100g: Option<f64>,
    #[serde(default)]
    pub calories_per_serving: Option<f64>,
    /// Serving size in grams that `calories_per_serving` refers to
    #[serde(default)]
    pub serving_size_g: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub items: Vec<FoodItem>,
}

/// How an item's calories were derived.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalorieMethod {
    #[serde(rename = "per_100g")]
    Per100g,
    #[serde(rename = "per_serving")]
    PerServing,
    #[serde(rename = "insufficient_data")]
    InsufficientData,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemResult {
    pub name: String,
    pub amount_g: f64,
    pub calories: f64,
    pub method: CalorieMethod,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationResponse {
    pub total_calories: f64,
    pub items: Vec<ItemResult>,
}
