use crate::calories::dto::{CalculationResponse, CalorieMethod, FoodItem, ItemResult};

pub const MISSING_DATA_NOTE: &str = "Missing calorie data; counted as 0";

/// Rounds to 2 decimals, half-to-even on the exact binary value.
///
/// Goes through the decimal formatter rather than `(x * 100.0).round() / 100.0`,
/// which rounds ties away from zero and is thrown off by the scaling error.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Picks the first usable calorie source: per-100g, then per-serving.
fn item_calories(item: &FoodItem) -> (f64, CalorieMethod) {
    if let Some(per_100g) = item.calories_per_100g {
        return (item.amount_g * per_100g / 100.0, CalorieMethod::Per100g);
    }
    match (item.calories_per_serving, item.serving_size_g) {
        (Some(per_serving), Some(serving_g)) if serving_g > 0.0 => {
            let servings = item.amount_g / serving_g;
            (servings * per_serving, CalorieMethod::PerServing)
        }
        _ => (0.0, CalorieMethod::InsufficientData),
    }
}

pub fn calculate(items: &[FoodItem]) -> CalculationResponse {
    let mut total = 0.0;
    let results = items
        .iter()
        .map(|item| {
            let (raw, method) = item_calories(item);
            // total accumulates the rounded value, not `raw`
            let calories = round2(raw);
            total += calories;
            ItemResult {
                name: item.name.clone(),
                amount_g: item.amount_g,
                calories,
                method,
                note: (method == CalorieMethod::InsufficientData)
                    .then(|| MISSING_DATA_NOTE.to_string()),
            }
        })
        .collect();

    CalculationResponse {
        total_calories: round2(total),
        items: results,
    }
}

/// JSON has no encoding for inf/NaN; overflowed results are refused, not sent as `null`.
pub fn ensure_representable(response: &CalculationResponse) -> anyhow::Result<()> {
    if let Some(item) = response.items.iter().find(|i| !i.calories.is_finite()) {
        anyhow::bail!("calories for {:?} out of range", item.name);
    }
    if !response.total_calories.is_finite() {
        anyhow::bail!("total calories out of range");
    }
    Ok(())
}
