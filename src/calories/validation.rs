use crate::calories::dto::{CalculationRequest, FoodItem};
use crate::error::FieldError;
use crate::extractors::Validate;

fn check_non_negative(
    errors: &mut Vec<FieldError>,
    index: usize,
    field: &'static str,
    value: Option<f64>,
) {
    let Some(v) = value else { return };
    if v.is_nan() || v < 0.0 {
        errors.push(FieldError {
            loc: vec!["body".into(), "items".into(), index.into(), field.into()],
            msg: "Input should be greater than or equal to 0".into(),
            kind: "greater_than_equal",
        });
    }
}

impl FoodItem {
    fn collect_errors(&self, index: usize, errors: &mut Vec<FieldError>) {
        check_non_negative(errors, index, "amount_g", Some(self.amount_g));
        check_non_negative(errors, index, "calories_per_100g", self.calories_per_100g);
        check_non_negative(errors, index, "calories_per_serving", self.calories_per_serving);
        check_non_negative(errors, index, "serving_size_g", self.serving_size_g);
    }
}

impl Validate for CalculationRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        for (i, item) in self.items.iter().enumerate() {
            item.collect_errors(i, &mut errors);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
