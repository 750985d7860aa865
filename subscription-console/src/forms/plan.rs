//! Plan editor submission.

use super::FormError;
use crate::models::{PlanPayload, QuotaMap};
use serde::Deserialize;
use validator::Validate;

/// Raw editor fields. Numbers arrive as text so a bad value becomes a toast
/// instead of an extractor rejection; quota rows arrive as two parallel lists.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlanForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub duration: String,
    pub status: String,
    pub quota_model: Vec<String>,
    pub quota_amount: Vec<String>,
}

#[derive(Debug, Validate)]
struct PlanFields {
    #[validate(length(min = 1, max = 100, message = "Plan name is required (at most 100 characters)"))]
    name: String,
    description: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    price: f64,
    #[validate(range(min = 1, message = "Duration must be at least 1 day"))]
    duration: i32,
    #[validate(range(min = 0, max = 1, message = "Status must be enabled or disabled"))]
    status: i32,
}

impl PlanForm {
    /// Check every field and collect the quota rows into the request body.
    pub fn into_payload(self) -> Result<PlanPayload, FormError> {
        let fields = PlanFields {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: parse_price(&self.price)?,
            duration: parse_number::<i32>(&self.duration, "Duration")?,
            status: parse_number::<i32>(&self.status, "Status")?,
        };
        fields.validate()?;

        let model_quotas = collect_quota_rows(&self.quota_model, &self.quota_amount)?;

        Ok(PlanPayload {
            name: fields.name,
            description: fields.description,
            price: (fields.price * 100.0).round() / 100.0,
            duration: fields.duration,
            status: fields.status,
            model_quotas,
        })
    }
}

fn parse_number<T: std::str::FromStr>(raw: &str, field: &'static str) -> Result<T, FormError> {
    raw.trim()
        .parse()
        .map_err(|_| FormError::InvalidNumber(field))
}

/// `f64` parsing also accepts `NaN`, `inf` and overflowing literals, none of
/// which survive JSON encoding.
fn parse_price(raw: &str) -> Result<f64, FormError> {
    Some(parse_number::<f64>(raw, "Price")?)
        .filter(|price| price.is_finite())
        .ok_or(FormError::InvalidNumber("Price"))
}

/// Rows become a `{model: quota}` object; a repeated model keeps its last quota.
pub fn collect_quota_rows(models: &[String], amounts: &[String]) -> Result<QuotaMap, FormError> {
    if models.is_empty() && amounts.is_empty() {
        return Err(FormError::NoQuotaRows);
    }
    if models.len() != amounts.len() {
        return Err(FormError::InvalidQuotaRow);
    }

    let mut quotas = QuotaMap::new();
    for (model, amount) in models.iter().zip(amounts) {
        let model = model.trim();
        let amount: i64 = amount
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidQuotaRow)?;
        if model.is_empty() || amount <= 0 {
            return Err(FormError::InvalidQuotaRow);
        }
        quotas.insert(model.to_string(), amount);
    }
    Ok(quotas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(models: &[&str], amounts: &[&str]) -> PlanForm {
        PlanForm {
            name: " Pro ".to_string(),
            description: "Monthly plan".to_string(),
            price: "29.999".to_string(),
            duration: "30".to_string(),
            status: "1".to_string(),
            quota_model: models.iter().map(|s| s.to_string()).collect(),
            quota_amount: amounts.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn valid_form_becomes_payload() {
        let payload = form(&["gpt-4", "gpt-4o"], &["100", "50"]).into_payload().unwrap();
        assert_eq!(payload.name, "Pro");
        assert_eq!(payload.price, 30.0);
        assert_eq!(payload.duration, 30);
        assert_eq!(payload.model_quotas.get("gpt-4"), Some(&100));
        assert_eq!(payload.model_quotas.get("gpt-4o"), Some(&50));
    }

    #[test]
    fn zero_rows_are_rejected() {
        let err = form(&[], &[]).into_payload().unwrap_err();
        assert!(matches!(err, FormError::NoQuotaRows));
        assert_eq!(err.to_string(), "Add at least one model quota");
    }

    #[test]
    fn empty_model_name_is_rejected() {
        let err = form(&["  "], &["100"]).into_payload().unwrap_err();
        assert_eq!(err.to_string(), "Enter a valid model name and quota");
    }

    #[test]
    fn non_positive_or_non_numeric_quota_is_rejected() {
        for amount in ["0", "-5", "", "ten", "1.5"] {
            let err = form(&["gpt-4"], &[amount]).into_payload().unwrap_err();
            assert!(matches!(err, FormError::InvalidQuotaRow), "amount {:?}", amount);
        }
    }

    #[test]
    fn later_duplicate_row_wins() {
        let payload = form(&["gpt-4", "gpt-4"], &["100", "7"]).into_payload().unwrap();
        assert_eq!(payload.model_quotas.len(), 1);
        assert_eq!(payload.model_quotas.get("gpt-4"), Some(&7));
    }

    #[test]
    fn field_rules_are_checked() {
        let mut bad = form(&["gpt-4"], &["100"]);
        bad.name = String::new();
        bad.duration = "0".to_string();
        let err = bad.into_payload().unwrap_err();
        assert!(matches!(err, FormError::Fields(_)));
        let message = err.to_string();
        assert!(message.contains("Plan name is required"));
        assert!(message.contains("Duration must be at least 1 day"));
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut bad = form(&["gpt-4"], &["100"]);
        bad.price = "-1".to_string();
        assert!(matches!(bad.into_payload(), Err(FormError::Fields(_))));
    }

    #[test]
    fn unparsable_price_names_the_field() {
        let mut bad = form(&["gpt-4"], &["100"]);
        bad.price = "cheap".to_string();
        assert_eq!(bad.into_payload().unwrap_err().to_string(), "Price must be a number");
    }

    #[test]
    fn non_finite_price_is_rejected() {
        for price in ["NaN", "inf", "-inf", "1e400"] {
            let mut bad = form(&["gpt-4"], &["100"]);
            bad.price = price.to_string();
            let err = bad.into_payload().unwrap_err();
            assert!(matches!(err, FormError::InvalidNumber("Price")), "price {:?}", price);
        }
    }

    #[test]
    fn long_description_is_kept() {
        let mut long = form(&["gpt-4"], &["100"]);
        long.description = "x".repeat(2_000);
        assert_eq!(long.into_payload().unwrap().description.len(), 2_000);
    }
}
