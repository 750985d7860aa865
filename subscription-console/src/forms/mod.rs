//! Form submissions and the checks they pass before any upstream call.

pub mod plan;
pub mod purchase;
pub mod report;

pub use plan::PlanForm;
pub use purchase::PurchaseForm;
pub use report::ReportRangeQuery;

use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Add at least one model quota")]
    NoQuotaRows,

    #[error("Enter a valid model name and quota")]
    InvalidQuotaRow,

    #[error("{0} must be a number")]
    InvalidNumber(&'static str),

    #[error("Choose a payment method")]
    MissingPaymentMethod,

    #[error("Dates must look like YYYY-MM-DD")]
    InvalidDate,

    #[error("Start date must not be after end date")]
    InvertedRange,

    #[error("{}", describe(.0))]
    Fields(#[from] ValidationErrors),
}

/// Field messages of a failed `validate()`, sorted so the toast is stable.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect();
    messages.sort();
    messages.dedup();
    messages.join("; ")
}

/// Browsers send empty inputs as `""`; treat those as absent.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
