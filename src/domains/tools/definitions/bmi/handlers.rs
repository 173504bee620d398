//! HTTP handlers and form processing for the BMI calculator.
//!
//! The submitted fields travel as raw strings and are converted through a
//! typed parse step before the engine runs. Every failure is resolved here
//! into an in-page message; nothing propagates to the HTTP layer, and the
//! response status is always 200.

use askama::Template;
use axum::{
    extract::{Form, rejection::FormRejection},
    response::Html,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::core::render::render_page;

use super::engine;

/// User-facing message for fields that are missing, empty, or non-numeric.
const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter numbers for weight and height.";

/// User-facing message for failures whose cause is not exposed.
const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

// ============================================================================
// Form Payload
// ============================================================================

/// The raw form submission. Missing fields default to empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BmiForm {
    #[serde(default)]
    pub weight: String,

    #[serde(default)]
    pub height: String,
}

// ============================================================================
// Page Template / Render Context
// ============================================================================

/// The BMI calculator page.
///
/// Doubles as the render context: the form handler fills in the derived
/// fields and the echoed raw values.
#[derive(Template, Debug, Default, PartialEq)]
#[template(path = "bmi_calculator.html")]
pub struct BmiTemplate {
    /// The computed BMI, formatted for display, when the submission was valid.
    pub bmi_result: Option<String>,

    /// The category label, set exactly when `bmi_result` is.
    pub bmi_category: Option<&'static str>,

    /// The in-page error message, set exactly when `bmi_result` is not.
    pub error_message: Option<String>,

    /// Raw submitted weight, echoed back into the form.
    pub weight_value: String,

    /// Raw submitted height, echoed back into the form.
    pub height_value: String,
}

// ============================================================================
// Form Processing
// ============================================================================

/// Parse both measurements out of their raw strings.
///
/// Accepts surrounding whitespace. Yields `None` for a missing, empty, or
/// non-numeric field; the caller maps that to the fixed invalid-input
/// message.
fn parse_measurements(weight: &str, height: &str) -> Option<(f64, f64)> {
    let weight = weight.trim().parse::<f64>().ok()?;
    let height = height.trim().parse::<f64>().ok()?;
    Some((weight, height))
}

/// Evaluate a submission into the render context.
///
/// The raw values are always echoed back, even on error, so the form stays
/// filled in for the user.
pub fn evaluate(form: &BmiForm) -> BmiTemplate {
    let mut page = BmiTemplate {
        weight_value: form.weight.clone(),
        height_value: form.height.clone(),
        ..BmiTemplate::default()
    };

    match parse_measurements(&form.weight, &form.height) {
        None => page.error_message = Some(INVALID_INPUT_MESSAGE.to_string()),
        Some((weight_kg, height_cm)) => match engine::compute(weight_kg, height_cm) {
            Ok(reading) => {
                page.bmi_result = Some(reading.value.to_string());
                page.bmi_category = Some(reading.category.label());
            }
            Err(err) => page.error_message = Some(err.to_string()),
        },
    }

    page
}

// ============================================================================
// HTTP Handlers
// ============================================================================

/// GET handler - render the empty form.
pub async fn show_form() -> Html<String> {
    render_page(BmiTemplate::default())
}

/// POST handler - evaluate the submission and re-render the form.
///
/// A body that fails form extraction (malformed encoding, wrong content
/// type) is logged and surfaced as the generic error message.
pub async fn handle_submission(form: Result<Form<BmiForm>, FormRejection>) -> Html<String> {
    let page = match form {
        Ok(Form(form)) => {
            info!(weight = %form.weight, height = %form.height, "BMI submission received");
            evaluate(&form)
        }
        Err(rejection) => {
            error!("BMI form extraction failed: {rejection}");
            BmiTemplate {
                error_message: Some(UNEXPECTED_ERROR_MESSAGE.to_string()),
                ..BmiTemplate::default()
            }
        }
    };

    render_page(page)
}
