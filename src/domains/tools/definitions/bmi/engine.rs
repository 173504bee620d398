//! BMI computation and classification.
//!
//! Pure functions with no side effects. Validation rejects non-positive
//! measurements before any arithmetic, so the division is always safe.

use thiserror::Error;

// ============================================================================
// Types
// ============================================================================

/// Validation errors for the submitted measurements.
///
/// The `#[error]` strings are the exact messages shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeasurementError {
    /// The height was zero or negative.
    #[error("Height must be positive.")]
    NonPositiveHeight,

    /// The weight was zero or negative.
    #[error("Weight must be positive.")]
    NonPositiveWeight,
}

/// BMI category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Underweight,
    NormalWeight,
    Overweight,
    Obesity,
}

impl Category {
    /// The display label for this category.
    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obesity => "Obesity",
        }
    }
}

/// A computed BMI reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReading {
    /// The BMI value, rounded to 2 decimal places.
    pub value: f64,

    /// The category, classified from the unrounded value.
    pub category: Category,
}

// ============================================================================
// Computation
// ============================================================================

/// Compute the BMI for a weight in kilograms and a height in centimeters.
///
/// Returns the reading rounded to 2 decimals together with its category,
/// or a validation error when either measurement is not positive. Height
/// is checked first.
pub fn compute(weight_kg: f64, height_cm: f64) -> Result<BmiReading, MeasurementError> {
    if height_cm <= 0.0 {
        return Err(MeasurementError::NonPositiveHeight);
    }
    if weight_kg <= 0.0 {
        return Err(MeasurementError::NonPositiveWeight);
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);

    Ok(BmiReading {
        value: round2(bmi),
        category: classify(bmi),
    })
}

/// Classify a BMI value into its category.
///
/// The arms are order-sensitive and reproduce the published thresholds
/// exactly: values in `24.9..25.0` fall through to the final arm.
pub fn classify(bmi: f64) -> Category {
    if bmi < 18.5 {
        Category::Underweight
    } else if bmi < 24.9 {
        Category::NormalWeight
    } else if (25.0..29.9).contains(&bmi) {
        Category::Overweight
    } else {
        Category::Obesity
    }
}

/// Round to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_normal_weight() {
        let reading = compute(70.0, 170.0).unwrap();
        assert_eq!(reading.value, 24.22);
        assert_eq!(reading.category, Category::NormalWeight);
    }

    #[test]
    fn test_compute_underweight() {
        let reading = compute(50.0, 170.0).unwrap();
        assert_eq!(reading.value, 17.3);
        assert_eq!(reading.category, Category::Underweight);
    }

    #[test]
    fn test_compute_overweight() {
        let reading = compute(85.0, 170.0).unwrap();
        assert_eq!(reading.value, 29.41);
        assert_eq!(reading.category, Category::Overweight);
    }

    #[test]
    fn test_compute_obesity() {
        let reading = compute(100.0, 170.0).unwrap();
        assert_eq!(reading.value, 34.6);
        assert_eq!(reading.category, Category::Obesity);
    }

    #[test]
    fn test_zero_height_rejected() {
        assert_eq!(
            compute(70.0, 0.0),
            Err(MeasurementError::NonPositiveHeight)
        );
    }

    #[test]
    fn test_negative_height_rejected() {
        assert_eq!(
            compute(70.0, -170.0),
            Err(MeasurementError::NonPositiveHeight)
        );
    }

    #[test]
    fn test_zero_weight_rejected() {
        assert_eq!(
            compute(0.0, 170.0),
            Err(MeasurementError::NonPositiveWeight)
        );
    }

    #[test]
    fn test_negative_weight_rejected() {
        assert_eq!(
            compute(-5.0, 170.0),
            Err(MeasurementError::NonPositiveWeight)
        );
    }

    #[test]
    fn test_height_checked_before_weight() {
        // Both invalid: the height message wins.
        assert_eq!(
            compute(-5.0, 0.0),
            Err(MeasurementError::NonPositiveHeight)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MeasurementError::NonPositiveHeight.to_string(),
            "Height must be positive."
        );
        assert_eq!(
            MeasurementError::NonPositiveWeight.to_string(),
            "Weight must be positive."
        );
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(classify(18.49), Category::Underweight);
        assert_eq!(classify(18.5), Category::NormalWeight);
        assert_eq!(classify(24.89), Category::NormalWeight);
        assert_eq!(classify(25.0), Category::Overweight);
        assert_eq!(classify(29.4), Category::Overweight);
        assert_eq!(classify(29.9), Category::Obesity);
        assert_eq!(classify(30.0), Category::Obesity);
    }

    #[test]
    fn test_classification_gap_falls_through_to_obesity() {
        // 24.9..25.0 is unreachable by Normal weight and Overweight and
        // lands in the final arm.
        assert_eq!(classify(24.9), Category::Obesity);
        assert_eq!(classify(24.95), Category::Obesity);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Underweight.label(), "Underweight");
        assert_eq!(Category::NormalWeight.label(), "Normal weight");
        assert_eq!(Category::Overweight.label(), "Overweight");
        assert_eq!(Category::Obesity.label(), "Obesity");
    }

    #[test]
    fn test_classification_uses_unrounded_value() {
        // 18.498 rounds to 18.5 but classifies as Underweight.
        let weight = 18.498;
        let reading = compute(weight, 100.0).unwrap();
        assert_eq!(reading.value, 18.5);
        assert_eq!(reading.category, Category::Underweight);
    }
}
