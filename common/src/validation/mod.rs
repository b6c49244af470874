//! Applies the rules declared in a form configuration to submitted values.
//!
//! Used by the client before submitting and by the backend before persisting.
//! Values are trimmed before checking. A blank value only fails `Required`;
//! the other rules are checked only for values that were actually supplied.

use crate::model::form_config::{FormFieldConfig, ValidationRule};
use crate::requests::FieldError;
use std::collections::HashMap;
use url::Url;

/// Whether every required field must be supplied (create) or only the supplied
/// fields are checked (update with per-field fall-back).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completeness {
    AllRequired,
    SuppliedOnly,
}

/// Parses a bid price. Accepts finite numbers greater than or equal to zero.
pub fn parse_price(raw: &str) -> Option<f64> {
    let price: f64 = raw.trim().parse().ok()?;
    if price.is_finite() && price >= 0.0 {
        // Normalises `-0` to `0`.
        Some(price + 0.0)
    } else {
        None
    }
}

/// Schemes a landing page may use. Anything else (`javascript:`, `file:`, ...) is rejected.
const WEB_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// Returns `true` when `raw` is an absolute web URL with a host, e.g. `https://example.com/x`.
pub fn is_valid_url(raw: &str) -> bool {
    Url::parse(raw.trim())
        .map(|url| url.has_host() && WEB_SCHEMES.contains(&url.scheme()))
        .unwrap_or(false)
}

/// Returns the trimmed value of `field` when it is present and not blank.
pub fn supplied<'a>(values: &'a HashMap<String, String>, field: &str) -> Option<&'a str> {
    values
        .get(field)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

/// Checks one value against the rules of one field and returns the first failure.
pub fn check_field(config: &FormFieldConfig, value: Option<&str>) -> Option<FieldError> {
    let value = value.map(str::trim).filter(|v| !v.is_empty());
    let failed = config.rules().iter().find(|rule| match (rule, value) {
        (ValidationRule::Required { .. }, None) => true,
        (_, None) => false,
        (ValidationRule::Required { .. }, Some(_)) => false,
        (ValidationRule::MaxLength { max, .. }, Some(v)) => v.chars().count() > *max,
        (ValidationRule::Url { .. }, Some(v)) => !is_valid_url(v),
        (ValidationRule::NonNegative { .. }, Some(v)) => parse_price(v).is_none(),
    })?;

    Some(FieldError {
        field: config.field().to_string(),
        message: failed.message().to_string(),
    })
}

/// Validates the text fields of a submitted form. File fields are skipped.
///
/// Returns one `FieldError` per failing field, in configuration order.
pub fn validate_fields(
    configs: &[FormFieldConfig],
    values: &HashMap<String, String>,
    completeness: Completeness,
) -> Vec<FieldError> {
    configs
        .iter()
        .filter(|config| !config.is_file())
        .filter_map(|config| {
            let value = supplied(values, config.field());
            if value.is_none() && completeness == Completeness::SuppliedOnly {
                return None;
            }
            check_field(config, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::form_config::{InputNumberProps, InputProps, UploadProps};

    fn configs() -> Vec<FormFieldConfig> {
        vec![
            FormFieldConfig::Input {
                field: "title".to_string(),
                label: "Title".to_string(),
                props: InputProps::default(),
                rules: vec![
                    ValidationRule::Required {
                        message: "title required".to_string(),
                    },
                    ValidationRule::MaxLength {
                        max: 5,
                        message: "title too long".to_string(),
                    },
                ],
            },
            FormFieldConfig::Input {
                field: "landingUrl".to_string(),
                label: "Landing page".to_string(),
                props: InputProps::default(),
                rules: vec![
                    ValidationRule::Required {
                        message: "url required".to_string(),
                    },
                    ValidationRule::Url {
                        message: "url invalid".to_string(),
                    },
                ],
            },
            FormFieldConfig::InputNumber {
                field: "price".to_string(),
                label: "Bid".to_string(),
                props: InputNumberProps::default(),
                rules: vec![
                    ValidationRule::Required {
                        message: "price required".to_string(),
                    },
                    ValidationRule::NonNegative {
                        message: "price invalid".to_string(),
                    },
                ],
            },
            FormFieldConfig::Upload {
                field: "videos".to_string(),
                label: "Videos".to_string(),
                props: UploadProps::default(),
                rules: vec![ValidationRule::Required {
                    message: "never checked".to_string(),
                }],
            },
        ]
    }

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn failing_fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn complete_form_passes() {
        let submitted = values(&[
            ("title", "Sale"),
            ("landingUrl", "https://example.com/sale"),
            ("price", "3.5"),
        ]);
        assert!(validate_fields(&configs(), &submitted, Completeness::AllRequired).is_empty());
    }

    #[test]
    fn blank_and_missing_required_fields_are_reported_in_order() {
        let submitted = values(&[("title", "   "), ("landingUrl", "https://example.com")]);
        let errors = validate_fields(&configs(), &submitted, Completeness::AllRequired);
        assert_eq!(failing_fields(&errors), vec!["title", "price"]);
        assert_eq!(errors[0].message, "title required");
    }

    #[test]
    fn supplied_only_skips_absent_fields_but_checks_present_ones() {
        let submitted = values(&[("price", "-1"), ("title", "")]);
        let errors = validate_fields(&configs(), &submitted, Completeness::SuppliedOnly);
        assert_eq!(failing_fields(&errors), vec!["price"]);
        assert_eq!(errors[0].message, "price invalid");
    }

    #[test]
    fn max_length_counts_characters() {
        let ok = values(&[("title", "éééé")]);
        assert!(validate_fields(&configs(), &ok, Completeness::SuppliedOnly).is_empty());

        let long = values(&[("title", "abcdef")]);
        let errors = validate_fields(&configs(), &long, Completeness::SuppliedOnly);
        assert_eq!(errors[0].message, "title too long");
    }

    #[test]
    fn relative_urls_are_rejected() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url(" http://localhost:3001/landing "));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("/landing"));
        assert!(!is_valid_url("mailto:someone@example.com"));
    }

    #[test]
    fn only_web_schemes_are_accepted() {
        assert!(is_valid_url("ftp://files.example.com/brochure.pdf"));
        assert!(!is_valid_url("javascript://example.com/%0Aalert(document.domain)"));
        assert!(!is_valid_url("file://host/etc/passwd"));
        assert!(!is_valid_url("chrome://settings"));
        assert!(!is_valid_url("data://example.com/text"));
    }

    #[test]
    fn price_must_be_finite_and_non_negative() {
        assert_eq!(parse_price("0"), Some(0.0));
        assert_eq!(parse_price(" 12.50 "), Some(12.5));
        assert_eq!(parse_price("-0"), Some(0.0));
        assert!(parse_price("-0").unwrap().is_sign_positive());
        assert_eq!(parse_price("-3"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("inf"), None);
        assert_eq!(parse_price("ten"), None);
    }
}
