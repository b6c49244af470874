//! Server-declared description of the create/edit ad form.
//!
//! The backend publishes an ordered `Vec<FormFieldConfig>` at `GET /api/form-config`
//! and the client renders its form from that list alone, so fields can be added or
//! relabelled without rebuilding the frontend. The same list drives the backend's
//! validation of submitted text fields (see `crate::validation`).
//!
//! Each variant corresponds to one UI component and carries its own property
//! struct. On the wire the variant is selected by the `component` key:
//!
//! ```json
//! { "component": "TextArea", "field": "content", "label": "Content",
//!   "props": { "rows": 4 }, "rules": [{ "rule": "required", "message": "..." }] }
//! ```

use serde::{Deserialize, Serialize};

/// One validation rule attached to a form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum ValidationRule {
    /// The value must be present and not blank.
    Required { message: String },
    /// The value must not be longer than `max` characters.
    MaxLength { max: usize, message: String },
    /// The value must be an absolute URL with a host.
    Url { message: String },
    /// The value must parse as a finite number greater than or equal to zero.
    NonNegative { message: String },
}

impl ValidationRule {
    pub fn message(&self) -> &str {
        match self {
            ValidationRule::Required { message }
            | ValidationRule::MaxLength { message, .. }
            | ValidationRule::Url { message }
            | ValidationRule::NonNegative { message } => message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAreaProps {
    pub rows: u32,
}

impl Default for TextAreaProps {
    fn default() -> Self {
        Self { rows: 4 }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputNumberProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadProps {
    pub multiple: bool,
    pub accept: String,
}

impl Default for UploadProps {
    fn default() -> Self {
        Self {
            multiple: true,
            accept: "video/*".to_string(),
        }
    }
}

/// Description of one input of the ad form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "component")]
pub enum FormFieldConfig {
    /// Single-line text input.
    Input {
        field: String,
        label: String,
        #[serde(default)]
        props: InputProps,
        #[serde(default)]
        rules: Vec<ValidationRule>,
    },
    /// Multi-line text input.
    TextArea {
        field: String,
        label: String,
        #[serde(default)]
        props: TextAreaProps,
        #[serde(default)]
        rules: Vec<ValidationRule>,
    },
    /// Numeric input.
    InputNumber {
        field: String,
        label: String,
        #[serde(default)]
        props: InputNumberProps,
        #[serde(default)]
        rules: Vec<ValidationRule>,
    },
    /// File picker. Selected files are sent as multipart file parts under `field`.
    Upload {
        field: String,
        label: String,
        #[serde(default)]
        props: UploadProps,
        #[serde(default)]
        rules: Vec<ValidationRule>,
    },
}

impl FormFieldConfig {
    pub fn field(&self) -> &str {
        match self {
            FormFieldConfig::Input { field, .. }
            | FormFieldConfig::TextArea { field, .. }
            | FormFieldConfig::InputNumber { field, .. }
            | FormFieldConfig::Upload { field, .. } => field,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FormFieldConfig::Input { label, .. }
            | FormFieldConfig::TextArea { label, .. }
            | FormFieldConfig::InputNumber { label, .. }
            | FormFieldConfig::Upload { label, .. } => label,
        }
    }

    pub fn rules(&self) -> &[ValidationRule] {
        match self {
            FormFieldConfig::Input { rules, .. }
            | FormFieldConfig::TextArea { rules, .. }
            | FormFieldConfig::InputNumber { rules, .. }
            | FormFieldConfig::Upload { rules, .. } => rules,
        }
    }

    /// File fields are submitted as multipart file parts instead of text values.
    pub fn is_file(&self) -> bool {
        matches!(self, FormFieldConfig::Upload { .. })
    }

    pub fn is_required(&self) -> bool {
        self.rules()
            .iter()
            .any(|rule| matches!(rule, ValidationRule::Required { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_area_serializes_with_component_tag_and_props() {
        let config = FormFieldConfig::TextArea {
            field: "content".to_string(),
            label: "Content".to_string(),
            props: TextAreaProps { rows: 4 },
            rules: vec![ValidationRule::Required {
                message: "Please enter the content".to_string(),
            }],
        };

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            json!({
                "component": "TextArea",
                "field": "content",
                "label": "Content",
                "props": { "rows": 4 },
                "rules": [{ "rule": "required", "message": "Please enter the content" }]
            })
        );
    }

    #[test]
    fn rule_tags_are_camel_case() {
        let rule = ValidationRule::MaxLength {
            max: 100,
            message: "too long".to_string(),
        };
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["rule"], "maxLength");
        assert_eq!(value["max"], 100);
    }

    #[test]
    fn upload_without_props_uses_video_defaults() {
        let raw = r#"{ "component": "Upload", "field": "videos", "label": "Videos" }"#;
        let config: FormFieldConfig = serde_json::from_str(raw).unwrap();

        assert!(config.is_file());
        assert!(!config.is_required());
        match config {
            FormFieldConfig::Upload { props, rules, .. } => {
                assert!(props.multiple);
                assert_eq!(props.accept, "video/*");
                assert!(rules.is_empty());
            }
            other => panic!("unexpected variant {other:?}"),
        }
    }

    #[test]
    fn unknown_component_is_rejected() {
        let raw = r#"{ "component": "Slider", "field": "x", "label": "X" }"#;
        assert!(serde_json::from_str::<FormFieldConfig>(raw).is_err());
    }
}
