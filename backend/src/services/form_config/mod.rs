//! # Form Config Provider
//!
//! Serves the ordered list of inputs the client renders the ad form from.
//! The same list drives server-side validation in the ad service, so the
//! two sides can never disagree on what a valid ad looks like.

use crate::services::fallback;
use actix_web::web::{get, resource, route};
use actix_web::{HttpResponse, Resource};
use common::model::form_config::{
    FormFieldConfig, InputNumberProps, InputProps, TextAreaProps, UploadProps, ValidationRule,
};

const API_PATH: &str = "/api/form-config";

pub fn configure_routes() -> Resource {
    resource(API_PATH)
        .route(get().to(process))
        .default_service(route().to(fallback::not_found))
}

async fn process() -> HttpResponse {
    HttpResponse::Ok().json(ad_form_config())
}

fn required(label: &str) -> ValidationRule {
    ValidationRule::Required {
        message: format!("{} is required", label),
    }
}

fn max_length(label: &str, max: usize) -> ValidationRule {
    ValidationRule::MaxLength {
        max,
        message: format!("{} must be at most {} characters", label, max),
    }
}

/// The ad form, in display order.
pub fn ad_form_config() -> Vec<FormFieldConfig> {
    vec![
        FormFieldConfig::Input {
            field: "title".to_string(),
            label: "Title".to_string(),
            props: InputProps {
                placeholder: Some("Ad title".to_string()),
            },
            rules: vec![required("Title"), max_length("Title", 100)],
        },
        FormFieldConfig::Input {
            field: "publisher".to_string(),
            label: "Publisher".to_string(),
            props: InputProps {
                placeholder: Some("Who is publishing this ad".to_string()),
            },
            rules: vec![required("Publisher"), max_length("Publisher", 50)],
        },
        FormFieldConfig::TextArea {
            field: "content".to_string(),
            label: "Content".to_string(),
            props: TextAreaProps { rows: 4 },
            rules: vec![required("Content"), max_length("Content", 500)],
        },
        FormFieldConfig::Input {
            field: "landingUrl".to_string(),
            label: "Landing page".to_string(),
            props: InputProps {
                placeholder: Some("https://".to_string()),
            },
            rules: vec![
                required("Landing page"),
                ValidationRule::Url {
                    message: "Landing page must be a valid URL".to_string(),
                },
            ],
        },
        FormFieldConfig::InputNumber {
            field: "price".to_string(),
            label: "Bid price".to_string(),
            props: InputNumberProps {
                min: Some(0.0),
                step: Some(0.01),
            },
            rules: vec![
                required("Bid price"),
                ValidationRule::NonNegative {
                    message: "Bid price must be a number greater than or equal to 0".to_string(),
                },
            ],
        },
        FormFieldConfig::Upload {
            field: "videos".to_string(),
            label: "Videos".to_string(),
            props: UploadProps {
                multiple: true,
                accept: "video/*".to_string(),
            },
            rules: Vec::new(),
        },
    ]
}
