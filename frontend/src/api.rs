//! Thin client for the backend HTTP API.
//!
//! Every call resolves to `Result<T, ErrorResponse>`: non-2xx answers are decoded
//! from the JSON error body, transport failures are wrapped into the same type
//! so callers only deal with one error shape.

use common::model::ad::Ad;
use common::model::form_config::FormFieldConfig;
use common::requests::{ClickResponse, ErrorResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::FormData;

pub async fn fetch_ads() -> Result<Vec<Ad>, ErrorResponse> {
    let response = Request::get("/api/ads").send().await.map_err(transport)?;
    decode(response).await
}

pub async fn fetch_form_config() -> Result<Vec<FormFieldConfig>, ErrorResponse> {
    let response = Request::get("/api/form-config").send().await.map_err(transport)?;
    decode(response).await
}

pub async fn create_ad(form: FormData) -> Result<Ad, ErrorResponse> {
    let response = Request::post("/api/ads")
        .body(form)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    decode(response).await
}

pub async fn update_ad(id: &str, form: FormData) -> Result<Ad, ErrorResponse> {
    let response = Request::put(&format!("/api/ads/{}", id))
        .body(form)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    decode(response).await
}

pub async fn delete_ad(id: &str) -> Result<(), ErrorResponse> {
    let response = Request::delete(&format!("/api/ads/{}", id))
        .send()
        .await
        .map_err(transport)?;
    if response.ok() {
        Ok(())
    } else {
        Err(error_body(response).await)
    }
}

pub async fn record_click(id: &str) -> Result<u64, ErrorResponse> {
    let response = Request::post(&format!("/api/ads/{}/click", id))
        .send()
        .await
        .map_err(transport)?;
    let body: ClickResponse = decode(response).await?;
    Ok(body.clicks)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ErrorResponse> {
    if !response.ok() {
        return Err(error_body(response).await);
    }
    response.json::<T>().await.map_err(transport)
}

async fn error_body(response: Response) -> ErrorResponse {
    let status = response.status();
    response
        .json::<ErrorResponse>()
        .await
        .unwrap_or_else(|_| ErrorResponse::new(format!("Request failed with status {}", status)))
}

fn transport(e: gloo_net::Error) -> ErrorResponse {
    ErrorResponse::new(e.to_string())
}
