use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::model::ad::Ad;
use common::ranking::rank;

/// `GET /api/ads`: every stored ad, highest score first.
pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let ads = list_ads(&state).await?;
    Ok(HttpResponse::Ok().json(ads))
}

pub async fn list_ads(state: &AppState) -> Result<Vec<Ad>, ApiError> {
    let _guard = state.write_gate.lock().await;
    let ads = state.store.read_all()?;
    Ok(rank(&ads))
}
