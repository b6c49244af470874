use super::position;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::ClickResponse;
use log::info;

/// `POST /api/ads/{id}/click`: records one click and returns the new count.
pub async fn process(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let clicks = increment_click(&state, &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ClickResponse { clicks }))
}

pub async fn increment_click(state: &AppState, id: &str) -> Result<u64, ApiError> {
    let _guard = state.write_gate.lock().await;
    let mut ads = state.store.read_all()?;
    let index = position(&ads, id)?;
    ads[index].clicks = ads[index].clicks.saturating_add(1);
    let clicks = ads[index].clicks;
    state.store.write_all(&ads)?;

    info!("Ad {} clicked, {} clicks", id, clicks);
    Ok(clicks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ads::list::list_ads;
    use crate::state::test_support::{sample_ad, temp_state};
    use std::sync::Arc;

    #[actix_web::test]
    async fn three_clicks_count_three() {
        let (_dir, state) = temp_state(1024);
        state.store.write_all(&[sample_ad("a", 1.0, 0)]).unwrap();

        for _ in 0..3 {
            increment_click(&state, "a").await.unwrap();
        }
        assert_eq!(state.store.read_all().unwrap()[0].clicks, 3);
    }

    #[actix_web::test]
    async fn clicks_never_move_an_ad_backwards() {
        let (_dir, state) = temp_state(1024);
        state
            .store
            .write_all(&[sample_ad("a", 10.0, 0), sample_ad("b", 6.0, 0), sample_ad("c", 3.0, 0)])
            .unwrap();

        let mut last = 2;
        for _ in 0..10 {
            increment_click(&state, "c").await.unwrap();
            let ranked = list_ads(&state).await.unwrap();
            let now = ranked.iter().position(|ad| ad.id == "c").unwrap();
            assert!(now <= last);
            last = now;
        }
        assert_eq!(last, 0);
    }

    #[actix_web::test]
    async fn concurrent_clicks_are_not_lost() {
        let (_dir, state) = temp_state(1024);
        state.store.write_all(&[sample_ad("a", 1.0, 0)]).unwrap();
        let state = Arc::new(state);

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let state = Arc::clone(&state);
                actix_web::rt::spawn(async move { increment_click(&state, "a").await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(state.store.read_all().unwrap()[0].clicks, 16);
    }

    #[actix_web::test]
    async fn unknown_id_is_not_found() {
        let (_dir, state) = temp_state(1024);
        let err = increment_click(&state, "ghost").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
