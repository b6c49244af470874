use super::position;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use log::info;

/// `DELETE /api/ads/{id}`: `204 No Content`, or `404` when the id is unknown.
pub async fn process(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    delete_ad(&state, &path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

// Uploaded videos stay on disk; other ads may still reference them.
pub async fn delete_ad(state: &AppState, id: &str) -> Result<(), ApiError> {
    let _guard = state.write_gate.lock().await;
    let mut ads = state.store.read_all()?;
    let index = position(&ads, id)?;
    ads.remove(index);
    state.store.write_all(&ads)?;

    info!("Deleted ad {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::{sample_ad, temp_state};

    #[actix_web::test]
    async fn removes_exactly_one() {
        let (_dir, state) = temp_state(1024);
        state
            .store
            .write_all(&[sample_ad("a", 1.0, 0), sample_ad("b", 2.0, 0), sample_ad("c", 3.0, 0)])
            .unwrap();

        delete_ad(&state, "b").await.unwrap();

        let ids: Vec<String> = state.store.read_all().unwrap().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[actix_web::test]
    async fn second_delete_is_not_found() {
        let (_dir, state) = temp_state(1024);
        state.store.write_all(&[sample_ad("a", 1.0, 0)]).unwrap();

        delete_ad(&state, "a").await.unwrap();
        let err = delete_ad(&state, "a").await.unwrap_err();

        assert!(matches!(err, ApiError::NotFound(_)));
        assert!(state.store.read_all().unwrap().is_empty());
    }
}
