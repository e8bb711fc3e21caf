use actix_web::{web, HttpResponse};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::review::{default_rating, NewReview, Reply, Review, ANONYMOUS_NAME, OWNER_AUTHOR};
use crate::store::ReviewStore;

/// The store as shared by the actix app.
pub type SharedStore = web::Data<Arc<Mutex<ReviewStore>>>;

/// Legacy reply form: the review id travels in the body. Empty or absent
/// reply text is accepted without complaint.
#[derive(Deserialize)]
pub struct ReplyRequest {
    pub review_id: String,
    #[serde(default)]
    pub reply_text: Option<String>,
}

/// RESTful reply form: the review id travels in the path, the text under
/// either the `reply` or the `reply_text` key.
#[derive(Deserialize)]
pub struct RestReplyRequest {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub reply_text: Option<String>,
}

/// GET /api/reviews - full collection in insertion order. Clients reverse
/// locally for newest-first display.
pub async fn get_reviews(store: SharedStore) -> HttpResponse {
    let store = store.lock().await;
    let reviews = store.list();
    info!("[API] Returning {} reviews", reviews.len());
    HttpResponse::Ok().json(reviews)
}

/// POST /api/reviews - create a review, substituting defaults for any
/// missing field.
pub async fn create_review(
    store: SharedStore,
    request: web::Json<NewReview>,
) -> Result<HttpResponse, ApiError> {
    let input = request.into_inner();
    let review = Review {
        id: new_review_id(),
        customer_name: input
            .customer_name
            .unwrap_or_else(|| ANONYMOUS_NAME.to_string()),
        review_text: input.review_text.unwrap_or_default(),
        date: Local::now().format("%Y-%m-%d").to_string(),
        rating: input.rating.unwrap_or_else(default_rating),
        reply: None,
    };
    info!("[API] Creating review {} from {}", review.id, review.customer_name);

    let mut store = store.lock().await;
    store.append(review.clone())?;
    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "review": review,
    })))
}

/// POST /api/reply - legacy reply attachment, id in the body.
pub async fn add_reply(
    store: SharedStore,
    request: web::Json<ReplyRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = request.into_inner();
    let mut store = store.lock().await;
    let review =
        store.attach_reply(&req.review_id, owner_reply(req.reply_text.unwrap_or_default()))?;
    info!("[API] Reply attached to review {}", review.id);
    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Reply added",
    })))
}

/// POST /api/reviews/{review_id}/reply - RESTful reply attachment. Reply
/// text is required here; both forms share the store-level semantics
/// (first match wins, attaching twice overwrites).
pub async fn add_reply_rest(
    store: SharedStore,
    path: web::Path<String>,
    request: web::Json<RestReplyRequest>,
) -> Result<HttpResponse, ApiError> {
    let review_id = path.into_inner();
    let req = request.into_inner();
    let text = req
        .reply
        .or(req.reply_text)
        .filter(|t| !t.trim().is_empty())
        .ok_or(ApiError::MissingReplyText)?;

    let mut store = store.lock().await;
    let review = store.attach_reply(&review_id, owner_reply(text))?;
    info!("[API] Reply attached to review {}", review.id);
    Ok(HttpResponse::Created().json(json!({
        "status": "success",
        "message": "Reply added",
        "review": review,
    })))
}

/// Generate a review id: literal "rev" prefix plus the first 8 hex chars of
/// a random UUID. Collisions are not checked; the probability is low enough
/// for a fixture.
pub fn new_review_id() -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("rev{}", &token[..8])
}

fn owner_reply(text: String) -> Reply {
    Reply {
        text,
        date: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        author: OWNER_AUTHOR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_review_id_shape() {
        let id = new_review_id();
        assert_eq!(id.len(), "rev".len() + 8);
        assert!(id.starts_with("rev"));
        assert!(id["rev".len()..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_review_ids_distinct() {
        // Probabilistic, not guaranteed; 1000 draws from 16 random hex
        // digits' worth of space should never collide in practice
        let ids: HashSet<String> = (0..1000).map(|_| new_review_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
