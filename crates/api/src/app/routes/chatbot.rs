use std::sync::Arc;

use axum::{extract::Extension, Json};
use chrono::Utc;

use aerosense_insights::chatbot::{self, ChatReply};

use crate::app::{dto, services::AppServices};

pub async fn respond(
    Extension(services): Extension<Arc<AppServices>>,
    body: Option<Json<dto::ChatbotRequest>>,
) -> Json<ChatReply> {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let query = request.query.unwrap_or_default();
    let user_id = request
        .user_id
        .unwrap_or_else(|| dto::DEFAULT_USER_ID.to_string());

    Json(chatbot::respond(
        services.sentiment.as_ref(),
        &services.generation,
        &query,
        &user_id,
        Utc::now(),
    ))
}
