//! 文本生成中继处理器

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::web::error::RelayError;
use crate::web::types::{AppState, GenerateRequest, GenerateResponse};

const MISSING_PROMPT: &str = "Missing parameter: prompt is required.";

/// 生成中继：`POST /api/cohere`
pub async fn generate_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, RelayError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("生成请求体无效: {}", rejection);
        RelayError::MissingParameters(MISSING_PROMPT)
    })?;

    let prompt = match request.prompt.filter(|prompt| !prompt.is_empty()) {
        Some(prompt) => prompt,
        None => {
            tracing::warn!("缺少参数: prompt");
            return Err(RelayError::MissingParameters(MISSING_PROMPT));
        }
    };

    tracing::info!("生成请求: {} 字符", prompt.chars().count());

    let text = state.generation.generate(&state.http, &prompt).await?;
    Ok(Json(GenerateResponse { text }))
}
