//! 翻译中继处理器

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::web::error::RelayError;
use crate::web::types::{AppState, TranslateRequest, TranslateResponse};

const MISSING_PARAMETERS: &str = "Missing parameters: text and targetLang are required.";

/// 翻译中继：`POST /api/translate`
pub async fn translate_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, RelayError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("翻译请求体无效: {}", rejection);
        RelayError::MissingParameters(MISSING_PARAMETERS)
    })?;

    let text = request.text.filter(|text| !text.is_empty());
    let target_lang = request.target_lang.filter(|lang| !lang.is_empty());
    let (text, target_lang) = match (text, target_lang) {
        (Some(text), Some(target_lang)) => (text, target_lang),
        (text, target_lang) => {
            tracing::warn!(
                "缺少参数: text={}, targetLang={}",
                text.is_some(),
                target_lang.is_some()
            );
            return Err(RelayError::MissingParameters(MISSING_PARAMETERS));
        }
    };

    tracing::info!("翻译请求: {} 字符 -> {}", text.chars().count(), target_lang);

    let translated_text = state
        .translation
        .translate(&state.http, &text, &target_lang)
        .await?;

    Ok(Json(TranslateResponse { translated_text }))
}
