//! Web 模块的数据类型定义

use serde::{Deserialize, Serialize};

use crate::web::config::{GenerationUpstream, TranslationUpstream, WebConfig};

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    /// 所有上游请求共用的 HTTP 客户端
    pub http: reqwest::Client,
    pub translation: TranslationUpstream,
    pub generation: GenerationUpstream,
}

impl AppState {
    pub fn new(config: &WebConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            translation: config.translation.clone(),
            generation: config.generation.clone(),
        }
    }
}

/// 翻译请求
///
/// 字段都是可选的，缺失时由处理器返回 400 而不是由提取器拒绝。
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: Option<String>,
    #[serde(rename = "targetLang")]
    pub target_lang: Option<String>,
}

/// 翻译响应
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// 生成请求
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: Option<String>,
}

/// 生成响应
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub text: String,
}
