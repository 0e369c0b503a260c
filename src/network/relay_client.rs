//! 中继 HTTP 客户端
//!
//! 为辅导会话实现 `Generator` 和 `Translator`，分别请求服务器的
//! `POST /api/cohere` 与 `POST /api/translate`。

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};

use crate::tutor::{Generator, Translator, TutorError, TutorResult};

/// 中继客户端
#[derive(Debug, Clone)]
pub struct RelayClient {
    base_url: String,
    http: reqwest::Client,
}

impl RelayClient {
    /// 使用默认 HTTP 客户端创建
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// 使用指定的 HTTP 客户端创建
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 发送 JSON 请求并返回 JSON 响应
    ///
    /// 响应中带有 `error` 字段或状态码非 2xx 时返回 `TutorError::Api`。
    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> TutorResult<Value> {
        let url = self.endpoint(path);
        tracing::debug!("POST {}", url);

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let value = match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) => value,
            Err(e) if status.is_success() => return Err(e.into()),
            Err(_) => Value::Null,
        };

        if let Some(message) = value.get("error").and_then(Value::as_str) {
            return Err(TutorError::Api {
                status: status.as_u16(),
                message: message.to_string(),
            });
        }

        if !status.is_success() {
            return Err(TutorError::Api {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(value)
    }
}

fn string_field(value: &Value, field: &str) -> TutorResult<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| TutorError::Decode(format!("missing `{}` in response", field)))
}

#[async_trait]
impl Generator for RelayClient {
    async fn generate(&self, prompt: &str) -> TutorResult<String> {
        let value = self
            .post_json("/api/cohere", &json!({ "prompt": prompt }))
            .await?;
        string_field(&value, "text")
    }
}

#[async_trait]
impl Translator for RelayClient {
    async fn translate(&self, text: &str, target_lang: &str) -> TutorResult<String> {
        let value = self
            .post_json(
                "/api/translate",
                &json!({ "text": text, "targetLang": target_lang }),
            )
            .await?;
        string_field(&value, "translatedText")
    }
}
