//! Cohere 文本生成上游
//!
//! `POST <api_url>`，请求体 `{ model, message }`，生成文本位于响应顶层的 `text`。

use serde::Deserialize;
use serde_json::json;

use crate::web::config::GenerationUpstream;
use crate::web::error::RelayError;

#[derive(Debug, Deserialize)]
struct CohereChatResponse {
    text: Option<String>,
}

impl GenerationUpstream {
    /// 请求上游生成文本
    pub async fn generate(&self, http: &reqwest::Client, prompt: &str) -> Result<String, RelayError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            tracing::error!("未配置 COHERE_API_KEY");
            RelayError::NotConfigured("Generation service is not configured.")
        })?;

        tracing::debug!("请求上游生成: model={} ({} 字符)", self.model, prompt.len());

        let response = http
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&json!({ "model": self.model, "message": prompt }))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("生成上游请求失败: {}", e);
                RelayError::Transport {
                    message: "Generation failed due to server error.",
                    source: e,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("生成上游返回错误 {}: {}", status, body);
            return Err(RelayError::upstream("Generation", status));
        }

        let unexpected = RelayError::UnexpectedFormat("Unexpected generation response format.");
        let data: CohereChatResponse = match response.json().await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("无法解析生成上游响应: {}", e);
                return Err(unexpected);
            }
        };

        data.text.ok_or_else(|| {
            tracing::error!("生成上游响应缺少 text 字段");
            unexpected
        })
    }
}
