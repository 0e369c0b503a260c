//! MyMemory 翻译上游
//!
//! `GET <api_url>?q=<text>&langpair=<source>|<target>`，译文位于
//! `responseData.translatedText`。

use serde::Deserialize;

use crate::web::config::TranslationUpstream;
use crate::web::error::RelayError;

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<MyMemoryData>,
}

#[derive(Debug, Deserialize)]
struct MyMemoryData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl TranslationUpstream {
    /// 语言对参数
    pub fn langpair(&self, target_lang: &str) -> String {
        format!("{}|{}", self.source_lang, target_lang)
    }

    /// 请求上游翻译
    ///
    /// 不设置超时，不重试，不缓存。
    pub async fn translate(
        &self,
        http: &reqwest::Client,
        text: &str,
        target_lang: &str,
    ) -> Result<String, RelayError> {
        let langpair = self.langpair(target_lang);
        tracing::debug!("请求上游翻译: {} ({} 字符)", langpair, text.len());

        let response = http
            .get(&self.api_url)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("翻译上游请求失败: {}", e);
                RelayError::Transport {
                    message: "Translation failed due to server error.",
                    source: e,
                }
            })?;

        let status = response.status();
        tracing::debug!("翻译上游响应状态: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("翻译上游返回错误 {}: {}", status, body);
            return Err(RelayError::upstream("Translation", status));
        }

        let unexpected = RelayError::UnexpectedFormat("Unexpected translation response format.");
        let data: MyMemoryResponse = match response.json().await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("无法解析翻译上游响应: {}", e);
                return Err(unexpected);
            }
        };

        match data
            .response_data
            .and_then(|data| data.translated_text)
            .filter(|text| !text.is_empty())
        {
            Some(translated) => Ok(translated),
            None => {
                tracing::error!("翻译上游响应缺少 responseData.translatedText");
                Err(unexpected)
            }
        }
    }
}
