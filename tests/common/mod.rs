// 集成测试公共模块
//
// 提供脚本化的生成 / 翻译服务，以及启动本地模拟上游的工具

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use englishmate::{Generator, SessionConfig, Translator, TutorError, TutorResult, TutorSession};

/// 按提示词返回预设结果的生成服务
///
/// 同一提示词的结果依次弹出，只剩最后一个时重复返回它；未配置的提示词返回 500 错误。
#[derive(Default)]
pub struct ScriptedGenerator {
    scripts: Mutex<HashMap<String, VecDeque<TutorResult<String>>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为提示词追加一个成功结果
    pub fn reply(self, prompt: impl Into<String>, text: &str) -> Self {
        self.push(prompt.into(), Ok(text.to_string()));
        self
    }

    /// 为提示词追加一个失败结果
    pub fn fail(self, prompt: impl Into<String>) -> Self {
        self.push(
            prompt.into(),
            Err(TutorError::Api {
                status: 500,
                message: "Generation failed due to server error.".to_string(),
            }),
        );
        self
    }

    fn push(&self, prompt: String, result: TutorResult<String>) {
        self.scripts
            .lock()
            .unwrap()
            .entry(prompt)
            .or_default()
            .push_back(result);
    }

    /// 已收到的提示词（按调用顺序）
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls_for(&self, prompt: &str) -> usize {
        self.prompts().iter().filter(|p| p.as_str() == prompt).count()
    }
}

#[async_trait]
impl Generator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> TutorResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut scripts = self.scripts.lock().unwrap();
        let Some(queue) = scripts.get_mut(prompt) else {
            return Err(TutorError::Api {
                status: 500,
                message: format!("no script for prompt: {}", prompt),
            });
        };
        if queue.len() > 1 {
            queue.pop_front().unwrap()
        } else {
            queue.front().cloned().unwrap()
        }
    }
}

/// 把文本标注为 `[<lang>] <text>` 的翻译服务；包含 `FAIL` 的文本翻译失败
#[derive(Default)]
pub struct TaggingTranslator {
    calls: AtomicUsize,
}

impl TaggingTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for TaggingTranslator {
    async fn translate(&self, text: &str, target_lang: &str) -> TutorResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if text.contains("FAIL") {
            return Err(TutorError::Api {
                status: 503,
                message: "Translation API error: Service Unavailable".to_string(),
            });
        }
        Ok(format!("[{}] {}", target_lang, text))
    }
}

/// 使用脚本化服务创建会话
pub fn session_with(
    generator: Arc<ScriptedGenerator>,
    translator: Arc<TaggingTranslator>,
) -> TutorSession {
    TutorSession::new(generator, translator, SessionConfig::default())
}

#[cfg(feature = "web")]
pub use web_helpers::*;

#[cfg(feature = "web")]
mod web_helpers {
    use englishmate::web::{GenerationUpstream, TranslationUpstream, WebConfig};

    /// 在随机端口上启动一个路由器，返回其基础地址
    pub async fn spawn_server(router: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// 指向给定上游地址的服务器配置（不提供静态文件）
    pub fn relay_config(
        translation_url: &str,
        generation_url: &str,
        api_key: Option<&str>,
    ) -> WebConfig {
        WebConfig {
            bind_addr: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: None,
            translation: TranslationUpstream {
                api_url: translation_url.to_string(),
                source_lang: "en".to_string(),
            },
            generation: GenerationUpstream {
                api_url: generation_url.to_string(),
                model: "command-r".to_string(),
                api_key: api_key.map(str::to_string),
            },
        }
    }
}
