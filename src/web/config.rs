//! Web 服务器配置
//!
//! 使用类型安全的环境变量系统进行配置管理

use crate::env::{EnvError, EnvResult, EnvVar};

/// 上游翻译服务配置（MyMemory 接口）
#[derive(Debug, Clone)]
pub struct TranslationUpstream {
    /// 上游 API 地址
    pub api_url: String,
    /// 源语言，用于 `langpair=<source>|<target>`
    pub source_lang: String,
}

impl TranslationUpstream {
    /// 从环境变量创建配置
    pub fn from_env() -> EnvResult<Self> {
        use crate::env::translation;

        Ok(Self {
            api_url: translation::ApiUrl::get()?,
            source_lang: translation::SourceLang::get()?,
        })
    }
}

impl Default for TranslationUpstream {
    fn default() -> Self {
        Self {
            api_url: "https://api.mymemory.translated.net/get".to_string(),
            source_lang: "en".to_string(),
        }
    }
}

/// 上游生成服务配置（Cohere chat 接口）
#[derive(Debug, Clone)]
pub struct GenerationUpstream {
    /// 上游 API 地址
    pub api_url: String,
    /// 模型名称
    pub model: String,
    /// API 密钥；未配置时生成中继返回 500
    pub api_key: Option<String>,
}

impl GenerationUpstream {
    /// 从环境变量创建配置
    pub fn from_env() -> EnvResult<Self> {
        use crate::env::generation;

        Ok(Self {
            api_url: generation::ApiUrl::get()?,
            model: generation::Model::get()?,
            api_key: generation::ApiKey::get().ok(),
        })
    }
}

impl Default for GenerationUpstream {
    fn default() -> Self {
        Self {
            api_url: "https://api.cohere.ai/v1/chat".to_string(),
            model: "command-r".to_string(),
            api_key: None,
        }
    }
}

/// Web 服务器配置
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// 绑定地址
    pub bind_addr: String,
    /// 端口
    pub port: u16,
    /// 静态文件目录（落地页所在目录）
    pub static_dir: Option<String>,
    /// 翻译中继的上游
    pub translation: TranslationUpstream,
    /// 生成中继的上游
    pub generation: GenerationUpstream,
}

impl WebConfig {
    /// 从环境变量创建配置
    pub fn from_env() -> EnvResult<Self> {
        use crate::env::web;

        let static_dir_str = web::StaticDir::get()?;
        let static_dir = if static_dir_str.is_empty() {
            None
        } else {
            Some(static_dir_str)
        };

        Ok(Self {
            bind_addr: web::BindAddress::get()?,
            port: web::Port::get()?,
            static_dir,
            translation: TranslationUpstream::from_env()?,
            generation: GenerationUpstream::from_env()?,
        })
    }

    /// 验证配置
    pub fn validate(&self) -> EnvResult<()> {
        if self.bind_addr.is_empty() {
            return Err(EnvError {
                variable: "ENGLISHMATE_WEB_BIND_ADDRESS".to_string(),
                message: "Bind address cannot be empty".to_string(),
            });
        }

        if self.port == 0 {
            return Err(EnvError {
                variable: "ENGLISHMATE_WEB_PORT".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        if let Some(ref static_dir) = self.static_dir {
            let path = std::path::Path::new(static_dir);
            if !path.exists() {
                tracing::warn!("Static directory '{}' does not exist", static_dir);
            }
        }

        if self.generation.api_key.is_none() {
            tracing::warn!("COHERE_API_KEY is not set; /api/cohere will answer 500");
        }

        Ok(())
    }

    /// 获取完整的监听地址
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            tracing::warn!(
                "Failed to load web config from environment: {}. Using defaults.",
                e
            );
            Self {
                bind_addr: "127.0.0.1".to_string(),
                port: 3000,
                static_dir: Some("static".to_string()),
                translation: TranslationUpstream::default(),
                generation: GenerationUpstream::default(),
            }
        })
    }
}
