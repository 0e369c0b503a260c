//! 统一的环境变量管理系统
//!
//! 提供类型安全、可验证的环境变量管理

use std::env;
use std::fmt;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }

    /// 未设置时返回 `None`；设置了但无法解析时返回错误
    fn get_optional() -> EnvResult<Option<T>> {
        Self::parse_optional(env::var(Self::NAME).ok().as_deref())
    }

    fn parse_optional(value: Option<&str>) -> EnvResult<Option<T>> {
        value.map(Self::parse).transpose()
    }
}

/// 核心环境变量定义
pub mod core {
    use super::*;

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "ENGLISHMATE_LOG_LEVEL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("info".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            match value.trim().to_lowercase().as_str() {
                level @ ("trace" | "debug" | "info" | "warn" | "error") => Ok(level.to_string()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }
}

/// Web服务器相关环境变量
pub mod web {
    use super::*;

    /// 绑定地址
    pub struct BindAddress;
    impl EnvVar<String> for BindAddress {
        const NAME: &'static str = "ENGLISHMATE_WEB_BIND_ADDRESS";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Web server bind address";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("127.0.0.1".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            let addr = value.trim();
            if addr.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Address cannot be empty".to_string(),
                });
            }
            Ok(addr.to_string())
        }
    }

    /// 端口
    pub struct Port;
    impl EnvVar<u16> for Port {
        const NAME: &'static str = "ENGLISHMATE_WEB_PORT";
        const DEFAULT: Option<u16> = Some(3000);
        const DESCRIPTION: &'static str = "Web server port";

        fn parse(value: &str) -> EnvResult<u16> {
            let port: u16 = value.trim().parse().map_err(|_| EnvError {
                variable: Self::NAME.to_string(),
                message: "Must be a valid port number (1-65535)".to_string(),
            })?;

            if port == 0 {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Port cannot be 0".to_string(),
                });
            }

            Ok(port)
        }
    }

    /// 静态文件目录
    pub struct StaticDir;
    impl EnvVar<String> for StaticDir {
        const NAME: &'static str = "ENGLISHMATE_WEB_STATIC_DIR";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Static files directory (empty disables static files)";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("static".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            Ok(value.trim().to_string())
        }
    }
}

/// 翻译上游相关环境变量
pub mod translation {
    use super::*;

    /// 上游翻译 API 地址
    pub struct ApiUrl;
    impl EnvVar<String> for ApiUrl {
        const NAME: &'static str = "ENGLISHMATE_TRANSLATION_API_URL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Upstream translation API endpoint URL";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("https://api.mymemory.translated.net/get".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            parse_http_url(value, Self::NAME)
        }
    }

    /// 源语言
    pub struct SourceLang;
    impl EnvVar<String> for SourceLang {
        const NAME: &'static str = "ENGLISHMATE_TRANSLATION_SOURCE_LANG";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Source language of translated text (ISO 639-1 code)";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("en".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            parse_lang_code(value, Self::NAME)
        }
    }
}

/// 模型生成上游相关环境变量
pub mod generation {
    use super::*;

    /// 上游生成 API 地址
    pub struct ApiUrl;
    impl EnvVar<String> for ApiUrl {
        const NAME: &'static str = "ENGLISHMATE_GENERATION_API_URL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Upstream generation (chat) API endpoint URL";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("https://api.cohere.ai/v1/chat".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            parse_http_url(value, Self::NAME)
        }
    }

    /// 模型名称
    pub struct Model;
    impl EnvVar<String> for Model {
        const NAME: &'static str = "ENGLISHMATE_GENERATION_MODEL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Model name sent to the generation API";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("command-r".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            let model = value.trim();
            if model.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Model name cannot be empty".to_string(),
                });
            }
            Ok(model.to_string())
        }
    }

    /// API密钥
    pub struct ApiKey;
    impl EnvVar<String> for ApiKey {
        const NAME: &'static str = "COHERE_API_KEY";
        const DEFAULT: Option<String> = None; // 无默认值
        const DESCRIPTION: &'static str = "API key for the generation API";

        fn parse(value: &str) -> EnvResult<String> {
            let key = value.trim();
            if key.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "API key cannot be empty".to_string(),
                });
            }
            Ok(key.to_string())
        }
    }
}

/// 终端客户端相关环境变量
pub mod tutor {
    use super::*;

    /// 服务器地址
    pub struct ServerUrl;
    impl EnvVar<String> for ServerUrl {
        const NAME: &'static str = "ENGLISHMATE_SERVER_URL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Base URL of the EnglishMate web server";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("http://127.0.0.1:3000".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            parse_http_url(value, Self::NAME).map(|url| url.trim_end_matches('/').to_string())
        }
    }

    /// 目标语言
    pub struct TargetLang;
    impl EnvVar<String> for TargetLang {
        const NAME: &'static str = "ENGLISHMATE_TARGET_LANG";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Target language for translation (ISO 639-1 code)";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("bn".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            parse_lang_code(value, Self::NAME)
        }
    }

    /// 最大并发翻译请求数
    pub struct MaxConcurrentTranslations;
    impl EnvVar<usize> for MaxConcurrentTranslations {
        const NAME: &'static str = "ENGLISHMATE_MAX_CONCURRENT_TRANSLATIONS";
        const DEFAULT: Option<usize> = None; // 未设置表示不限制
        const DESCRIPTION: &'static str =
            "Maximum in-flight translation requests per batch (unset: unbounded)";

        fn parse(value: &str) -> EnvResult<usize> {
            parse_positive_usize(value, Self::NAME, 1, 1000)
        }
    }
}

/// 辅助函数
fn parse_http_url(value: &str, var_name: &str) -> EnvResult<String> {
    let url = value.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(EnvError {
            variable: var_name.to_string(),
            message: "URL must start with http:// or https://".to_string(),
        })
    }
}

/// 接受 `bn`、`zh-CN`、`pt-BR` 这样的代码：两位语言代码，可带两位地区后缀
fn parse_lang_code(value: &str, var_name: &str) -> EnvResult<String> {
    let is_pair = |part: &str| part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic());
    let code = value.trim();

    let normalized = match code.split_once('-') {
        None if is_pair(code) => Some(code.to_lowercase()),
        Some((lang, region)) if is_pair(lang) && is_pair(region) => Some(format!(
            "{}-{}",
            lang.to_lowercase(),
            region.to_uppercase()
        )),
        _ => None,
    };

    normalized.ok_or_else(|| EnvError {
        variable: var_name.to_string(),
        message: "Language code must be 2 letters (ISO 639-1), optionally with a region such as zh-CN"
            .to_string(),
    })
}

fn parse_positive_usize(value: &str, var_name: &str, min: usize, max: usize) -> EnvResult<usize> {
    let num: usize = value.trim().parse().map_err(|_| EnvError {
        variable: var_name.to_string(),
        message: "Must be a valid positive number".to_string(),
    })?;

    if num < min {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Value {} is below minimum {}", num, min),
        });
    }

    if num > max {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Value {} exceeds maximum {}", num, max),
        });
    }

    Ok(num)
}

/// 环境变量文档生成器
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("# Environment Variables\n\n");

    let entries: [(&str, &str); 12] = [
        (core::LogLevel::NAME, core::LogLevel::DESCRIPTION),
        (web::BindAddress::NAME, web::BindAddress::DESCRIPTION),
        (web::Port::NAME, web::Port::DESCRIPTION),
        (web::StaticDir::NAME, web::StaticDir::DESCRIPTION),
        (translation::ApiUrl::NAME, translation::ApiUrl::DESCRIPTION),
        (translation::SourceLang::NAME, translation::SourceLang::DESCRIPTION),
        (generation::ApiUrl::NAME, generation::ApiUrl::DESCRIPTION),
        (generation::Model::NAME, generation::Model::DESCRIPTION),
        (generation::ApiKey::NAME, generation::ApiKey::DESCRIPTION),
        (tutor::ServerUrl::NAME, tutor::ServerUrl::DESCRIPTION),
        (tutor::TargetLang::NAME, tutor::TargetLang::DESCRIPTION),
        (
            tutor::MaxConcurrentTranslations::NAME,
            tutor::MaxConcurrentTranslations::DESCRIPTION,
        ),
    ];

    for (name, description) in entries {
        docs.push_str(&format!("- `{}`: {}\n", name, description));
    }

    docs
}
