//! 终端辅导程序入口

use std::sync::Arc;

use clap::Parser;
use tokio::io::BufReader;

use englishmate::env::{core, tutor, EnvVar};
use englishmate::utils::logging;
use englishmate::{RelayClient, SessionConfig, TutorSession};

/// EnglishMate terminal tutor: bilingual scenarios, grammar, vocabulary and chat
#[derive(Parser, Debug)]
#[command(name = "englishmate", version, about)]
struct Cli {
    /// Server base URL [env: ENGLISHMATE_SERVER_URL, default: http://127.0.0.1:3000]
    #[arg(short, long)]
    server: Option<String>,

    /// Target language code [env: ENGLISHMATE_TARGET_LANG, default: bn]
    #[arg(short = 'l', long)]
    target_lang: Option<String>,

    /// Maximum in-flight translation requests per batch [env: ENGLISHMATE_MAX_CONCURRENT_TRANSLATIONS]
    #[arg(short = 'c', long)]
    max_concurrency: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // 终端模式默认只输出警告，避免干扰交互内容
    let level = match std::env::var(core::LogLevel::NAME) {
        Ok(value) => core::LogLevel::parse(&value)?,
        Err(_) => "warn".to_string(),
    };
    logging::init(&level);

    let server = match cli.server {
        Some(server) => tutor::ServerUrl::parse(&server)?,
        None => tutor::ServerUrl::get()?,
    };
    let target_lang = match cli.target_lang {
        Some(lang) => tutor::TargetLang::parse(&lang)?,
        None => tutor::TargetLang::get()?,
    };
    let max_concurrency = match cli.max_concurrency {
        Some(limit) => Some(tutor::MaxConcurrentTranslations::parse(&limit.to_string())?),
        None => tutor::MaxConcurrentTranslations::get_optional()?,
    };

    tracing::info!("连接服务器: {} (目标语言: {})", server, target_lang);

    let client = Arc::new(RelayClient::new(server));
    let mut session = TutorSession::new(
        client.clone(),
        client,
        SessionConfig {
            target_lang,
            max_concurrency,
        },
    );

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    englishmate::cli::run(&mut session, stdin, &mut stdout).await?;

    Ok(())
}
