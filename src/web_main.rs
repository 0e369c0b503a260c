//! Web 服务器主程序入口

use clap::Parser;

use englishmate::env::{core, EnvVar};
use englishmate::utils::logging;
use englishmate::web::{WebConfig, WebServer};

/// EnglishMate web server: translation and generation relays plus the landing page
#[derive(Parser, Debug)]
#[command(name = "englishmate-web", version, about)]
struct Args {
    /// Bind address [env: ENGLISHMATE_WEB_BIND_ADDRESS, default: 127.0.0.1]
    #[arg(short, long)]
    bind: Option<String>,

    /// Port number [env: ENGLISHMATE_WEB_PORT, default: 3000]
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory holding landing.html [env: ENGLISHMATE_WEB_STATIC_DIR, default: static]
    #[arg(short, long)]
    static_dir: Option<String>,

    /// Print the environment variable reference and exit
    #[arg(long)]
    env_docs: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    if args.env_docs {
        print!("{}", englishmate::env::generate_env_docs());
        return Ok(());
    }

    logging::init(&core::LogLevel::get()?);

    // 命令行参数优先于环境变量
    let mut config = WebConfig::from_env()?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(static_dir) = args.static_dir {
        config.static_dir = if static_dir.is_empty() {
            None
        } else {
            Some(static_dir)
        };
    }
    config.validate()?;

    let server = WebServer::new(config);
    server.start().await?;

    Ok(())
}
