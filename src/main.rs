//! rsfolio CLI入口
//! 在入口处显式构建配置、存储与组件实例并逐层注入，不使用全局状态

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use rsfolio::{
    build_http_client, ChatWidget, CitationWidget, ConfigManager, GlobalConfig,
    LocalStore, ThemeManager, ViewCounterWidget, WeatherWidget,
};

#[derive(Parser)]
#[command(name = "rsfolio", version, about = "个人主页动态组件引擎")]
struct Cli {
    /// 应答规则表路径
    #[arg(long)]
    rule_table: Option<PathBuf>,

    /// 本地存储路径
    #[arg(long)]
    store: Option<PathBuf>,

    /// OpenWeatherMap API密钥
    #[arg(long)]
    weather_api_key: Option<String>,

    /// 输出详细日志
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 解析并渲染全部页面组件
    Render,
    /// 向聊天组件发送一条消息并打印应答
    Chat {
        /// 消息内容（支持建议词条：publications/research/contact）
        message: String,

        /// 固定随机种子（便于复现应答）
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// 由命令行参数覆盖默认配置
fn build_config(cli: &Cli) -> GlobalConfig {
    let mut builder = ConfigManager::custom();
    if let Some(path) = &cli.rule_table {
        builder = builder.rule_table_path(path.clone());
    }
    if let Some(path) = &cli.store {
        builder = builder.store_path(path.clone());
    }
    if let Some(key) = &cli.weather_api_key {
        builder = builder.weather_api_key(key.clone());
    }
    builder.verbose(cli.verbose).build()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = build_config(&cli);
    let mut store = LocalStore::open(&config.store_path).await;
    let client = build_http_client(config.source_timeout)?;

    match &cli.command {
        Command::Render => {
            let theme = ThemeManager::load(&store);
            println!("theme     : {}", theme.display_name());

            let view_counter = ViewCounterWidget::new(client.clone(), &config);
            let visits = view_counter.resolve(&mut store).await;
            println!("views     : {}", ViewCounterWidget::render(&visits));

            let citations = CitationWidget::new(client.clone(), &config);
            let cited = citations.resolve(&mut store).await;
            println!("citations : {}", CitationWidget::render(&cited));

            let weather = WeatherWidget::new(client, &config);
            let info = weather.current().await;
            println!("weather   : {}", WeatherWidget::render(info.as_ref()));
        }
        Command::Chat { message, seed } => {
            let widget = ChatWidget::from_config(&config).await;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };

            let query = ChatWidget::chip_query(message);
            if let Some(reply) = widget.reply(query, &mut rng) {
                println!("{}", reply);
            }
        }
    }

    Ok(())
}
