use clap::Parser;
use course_recom::utils::{logger, validation::Validate};
use course_recom::{app, CliConfig, ConfigProvider, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.config.clone() {
        Some(path) => {
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load {}: {}", path, e);
                    std::process::exit(1);
                }
            };
            run(config, &cli).await
        }
        None => run(cli.clone(), &cli).await,
    }
}

async fn run<C: ConfigProvider + Validate>(config: C, cli: &CliConfig) -> anyhow::Result<()> {
    // 命令列的 --verbose / --json-logs 也適用於 TOML 設定
    logger::init_logger(
        cli.verbose || config.verbose(),
        cli.json_logs || config.json_logs(),
    );

    tracing::info!("Starting course-recom");

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    app::serve(&config).await?;
    Ok(())
}
