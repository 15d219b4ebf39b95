use anyhow::Context;
use clap::Parser;
use comments_viewer::utils::{logger, validation::Validate};
use comments_viewer::{CliConfig, FetchStatus, HttpCommentSource, Session, ViewerConfig};

fn resolve_config(cli: &CliConfig) -> comments_viewer::Result<ViewerConfig> {
    let config = cli.resolve()?;
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting comments-viewer");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 解析並驗證配置
    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let format = config.format;
    let criteria = config.criteria.clone();
    tracing::info!("📡 Comments endpoint: {}", config.endpoint);

    let mut session = Session::new(HttpCommentSource::new(config), criteria);

    // 展開狀態與資料無關，可在載入前套用
    for domain in &cli.expand_domains {
        session.toggle_domain(&domain.to_lowercase());
    }
    for id in &cli.expand_comments {
        session.toggle_comment(*id);
    }

    let status = session.start().await;

    if cli.list_domains {
        println!("{}", session.domains().join("\n"));
    } else {
        let output = session.render(format).context("failed to render comments")?;
        println!("{}", output);
    }

    if cli.interactive {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        session
            .run_interactive(stdin, &mut stdout, format)
            .await
            .context("interactive session failed")?;
        return Ok(());
    }

    if status == FetchStatus::Failed {
        if let Some(error) = session.store().error() {
            tracing::error!("❌ Could not load comments: {}", error);
        }
        std::process::exit(2);
    }

    Ok(())
}
