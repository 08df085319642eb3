use clap::Parser;
use pythonpro_pages::config::cli::Command;
use pythonpro_pages::utils::error::ErrorSeverity;
use pythonpro_pages::utils::{logger, validation::Validate};
use pythonpro_pages::{
    build_page_service, catalog, CliConfig, PageKind, PageRequest, PageResponse, Route,
};
use std::collections::HashMap;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting pages CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.load_site_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let request = match &cli.command {
        Command::Lessons => {
            for video in catalog() {
                println!("{}\t{}\t{}", video.number, video.id, video.title);
            }
            return Ok(());
        }
        Command::Routes => {
            for page in PageKind::ALL {
                println!("{}\t{}", Route::Page(page).path(), page.template_name());
            }
            return Ok(());
        }
        Command::Get {
            path,
            query,
            identity,
        } => identity.apply(
            PageRequest::get(path).with_query(query.iter().cloned().collect::<HashMap<_, _>>()),
        ),
        Command::Post {
            path,
            fields,
            identity,
        } => identity.apply(PageRequest::post(
            path,
            fields.iter().cloned().collect::<HashMap<_, _>>(),
        )),
    };

    let service = build_page_service(&config)?;

    match service.handle(request).await {
        Ok(response) => {
            println!("HTTP {}", response.status());
            match response {
                PageResponse::Rendered { template, body, .. } => {
                    tracing::debug!("Rendered template {}", template);
                    println!("{}", body);
                }
                PageResponse::Redirect { location } => println!("Location: {}", location),
                PageResponse::NotFound { path } => {
                    tracing::debug!("Not found: {}", path);
                }
                PageResponse::MethodNotAllowed => {}
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
