use clap::Parser;
use memoq_client::config::cli::Command;
use memoq_client::utils::export::{render, OutputFormat};
use memoq_client::utils::{logger, validation::Validate};
use memoq_client::{CliConfig, MemoQServer, ResourceType, ServiceFamily};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: CliConfig) -> anyhow::Result<()> {
    let format: OutputFormat = cli.format.parse()?;
    let config = cli.client_config()?;
    config.validate()?;

    let server = MemoQServer::from_config(&config)?;
    tracing::info!("Using memoQ server at {}", server.base_url());

    let records = match cli.command {
        Command::Info => {
            println!("{}", server.description().await?);
            return Ok(());
        }
        Command::Operations { family } => {
            let family: ServiceFamily = family.parse()?;
            let proxy = server.endpoint(family).await?;
            for operation in proxy.operations() {
                println!("{}", operation);
            }
            return Ok(());
        }
        Command::Projects { all, active, closed } => {
            if all {
                server.all_projects().await?.to_vec()
            } else if active {
                server.active_projects().await?
            } else if closed {
                server.closed_projects().await?
            } else {
                server.projects().await?
            }
        }
        Command::Users => server.users().await?,
        Command::Groups => server.groups().await?,
        Command::Corpora => server.corpora().await?,
        Command::Tbs => server.tbs().await?,
        Command::Tms => server.tms().await?,
        Command::Resources { resource_type } => {
            let resource_type: ResourceType = resource_type.parse()?;
            server
                .light_resources()
                .await?
                .get_type(resource_type)
                .await?
        }
    };

    tracing::info!("📋 {} records", records.len());
    println!("{}", render(&records, format)?);
    Ok(())
}
