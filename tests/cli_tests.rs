//! CLI 命令测试
//!
//! 命令在临时数据目录上运行，结果通过重新加载存储验证

#![cfg(feature = "cli")]

use minilinker::cli::{Cli, Commands, ConfigCommands};
use minilinker::config::{AppConfig, StorageBackend};
use minilinker::interfaces::cli::{CliError, load_service, run_cli_command};
use tempfile::TempDir;

use clap::Parser;

fn file_config(dir: &TempDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.storage.backend = StorageBackend::File;
    config.storage.data_dir = dir.path().display().to_string();
    config.ui.open_on_visit = false;
    config
}

#[tokio::test]
async fn test_add_list_visit_flow() {
    let dir = TempDir::new().unwrap();
    let config = file_config(&dir);

    run_cli_command(
        Commands::Add {
            url: "https://a.example.com".to_string(),
        },
        &config,
    )
    .await
    .unwrap();
    run_cli_command(
        Commands::Add {
            url: "https://b.example.com".to_string(),
        },
        &config,
    )
    .await
    .unwrap();
    run_cli_command(Commands::List { json: true }, &config)
        .await
        .unwrap();

    // 位置从 1 开始：2 是较早添加的那条
    run_cli_command(
        Commands::Visit {
            index: 2,
            no_open: true,
        },
        &config,
    )
    .await
    .unwrap();

    let service = load_service(&config).await.unwrap();
    assert_eq!(service.len(), 2);
    assert_eq!(service.links()[0].original, "https://b.example.com");
    assert_eq!(service.links()[0].clicks, 0);
    assert_eq!(service.links()[1].original, "https://a.example.com");
    assert_eq!(service.links()[1].clicks, 1);
    assert!(dir.path().join("shortUrls.json").exists());
}

#[tokio::test]
async fn test_add_invalid_url_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let config = file_config(&dir);

    let err = run_cli_command(
        Commands::Add {
            url: "example.com".to_string(),
        },
        &config,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CliError::ParseError(_)));
    assert!(load_service(&config).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_visit_out_of_range() {
    let dir = TempDir::new().unwrap();
    let config = file_config(&dir);

    let err = run_cli_command(
        Commands::Visit {
            index: 1,
            no_open: true,
        },
        &config,
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("No link at position 1"));
}

#[tokio::test]
async fn test_config_generate_force() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "old").unwrap();

    run_cli_command(
        Commands::Config {
            action: ConfigCommands::Generate {
                output_path: Some(path.clone()),
                force: true,
            },
        },
        &AppConfig::default(),
    )
    .await
    .unwrap();

    assert_eq!(AppConfig::from_file(&path).unwrap(), AppConfig::default());
}

#[test]
fn test_parse_add() {
    let cli = Cli::try_parse_from(["minilinker", "add", "https://example.com"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Add {
            url: "https://example.com".to_string()
        })
    );
}

#[test]
fn test_parse_config_generate() {
    let cli = Cli::try_parse_from(["minilinker", "config", "generate", "--force"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Config {
            action: ConfigCommands::Generate {
                output_path: None,
                force: true
            }
        })
    );
}
