use clap::Parser;
use resume_screen::{analyzer, cli, config, error, logging, pipeline};
use analyzer::{Analyzer, OpenAiClient};
use cli::{Cli, Commands};
use config::{Config, Credential, UnreadablePolicy};
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Run { folder, output, demands, credentials, credential_key, model, skip_unreadable } => {
            println!("📄 resume-screen - 履歴書スクリーニング\n");

            let mut config = config;
            if credentials.is_some() {
                config.credential_file = credentials;
            }
            if let Some(key) = credential_key {
                config.credential_key = key;
            }
            if let Some(model) = model {
                config.model = model;
            }
            if skip_unreadable {
                config.unreadable_policy = UnreadablePolicy::Skip;
            }

            // APIキーがなければ何もせず終了
            let credential = Credential::resolve(&config)?;
            println!("✔ APIキーを読み込みました\n");

            let client = OpenAiClient::new(&config, credential)?;
            let analyzer = Analyzer::new(client);

            let options = pipeline::RunOptions {
                output: output.unwrap_or_else(|| cli::default_output(&folder)),
                folder,
                demands,
                unreadable_policy: config.unreadable_policy,
                highlight_rgb: config.highlight_rgb()?,
            };

            let summary = pipeline::run(&analyzer, &options).await?;

            if !summary.processed.skipped.is_empty() {
                println!("\n⚠ 読み込めずにスキップ: {}", summary.processed.skipped.join(", "));
            }
            println!(
                "\n✅ 完了: {}行 (ハイライト {}行) → {}",
                summary.export.rows_written,
                summary.export.rows_highlighted,
                options.output.display()
            );
        }

        Commands::Config { set_credential_file, set_model, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(path) = set_credential_file {
                config.credential_file = Some(path);
                changed = true;
            }
            if let Some(model) = set_model {
                config.model = model;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  モデル: {}", config.model);
                println!("  エンドポイント: {}", config.endpoint);
                println!("  APIキーファイル: {}", config.credential_path()?.display());
                println!("  キー名: {}", config.credential_key);
                println!(
                    "  タイムアウト: {}",
                    config
                        .timeout_seconds
                        .map(|s| format!("{}秒", s))
                        .unwrap_or_else(|| "なし".into())
                );
                println!("  読み込み失敗時: {:?}", config.unreadable_policy);
                println!("  ハイライト色: {}", config.highlight_color);
            }
        }
    }

    Ok(())
}
