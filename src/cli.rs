use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-screen")]
#[command(about = "履歴書AI解析・候補者スクリーニング表生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 履歴書フォルダを解析してExcelを出力
    Run {
        /// 履歴書(.docx)フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 出力Excelファイル（デフォルト: 入力フォルダ/resumes.xlsx）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 採用条件（省略時は対話入力）
        #[arg(short, long)]
        demands: Option<String>,

        /// APIキーファイル（JSON）
        #[arg(long)]
        credentials: Option<PathBuf>,

        /// APIキーファイル内のキー名
        #[arg(long)]
        credential_key: Option<String>,

        /// モデル名
        #[arg(short, long)]
        model: Option<String>,

        /// 読み込めない履歴書を飛ばして続行
        #[arg(long)]
        skip_unreadable: bool,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーファイルのパスを設定
        #[arg(long)]
        set_credential_file: Option<PathBuf>,

        /// モデル名を設定
        #[arg(long)]
        set_model: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 出力先のデフォルト
pub fn default_output(folder: &std::path::Path) -> PathBuf {
    folder.join("resumes.xlsx")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_command() {
        let cli = Cli::try_parse_from([
            "resume-screen",
            "run",
            "./cvs",
            "--demands",
            "Go in Dublin",
            "--skip-unreadable",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Run { folder, demands, skip_unreadable, output, .. } => {
                assert_eq!(folder, PathBuf::from("./cvs"));
                assert_eq!(demands.as_deref(), Some("Go in Dublin"));
                assert!(skip_unreadable);
                assert!(output.is_none());
            }
            _ => panic!("Expected Run"),
        }
    }

    #[test]
    fn test_run_requires_folder() {
        assert!(Cli::try_parse_from(["resume-screen", "run"]).is_err());
    }

    #[test]
    fn test_default_output() {
        assert_eq!(
            default_output(std::path::Path::new("/tmp/cvs")),
            PathBuf::from("/tmp/cvs/resumes.xlsx")
        );
    }
}
