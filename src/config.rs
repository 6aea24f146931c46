use crate::error::{Result, ScreenError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// 読めない履歴書があったときの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnreadablePolicy {
    /// 最初の失敗で全体を中断する
    #[default]
    FailFast,
    /// 警告を出してそのファイルを飛ばす
    Skip,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: String,
    pub endpoint: String,
    pub credential_file: Option<PathBuf>,
    pub credential_key: String,
    pub timeout_seconds: Option<u64>,
    pub unreadable_policy: UnreadablePolicy,
    pub highlight_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "gpt-4".into(),
            endpoint: "https://api.openai.com/v1/chat/completions".into(),
            credential_file: None,
            credential_key: "auto_project".into(),
            timeout_seconds: None,
            unreadable_policy: UnreadablePolicy::FailFast,
            highlight_color: "FFFF00".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ScreenError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("resume-screen"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// APIキーファイルの場所（未設定なら設定ディレクトリ内の api_key.json）
    pub fn credential_path(&self) -> Result<PathBuf> {
        match &self.credential_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("api_key.json")),
        }
    }

    /// ハイライト色を RGB 値に変換
    pub fn highlight_rgb(&self) -> Result<u32> {
        let hex = self.highlight_color.trim().trim_start_matches('#');
        if hex.len() != 6 {
            return Err(ScreenError::Config(format!(
                "ハイライト色は6桁の16進数で指定してください: {}",
                self.highlight_color
            )));
        }
        u32::from_str_radix(hex, 16).map_err(|_| {
            ScreenError::Config(format!("ハイライト色が不正です: {}", self.highlight_color))
        })
    }
}

/// モデルAPIの認証情報
///
/// 起動時に一度だけ読み込み、以後は変更しない
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value.trim().to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// 環境変数 OPENAI_API_KEY を優先し、なければキーファイルから読む
    pub fn resolve(config: &Config) -> Result<Self> {
        if let Some(credential) = std::env::var("OPENAI_API_KEY").ok().and_then(Self::new) {
            return Ok(credential);
        }

        let path = config.credential_path()?;
        Self::from_file(&path, &config.credential_key)
    }

    /// JSONオブジェクトの `key` にある文字列を読む
    pub fn from_file(path: &Path, key: &str) -> Result<Self> {
        let missing = |reason: String| ScreenError::MissingCredential {
            path: path.display().to_string(),
            reason,
        };

        let content = std::fs::read_to_string(path).map_err(|e| missing(e.to_string()))?;
        let data: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| missing(e.to_string()))?;

        data.get(key)
            .and_then(|v| v.as_str())
            .and_then(Self::new)
            .ok_or_else(|| missing(format!("キー \"{}\" に値がありません", key)))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
