use thiserror::Error;

/// 確認通知のデフォルト宛先（プレースホルダー）
pub const DEFAULT_CONFIRMATION_RECIPIENT: &str = "user@example.com";
/// デフォルトの待ち受けポート
pub const DEFAULT_PORT: u16 = 3000;

/// 設定エラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number: {0}")]
    InvalidPort(String),
}

/// 保存先の選択
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// プロセス終了で消える揮発ストア
    InMemory,
    /// 単一ファイルのSQLiteストア
    Sqlite { database_url: String },
}

/// 環境変数から読み込むアプリケーション設定
///
/// - DATABASE_URL: 指定されていればSQLite、なければインメモリ
/// - PORT: 待ち受けポート（デフォルト3000）
/// - CONFIRMATION_RECIPIENT: 確認通知の宛先
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub storage: StorageBackend,
    pub port: u16,
    pub confirmation_recipient: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の取得関数から設定を組み立てる
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage = match lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(database_url) => StorageBackend::Sqlite { database_url },
            None => StorageBackend::InMemory,
        };

        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port))?,
            None => DEFAULT_PORT,
        };

        let confirmation_recipient = lookup("CONFIRMATION_RECIPIENT")
            .unwrap_or_else(|| DEFAULT_CONFIRMATION_RECIPIENT.to_string());

        Ok(Self {
            storage,
            port,
            confirmation_recipient,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
