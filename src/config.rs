use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// 探索チューニング (1ゲーム分)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchTuning {
    /// 初期難易度 (depth_choices に含まれない値は既定値に落とす)
    pub default_depth: u8,
    /// 「思考中」表示のための固定ウェイト
    pub think_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    pub version: String,
    pub chess: SearchTuning,
    pub othello: SearchTuning,
}

impl AiConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = "ai_config.json";
        let config_str = std::fs::read_to_string(config_path)?;
        let config: AiConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| Self::default())
    }

    /// キャッシュ済み設定。初回アクセス時に一度だけ読む
    pub fn get() -> &'static AiConfig {
        static CONFIG: Lazy<AiConfig> = Lazy::new(AiConfig::load_or_default);
        &CONFIG
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            version: "1.0".to_string(),
            chess: SearchTuning {
                default_depth: 3,
                think_delay_ms: 1000,
            },
            othello: SearchTuning {
                default_depth: 4,
                think_delay_ms: 500,
            },
        }
    }
}
