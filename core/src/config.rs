use serde::{Deserialize, Serialize};

/// Header names of the six columns the analysis reads.
///
/// The only configurable part of the input layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub draft_order: String,
    pub sim: String,
    pub player: String,
    pub total_score: String,
    pub leader: String,
    pub lore: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            draft_order: "draftOrder".into(),
            sim: "sim".into(),
            player: "player".into(),
            total_score: "totalScore".into(),
            leader: "leader".into(),
            lore: "lore".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub columns: ColumnNames,
}

impl ReportConfig {
    /// Load from a JSON file of the form `{"columns": {"total_score": "score", ...}}`.
    /// Missing keys keep their defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: ReportConfig = serde_json::from_str(&content)?;
        log::debug!("config: loaded column names from {path}");
        Ok(config)
    }

    pub fn default_test() -> Self {
        Self::default()
    }
}
