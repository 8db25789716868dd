use serde::{Deserialize, Serialize};

/// 輸出格式。`Signed` 重現原始測試台的 signed char 輸出。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DumpFormat {
    /// Unsigned decimal, 0-255, space-separated
    Decimal,
    /// Sign-extended decimal, -128..=127, space-separated
    Signed,
    /// Two-digit uppercase hex, space-separated
    Hex,
    /// Printable characters as-is, everything else as '.'
    Ascii,
}

impl Default for DumpFormat {
    fn default() -> Self {
        DumpFormat::Decimal
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpReport {
    pub path: String,
    pub requested: usize,
    pub bytes: Vec<u8>,
    pub truncated: bool,
    pub format: DumpFormat,
}

#[derive(Debug, Clone)]
pub struct RenderedDump {
    pub report: DumpReport,
    pub text: String,
}
