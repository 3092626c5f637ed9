//! Result output configuration

use serde::Deserialize;

use super::error::ValidationError;

/// How results are named when handed back to a browser or mailbox.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// File name for downloads and email attachments
    #[serde(default = "default_download_file_name")]
    pub download_file_name: String,
}

impl OutputConfig {
    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let name = &self.download_file_name;
        if name.is_empty()
            || !name.ends_with(".csv")
            || name.contains(['/', '\\', '"'])
        {
            return Err(ValidationError::InvalidDownloadFileName(name.clone()));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            download_file_name: default_download_file_name(),
        }
    }
}

fn default_download_file_name() -> String {
    "result.csv".to_string()
}
