use alsref_fileref::{CodecOptions, Variant};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub codec: CodecOptions,

    #[serde(default)]
    pub fileref: FileRefConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileRefConfig {
    /// Record layout used when the caller does not name one
    #[serde(default = "default_variant")]
    pub variant: Variant,

    /// Refuse to rewrite references that point at another volume instead of
    /// moving them onto the project volume
    #[serde(default)]
    pub keep_external: bool,
}

fn default_variant() -> Variant {
    Variant::Format
}

impl Default for FileRefConfig {
    fn default() -> Self {
        Self {
            variant: default_variant(),
            keep_external: false,
        }
    }
}
