use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

/// True when the document holds nothing but whitespace and comments.
fn is_blank_document(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#') || line == "---")
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    /// A blank document is read as an empty mapping, so an emptied-out file
    /// behaves like one with every key left at its default.
    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        let content = if is_blank_document(content) { "{}" } else { content };
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Sample {
        enabled: bool,
        name: Option<String>,
    }

    #[test]
    fn test_blank_and_comment_only_documents_use_defaults() {
        let serializer = YamlConfigSerializer::new();
        for content in ["", "\n  \n", "# nothing here\n", "---\n# still nothing\n"] {
            let sample: Sample = serializer.deserialize(content).unwrap();
            assert_eq!(sample, Sample::default(), "content {:?}", content);
        }
    }

    #[test]
    fn test_serialized_form_reads_back() {
        let serializer = YamlConfigSerializer::new();
        let sample = Sample {
            enabled: true,
            name: Some("console".to_string()),
        };
        let text = serializer.serialize(&sample).unwrap();
        assert!(text.contains("enabled: true"));
        let back: Sample = serializer.deserialize(&text).unwrap();
        assert_eq!(back, sample);
    }

    #[test]
    fn test_type_mismatch_is_reported() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Sample, String> = serializer.deserialize("enabled: maybe\n");
        let err = result.unwrap_err();
        assert!(err.starts_with("Failed to deserialize config"), "{}", err);
    }
}
