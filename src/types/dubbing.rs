//! End-to-end dubbing payloads.

use super::language::LanguageId;
use serde::{Deserialize, Serialize};

/// Body of `POST /end_to_end_dubbing`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DubbingRequest {
    pub video_url: String,
    pub source_language: LanguageId,
    pub target_languages: Vec<LanguageId>,
}

impl DubbingRequest {
    pub fn new(video_url: impl Into<String>, source: LanguageId, targets: Vec<LanguageId>) -> Self {
        Self {
            video_url: video_url.into(),
            source_language: source,
            target_languages: targets,
        }
    }
}

/// Output of a finished dubbing run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DubbingResult {
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub transcript: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_tolerates_missing_fields() {
        let res: DubbingResult = serde_json::from_str(r#"{"video_url": "https://cdn/x.mp4"}"#).unwrap();
        assert_eq!(res.video_url.as_deref(), Some("https://cdn/x.mp4"));
        assert!(res.audio_url.is_none());
        assert!(res.transcript.is_none());
    }
}
