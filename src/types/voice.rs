//! Text-to-voice (voice design) payloads.

use serde::{Deserialize, Serialize};

/// Body of `POST /text-to-voice`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextToVoiceRequest {
    /// Sample text the generated voices read.
    pub text: String,
    /// Free-form description of the voice to generate.
    pub voice_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextToVoiceResult {
    /// URLs of the generated voice previews.
    #[serde(default)]
    pub previews: Vec<String>,
}
