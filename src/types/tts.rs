//! Text-to-speech request and response payloads.

use super::audio::AudioFormat;
use super::language::{LanguageId, StreamLanguage};
use serde::{Deserialize, Serialize};

/// Speaker gender hint, sent as the API's numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum Gender {
    NotKnown,
    Male,
    Female,
    NotApplicable,
}

impl From<Gender> for u8 {
    fn from(g: Gender) -> u8 {
        match g {
            Gender::NotKnown => 0,
            Gender::Male => 1,
            Gender::Female => 2,
            Gender::NotApplicable => 9,
        }
    }
}

impl From<u8> for Gender {
    fn from(code: u8) -> Self {
        match code {
            1 => Gender::Male,
            2 => Gender::Female,
            9 => Gender::NotApplicable,
            _ => Gender::NotKnown,
        }
    }
}

/// Body of `POST /tts`, an asynchronous synthesis job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTtsRequest {
    pub text: String,
    pub voice_id: i64,
    pub language: LanguageId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

impl CreateTtsRequest {
    pub fn new(text: impl Into<String>, voice_id: i64, language: LanguageId) -> Self {
        Self {
            text: text.into(),
            voice_id,
            language,
            gender: None,
            age: None,
        }
    }
}

/// Optional sampling controls for streaming synthesis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InferenceOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_similarity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localize_speaker_weight: Option<f64>,
}

impl InferenceOptions {
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfiguration {
    pub format: AudioFormat,
}

/// Body of `POST /tts-stream`; the audio comes back in the response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamTtsRequest {
    pub text: String,
    pub language: StreamLanguage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speech_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_configuration: Option<OutputConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inference_options: Option<InferenceOptions>,
}

impl StreamTtsRequest {
    pub fn new(text: impl Into<String>, language: StreamLanguage) -> Self {
        Self {
            text: text.into(),
            language,
            voice_id: None,
            speech_model: None,
            output_configuration: None,
            inference_options: None,
        }
    }

    pub fn voice_id(mut self, voice_id: i64) -> Self {
        self.voice_id = Some(voice_id);
        self
    }

    pub fn speech_model(mut self, model: impl Into<String>) -> Self {
        self.speech_model = Some(model.into());
        self
    }

    pub fn format(mut self, format: AudioFormat) -> Self {
        self.output_configuration = Some(OutputConfiguration { format });
        self
    }

    pub fn inference_options(mut self, options: InferenceOptions) -> Self {
        self.inference_options = Some(options);
        self
    }

    /// Requested output format, `mp3` when unset.
    pub fn output_format(&self) -> AudioFormat {
        self.output_configuration
            .map(|c| c.format)
            .unwrap_or_default()
    }
}

/// Output shape requested from `GET /tts-result/{run_id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TtsResultFormat {
    /// A downloadable file URL.
    #[default]
    FileUrl,
    /// The audio bytes in the response body.
    RawBytes,
}

impl TtsResultFormat {
    pub(crate) fn as_query(&self) -> &'static str {
        match self {
            Self::FileUrl => "file_url",
            Self::RawBytes => "raw_bytes",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TtsResultFileUrl {
    pub output_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_omits_unset_fields() {
        let req = CreateTtsRequest::new("Hello", 20303, LanguageId::EN_US);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"text": "Hello", "voice_id": 20303, "language": 1})
        );

        let mut req = req;
        req.gender = Some(Gender::Female);
        assert_eq!(serde_json::to_value(&req).unwrap()["gender"], json!(2));
    }

    #[test]
    fn stream_request_serializes_nested_options() {
        let req = StreamTtsRequest::new("Hi", StreamLanguage::EnUs)
            .voice_id(7)
            .format(AudioFormat::Wav)
            .inference_options(InferenceOptions::default().temperature(0.5));
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "text": "Hi",
                "language": "en-us",
                "voice_id": 7,
                "output_configuration": {"format": "wav"},
                "inference_options": {"temperature": 0.5}
            })
        );
        assert_eq!(req.output_format(), AudioFormat::Wav);
    }

    #[test]
    fn output_format_defaults_to_mp3() {
        let req = StreamTtsRequest::new("Hi", StreamLanguage::EnUs);
        assert_eq!(req.output_format(), AudioFormat::Mp3);
    }
}
