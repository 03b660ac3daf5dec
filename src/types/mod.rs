//! Request/response model of the Camb.ai API.

pub mod audio;
pub mod dubbing;
pub mod language;
pub mod task;
pub mod tts;
pub mod voice;

pub use audio::{AudioFormat, AudioStream};
pub use dubbing::{DubbingRequest, DubbingResult};
pub use language::{LanguageId, LanguageInfo, StreamLanguage};
pub use task::{ResultLocator, RunId, TaskHandle, TaskId, TaskStatus};
pub use tts::{
    CreateTtsRequest, Gender, InferenceOptions, OutputConfiguration, StreamTtsRequest,
    TtsResultFormat,
};
pub use voice::{TextToVoiceRequest, TextToVoiceResult};
