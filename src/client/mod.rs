//! Camb.ai API client.

mod builder;
mod core;
mod dubbing;
mod languages;
mod text_to_speech;
mod text_to_voice;

pub use builder::{CambClientBuilder, DEFAULT_BASE_URL};
pub use self::core::CambClient;
pub use dubbing::Dubbing;
pub use languages::{find_by_short_name, Languages};
pub use text_to_speech::TextToSpeech;
pub use text_to_voice::TextToVoice;
