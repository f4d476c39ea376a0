use std::fmt;
use std::sync::Arc;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use tracing::{info, warn};
use ns_core::{Article, Report, SpeechSynthesizer};
use crate::aggregate::Aggregate;
use crate::narrative::NARRATIVE_LANGUAGE;

const AUDIO_DATA_URI_PREFIX: &str = "data:audio/mp3;base64,";

pub fn encode_audio(bytes: &[u8]) -> String {
    format!("{}{}", AUDIO_DATA_URI_PREFIX, BASE64.encode(bytes))
}

/// Builds the final report and attaches the spoken narrative when a
/// synthesizer is available and succeeds.
pub struct ReportAssembler {
    synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
    language_code: String,
}

impl fmt::Debug for ReportAssembler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportAssembler")
            .field("synthesizer", &self.synthesizer.as_ref().map(|s| s.name().to_string()))
            .field("language_code", &self.language_code)
            .finish()
    }
}

impl ReportAssembler {
    pub fn new(synthesizer: Option<Arc<dyn SpeechSynthesizer>>) -> Self {
        Self {
            synthesizer,
            language_code: NARRATIVE_LANGUAGE.to_string(),
        }
    }

    pub fn without_audio() -> Self {
        Self::new(None)
    }

    pub async fn assemble(
        &self,
        company: &str,
        articles: Vec<Article>,
        aggregate: Aggregate,
        narrative: String,
    ) -> Report {
        let audio = self.render_audio(&narrative).await;

        Report {
            company: company.to_string(),
            articles,
            comparative_score: aggregate.comparative_score(),
            coverage_differences: aggregate.comparisons,
            narrative,
            audio,
        }
    }

    async fn render_audio(&self, narrative: &str) -> Option<String> {
        let synthesizer = self.synthesizer.as_ref()?;
        if narrative.trim().is_empty() {
            return None;
        }

        match synthesizer.synthesize(narrative, &self.language_code).await {
            Ok(bytes) if bytes.is_empty() => {
                warn!("🔇 {} produced no audio", synthesizer.name());
                None
            }
            Ok(bytes) => {
                info!("🔊 Synthesized {} bytes of narrative audio", bytes.len());
                Some(encode_audio(&bytes))
            }
            Err(e) => {
                warn!("🔇 Speech synthesis failed, omitting audio: {}", e);
                None
            }
        }
    }
}
