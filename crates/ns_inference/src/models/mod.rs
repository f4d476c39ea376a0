use std::sync::Arc;
use ns_core::{Error, Result, SentimentClassifier, SpeechSynthesizer, Summarizer};
use crate::Config;

pub mod deepseek;
pub mod dummy;
pub mod gtts;

pub use deepseek::DeepSeekModel;
pub use dummy::DummyModel;
pub use gtts::GoogleTts;

/// Capability handles handed to the analyzer. A single backend usually
/// fills both slots.
#[derive(Clone)]
pub struct ModelHandles {
    pub summarizer: Arc<dyn Summarizer>,
    pub classifier: Arc<dyn SentimentClassifier>,
}

impl ModelHandles {
    pub fn from_model<M>(model: M) -> Self
    where
        M: Summarizer + SentimentClassifier + 'static,
    {
        let model = Arc::new(model);
        Self {
            summarizer: model.clone(),
            classifier: model,
        }
    }
}

impl std::fmt::Debug for ModelHandles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelHandles")
            .field("summarizer", &self.summarizer.name())
            .field("classifier", &self.classifier.name())
            .finish()
    }
}

/// Available model names for `--model`
pub const MODEL_NAMES: &[&str] = &["dummy", "deepseek"];

pub async fn create_model(config: Option<Config>) -> Result<ModelHandles> {
    let config = config.unwrap_or_default();
    let name = config.model_name.as_deref().unwrap_or("dummy").to_lowercase();

    match name.as_str() {
        "dummy" => Ok(ModelHandles::from_model(DummyModel::new())),
        "deepseek" => Ok(ModelHandles::from_model(DeepSeekModel::new(
            config.api_key,
            config.model_url,
        )?)),
        other => Err(Error::Config(format!(
            "Unknown model '{}'. Available models: {}",
            other,
            MODEL_NAMES.join(", ")
        ))),
    }
}

pub fn create_synthesizer(enabled: bool) -> Option<Arc<dyn SpeechSynthesizer>> {
    if enabled {
        Some(Arc::new(GoogleTts::new()))
    } else {
        None
    }
}
