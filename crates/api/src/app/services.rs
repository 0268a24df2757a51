//! Startup wiring: models fitted once, capabilities selected once.
//!
//! Everything in here is immutable after construction and shared by every
//! request handler; concurrent reads need no locking.

use std::sync::Arc;
use std::time::Duration;

use aerosense_insights::baggage::DeliveryModel;
use aerosense_insights::maintenance::RiskModel;
use aerosense_insights::nlp::{
    GenerationCapability, LexiconSentiment, SentimentAnalyzer, TemplateCompleter,
};

/// Per-process service container injected into handlers via `Extension`.
pub struct AppServices {
    pub delivery_model: DeliveryModel,
    pub risk_model: RiskModel,
    pub sentiment: Arc<dyn SentimentAnalyzer>,
    pub generation: GenerationCapability,
    pub scan_delay: Duration,
}

pub fn build_services(config: &crate::config::Config) -> anyhow::Result<AppServices> {
    let delivery_model = DeliveryModel::fit()?;
    let risk_model = RiskModel::fit()?;

    let generation = if config.enable_nlg {
        tracing::info!("text generation capability installed (template completer)");
        GenerationCapability::Available(Arc::new(TemplateCompleter))
    } else {
        tracing::info!("text generation capability unavailable; chatbot uses canned replies");
        GenerationCapability::Unavailable
    };

    Ok(AppServices {
        delivery_model,
        risk_model,
        sentiment: Arc::new(LexiconSentiment),
        generation,
        scan_delay: config.scan_delay,
    })
}
