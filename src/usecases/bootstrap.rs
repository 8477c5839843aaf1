use std::{path::Path, sync::mpsc};

use tokio::runtime::Handle;
use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    assistant::{
        credentials::EnvCredentialSource, dispatcher::TokioReplyDispatcher, gemini::GeminiClient,
    },
    infra::{
        self, catalog_seed, config::AssistantConfig, config::FileConfigAdapter,
        contracts::ConfigAdapter, error::AppError, opener::SystemOpener,
        storage_layout::StorageLayout,
    },
    ui::{ChannelReplySource, CrosstermEventSource},
    usecases::{
        city_guide::{CityGuide, GuideSettings},
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        shell::DefaultShellOrchestrator,
    },
};

pub type GebzeGuide = CityGuide<EnvCredentialSource, GeminiClient>;

pub struct ShellComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

/// Loads config, prepares storage and installs file logging.
///
/// Keep the returned guard alive until exit so buffered log lines are flushed.
pub fn bootstrap(config_path: Option<&Path>) -> Result<(AppContext, WorkerGuard), AppError> {
    let context = build_context(config_path)?;
    context.layout.ensure_dirs()?;
    let log_guard = infra::logging::init(&context.config.logging, &context.layout)?;

    tracing::info!(
        model = %context.config.assistant.model,
        businesses = context.catalog.businesses().len(),
        events = context.catalog.events().len(),
        "gebzem bootstrapped"
    );

    Ok((context, log_guard))
}

pub fn build_guide(config: &AssistantConfig) -> GebzeGuide {
    CityGuide::new(
        EnvCredentialSource::new(config.api_key_env.clone()),
        GeminiClient::from_config(config),
        GuideSettings {
            model: config.model.clone(),
        },
    )
}

/// Wires the terminal event source, the reply channel and the orchestrator.
pub fn compose_shell(context: &AppContext, runtime: Handle) -> ShellComposition {
    let (reply_tx, reply_rx) = mpsc::channel();
    let guide = std::sync::Arc::new(build_guide(&context.config.assistant));
    let dispatcher = TokioReplyDispatcher::new(runtime, guide, reply_tx);

    ShellComposition {
        event_source: Box::new(ChannelReplySource::new(CrosstermEventSource, reply_rx)),
        orchestrator: Box::new(DefaultShellOrchestrator::new(
            std::sync::Arc::clone(&context.catalog),
            dispatcher,
            SystemOpener,
        )),
    }
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let config = config_adapter.load()?;
    let layout = StorageLayout::resolve()?;

    Ok(AppContext::new(config, layout, catalog_seed::builtin()))
}
