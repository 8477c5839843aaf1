use anyhow::Result;
use tokio::runtime::{Builder, Runtime};

use crate::{
    assistant,
    cli::{Cli, Command},
    domain,
    infra::{self, error::AppError},
    ui,
    usecases::{self, bootstrap},
};

const BLANK_PROMPT_NOTICE: &str = "Boş bir soru gönderilemez. Örnek: gebzem ask \"Gebze'de nereye gideyim?\"";

pub fn run(cli: Cli) -> Result<()> {
    let (context, _log_guard) = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        assistant = assistant::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command_or_default() {
        Command::Run => {
            let runtime = build_runtime()?;
            let mut shell = bootstrap::compose_shell(&context, runtime.handle().clone());
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;
        }
        Command::Ask { prompt } => {
            let Some(prompt) = non_blank(&prompt) else {
                println!("{BLANK_PROMPT_NOTICE}");
                return Ok(());
            };

            let runtime = build_runtime()?;
            let guide = bootstrap::build_guide(&context.config.assistant);
            let reply = runtime.block_on(guide.reply(prompt));
            println!("{reply}");
        }
    }

    Ok(())
}

fn build_runtime() -> Result<Runtime, AppError> {
    Builder::new_multi_thread()
        .enable_all()
        .thread_name("gebzem-assistant")
        .build()
        .map_err(AppError::RuntimeStart)
}

/// The prompt as typed, or `None` when it holds only whitespace.
fn non_blank(prompt: &str) -> Option<&str> {
    (!prompt.trim().is_empty()).then_some(prompt)
}
