use std::io::{self, Write};
use std::sync::Arc;

use secscout_core::{Outcome, Pipeline, ReqwestHttpClient, RetryConfig, SecretStore, Settings};
use tracing::debug;

use crate::cli::{Cli, LookupArgs, OutputFormat};
use crate::error::CliError;
use crate::prompt::TerminalPrompt;

const NAME_QUESTION: &str = "Which company do you want to know about?";

pub async fn run(args: &LookupArgs, cli: &Cli, retry: RetryConfig) -> Result<Outcome, CliError> {
    let store = SecretStore::new(args.env_file.clone());
    let settings = settings_for(args, cli.timeout_ms, retry, &store)?;
    debug!(api_base = %settings.api_base, form_type = %settings.form_type, "settings loaded");

    let mut prompt = TerminalPrompt::new(io::stdin().lock(), prompt_writer(cli.format));
    let name = match &args.name {
        Some(name) => name.clone(),
        None => prompt.ask(NAME_QUESTION)?,
    };

    let pipeline = Pipeline::new(Arc::new(ReqwestHttpClient::new()), &settings);
    Ok(pipeline.run(&name, &mut prompt).await?)
}

fn settings_for(
    args: &LookupArgs,
    timeout_ms: u64,
    retry: RetryConfig,
    store: &SecretStore,
) -> Result<Settings, CliError> {
    let token = store.load_token()?;
    let settings = Settings::new(token)
        .with_api_base(args.api_base.as_str())
        .with_name_bounds(args.min_len, args.max_len)?
        .with_form_type(args.form_type.as_str())
        .with_timeout_ms(timeout_ms)?
        .with_retry(retry);
    Ok(settings)
}

/// JSON output owns stdout, so interactive text moves to stderr.
fn prompt_writer(format: OutputFormat) -> Box<dyn Write> {
    match format {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    }
}
