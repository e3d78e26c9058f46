use anyhow::Context;
use clap::Parser;
use meeting_summarizer::adapters::documents::DocumentProcessor;
use meeting_summarizer::commands::summary::{list_models, summarize_meeting, SummarizeRequest};
use meeting_summarizer::domain::DEFAULT_MODEL;
use meeting_summarizer::services::SummaryService;
use meeting_summarizer::{AppState, CredentialSource, EnvCredentials, GatewayConfig, ProviderKind};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Summarize a meeting transcript with a hosted LLM
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Transcript file, or `-` to read from stdin
    #[arg(short, long, required_unless_present = "list_models")]
    transcript: Option<PathBuf>,

    /// Extra instructions for the summary
    #[arg(short, long)]
    instructions: Option<String>,

    /// Model identifier
    #[arg(short, long, env = "SUMMARIZER_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Reference document name under the upload directory (repeatable)
    #[arg(short, long = "doc")]
    docs: Vec<String>,

    /// Directory holding uploaded reference documents
    #[arg(long, env = "UPLOAD_DIR", default_value = "uploads")]
    upload_dir: PathBuf,

    /// Override the per-model response token cap
    #[arg(long)]
    max_tokens: Option<u32>,

    /// JSON gateway config file
    #[arg(long, env = "SUMMARIZER_CONFIG")]
    config: Option<PathBuf>,

    /// Print the supported models and exit
    #[arg(long)]
    list_models: bool,
}

fn read_transcript(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut transcript = String::new();
        std::io::stdin()
            .read_to_string(&mut transcript)
            .context("failed to read transcript from stdin")?;
        return Ok(transcript);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read transcript {}", path.display()))
}

fn log_credentials(config: &GatewayConfig, env: &EnvCredentials) {
    for kind in [ProviderKind::Anthropic, ProviderKind::OpenAi, ProviderKind::DeepSeek] {
        let var = &config.endpoint(kind).credential_var;
        log::info!("{} set: {}", var, env.has_credential(var));
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.list_models {
        for model in list_models() {
            println!("{}", model);
        }
        return Ok(());
    }

    let env = EnvCredentials::new();
    let summaries = match cli.config.as_deref() {
        Some(path) => SummaryService::new(
            GatewayConfig::from_json_file(path)?.with_env_overrides(&env),
            Arc::new(env),
        ),
        None => SummaryService::from_env(),
    };
    log_credentials(summaries.selector().config(), &env);

    let state = AppState {
        documents: DocumentProcessor::new(&cli.upload_dir),
        summaries,
    };

    let transcript_path = cli
        .transcript
        .context("a transcript file is required")?;
    let request = SummarizeRequest {
        transcript: read_transcript(&transcript_path)?,
        instructions: cli.instructions,
        model: cli.model,
        reference_docs: (!cli.docs.is_empty()).then_some(cli.docs),
        max_tokens: cli.max_tokens,
    };

    let response = summarize_meeting(request, &state)
        .await
        .context("summary generation failed")?;
    println!("{}", response.summary);

    Ok(())
}
