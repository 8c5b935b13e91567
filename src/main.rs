use clap::{Parser, ValueEnum};
use log::{error, warn};
use recipe_extract::validation::validate_recipe;
use recipe_extract::{AppConfig, ExtractError, RecipeExtractor};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Extract a structured recipe from a URL, a YouTube video or pasted text
#[derive(Debug, Parser)]
#[command(name = "recipe-extract", version)]
struct Args {
    /// Recipe URL, YouTube link or recipe text ("-" or nothing reads stdin)
    input: Option<String>,

    /// Read the input from a file
    #[arg(long, conflicts_with = "input")]
    file: Option<PathBuf>,

    /// Generative backend to use (google, openai, anthropic)
    #[arg(long)]
    provider: Option<String>,

    /// Model name for the chosen backend
    #[arg(long)]
    model: Option<String>,

    /// Print the content that would be sent and stop
    #[arg(long, conflicts_with = "prompt_only")]
    content_only: bool,

    /// Print the full prompt and stop
    #[arg(long)]
    prompt_only: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Re-format ingredient and step lines before printing
    #[arg(long)]
    reformat: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), ExtractError> {
    let input = read_input(&args).await?;

    let mut config = AppConfig::load()?;
    if let Some(provider) = args.provider {
        config.provider.name = provider;
    }
    if let Some(model) = args.model {
        config.provider.model = Some(model);
    }

    if args.content_only || args.prompt_only {
        // No backend call, so no credentials are needed
        let normalizer = recipe_extract::pipelines::ContentNormalizer::new(&config.fetch);
        let content = normalizer.normalize(&input).await;
        if args.content_only {
            println!("{content}");
        } else {
            println!("{}", recipe_extract::providers::build_extraction_prompt(&content));
        }
        return Ok(());
    }

    let extractor = RecipeExtractor::from_config(&config)?;
    let extracted = extractor.extract_with_source(&input).await?;

    let recipe = if args.reformat {
        extracted.recipe.reformatted()
    } else {
        extracted.recipe
    };

    let report = validate_recipe(&recipe);
    for (field, message) in &report.errors {
        warn!("{}: {}", field, message);
    }

    match args.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "recipe": recipe,
                "source_url": extracted.source_url,
            });
            let pretty = serde_json::to_string_pretty(&output)
                .map_err(|e| ExtractError::MalformedResponse(e.to_string()))?;
            println!("{pretty}");
        }
        OutputFormat::Text => println!("{}", recipe.to_text()),
    }

    Ok(())
}

async fn read_input(args: &Args) -> Result<String, ExtractError> {
    let input = match (&args.file, args.input.as_deref()) {
        (Some(path), _) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ExtractError::InvalidInput(format!("{}: {}", path.display(), e)))?,
        (None, Some(text)) if text != "-" => text.to_string(),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| ExtractError::InvalidInput(e.to_string()))?;
            buffer
        }
    };

    if input.trim().is_empty() {
        return Err(ExtractError::InvalidInput(
            "Please provide a URL or recipe text".to_string(),
        ));
    }
    Ok(input)
}
