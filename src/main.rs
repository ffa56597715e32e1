use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

use ketik::cache::SuggestionCache;
use ketik::config::{self, SuggestionsConfig};
use ketik::engine::{Lookup, plan_commit, resolve};
use ketik::pool::CandidatePool;
use ketik::suggest::tokens::current_word_range;
use ketik::suggest::{ContextKey, extract_active_token};

/// Context-aware autocomplete over a candidate pool
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Suggest completions for the word before the caret from a pool of committed values"
)]
struct Args {
    /// Candidate pool file, one value per line
    #[arg(short, long)]
    pool: PathBuf,

    /// Field the pool belongs to
    #[arg(short, long, default_value = "nama")]
    field: String,

    /// Caret position in characters (defaults to the end of TEXT)
    #[arg(short, long)]
    caret: Option<usize>,

    /// Maximum number of suggestions (overrides config)
    #[arg(short = 'n', long)]
    max_results: Option<usize>,

    /// Commit this suggestion and print the resulting text
    #[arg(long, value_name = "SUGGESTION")]
    commit: Option<String>,

    /// Print JSON instead of plain lines
    #[arg(long)]
    json: bool,

    /// Text of the entry field
    text: String,
}

fn main() -> Result<()> {
    // Writes to /tmp/ketik-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/ketik-debug.log")
            .expect("Failed to open /tmp/ketik-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== KETIK DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        eprintln!("Warning: {}", warning);
    }

    let args = Args::parse();

    let mut settings = config_result.config.suggestions;
    if let Some(max_results) = args.max_results {
        settings.max_results = max_results;
    }

    let pool = CandidatePool::load(&args.pool)?;
    let caret = args.caret.unwrap_or_else(|| args.text.chars().count());

    match &args.commit {
        Some(chosen) => print_commit(&args, caret, chosen)?,
        None => print_suggestions(&args, caret, &pool, &settings)?,
    }

    #[cfg(debug_assertions)]
    log::debug!("=== KETIK DEBUG SESSION ENDED ===");

    Ok(())
}

fn print_suggestions(
    args: &Args,
    caret: usize,
    pool: &CandidatePool,
    settings: &SuggestionsConfig,
) -> Result<()> {
    let token = if settings.is_enabled_for(&args.field) {
        extract_active_token(&args.text, caret)
    } else {
        log::debug!("Suggestions disabled for field {}", args.field);
        None
    };

    let Some(token) = token else {
        if args.json {
            let output = serde_json::json!({ "field": args.field, "suggestions": [] });
            println!("{}", serde_json::to_string(&output)?);
        }
        return Ok(());
    };

    let cache = SuggestionCache::new();
    let key = ContextKey::build(&token.already_typed, &token.fragment);
    let lookup = Lookup {
        field: &args.field,
        key: &key,
        fragment: &token.fragment,
        already_typed: &token.already_typed,
        pool: pool.as_slice(),
        max_results: settings.effective_max_results(),
        broad_lookup: settings.broad_lookup,
    };

    let resolved = resolve(&cache, &lookup, &CancellationToken::new())
        .ok_or_else(|| eyre!("Lookup for {} was cancelled", key))?;

    if args.json {
        let output = serde_json::json!({
            "field": args.field,
            "key": key.as_str(),
            "fragment": token.fragment,
            "suggestions": resolved.suggestions,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        for suggestion in &resolved.suggestions {
            println!("{}", suggestion);
        }
    }

    Ok(())
}

fn print_commit(args: &Args, caret: usize, chosen: &str) -> Result<()> {
    let token = current_word_range(&args.text, caret)
        .ok_or_else(|| eyre!("No word before caret position {}", caret))?;
    let instruction = plan_commit(&args.text, caret, token, chosen);
    let text = instruction.apply(&args.text);

    if args.json {
        let mut output = serde_json::to_value(&instruction)?;
        output["text"] = serde_json::Value::String(text);
        output["caret"] = serde_json::Value::from(instruction.caret_after());
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", text);
    }

    Ok(())
}
