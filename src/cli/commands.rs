//! CLI command definitions and handlers

use clap::Subcommand;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::core::client::Shipi18nClient;
use crate::core::models::{
    JsonInput, JsonTranslateRequest, TranslateRequest, TranslatedDocument,
    DEFAULT_SOURCE_LANGUAGE,
};
use crate::languages::{self, Language, Region};
use crate::processors::locale::{LocaleFileRequest, LocaleFileTranslator};

/// Commands for the Shipi18n client
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate text into one or more languages
    Translate {
        /// Text to translate
        text: String,

        /// Target languages, comma separated (e.g. es,fr,de)
        #[arg(short, long, value_delimiter = ',', required = true)]
        to: Vec<String>,

        /// Source language
        #[arg(short, long, default_value = DEFAULT_SOURCE_LANGUAGE)]
        from: String,

        /// Keep placeholders such as {name}, {{count}}, %s untranslated
        #[arg(short, long)]
        preserve_placeholders: bool,
    },

    /// Translate a JSON document, keeping its structure
    TranslateJson {
        /// Inline JSON text
        #[arg(conflicts_with = "file", required_unless_present = "file")]
        json: Option<String>,

        /// Read the JSON document from a file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// Target languages, comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        to: Vec<String>,

        /// Source language
        #[arg(short, long, default_value = DEFAULT_SOURCE_LANGUAGE)]
        from: String,

        /// Keep placeholders untranslated
        #[arg(short, long)]
        preserve_placeholders: bool,
    },

    /// Translate a locale file into one `<lang>.json` per target language
    TranslateFile {
        /// Locale file, e.g. en.json (max 1MB)
        #[arg(short, long)]
        file: PathBuf,

        /// Output directory (default: directory of the input file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target languages, comma separated
        #[arg(short, long, value_delimiter = ',', default_value = "es,fr")]
        to: Vec<String>,

        /// Source language
        #[arg(long)]
        from: Option<String>,

        /// Keep placeholders untranslated
        #[arg(short, long)]
        preserve_placeholders: bool,
    },

    /// Check that the translation service is up
    Health,

    /// List supported languages
    Languages {
        /// Filter by name or code
        query: Option<String>,

        /// Only show popular languages
        #[arg(long)]
        popular: bool,
    },
}

/// Dispatch a parsed command
pub async fn run(command: Commands, client: Shipi18nClient) -> anyhow::Result<()> {
    match command {
        Commands::Translate {
            text,
            to,
            from,
            preserve_placeholders,
        } => handle_translate(&client, text, to, from, preserve_placeholders).await,
        Commands::TranslateJson {
            json,
            file,
            to,
            from,
            preserve_placeholders,
        } => handle_translate_json(&client, json, file, to, from, preserve_placeholders).await,
        Commands::TranslateFile {
            file,
            output,
            to,
            from,
            preserve_placeholders,
        } => handle_translate_file(client, file, output, to, from, preserve_placeholders).await,
        Commands::Health => handle_health(&client).await,
        Commands::Languages { query, popular } => {
            handle_languages(query, popular);
            Ok(())
        }
    }
}

/// Handle text translation command
pub async fn handle_translate(
    client: &Shipi18nClient,
    text: String,
    to: Vec<String>,
    from: String,
    preserve_placeholders: bool,
) -> anyhow::Result<()> {
    let request = TranslateRequest::new(text, normalize_targets(to))
        .with_source_language(from)
        .with_preserve_placeholders(preserve_placeholders);

    let pb = spinner("Translating...");
    let result = client.translate(&request).await;
    pb.finish_and_clear();
    let result = result?;

    for language in result.languages() {
        println!("\n🌐 {} ({})", languages::language_name(language), language);
        for segment in result.get(language).unwrap_or_default() {
            println!("   {} → {}", segment.original, segment.translated);
        }
    }
    print_warnings(&result.warning_messages());

    Ok(())
}

/// Handle JSON translation command
pub async fn handle_translate_json(
    client: &Shipi18nClient,
    json: Option<String>,
    file: Option<PathBuf>,
    to: Vec<String>,
    from: String,
    preserve_placeholders: bool,
) -> anyhow::Result<()> {
    let json = match (json, file) {
        (Some(json), _) => JsonInput::Text(json),
        (None, Some(file)) => JsonInput::Text(tokio::fs::read_to_string(&file).await?),
        (None, None) => anyhow::bail!("Provide JSON inline or with --file"),
    };

    let request = JsonTranslateRequest::new(json, normalize_targets(to))
        .with_source_language(from)
        .with_preserve_placeholders(preserve_placeholders);

    let pb = spinner("Translating...");
    let result = client.translate_json(&request).await;
    pb.finish_and_clear();
    let result = result?;

    for (language, document) in &result.translations {
        println!("\n🌐 {} ({})", languages::language_name(language), language);
        match document {
            TranslatedDocument::Parsed(value) => println!("{}", serde_json::to_string_pretty(value)?),
            TranslatedDocument::Raw(text) => println!("{}", text),
        }
    }
    print_warnings(&result.warning_messages());

    Ok(())
}

/// Handle locale file translation command
pub async fn handle_translate_file(
    client: Shipi18nClient,
    file: PathBuf,
    output: Option<PathBuf>,
    to: Vec<String>,
    from: Option<String>,
    preserve_placeholders: bool,
) -> anyhow::Result<()> {
    let output = output.unwrap_or_else(|| {
        file.parent()
            .map(|parent| parent.to_path_buf())
            .unwrap_or_default()
    });

    info!("Input: {}", file.display());
    info!("Output: {}", output.display());

    let translator = LocaleFileTranslator::new(client);
    let request = LocaleFileRequest {
        target_languages: normalize_targets(to),
        source_language: from,
        preserve_placeholders,
    };

    let pb = spinner(&format!("Translating {}...", file.display()));
    let report = translator.translate_file(&file, &output, request).await;
    pb.finish_and_clear();
    let report = report?;

    println!("\n✅ Translation completed!");
    for (language, path) in &report.written {
        println!("   {} ({}): {}", languages::language_name(language), language, path.display());
    }
    print_warnings(&report.warnings);

    Ok(())
}

/// Handle health check command
pub async fn handle_health(client: &Shipi18nClient) -> anyhow::Result<()> {
    info!("Checking {}", client.config().api_base_url);

    let health = client.health_check().await?;

    let status = health.status.as_deref().unwrap_or("unknown");
    match &health.version {
        Some(version) => println!("✅ Service status: {} (version {})", status, version),
        None => println!("✅ Service status: {}", status),
    }

    Ok(())
}

/// Handle language listing command
pub fn handle_languages(query: Option<String>, popular: bool) {
    let mut matches: Vec<&Language> = match &query {
        Some(query) => languages::search(query),
        None => languages::LANGUAGES.iter().collect(),
    };
    if popular {
        let popular = languages::popular();
        matches.retain(|lang| popular.contains(*lang));
    }

    if matches.is_empty() {
        println!("No languages match");
        return;
    }

    for region in Region::ALL {
        let in_region: Vec<_> = languages::by_region(region)
            .into_iter()
            .filter(|lang| matches.contains(lang))
            .collect();
        if in_region.is_empty() {
            continue;
        }
        println!("\n{}", region);
        for lang in in_region {
            println!("   {:<8} {}", lang.code, lang.name);
        }
    }
}

/// Trim codes and drop blanks and repeats, keeping first-seen order
fn normalize_targets(targets: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(targets.len());
    for target in targets {
        let target = target.trim();
        if !target.is_empty() && !normalized.iter().any(|seen| seen == target) {
            normalized.push(target.to_string());
        }
    }
    normalized
}

fn print_warnings(warnings: &[String]) {
    if warnings.is_empty() {
        return;
    }
    println!("\n⚠️  Warnings:");
    for warning in warnings {
        println!("   - {}", warning);
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
