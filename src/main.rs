//! Command line client for the guide backend.
//!
//! ```text
//! diary-guide topics              list the guide taxonomy
//! diary-guide generate <prompt>   stream a draft for a prompt (Ctrl+C stops)
//! ```

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use diary_guide::adapters::{
    DraftField, HttpGenerationStream, HttpStreamConfig, HttpTaxonomyConfig, HttpTaxonomySource,
};
use diary_guide::application::{StreamingGenerationConsumer, TaxonomyLoader};
use diary_guide::config::{AppConfig, LoggingConfig};
use diary_guide::domain::guide::{Slide, SlideHeading};
use diary_guide::ports::AccessToken;

fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn access_token(config: &AppConfig) -> Result<AccessToken, Box<dyn Error>> {
    config
        .api
        .access_token
        .as_deref()
        .map(AccessToken::new)
        .ok_or_else(|| "DIARY_GUIDE__API__ACCESS_TOKEN is not set".into())
}

async fn list_topics(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let mut source_config = HttpTaxonomyConfig::new(&config.api.base_url)
        .with_topics_path(&config.api.topics_path)
        .with_details_path(&config.api.details_path)
        .with_timeout(config.api.timeout());
    if let Ok(token) = access_token(config) {
        source_config = source_config.with_access_token(token);
    }

    let source = HttpTaxonomySource::new(source_config)?;
    let loader = TaxonomyLoader::new(Arc::new(source), &config.guide.custom_entry_label);
    let deck = loader.load_deck().await?;

    for (position, slide) in deck.slides().iter().enumerate() {
        let Slide::DetailList { items, .. } = slide else {
            continue;
        };
        if let Some(SlideHeading::Topic(topic)) = deck.heading(position) {
            println!("{} ({})", topic.label, topic.id);
        }
        for item in items {
            println!("  - {}", item.label());
        }
    }
    Ok(())
}

async fn generate(config: &AppConfig, prompt: &str) -> Result<(), Box<dyn Error>> {
    let token = access_token(config)?;
    let stream = HttpGenerationStream::new(
        HttpStreamConfig::new(&config.api.base_url)
            .with_stream_path(&config.api.stream_path)
            .with_timeout(config.api.stream_timeout()),
    )?;
    let draft = Arc::new(DraftField::new());
    let consumer = Arc::new(StreamingGenerationConsumer::new(
        Arc::new(stream),
        draft.clone(),
        config.generation.frame_parser(),
    ));

    let stopper = consumer.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            stopper.stop();
        }
    });

    let result = consumer.start(prompt, &token).await;
    println!("{}", draft.value());

    let report = result?;
    tracing::info!(
        status = %report.status,
        appended_chars = report.appended_chars,
        skipped_lines = report.skipped_lines,
        "generation finished"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);
    config.validate()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("topics") => list_topics(&config).await,
        Some("generate") if args.len() > 1 => generate(&config, &args[1..].join(" ")).await,
        _ => {
            eprintln!("usage: diary-guide topics | diary-guide generate <prompt>");
            std::process::exit(2);
        }
    }
}
