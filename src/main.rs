use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use url::Url;

use oxide_spa::app::{router, Message, Model, Page, SpaApp};
use oxide_spa::client::HttpBookClient;
use oxide_spa::config::AppConfig;
use oxide_spa::console::{self, ConsoleRenderer, LatestProps};
use oxide_spa::{logging, MvuRuntime, Task};

/// Run the four-page demo app in the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short = 'C', long, default_value = "spa.toml", value_hint = clap::ValueHint::FilePath)]
    config: PathBuf,

    /// Base URL that books.json is resolved against
    #[arg(long)]
    base_url: Option<Url>,

    /// Path to open after startup (/, /counter, /input, /data)
    #[arg(short, long)]
    path: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url.to_string();
    }
    if let Some(path) = cli.path {
        config.start_path = path;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    config.validate().context("invalid command line overrides")?;

    logging::initialize(config.log_destination, config.log_level);

    let client = HttpBookClient::new(config.books_url().context("resolving the books url")?);
    log::info!("books source: {}", client.url());

    let latest = LatestProps::new();
    let renderer = ConsoleRenderer::new(std::io::stdout(), latest.clone());

    let handle = tokio::runtime::Handle::current();
    let spawner = move |task: Task| {
        handle.spawn(task);
    };

    let mut runtime = MvuRuntime::new(Model::default(), SpaApp::new(client), renderer, spawner);
    let emitter = runtime.emitter();

    let start_page = router::resolve(&config.start_path);
    if start_page != Page::default() {
        emitter.emit(Message::SetPage(start_page));
    }

    let (quit_tx, quit_rx) = tokio::sync::oneshot::channel::<()>();
    std::thread::spawn(move || {
        console::read_commands(std::io::stdin().lock(), &latest, &emitter);
        let _ = quit_tx.send(());
    });

    tokio::select! {
        _ = runtime.run() => {}
        _ = quit_rx => log::info!("console closed"),
        _ = tokio::signal::ctrl_c() => log::info!("interrupted"),
    }

    Ok(())
}
