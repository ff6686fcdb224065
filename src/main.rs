mod app;
mod config;
mod error;
mod event;
mod github;
mod logging;
mod lookup;
mod stats;
#[cfg(test)]
mod test_utils;
mod ticker;
mod ui;

use app::App;
use clap::Parser;
use config::Config;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use event::AppEvent;
use futures::StreamExt;
use github::client::GitHubClient;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Parser)]
#[command(name = "ghpeek", about = "TUI GitHub profile viewer")]
struct Cli {
    #[arg(help = "GitHub username to look up on start")]
    username: Option<String>,

    #[arg(long, help = "Base URL of the GitHub REST API")]
    api_url: Option<String>,

    #[arg(long, help = "Print the effective configuration and exit")]
    print_config: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(cli.api_url);

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let _log_guard = match logging::init(&config.log_path(), &config.log_filter) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled: {e}");
            None
        }
    };
    tracing::info!(?config, "starting");

    let client = match GitHubClient::new(&config.api_base_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut app = App::new(cli.username.or(config.default_username.clone()));

    // Install panic hook before entering raw mode so terminal is restored on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    let input_tx = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let app_event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Resize(_, _) => Some(AppEvent::Resize),
                _ => None,
            };
            if let Some(e) = app_event {
                if input_tx.send(e).is_err() {
                    break;
                }
            }
        }
    });

    let mut spinner: Option<JoinHandle<()>> = None;
    dispatch_lookup(&mut app, &client, &tx, &mut spinner);

    loop {
        terminal.draw(|f| app.render(f))?;

        let first = match rx.recv().await {
            Some(e) => e,
            None => break,
        };

        app.handle_event(first);
        while let Ok(pending) = rx.try_recv() {
            app.handle_event(pending);
        }
        dispatch_lookup(&mut app, &client, &tx, &mut spinner);

        if !app.lookup.loading {
            if let Some(handle) = spinner.take() {
                handle.abort();
            }
        }

        if app.should_quit {
            break;
        }
    }

    if let Some(handle) = spinner.take() {
        handle.abort();
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("exiting");
    Ok(())
}

/// Spawns the fetch for a freshly accepted lookup, plus the spinner ticker.
fn dispatch_lookup(
    app: &mut App,
    client: &GitHubClient,
    tx: &mpsc::UnboundedSender<AppEvent>,
    spinner: &mut Option<JoinHandle<()>>,
) {
    let Some(pending) = app.take_pending_lookup() else {
        return;
    };

    let fetch_tx = tx.clone();
    let client = client.clone();
    tokio::spawn(async move {
        let result = github::fetcher::fetch_profile(&client, &pending.username).await;
        let _ = fetch_tx.send(AppEvent::LookupFinished {
            request_id: pending.request_id,
            result,
        });
    });

    if spinner.is_none() {
        let tick_tx = tx.clone();
        *spinner = Some(tokio::spawn(ticker::start_ticker(
            tick_tx,
            ticker::SPINNER_INTERVAL,
        )));
    }
}
