use bossdex::app::{App, AppMessage};
use bossdex::cli::{parse_args, run_cli_command, USAGE};
use bossdex::logging;
use bossdex::startup::{prepare, StartupConfig};
use bossdex::terminal::{setup_panic_hook, TerminalManager};
use bossdex::ui;
use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Frame tick for the loading spinner.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    color_eyre::install()?;

    let parsed = match parse_args(std::env::args()) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };
    let config = StartupConfig::from_env().apply_options(&parsed.options);

    // Handle CLI flags before touching the terminal
    if let Some(result) = run_cli_command(&parsed.command, &config) {
        return result;
    }

    let data_dir = config.resolve_data_dir()?;
    let log_path = logging::init_tui(&data_dir, config.effective_log_filter())?;
    info!(version = bossdex::cli::VERSION, log = %log_path.display(), "Starting bossdex");

    let prepared = prepare(&config)?;
    let mut app = App::new(prepared.catalog, prepared.preferences);

    let runtime = tokio::runtime::Runtime::new()?;

    setup_panic_hook();
    let mut term_manager = TerminalManager::new()?;

    let result = runtime.block_on(async {
        // Initial screen entry: fetch the boss list
        app.start();
        run_app(term_manager.terminal(), &mut app).await
    });

    term_manager.restore()?;
    if let Err(e) = &result {
        warn!("bossdex exited with error: {}", e);
    }
    info!("bossdex stopped");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => warn!("Terminal event error: {}", e),
                    // Input closed, nothing more can happen
                    None => app.should_quit = true,
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
