use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use locpick::app::{App, ExitAction};
use locpick::cli::Args;
use locpick::config::load_config;
use locpick::lookup::{LookupClient, spawn_worker};
use locpick::{logging, output};

/// How long to wait for terminal input before checking timers and responses
const TICK: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    logging::init();

    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    args.apply(&mut config);
    let names = args.field_names()?;

    // Everything that can fail on bad input fails before the terminal is taken over
    let client = LookupClient::new(&config.lookup)?;
    log::debug!("Using lookup endpoint {}", client.endpoint());
    let (handle, response_rx) = spawn_worker(client)?;
    let app = App::new(names, &config.autocomplete, handle, response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture, EnableBracketedPaste)?;

    let result = run(terminal, app);

    // Restore terminal before anything is printed
    let _ = execute!(io::stdout(), DisableMouseCapture, DisableBracketedPaste);
    ratatui::restore();

    let app = result?;
    if app.exit == Some(ExitAction::Submit) {
        let selections = app.selections();
        if args.label_only {
            println!("{}", output::format_labels(&selections));
        } else {
            println!("{}", output::format_json(&selections)?);
        }
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(TICK)? {
            let now = Instant::now();
            match event::read()? {
                // Only process key press events (avoid duplicates)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key, now);
                }
                Event::Mouse(mouse) => app.handle_mouse_event(mouse, now),
                Event::Paste(text) => app.handle_paste_event(text, now),
                _ => {}
            }
        }

        app.tick(Instant::now());

        if app.should_quit() {
            return Ok(app);
        }
    }
}
