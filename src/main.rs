mod activity;
mod app;
mod config;
mod event;
mod logging;
mod store;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use activity::ActivityStore;
use app::App;
use config::Config;
use event::{AppEvent, EventHandler, InputCapture};
use store::json_store::JsonStore;
use ui::components::activity_dashboard::ActivityDashboard;
use ui::theme::Theme;

#[derive(Parser)]
#[command(
    name = "keytally",
    version,
    about = "Count mouse clicks and key presses in a live terminal dashboard"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Directory for saved counts and the log file")]
    data_dir: Option<PathBuf>,

    #[arg(long, help = "Clear saved counts before starting")]
    reset: bool,

    #[arg(long, help = "Print the bundled theme names and exit")]
    list_themes: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_themes {
        let mut names = Theme::available_themes();
        names.sort();
        for name in names {
            println!("{name}");
        }
        return Ok(());
    }

    let (mut config, config_err) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir.to_string_lossy().to_string();
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    // Logging is best effort; the dashboard works without it
    if let Err(err) = logging::init(&config.data_dir(), &config.log_level) {
        eprintln!("keytally: logging disabled: {err:#}");
    }
    log::info!("starting keytally, data dir {}", config.data_dir);
    if let Some(err) = config_err {
        log::warn!("ignoring unreadable config file: {err:#}");
    }

    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        log::warn!("theme {:?} not found, using default", config.theme);
        Theme::default()
    });

    let store = match JsonStore::with_base_dir(config.data_dir()) {
        Ok(json_store) => {
            if cli.reset {
                json_store.clear_activity()?;
                log::info!("cleared saved counts in {}", json_store.base_dir().display());
            }
            ActivityStore::open(json_store)
        }
        Err(err) => {
            log::warn!("counts will not be saved: {err}");
            ActivityStore::in_memory()
        }
    };

    let mut app = App::new(config, theme, store);

    let result = {
        let _capture = InputCapture::acquire()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        let events = EventHandler::new(Duration::from_millis(100));
        let result = run_app(&mut terminal, &mut app, &events);
        let _ = terminal.show_cursor();
        result
    };

    if let Err(err) = result {
        log::error!("exited with error: {err:?}");
        eprintln!("Error: {err:?}");
    }
    log::info!("stopped keytally");

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            app.viewport = frame.area();
            render(frame, app);
        })?;

        match events.next()? {
            AppEvent::Key(key) => app.handle_key(key),
            AppEvent::Mouse(mouse) => app.handle_mouse(mouse),
            AppEvent::Tick => app.tick(),
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let dashboard = ActivityDashboard::new(app.state(), &app.theme)
        .last_input(app.last_input())
        .reset_pressed(app.reset_armed);
    frame.render_widget(dashboard, frame.area());
}
