//! armour_tui - Interactive TUI for tracking character armour and reducing hits
//!
//! Usage: `armour_tui [campaign.hacfg]`

mod app;
mod settings;
mod ui;

use app::{App, Prompt};
use armour_core::DamageType;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use settings::{TuiSettings, SETTINGS_FILE};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> io::Result<()> {
    let (settings, settings_error) = match TuiSettings::load(Path::new(SETTINGS_FILE)) {
        Ok(settings) => (settings, None),
        Err(e) => (TuiSettings::default(), Some(e)),
    };

    // The terminal belongs to the UI, so tracing goes to a file
    init_logging(&settings.log_file)?;
    if let Some(e) = settings_error {
        warn!("Ignoring {}: {}", SETTINGS_FILE, e);
    }
    info!("Starting armour tracker");

    let mut app = App::new(settings);
    if let Some(config) = std::env::args().nth(1).map(PathBuf::from) {
        app.load_configuration(&config);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("Armour tracker closed");
    result
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "armour_core=info,armour_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // An open prompt takes every key
        if app.prompt.is_some() {
            match key.code {
                KeyCode::Enter => app.submit_prompt(),
                KeyCode::Esc => app.cancel_prompt(),
                KeyCode::Backspace => app.prompt_backspace(),
                KeyCode::Char(c) => app.prompt_push(c),
                _ => {}
            }
            continue;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
            (KeyCode::Tab, _) => app.next_tab(),
            (KeyCode::BackTab, _) => app.prev_tab(),
            (KeyCode::F(n), _) => app.set_tab(usize::from(n).saturating_sub(1)),
            (KeyCode::Up, _) => app.on_up(),
            (KeyCode::Down, _) => app.on_down(),
            (KeyCode::Left, _) => app.on_left(),
            (KeyCode::Right, _) => app.on_right(),
            (KeyCode::Char(c), _) if c.is_ascii_digit() => app.type_digit(c),
            (KeyCode::Backspace, _) => app.backspace(),
            (KeyCode::Char(' '), _) => app.toggle_field(),
            (KeyCode::Char('p'), _) => app.calculate(DamageType::Piercing),
            (KeyCode::Char('s'), _) => app.calculate(DamageType::Slashing),
            (KeyCode::Char('b'), _) => app.calculate(DamageType::Bludgeoning),
            (KeyCode::Char('m'), _) => app.calculate(DamageType::ToHitSpells),
            (KeyCode::Char('a'), _) => app.open_prompt(Prompt::AddCharacter),
            (KeyCode::Char('n'), _) => app.open_prompt(Prompt::RenameCharacter),
            (KeyCode::Char('x'), _) | (KeyCode::Delete, _) => app.remove_selected(),
            (KeyCode::Char('o'), _) => app.open_prompt(Prompt::LoadCharacter),
            (KeyCode::Char('e'), _) => app.open_prompt(Prompt::Equip),
            (KeyCode::Char('u'), _) => app.unequip_selected(),
            (KeyCode::Char('l'), _) => app.open_prompt(Prompt::LoadArmour),
            (KeyCode::Char('c'), _) => app.open_prompt(Prompt::LoadConfig),
            (KeyCode::Char('w'), _) => app.open_prompt(Prompt::SaveConfig),
            (KeyCode::Char('j'), _) => app.export_log(),
            (KeyCode::Char('?'), _) => app.toggle_help(),
            _ => {}
        }
    }
    Ok(())
}
