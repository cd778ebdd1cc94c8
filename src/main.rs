pub mod config;
pub mod lang;
pub mod runtime;
pub mod score;
pub mod session;
pub mod ui;

use crate::{
    config::{Config, ConfigStore, FileConfigStore},
    lang::Dictionary,
    runtime::{AppEvent, CrosstermEventSource, EventSource, Runner},
    score::Score,
    session::{Key, Session},
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};

const POLL_INTERVAL_MS: u64 = 100;

/// minimal typing speed test with per-character feedback
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A minimal typing speed test. A shuffled passage of dictionary words is shown; type it through and get words-per-minute and accuracy at the end."
)]
pub struct Cli {
    /// number of words to use in a round (defaults to the saved config)
    #[clap(short = 'w', long)]
    number_of_words: Option<usize>,

    /// custom target text to type instead of dictionary words
    #[clap(short = 'p', long)]
    prompt: Option<String>,

    /// dictionary to pull words from
    #[clap(short = 'l', long)]
    dictionary: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Intro,
    Typing,
    Results,
}

#[derive(Debug)]
pub struct App {
    pub cli: Cli,
    pub config: Config,
    pub dictionary: Dictionary,
    pub session: Option<Session>,
    pub score: Option<Score>,
    pub state: AppState,
}

impl App {
    pub fn new(cli: Cli, config: Config, dictionary: Dictionary) -> Self {
        Self {
            cli,
            config,
            dictionary,
            session: None,
            score: None,
            state: AppState::Intro,
        }
    }

    /// Begin a round with a fresh target text.
    pub fn start_round(&mut self) {
        let target = match self.cli.prompt.clone() {
            Some(p) => p.to_lowercase(),
            None => self.dictionary.target_text(self.config.number_of_words),
        };

        self.session = Some(Session::new(target));
        self.score = None;
        self.state = AppState::Typing;
    }

    /// Discard the current session/score and return to the pre-round state.
    pub fn restart(&mut self) {
        self.session = None;
        self.score = None;
        self.state = AppState::Intro;
    }

    /// Feed one session key to the current round; switches to the results
    /// screen when the cursor reaches the end of the target.
    pub fn press(&mut self, key: Key) {
        if let Some(session) = self.session.as_mut() {
            session.press(key);

            if session.has_finished() {
                self.score = Some(Score::from_round(&session.slots, session.elapsed_ms()));
                self.state = AppState::Results;
            }
        }
    }

    /// Dispatch one terminal key event to the current screen. Returns true
    /// when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        match self.state {
            AppState::Intro => match key.code {
                KeyCode::Esc => return true,
                KeyCode::Char(' ') => self.start_round(),
                _ => {}
            },
            AppState::Typing => match key.code {
                KeyCode::Esc => return true,
                KeyCode::Backspace => self.press(Key::Backspace),
                KeyCode::Char(c) => {
                    // The terminal hands us raw characters; the session
                    // only understands lowercase letters and space, so
                    // normalize case here and drop everything else.
                    if let Some(k) = Key::from_char(c.to_ascii_lowercase()) {
                        self.press(k);
                    }
                }
                _ => {}
            },
            AppState::Results => match key.code {
                KeyCode::Esc => return true,
                KeyCode::Char(' ') => self.restart(),
                _ => {}
            },
        }

        false
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let loaded = store.load();
    let config = loaded
        .clone()
        .with_overrides(cli.number_of_words, cli.dictionary.clone());

    // Resolve the dictionary before the terminal goes into raw mode, so an
    // unknown name exits with a normal error instead of stranding the
    // terminal on the alternate screen.
    let dictionary = match Dictionary::new(&config.dictionary) {
        Ok(d) => d,
        Err(e) => {
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::InvalidValue, e.to_string()).exit();
        }
    };

    // Overrides become the new defaults once they are known to be valid.
    if config != loaded {
        let _ = store.save(&config);
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(cli, config, dictionary);
    let runner = Runner::new(
        CrosstermEventSource::new(),
        Duration::from_millis(POLL_INTERVAL_MS),
    );
    let res = run_app(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    loop {
        match runner.step() {
            AppEvent::Tick => {}
            AppEvent::Resize => {
                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
            AppEvent::Key(key) => {
                if app.handle_key(key) {
                    break;
                }

                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
        }
    }

    Ok(())
}
