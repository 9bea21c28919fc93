use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;

use scouting_madrid::config::AppConfig;
use scouting_madrid::dataset::cached_dataset;
use scouting_madrid::export::export_workbook;
use scouting_madrid::filter::FilterPipeline;
use scouting_madrid::persist;
use scouting_madrid::state::{AppState, Focus, Screen};
use scouting_madrid::ui;

struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    fn new(state: AppState) -> Self {
        Self {
            state,
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.help_overlay {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.state.help_overlay = false;
                if !self.state.help_seen {
                    self.state.help_seen = true;
                    self.save_prefs();
                }
            } else if key.code == KeyCode::Char('q') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.state.help_overlay = true,
            KeyCode::Char('1') | KeyCode::Esc => self.state.set_screen(Screen::Scouting),
            KeyCode::Char('2') => self.state.set_screen(Screen::Comparison),
            KeyCode::Char('e') | KeyCode::Char('E') => self.export(),
            _ if self.state.screen == Screen::Scouting => self.on_scouting_key(key),
            _ => {}
        }
    }

    fn on_scouting_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.state.focus_next(),
            KeyCode::BackTab => self.state.focus_prev(),
            KeyCode::Left | KeyCode::Char('h') => self.state.adjust_focused(false),
            KeyCode::Right | KeyCode::Char('l') => self.state.adjust_focused(true),
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.focus = Focus::Players;
                self.state.select_player_next();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.focus = Focus::Players;
                self.state.select_player_prev();
            }
            KeyCode::Char(' ') => self.state.toggle_pick(),
            KeyCode::Char('c') | KeyCode::Enter => self.state.set_screen(Screen::Comparison),
            KeyCode::Char('m') => self.state.toggle_range_edge(),
            KeyCode::Char('t') => self.state.next_tab(),
            KeyCode::Char('g') => {
                self.state.toggle_scorer_metric();
                self.save_prefs();
            }
            KeyCode::Char('r') => self.state.reset_filters(),
            _ => {}
        }
    }

    fn save_prefs(&mut self) {
        if let Err(err) = persist::save_from_state(&self.state) {
            self.state.push_log(format!("[WARN] Preferences not saved: {err:#}"));
        }
    }

    fn export(&mut self) {
        let dataset = self.state.dataset.clone();
        let outcome = FilterPipeline::run(&dataset.records, &self.state.filter);
        let result = export_workbook(
            &self.state.config.export_dir,
            &outcome.rows,
            &self.state.view.report,
            self.state.comparison.as_ref().ok(),
        );
        match result {
            Ok(report) => self.state.push_log(format!(
                "[INFO] Exported {} players, {} sheets to {}",
                report.filtered_rows,
                report.sheets.len(),
                report.path.display()
            )),
            Err(err) => self.state.push_log(format!("[WARN] Export failed: {err:#}")),
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AppConfig::from_env().with_args(&args);
    let dataset = match cached_dataset(&config.data_path) {
        Ok(dataset) => dataset,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    };

    let mut state = AppState::new(dataset, config);
    persist::load_into_state(&mut state);
    state.refresh_view();
    if !state.help_seen {
        state.help_overlay = true;
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App::new(state);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = persist::save_from_state(&app.state) {
        eprintln!("warning: {err:#}");
    }

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app.state))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.on_key(key);
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
