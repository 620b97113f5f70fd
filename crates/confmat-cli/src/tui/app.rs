//! TUI application state and event loop.
//!
//! Design: a four-field form. Each field holds a non-negative integer typed
//! digit by digit; Enter runs calculate → render on the current counts.
//! Editing any field clears the previous result, so what is on screen always
//! matches the inputs it was computed from.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use confmat_core::{ConfusionCounts, Evaluation};

/// Input labels, in form order.
pub const FIELD_LABELS: [&str; 4] = [
    "True Positives (TP)",
    "False Negatives (FN)",
    "True Negatives (TN)",
    "False Positives (FP)",
];

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

/// Which form control receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(usize),
    Calculate,
}

impl Default for Focus {
    fn default() -> Self {
        Self::Field(0)
    }
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Field(i) if i + 1 < FIELD_LABELS.len() => Self::Field(i + 1),
            Self::Field(_) => Self::Calculate,
            Self::Calculate => Self::Field(0),
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Field(0) => Self::Calculate,
            Self::Field(i) => Self::Field(i - 1),
            Self::Calculate => Self::Field(FIELD_LABELS.len() - 1),
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    inputs: [String; 4],
    focus: Focus,
    running: bool,
    evaluation: Option<Evaluation>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            inputs: Default::default(),
            focus: Focus::default(),
            running: true,
            evaluation: None,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook that restores terminal before printing the panic.
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
            original_hook(info);
        }));

        let result = self.run_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error.
        let _ = std::panic::take_hook();
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;

        if let Some(e) = &self.evaluation {
            println!("{}", e.rates);
        }

        result
    }

    fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        while self.running {
            terminal.draw(|f| super::ui::draw(f, self))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Up | KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Down | KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::Enter => self.calculate(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Focus::Field(i) = self.focus {
                    self.push_digit(i, c);
                }
            }
            KeyCode::Backspace => {
                if let Focus::Field(i) = self.focus {
                    if self.inputs[i].pop().is_some() {
                        self.evaluation = None;
                    }
                }
            }
            _ => {}
        }
    }

    /// Append a digit to field `i` unless the value would overflow `u64`.
    fn push_digit(&mut self, i: usize, c: char) {
        let mut candidate = if self.inputs[i] == "0" {
            String::new()
        } else {
            self.inputs[i].clone()
        };
        candidate.push(c);
        if candidate.parse::<u64>().is_ok() && candidate != self.inputs[i] {
            self.inputs[i] = candidate;
            self.evaluation = None;
        }
    }

    /// Re-run the full pipeline on the current inputs.
    pub fn calculate(&mut self) {
        let counts = self.counts();
        log::debug!("calculate {counts:?}");
        self.evaluation = Some(counts.evaluate());
    }

    /// Current inputs as counts; an empty field reads as 0.
    pub fn counts(&self) -> ConfusionCounts {
        let v = |i: usize| self.inputs[i].parse::<u64>().unwrap_or(0);
        ConfusionCounts::new(v(0), v(1), v(2), v(3))
    }

    pub fn input(&self, i: usize) -> &str {
        &self.inputs[i]
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    fn fill(app: &mut App, values: [&str; 4]) {
        for v in values {
            type_str(app, v);
            app.handle_key(KeyCode::Tab);
        }
    }

    #[test]
    fn focus_cycles_forward_and_back() {
        let mut f = Focus::default();
        assert_eq!(f, Focus::Field(0));
        for i in 1..4 {
            f = f.next();
            assert_eq!(f, Focus::Field(i));
        }
        f = f.next();
        assert_eq!(f, Focus::Calculate);
        assert_eq!(f.next(), Focus::Field(0));
        assert_eq!(Focus::Field(0).prev(), Focus::Calculate);
        assert_eq!(Focus::Calculate.prev(), Focus::Field(3));
    }

    #[test]
    fn typing_fills_fields_in_order() {
        let mut app = App::new();
        fill(&mut app, ["50", "10", "30", "5"]);
        assert_eq!(app.focus(), Focus::Calculate);
        assert_eq!(app.counts(), ConfusionCounts::new(50, 10, 30, 5));
    }

    #[test]
    fn enter_calculates_scenario_a() {
        let mut app = App::new();
        fill(&mut app, ["50", "10", "30", "5"]);
        app.handle_key(KeyCode::Enter);
        let e = app.evaluation().expect("evaluation after Enter");
        assert_eq!(format!("{:.2}", e.rates.sensitivity), "83.33");
        assert_eq!(format!("{:.2}", e.rates.specificity), "85.71");
        assert_eq!(e.grid.values, [[50.0, 10.0, 60.0], [5.0, 30.0, 35.0]]);
    }

    #[test]
    fn empty_fields_read_as_zero() {
        let mut app = App::new();
        app.handle_key(KeyCode::Enter);
        let e = app.evaluation().unwrap();
        assert_eq!(e.counts, ConfusionCounts::default());
        assert_eq!(e.rates.sensitivity, 0.0);
        assert_eq!(e.rates.specificity, 0.0);
    }

    #[test]
    fn non_digits_are_ignored() {
        let mut app = App::new();
        type_str(&mut app, "-4.2x");
        assert_eq!(app.input(0), "42");
    }

    #[test]
    fn leading_zero_is_replaced() {
        let mut app = App::new();
        type_str(&mut app, "007");
        assert_eq!(app.input(0), "7");
    }

    #[test]
    fn overflow_is_refused() {
        let mut app = App::new();
        type_str(&mut app, &u64::MAX.to_string());
        assert_eq!(app.input(0), u64::MAX.to_string());
        type_str(&mut app, "9");
        assert_eq!(app.input(0), u64::MAX.to_string());
    }

    #[test]
    fn editing_clears_previous_result() {
        let mut app = App::new();
        type_str(&mut app, "3");
        app.handle_key(KeyCode::Enter);
        assert!(app.evaluation().is_some());
        app.handle_key(KeyCode::Backspace);
        assert!(app.evaluation().is_none());
        assert_eq!(app.input(0), "");

        app.handle_key(KeyCode::Enter);
        type_str(&mut app, "1");
        assert!(app.evaluation().is_none());
    }

    #[test]
    fn digits_on_button_do_nothing() {
        let mut app = App::new();
        app.handle_key(KeyCode::BackTab);
        assert_eq!(app.focus(), Focus::Calculate);
        type_str(&mut app, "12");
        assert_eq!(app.counts(), ConfusionCounts::default());
    }

    #[test]
    fn recalculating_is_idempotent() {
        let mut app = App::new();
        fill(&mut app, ["7", "3", "9", "1"]);
        app.handle_key(KeyCode::Enter);
        let first = app.evaluation().cloned();
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.evaluation().cloned(), first);
    }

    #[test]
    fn quit_keys_stop_the_loop() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('q'));
        assert!(!app.is_running());
        let mut app = App::new();
        app.handle_key(KeyCode::Esc);
        assert!(!app.is_running());
    }
}
