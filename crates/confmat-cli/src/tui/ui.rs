//! TUI rendering for the calculator form.
//!
//! ┌──────────────────────────────────────────────────────────┐
//! │  confmat  Sensitivity and Specificity Calculator         │
//! ├─────────────────────────────────────┬────────────────────┤
//! │  ╭ True Positives (TP) ╮            │  Confusion Matrix  │
//! │  ╭ False Negatives (FN) ╮           │                    │
//! │  ╭ True Negatives (TN) ╮            │   TP  FN           │
//! │  ╭ False Positives (FP) ╮           │   FP  TN           │
//! │        [ Calculate ]                │                    │
//! │  Sensitivity: 83.33                 │                    │
//! │  Specificity: 85.71                 │                    │
//! │  ╭ Confusion Matrix with Totals ╮   │                    │
//! ├─────────────────────────────────────┴────────────────────┤
//! │  ↑↓/tab move   0-9 edit   enter: calculate   q: quit     │
//! └──────────────────────────────────────────────────────────┘

use super::app::{App, FIELD_LABELS, Focus};
use confmat_core::colormap::{BOX_ALPHA, Rgb};
use confmat_core::{AnnotatedGrid, blues};
use ratatui::{prelude::*, widgets::*};

pub fn draw(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(10),   // main
            Constraint::Length(1), // keys
        ])
        .split(f.area());

    draw_title(f, rows[0]);
    draw_main(f, rows[1], app);
    draw_keys(f, rows[2]);
}

fn draw_title(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Line::from(vec![
            Span::styled(" confmat ", Style::default().bold().fg(Color::Cyan)),
            Span::raw(" Sensitivity and Specificity Calculator "),
            Span::styled(
                format!(" v{} ", confmat_core::VERSION),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    f.render_widget(block, area);
}

fn draw_main(f: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // tp
            Constraint::Length(3), // fn
            Constraint::Length(3), // tn
            Constraint::Length(3), // fp
            Constraint::Length(3), // button
            Constraint::Length(4), // results
            Constraint::Min(9),    // heatmap
        ])
        .split(cols[0]);

    for (i, label) in FIELD_LABELS.iter().enumerate() {
        draw_field(f, left[i], app, i, label);
    }
    draw_button(f, left[4], app.focus() == Focus::Calculate);
    draw_results(f, left[5], app);
    draw_heatmap(f, left[6], app);
    draw_reference(f, cols[1]);
}

fn draw_field(f: &mut Frame, area: Rect, app: &App, i: usize, label: &str) {
    let focused = app.focus() == Focus::Field(i);
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let value = app.input(i);
    let mut spans = if value.is_empty() {
        vec![Span::styled("0", Style::default().fg(Color::DarkGray))]
    } else {
        vec![Span::raw(value)]
    };
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {label} "));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_button(f: &mut Frame, area: Rect, focused: bool) {
    let style = if focused {
        Style::default().bg(Color::Cyan).fg(Color::Black).bold()
    } else {
        Style::default().fg(Color::Cyan)
    };
    let p = Paragraph::new(Line::from(Span::styled("[ Calculate ]", style)).centered())
        .block(Block::default().padding(Padding::vertical(1)));
    f.render_widget(p, area);
}

fn draw_results(f: &mut Frame, area: Rect, app: &App) {
    let lines = match app.evaluation() {
        Some(e) => vec![
            Line::from(vec![
                Span::styled("Sensitivity: ", Style::default().bold()),
                Span::styled(
                    format!("{:.2}", e.rates.sensitivity),
                    Style::default().fg(Color::Green),
                ),
            ]),
            Line::from(vec![
                Span::styled("Specificity: ", Style::default().bold()),
                Span::styled(
                    format!("{:.2}", e.rates.specificity),
                    Style::default().fg(Color::Green),
                ),
            ]),
        ],
        None => vec![Line::from(Span::styled(
            "Press enter to calculate",
            Style::default().fg(Color::DarkGray),
        ))],
    };
    let block = Block::default().borders(Borders::ALL).title(" Results ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_heatmap(f: &mut Frame, area: Rect, app: &App) {
    let Some(e) = app.evaluation() else {
        let block = Block::default().borders(Borders::ALL).title(" Heatmap ");
        f.render_widget(block, area);
        return;
    };
    let grid = &e.grid;

    let header = Row::new(
        std::iter::once(String::new())
            .chain(grid.column_labels.iter().map(|l| l.to_string())),
    )
    .style(Style::default().bold());

    let rows: Vec<Row> = grid
        .rows()
        .enumerate()
        .map(|(row, (label, cells))| {
            let mut out = vec![Cell::from(Text::from(vec![
                Line::from(""),
                Line::from(label),
            ]))];
            out.extend(cells.iter().map(|c| heat_cell(grid, c)));
            Row::new(out).height(3)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(16), // row label
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", grid.title)),
    )
    .footer(
        Row::new(vec![String::new(), grid.x_label.to_string()])
            .style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(table, area);
}

/// One heatmap cell: Blues fill, value boxed in its category color.
fn heat_cell<'a>(grid: &AnnotatedGrid, cell: &confmat_core::Cell) -> Cell<'a> {
    let fill = blues(grid.intensity(cell.row, cell.col));
    let boxed = cell.category.treatment().box_color().over(fill, BOX_ALPHA);

    let mut value_style = Style::default().bg(color(boxed)).fg(Color::Black);
    if cell.category.is_total() {
        value_style = value_style.bold();
    }

    Cell::from(Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", cell.display_value()), value_style)).centered(),
        Line::from(""),
    ]))
    .style(Style::default().bg(color(fill)))
}

fn draw_reference(f: &mut Frame, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);
    let good = Style::default().fg(Color::Green).bold();
    let bad = Style::default().fg(Color::Red).bold();

    let lines = vec![
        Line::from(Span::styled("                 Predicted", dim)),
        Line::from(Span::styled("                 Pos    Neg", dim)),
        Line::from(vec![
            Span::styled("  Actual  Pos    ", dim),
            Span::styled("TP", good),
            Span::raw("     "),
            Span::styled("FN", bad),
        ]),
        Line::from(vec![
            Span::styled("          Neg    ", dim),
            Span::styled("FP", bad),
            Span::raw("     "),
            Span::styled("TN", good),
        ]),
        Line::from(""),
        Line::from("Sensitivity = TP / (TP + FN)"),
        Line::from("Specificity = TN / (TN + FP)"),
        Line::from(""),
        Line::from(Span::styled("Both are shown as percentages.", dim)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Confusion Matrix ");
    let p = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    f.render_widget(p, area);
}

fn draw_keys(f: &mut Frame, area: Rect) {
    let bar = Paragraph::new(
        " ↑↓/tab move   0-9 edit   backspace: delete   enter: calculate   q: quit",
    )
    .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(bar, area);
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn empty_form_prompts_for_calculation() {
        let screen = render(&App::new());
        assert!(screen.contains("True Positives (TP)"));
        assert!(screen.contains("False Positives (FP)"));
        assert!(screen.contains("[ Calculate ]"));
        assert!(screen.contains("Press enter to calculate"));
        assert!(!screen.contains("Sensitivity: "));
    }

    #[test]
    fn calculated_form_shows_rates_and_totals() {
        let mut app = App::new();
        for v in ["50", "10", "30", "5"] {
            for c in v.chars() {
                app.handle_key(KeyCode::Char(c));
            }
            app.handle_key(KeyCode::Tab);
        }
        app.handle_key(KeyCode::Enter);

        let screen = render(&app);
        assert!(screen.contains("Sensitivity: 83.33"));
        assert!(screen.contains("Specificity: 85.71"));
        assert!(screen.contains("Confusion Matrix with Totals"));
        assert!(screen.contains(" 60 "));
        assert!(screen.contains(" 35 "));
    }

    #[test]
    fn color_converts_channels() {
        assert_eq!(color(Rgb::new(1, 2, 3)), Color::Rgb(1, 2, 3));
    }
}
