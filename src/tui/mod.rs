// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nxqa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nxqa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The interactive query panel (ratatui + crossterm): a query input with a
//! submit affordance, the FAQ recall table, and the answer pane. The network
//! call is the only suspension point; it runs on the shared tokio runtime
//! while this loop keeps polling terminal events.

use std::{error::Error, io, sync::mpsc, sync::Arc, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
};

use crate::client::{QueryError, QueryService};
use crate::model::{QueryRequest, QueryResult, RecallItem};

#[cfg(test)]
mod tests;

const IDLE_LABEL: &str = "search";
const BUSY_LABEL: &str = "running";
const BUSY_NOTICE: &str = "A request is already running, wait for it to finish.";

const RECALL_HEADER: [&str; 6] = ["score", "question", "answer", "filename", "header", "product"];

const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🅽 🆇 🆀 🅰 ";
const AFFORDANCE_BUSY_COLOR: Color = Color::Yellow;
const ALT_ROW_COLOR: Color = Color::DarkGray;

type QueryOutcome = Result<QueryResult, QueryError>;

/// Submit affordance state. All guards and UI queries drive off this field,
/// never off a displayed label string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelState {
    Idle,
    Busy,
}

struct App {
    state: PanelState,
    query: String,
    recall: Vec<RecallItem>,
    answer: String,
    recall_state: TableState,
    notice: Option<String>,
    pending_request: Option<QueryRequest>,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        Self {
            state: PanelState::Idle,
            query: String::new(),
            recall: Vec::new(),
            answer: String::new(),
            recall_state: TableState::default(),
            notice: None,
            pending_request: None,
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // An open notice is blocking: only dismissal is accepted.
        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notice = None;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Up => self.scroll_recall(-1),
            KeyCode::Down => self.scroll_recall(1),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.query.clear();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.query.push(ch);
            }
            _ => {}
        }
    }

    /// Stages a request for the current query, or refuses re-entry while one
    /// is in flight. The query text is sent as-is: no trimming, no empty
    /// check, no length bound.
    fn submit(&mut self) {
        if self.state == PanelState::Busy {
            self.notice = Some(BUSY_NOTICE.to_owned());
            return;
        }

        self.state = PanelState::Busy;
        self.pending_request = Some(QueryRequest::new(self.query.clone()));
    }

    fn take_pending_request(&mut self) -> Option<QueryRequest> {
        self.pending_request.take()
    }

    /// Single continuation for both outcomes. The affordance returns to idle
    /// exactly once, before the outcome is inspected, so no completion path
    /// can leave the panel stuck on "running".
    fn finish_request(&mut self, outcome: QueryOutcome) {
        self.state = PanelState::Idle;

        match outcome {
            Ok(result) => {
                self.recall = result.faq_recall;
                self.answer = result.answer;
                self.recall_state = TableState::default();
                if !self.recall.is_empty() {
                    self.recall_state.select(Some(0));
                }
            }
            Err(err) => {
                self.notice = Some(err.to_string());
            }
        }
    }

    fn scroll_recall(&mut self, delta: i64) {
        if self.recall.is_empty() {
            return;
        }
        let last = self.recall.len() - 1;
        let current = self.recall_state.selected().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, last as i64) as usize;
        self.recall_state.select(Some(next));
    }
}

fn affordance_label(state: PanelState) -> &'static str {
    match state {
        PanelState::Idle => IDLE_LABEL,
        PanelState::Busy => BUSY_LABEL,
    }
}

fn view_title(label: &str, tail: Option<&str>) -> String {
    let mut title = format!("─ {label}");
    if let Some(tail) = tail {
        let tail = tail.trim();
        if !tail.is_empty() {
            title.push(' ');
            title.push_str(tail);
        }
    }
    title.push(' ');
    title
}

fn recall_row_cells(item: &RecallItem) -> [String; 6] {
    [
        item.score.to_string(),
        item.question.clone(),
        item.answer.clone(),
        item.filename.clone(),
        item.header.clone(),
        item.product.clone(),
    ]
}

/// Every other data row gets the alternate style, zero-indexed even rows
/// first. Cosmetic only.
fn recall_row_style(index: usize) -> Style {
    if index % 2 == 0 {
        Style::default().bg(ALT_ROW_COLOR)
    } else {
        Style::default()
    }
}

fn affordance_style(state: PanelState) -> Style {
    match state {
        PanelState::Idle => Style::default(),
        PanelState::Busy => Style::default().fg(AFFORDANCE_BUSY_COLOR),
    }
}

fn footer_help_line() -> Line<'static> {
    let key = Style::default().fg(FOOTER_KEY_COLOR);
    let label = Style::default().fg(FOOTER_LABEL_COLOR);
    Line::from(vec![
        Span::styled(FOOTER_BRAND, Style::default().fg(FOOTER_BRAND_COLOR)),
        Span::styled("Enter", key),
        Span::styled(" search · ", label),
        Span::styled("↑/↓", key),
        Span::styled(" scroll · ", label),
        Span::styled("Ctrl+U", key),
        Span::styled(" clear · ", label),
        Span::styled("Esc", key),
        Span::styled(" quit", label),
    ])
}

fn notice_area(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).min(60).max(area.width.min(20));
    let height = 5u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect { x, y, width, height }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(area);
    let input_area = layout[0];
    let recall_area = layout[1];
    let answer_area = layout[2];
    let footer_area = layout[3];

    let input_panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(13)])
        .split(input_area);

    let input = Paragraph::new(format!("{}▏", app.query))
        .block(Block::default().borders(Borders::ALL).title(view_title("Query", None)));
    frame.render_widget(input, input_panes[0]);

    let affordance = Paragraph::new(affordance_label(app.state))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(affordance_style(app.state)));
    frame.render_widget(affordance, input_panes[1]);

    let row_count_suffix = if app.recall.is_empty() {
        None
    } else {
        Some(format!("— {} rows", app.recall.len()))
    };
    let header = Row::new(RECALL_HEADER.iter().map(|cell| Cell::from(*cell)))
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows = app
        .recall
        .iter()
        .enumerate()
        .map(|(index, item)| Row::new(recall_row_cells(item)).style(recall_row_style(index)));
    let widths = [
        Constraint::Length(8),
        Constraint::Percentage(24),
        Constraint::Percentage(32),
        Constraint::Percentage(16),
        Constraint::Percentage(14),
        Constraint::Length(10),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title("FAQ Recall", row_count_suffix.as_deref())),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_stateful_widget(table, recall_area, &mut app.recall_state);

    let answer = Paragraph::new(app.answer.as_str())
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(view_title("Answer", None)));
    frame.render_widget(answer, answer_area);

    frame.render_widget(Paragraph::new(footer_help_line()), footer_area);

    if let Some(notice) = &app.notice {
        let modal_area = notice_area(area);
        frame.render_widget(Clear, modal_area);
        let notice_text = vec![
            Line::raw(notice.clone()),
            Line::styled("Enter to dismiss", Style::default().fg(Color::Gray)),
        ];
        let modal = Paragraph::new(notice_text).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title("Notice", None))
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(modal, modal_area);
    }
}

/// Runs the interactive query panel until the user quits.
///
/// Staged requests are dispatched on `runtime`; completions come back over a
/// channel and are drained once per tick, so at most one request is in flight
/// at a time through this loop.
pub fn run(
    service: Arc<dyn QueryService>,
    runtime: tokio::runtime::Handle,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new();
    let mut in_flight: Option<mpsc::Receiver<QueryOutcome>> = None;

    while !app.should_quit {
        let completed = match &in_flight {
            Some(receiver) => receiver.try_recv().ok(),
            None => None,
        };
        if let Some(outcome) = completed {
            app.finish_request(outcome);
            in_flight = None;
        }

        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }

        if let Some(request) = app.take_pending_request() {
            let (sender, receiver) = mpsc::channel();
            let service = service.clone();
            runtime.spawn(async move {
                let _ = sender.send(service.query(request).await);
            });
            in_flight = Some(receiver);
        }
    }

    Ok(())
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
