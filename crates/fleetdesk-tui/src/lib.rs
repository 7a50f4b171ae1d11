// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use fleetdesk_app::{
    AppCommand, AppState, BrowserCommand, BrowserView, DetailValue, DetailView, Fleet,
    FleetSnapshot, Focus, ScreenKind,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

const CURSOR_MARK: &str = "▸";
const SELECTED_MARK: &str = "●";
const FILTER_MARK: &str = "▼";
const SEARCH_CARET: &str = "▏";
const STATUS_CLEAR_AFTER: Duration = Duration::from_secs(4);

/// What the terminal host needs from the outside world.
pub trait AppRuntime {
    fn load_snapshot(&mut self) -> Result<FleetSnapshot>;

    /// Human-readable name of the data source, shown in the title bar.
    fn source_label(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Default)]
struct ViewData {
    fleet: Fleet,
    cursors: [usize; ScreenKind::ALL.len()],
    help_visible: bool,
    status_token: u64,
    source_label: String,
}

impl ViewData {
    fn cursor(&self, screen: ScreenKind) -> usize {
        self.cursors[screen.position()]
    }

    fn set_cursor(&mut self, screen: ScreenKind, cursor: usize) {
        self.cursors[screen.position()] = cursor;
    }

    fn active_view<'a>(&'a self, state: &AppState) -> &'a dyn BrowserView {
        self.fleet.view(state.active_screen)
    }
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    if let Err(error) = refresh_view_data(runtime, &mut view_data) {
        warn!(error = %format!("{error:#}"), "initial load failed");
        emit_status(
            state,
            &mut view_data,
            &internal_tx,
            format!("load failed: {error:#}"),
        );
    }

    let mut result = Ok(());
    loop {
        process_internal_events(state, &view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        match next_key_event(event::poll, event::read) {
            Ok(Some(key)) => {
                if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                    break;
                }
            }
            Ok(None) => {}
            Err(error) => {
                result = Err(error);
                break;
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

/// Waits one poll interval for input. Non-key events are swallowed.
fn next_key_event<P, E>(mut poll: P, mut read: E) -> Result<Option<KeyEvent>>
where
    P: FnMut(Duration) -> io::Result<bool>,
    E: FnMut() -> io::Result<Event>,
{
    if !poll(Duration::from_millis(120)).context("poll event")? {
        return Ok(None);
    }
    match read().context("read event")? {
        Event::Key(key) => Ok(Some(key)),
        _ => Ok(None),
    }
}

fn refresh_view_data<R: AppRuntime>(runtime: &mut R, view_data: &mut ViewData) -> Result<()> {
    view_data.source_label = runtime.source_label();
    let snapshot = runtime
        .load_snapshot()
        .with_context(|| format!("load records from {}", view_data.source_label))?;
    view_data.fleet.replace(snapshot);
    for screen in ScreenKind::ALL {
        clamp_cursor(view_data, screen);
    }
    Ok(())
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(STATUS_CLEAR_AFTER);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

/// Returns true when the app should quit.
fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('q')) {
        return true;
    }

    if view_data.help_visible {
        view_data.help_visible = false;
        return false;
    }

    if view_data.active_view(state).is_disclosed() {
        handle_disclosure_key(state, view_data, key);
        return false;
    }

    match state.focus {
        Focus::Search => {
            handle_search_key(state, view_data, key);
            false
        }
        Focus::List => handle_list_key(state, runtime, view_data, internal_tx, key),
    }
}

fn handle_disclosure_key(state: &AppState, view_data: &mut ViewData, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('x')
    ) {
        view_data
            .fleet
            .view_mut(state.active_screen)
            .dispatch(BrowserCommand::Dismiss);
    }
}

fn handle_search_key(state: &mut AppState, view_data: &mut ViewData, key: KeyEvent) {
    let screen = state.active_screen;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let mut query = view_data.fleet.view(screen).query().to_owned();

    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            state.dispatch(AppCommand::FocusList);
            return;
        }
        KeyCode::Char('u') if ctrl => query.clear(),
        KeyCode::Char(ch) if !ctrl => query.push(ch),
        KeyCode::Backspace => {
            query.pop();
        }
        _ => return,
    }

    let events = view_data
        .fleet
        .view_mut(screen)
        .dispatch(BrowserCommand::SetQuery(query));
    if !events.is_empty() {
        view_data.set_cursor(screen, 0);
    }
}

fn handle_list_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('r') if ctrl => reload(state, runtime, view_data, internal_tx),
        KeyCode::Char('q') if !ctrl => return true,
        KeyCode::Char('b') | KeyCode::Left | KeyCode::BackTab => {
            state.dispatch(AppCommand::PrevScreen);
        }
        KeyCode::Char('f') | KeyCode::Right | KeyCode::Tab => {
            state.dispatch(AppCommand::NextScreen);
        }
        KeyCode::Char(digit @ '1'..='5') => {
            let index = (digit as usize) - ('1' as usize);
            if let Some(screen) = ScreenKind::ALL.get(index) {
                state.dispatch(AppCommand::GoToScreen(*screen));
            }
        }
        KeyCode::Char('j') | KeyCode::Down => move_cursor(state, view_data, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(state, view_data, -1),
        KeyCode::Char('g') | KeyCode::Home => view_data.set_cursor(state.active_screen, 0),
        KeyCode::Char('G') | KeyCode::End => {
            let len = view_data.active_view(state).visible_summaries().len();
            view_data.set_cursor(state.active_screen, len.saturating_sub(1));
        }
        KeyCode::Char('/') => {
            state.dispatch(AppCommand::FocusSearch);
        }
        KeyCode::Char('?') => view_data.help_visible = true,
        KeyCode::Enter => open_cursor_record(state, view_data),
        _ => {}
    }
    false
}

fn move_cursor(state: &AppState, view_data: &mut ViewData, delta: isize) {
    let screen = state.active_screen;
    let len = view_data.fleet.view(screen).visible_summaries().len();
    if len == 0 {
        view_data.set_cursor(screen, 0);
        return;
    }
    let next = view_data
        .cursor(screen)
        .saturating_add_signed(delta)
        .min(len - 1);
    view_data.set_cursor(screen, next);
}

fn clamp_cursor(view_data: &mut ViewData, screen: ScreenKind) {
    let len = view_data.fleet.view(screen).visible_summaries().len();
    let cursor = view_data.cursor(screen).min(len.saturating_sub(1));
    view_data.set_cursor(screen, cursor);
}

fn open_cursor_record(state: &AppState, view_data: &mut ViewData) {
    let screen = state.active_screen;
    let cursor = view_data.cursor(screen);
    let Some(id) = view_data
        .fleet
        .view(screen)
        .visible_summaries()
        .into_iter()
        .nth(cursor)
        .map(|summary| summary.id)
    else {
        return;
    };
    debug!(screen = screen.label(), id = %id, "opening record");
    view_data
        .fleet
        .view_mut(screen)
        .dispatch(BrowserCommand::Select(id));
}

fn reload<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    match refresh_view_data(runtime, view_data) {
        Ok(()) => {
            let count = view_data.active_view(state).record_count();
            info!(source = %view_data.source_label, "reloaded fleet records");
            let message = format!(
                "reloaded {count} {} from {}",
                state.active_screen.label(),
                view_data.source_label
            );
            emit_status(state, view_data, internal_tx, message);
        }
        Err(error) => {
            warn!(error = %format!("{error:#}"), "reload failed");
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("reload failed: {error:#}"),
            );
        }
    }
}

fn tab_title(screen: ScreenKind, view_data: &ViewData) -> String {
    let label = format!("{} {}", screen.position() + 1, screen.label());
    if view_data.fleet.view(screen).query().is_empty() {
        format!(" {label} ")
    } else {
        format!(" {label} {FILTER_MARK} ")
    }
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let tab_titles = ScreenKind::ALL
        .iter()
        .map(|screen| tab_title(*screen, view_data))
        .collect::<Vec<String>>();
    let tabs = Tabs::new(tab_titles)
        .block(
            Block::default()
                .title(title_text(view_data))
                .borders(Borders::ALL),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(state.active_screen.position());
    frame.render_widget(tabs, layout[0]);

    let search_style = if state.focus == Focus::Search {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let search = Paragraph::new(render_search_text(state, view_data)).block(
        Block::default()
            .title("search")
            .borders(Borders::ALL)
            .border_style(search_style),
    );
    frame.render_widget(search, layout[1]);

    let view = view_data.active_view(state);
    let list = render_list_text(view, view_data.cursor(state.active_screen));
    let visible_rows = usize::from(layout[2].height.saturating_sub(2));
    let scroll = list_scroll(list.cursor_line, visible_rows);
    let body = Paragraph::new(list.text)
        .scroll((scroll, 0))
        .block(
            Block::default()
                .title(state.active_screen.label())
                .borders(Borders::ALL),
        );
    frame.render_widget(body, layout[2]);

    let status_widget = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(status_widget, layout[3]);

    if let Some(detail) = view.disclosed_detail() {
        let area = centered_rect(70, 76, frame.area());
        frame.render_widget(Clear, area);
        let overlay = Paragraph::new(render_detail_overlay_text(&detail))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(detail.title.clone())
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(overlay, area);
    }

    if view_data.help_visible {
        let area = centered_rect(72, 56, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn title_text(view_data: &ViewData) -> String {
    if view_data.source_label.is_empty() {
        "fleetdesk".to_owned()
    } else {
        format!("fleetdesk · {}", view_data.source_label)
    }
}

fn render_search_text(state: &AppState, view_data: &ViewData) -> String {
    let query = view_data.active_view(state).query();
    let focused = state.focus == Focus::Search;
    match (query.is_empty(), focused) {
        (true, false) => state.active_screen.search_hint().to_owned(),
        (_, true) => format!("{query}{SEARCH_CARET}"),
        (false, false) => query.to_owned(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ListText {
    text: String,
    cursor_line: usize,
}

fn render_list_text(view: &dyn BrowserView, cursor: usize) -> ListText {
    let summaries = view.visible_summaries();
    let label = view.screen().label();
    if summaries.is_empty() {
        let text = if view.record_count() == 0 {
            format!("no {label} records")
        } else {
            format!("nothing in {label} matches \"{}\"", view.query())
        };
        return ListText {
            text,
            cursor_line: 0,
        };
    }

    let mut lines = Vec::new();
    let mut cursor_line = 0;
    for (index, summary) in summaries.iter().enumerate() {
        let marker = if index == cursor {
            cursor_line = lines.len();
            CURSOR_MARK
        } else {
            " "
        };
        if view.selection() == Some(&summary.id) {
            lines.push(format!("{marker} {} {SELECTED_MARK}", summary.headline));
        } else {
            lines.push(format!("{marker} {}", summary.headline));
        }
        lines.extend(summary.lines.iter().map(|line| format!("    {line}")));
    }
    lines.push(String::new());
    lines.push(format!(
        "{} of {} {label}",
        summaries.len(),
        view.record_count()
    ));

    ListText {
        text: lines.join("\n"),
        cursor_line,
    }
}

fn list_scroll(cursor_line: usize, visible_rows: usize) -> u16 {
    // Keep a few rows of the cursor card in view.
    let offset = cursor_line.saturating_sub(visible_rows.saturating_sub(4));
    u16::try_from(offset).unwrap_or(u16::MAX)
}

fn render_detail_overlay_text(detail: &DetailView) -> String {
    let mut lines = Vec::new();
    for section in &detail.sections {
        if let Some(heading) = section.heading {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(heading.to_uppercase());
        }
        for row in &section.rows {
            match &row.value {
                DetailValue::Text(value) => lines.push(format!("{}: {value}", row.label)),
                DetailValue::Lines(items) if items.is_empty() => {
                    lines.push(format!("{}: none", row.label));
                }
                DetailValue::Lines(items) => {
                    lines.push(format!("{}:", row.label));
                    lines.extend(
                        items
                            .iter()
                            .map(|item| format!("  {}: {}", item.label, item.value)),
                    );
                }
            }
        }
    }
    lines.push(String::new());
    lines.push("esc/enter/q/x close".to_owned());
    lines.join("\n")
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if view_data.help_visible {
        return String::new();
    }

    let (mode, hints) = if view_data.active_view(state).is_disclosed() {
        ("DETAIL", "esc/enter/q/x close | ctrl+q quit")
    } else if state.focus == Focus::Search {
        (
            "SEARCH",
            "type to filter | backspace | ctrl+u clear | enter/esc done",
        )
    } else {
        (
            "LIST",
            "j/k g/G | enter open | / search | b/f 1-5 | ctrl+r reload | ? help | q quit",
        )
    };
    match &state.status_line {
        Some(status) => format!("{mode} | {status} | {hints}"),
        None => format!("{mode} | {hints}"),
    }
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q quit | ? help\n\
screens: b/f left/right tab/shift+tab switch | 1-5 jump\n\
list: j/k up/down move | g/G first/last | enter open | / search | ctrl+r reload | q quit\n\
search: type to filter | backspace delete | ctrl+u clear | enter/esc back to list\n\
detail: esc/enter/q/x close\n\
help: any key close"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
