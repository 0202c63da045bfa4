//! Terminal setup, main loop, and rendering.

use super::app::App;
use super::constants::{MIN_HEIGHT, MIN_WIDTH};
use super::events::{handle_key_event, Event, EventHandler};
use super::theme::{colors, render_footer_hints, FooterHints, Styles};
use crate::sort::{SortColumn, SortSpec};
use crate::store::ViewState;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use std::io::{self, stdout};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Run the browser until the user quits.
pub fn run_tui(app: &mut App, tick_rate_ms: u64) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app, &EventHandler::new(tick_rate_ms));

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Resize(_, _) => {}
            Event::Tick => app.on_tick(),
        }
        app.sync();

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Main render function
fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_size_warning(frame, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    match app.view.sort() {
        Some(sort) => render_table(frame, chunks[1], app, sort),
        None if app.view.is_failed() => render_failed(frame, chunks[1]),
        None => render_loading(frame, chunks[1], app.tick),
    }
    render_footer(frame, chunks[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(" fetchlist ", Styles::header_title()),
        Span::styled(app.source_label.clone(), Styles::text_muted()),
    ];
    if let ViewState::Ready { items, .. } = &app.view {
        spans.push(Span::styled(
            format!("  {} records", items.len()),
            Styles::text(),
        ));
    }
    if let Some(loaded_at) = app.loaded_at {
        spans.push(Span::styled(
            format!("  loaded {}", loaded_at.format("%H:%M:%S")),
            Styles::text_muted(),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(header, area);
}

fn render_loading(frame: &mut Frame, area: Rect, tick: u64) {
    let spinner = SPINNER[(tick % SPINNER.len() as u64) as usize];
    let text = vec![
        Line::from(""),
        Line::styled(format!("{spinner} Loading records..."), Styles::text()),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        );
    frame.render_widget(paragraph, area);
}

fn render_failed(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::styled("Could not load the record list", Styles::error()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Styles::text_muted()),
            Span::styled("r", Styles::shortcut_key()),
            Span::styled(" to retry", Styles::text_muted()),
        ]),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors().error)),
        );
    frame.render_widget(paragraph, area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &mut App, sort: SortSpec) {
    let items = app.view.items();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border_focused());

    if items.is_empty() {
        let paragraph = Paragraph::new("No named records")
            .alignment(Alignment::Center)
            .style(Styles::text_muted())
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    // Borders plus the header row and its margin
    let visible = usize::from(area.height.saturating_sub(4));
    let offset = app.list.visible_offset(visible);
    let end = (offset + visible).min(items.len());

    let rows: Vec<Row> = items[offset..end]
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.group_id.to_string()),
                Cell::from(record.name.clone()),
            ])
            .style(Styles::text())
        })
        .collect();

    let header = Row::new(vec![
        header_cell(SortColumn::Group, sort),
        header_cell(SortColumn::Name, sort),
    ])
    .bottom_margin(1);

    let widths = [Constraint::Length(12), Constraint::Min(10)];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Styles::selected());

    let mut state = TableState::default().with_selected(Some(app.list.selected.saturating_sub(offset)));
    frame.render_stateful_widget(table, area, &mut state);
}

fn header_cell(column: SortColumn, sort: SortSpec) -> Cell<'static> {
    let active = sort.active_column() == Some(column);
    Cell::from(sort.heading(column)).style(Styles::column_header(active))
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(msg) = &app.status_message {
        Line::from(Span::styled(format!(" {msg}"), Styles::success()))
    } else {
        let hints = match app.view {
            ViewState::Failed => FooterHints::failed(),
            ViewState::Loading => vec![("q", "quit")],
            ViewState::Ready { .. } => FooterHints::ready(),
        };
        Line::from(render_footer_hints(&hints))
    };
    frame.render_widget(Paragraph::new(line).style(Styles::status_bar()), area);
}

/// Render a "terminal too small" message.
fn render_size_warning(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled("Terminal too small", Styles::warning().bold()),
        Line::from(format!("{}x{}", area.width, area.height)),
        Line::styled(
            format!("need {MIN_WIDTH}x{MIN_HEIGHT}"),
            Styles::text_muted(),
        ),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortDirection;

    #[test]
    fn test_spinner_wraps() {
        for tick in 0..10u64 {
            let frame = SPINNER[(tick % SPINNER.len() as u64) as usize];
            assert_eq!(frame.len(), 1);
        }
    }

    #[test]
    fn test_descending_column_is_the_active_header() {
        let sort = SortSpec::new(SortDirection::Ascending, SortDirection::Descending);
        assert_eq!(sort.active_column(), Some(SortColumn::Name));
        assert_eq!(sort.heading(SortColumn::Name), "Name ↓");
        assert_eq!(sort.heading(SortColumn::Group), "List ID ↑");
    }
}
