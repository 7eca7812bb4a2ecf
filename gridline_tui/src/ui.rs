//! Stateless rendering of the board, status, and move list.

use gridline::{Player, view};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::App;

/// Draws the whole screen: title, board pane, info pane, key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board + info
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    let title = Paragraph::new("Gridline - N in a Row")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_board(frame, panes[0], app);
    draw_info(frame, panes[1], app);

    let help = Paragraph::new("arrows move  enter place  [/] step  home/end jump  s sort  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let size = game.config().size;
    let cells = view::cells(game);
    let cursor = app.cursor();

    let mut lines: Vec<Line> = Vec::new();
    for row in 0..size {
        let mut spans: Vec<Span> = Vec::new();
        for col in 0..size {
            let cell = cells[row * size + col];
            let symbol = match cell.occupant {
                Some(Player::X) => " X ",
                Some(Player::O) => " O ",
                None => " · ",
            };
            let mut style = match cell.occupant {
                Some(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                Some(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                None => Style::default().fg(Color::DarkGray),
            };
            if cell.winning {
                style = Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD);
            }
            if (row, col) == cursor {
                style = style.bg(Color::White).fg(Color::Black);
            }
            spans.push(Span::styled(symbol, style));
            if col + 1 < size {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
        }
        lines.push(Line::from(spans));
        if row + 1 < size {
            lines.push(separator_line(size));
        }
    }

    let width = (size * 4 - 1) as u16;
    let height = (size * 2 - 1) as u16;
    let board = Paragraph::new(lines);
    frame.render_widget(board, center_rect(area, width, height));
}

fn separator_line(size: usize) -> Line<'static> {
    let mut text = String::new();
    for col in 0..size {
        text.push_str("───");
        if col + 1 < size {
            text.push('┼');
        }
    }
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Length(1), // Sort order
            Constraint::Min(3),    // Move list
        ])
        .split(area);

    let status = Paragraph::new(view::status(game))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[0]);

    let order = if game.sort_ascending() {
        "ascending"
    } else {
        "descending"
    };
    let sort = Paragraph::new(format!("Sort: {order}"))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sort, chunks[1]);

    let items: Vec<ListItem> = view::moves(game)
        .into_iter()
        .map(|label| {
            let style = if label.current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(label.text, style)))
        })
        .collect();
    let list = List::new(items).block(Block::default().title("Moves").borders(Borders::ALL));
    frame.render_widget(list, chunks[2]);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
