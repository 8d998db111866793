use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::view::HeaderView;

pub fn render(frame: &mut Frame, area: Rect, header: &HeaderView) {
    let widget = Paragraph::new(Line::from(Span::styled(
        header.title.to_uppercase(),
        Style::default().fg(Color::Yellow).bold(),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}
