use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::wrapped_rows;
use crate::view::{FooterView, ORDER_BUTTON};

/// Rows needed to show the whole footer at `width`: top border, message and
/// the order button when open.
pub fn height(footer: &FooterView, width: u16) -> u16 {
    let button = u16::from(footer.is_open());
    wrapped_rows(&footer.message(), width)
        .saturating_add(1)
        .saturating_add(button)
}

pub fn render(frame: &mut Frame, area: Rect, footer: &FooterView) {
    let mut content = vec![Line::from(Span::styled(
        footer.message(),
        Style::default().fg(Color::Gray),
    ))];

    if footer.is_open() {
        content.push(Line::from(Span::styled(
            format!("[ {} ]", ORDER_BUTTON),
            Style::default().fg(Color::Black).bg(Color::Yellow).bold(),
        )));
    }

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, area);
}
