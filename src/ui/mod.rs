mod footer;
mod header;
mod menu;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::view::PageView;

pub fn render(frame: &mut Frame, page: &PageView, scroll: usize) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let inner_width = area.width.saturating_sub(2);
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(footer::height(&page.footer, inner_width)),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    header::render(frame, chunks[0], &page.header);
    menu::render(frame, chunks[1], &page.menu, scroll);
    footer::render(frame, chunks[2], &page.footer);
    render_controls(frame, chunks[3], page.footer.is_open());
}

fn render_controls(frame: &mut Frame, area: Rect, is_open: bool) {
    let text = if is_open {
        "j/k scroll  ·  o order  ·  q quit"
    } else {
        "j/k scroll  ·  q quit"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

/// Rows `text` occupies once word-wrapped to `width` columns.
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut rows: u16 = 1;
    let mut column = 0;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        if column == 0 {
            column = len;
        } else if column + 1 + len <= width {
            column += 1 + len;
        } else {
            rows = rows.saturating_add(1);
            column = len;
        }
        while column > width {
            rows = rows.saturating_add(1);
            column -= width;
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_rows() {
        assert_eq!(wrapped_rows("", 10), 1);
        assert_eq!(wrapped_rows("one two", 10), 1);
        assert_eq!(wrapped_rows("one two three", 10), 2);
        assert_eq!(wrapped_rows("one two three four", 7), 3);
        assert_eq!(wrapped_rows("abcdefghij", 4), 3);
        assert_eq!(wrapped_rows("anything", 0), 8);
    }
}
