use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph, Wrap},
};

use super::wrapped_rows;
use crate::view::{MenuView, PizzaView};

/// Rows taken by one pizza block, including the blank separator.
const PIZZA_HEIGHT: usize = 5;

pub fn render(frame: &mut Frame, area: Rect, menu: &MenuView, scroll: usize) {
    let (heading, text) = match menu {
        MenuView::NotReady { heading, message } => (*heading, *message),
        MenuView::Listing { heading, intro, .. } => (*heading, intro.as_str()),
    };
    // Heading, wrapped text, then one blank row before the list.
    let intro_height = wrapped_rows(text, area.width).saturating_add(2);
    let chunks =
        Layout::vertical([Constraint::Length(intro_height), Constraint::Fill(1)]).split(area);

    render_intro(frame, chunks[0], heading, text);
    render_pizzas(frame, chunks[1], menu.items(), scroll);
}

fn render_intro(frame: &mut Frame, area: Rect, heading: &str, text: &str) {
    let content = vec![
        Line::from(Span::styled(
            heading.to_uppercase(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(text, Style::default().fg(Color::Gray))),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_pizzas(frame: &mut Frame, area: Rect, items: &[PizzaView], scroll: usize) {
    let lines: Vec<Line> = items.iter().flat_map(pizza_lines).collect();
    let offset = (scroll * PIZZA_HEIGHT).min(u16::MAX as usize) as u16;

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(2)))
        .scroll((offset, 0));
    frame.render_widget(widget, area);
}

fn pizza_lines(pizza: &PizzaView) -> [Line<'_>; PIZZA_HEIGHT] {
    let (name_style, label_style) = if pizza.sold_out {
        (
            Style::default().fg(Color::DarkGray).crossed_out(),
            Style::default().fg(Color::Red).bold(),
        )
    } else {
        (
            Style::default().fg(Color::White).bold(),
            Style::default().fg(Color::Green).bold(),
        )
    };
    let text_style = if pizza.sold_out {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray)
    };

    [
        Line::from(Span::styled(
            format!("▣ {}", pizza.photo),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(pizza.name.as_str(), name_style)),
        Line::from(Span::styled(pizza.ingredients.as_str(), text_style)),
        Line::from(Span::styled(pizza.label.to_string(), label_style)),
        Line::from(""),
    ]
}
