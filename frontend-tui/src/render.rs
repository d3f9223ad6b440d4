//! Frame rendering for the menu view.

use menu::FrameView;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Colors used by the frontend, grouped by purpose.
#[derive(Debug, Clone)]
pub struct Theme {
    pub border: Color,
    pub title: Color,
    pub text: Color,
    pub value: Color,
    pub selected: Color,
    pub dialog_bg: Color,
    pub dialog_border: Color,
    pub status: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            border: Color::DarkGray,
            title: Color::Yellow,
            text: Color::Gray,
            value: Color::Cyan,
            selected: Color::White,
            dialog_bg: Color::Black,
            dialog_border: Color::Yellow,
            status: Color::DarkGray,
        }
    }
}

const VALUE_COLUMN: usize = 18;

/// One frame of the menu: bordered list with a value column, an optional
/// dialog overlay and an optional status line at the bottom.
pub struct MenuFrame<'a> {
    pub view: &'a FrameView,
    pub theme: &'a Theme,
    pub status: Option<&'a str>,
}

impl Widget for MenuFrame<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let status_height = u16::from(self.status.is_some() && area.height > 2);
        let list_area = Rect {
            height: area.height - status_height,
            ..area
        };

        let block = Block::default()
            .title(format!(" {} ", self.view.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border));
        let inner = block.inner(list_area);
        block.render(list_area, buf);

        let label_width = (inner.width as usize)
            .saturating_sub(VALUE_COLUMN + 3)
            .max(8);

        let mut lines = Vec::with_capacity(self.view.rows.len());
        for (idx, row) in self.view.rows.iter().enumerate() {
            let is_selected = idx == self.view.selected;
            let prefix = if is_selected { "► " } else { "  " };
            let style = if is_selected {
                Style::default()
                    .fg(self.theme.selected)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.text)
            };
            let value_style = if is_selected {
                style
            } else {
                Style::default().fg(self.theme.value)
            };

            lines.push(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(format!("{:<w$.w$}", row.label, w = label_width), style),
                Span::raw(" "),
                Span::styled(row.value.clone(), value_style),
            ]));
        }
        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .render(inner, buf);

        if let Some(message) = &self.view.overlay {
            render_dialog(message, self.theme, area, buf);
        }

        if let Some(status) = self.status {
            if status_height == 1 {
                let status_area = Rect {
                    x: area.x,
                    y: area.y + area.height - 1,
                    width: area.width,
                    height: 1,
                };
                Paragraph::new(Line::from(Span::styled(
                    status.to_string(),
                    Style::default().fg(self.theme.status),
                )))
                .render(status_area, buf);
            }
        }
    }
}

fn render_dialog(message: &str, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let max_width = area.width.max(1);
    let width = (message.len() as u16)
        .saturating_add(8)
        .clamp(24.min(max_width), max_width);
    let height = 5.min(area.height);
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height) / 2;
    let dialog_area = Rect {
        x: area.x + x,
        y: area.y + y,
        width: width.min(area.width),
        height,
    };

    Clear.render(dialog_area, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dialog_border))
        .style(Style::default().bg(theme.dialog_bg));
    let inner = block.inner(dialog_area);
    block.render(dialog_area, buf);

    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Arrows adjust, Enter confirms",
            Style::default().fg(theme.text),
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(inner, buf);
}
