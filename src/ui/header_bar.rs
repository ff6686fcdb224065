use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

pub struct HeaderBar<'a> {
    pub username: &'a str,
    pub repo_count: Option<usize>,
    pub fetched: &'a str,
}

impl<'a> Widget for HeaderBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::HEADER_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let mut spans: Vec<Span<'static>> = vec![Span::styled(
            " ghpeek",
            Style::default()
                .fg(theme::ACCENT)
                .bg(theme::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        )];

        if !self.username.is_empty() {
            spans.push(Span::styled(
                " \u{2503} ",
                Style::default().fg(theme::SEPARATOR).bg(theme::HEADER_BG),
            ));
            spans.push(Span::styled(
                self.username.to_string(),
                Style::default().bg(theme::HEADER_BG),
            ));
            if let Some(count) = self.repo_count {
                spans.push(Span::styled(
                    format!(" {count} repos"),
                    Style::default().fg(theme::DIM_TEXT).bg(theme::HEADER_BG),
                ));
            }
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        let right = format!("fetched: {}  ? help ", self.fetched);
        let right_w = UnicodeWidthStr::width(right.as_str());
        let area_w = area.width as usize;
        if area_w > right_w {
            let right_x = area.x + (area_w - right_w) as u16;
            let right_span = Span::styled(
                right,
                Style::default().fg(theme::DIM_TEXT).bg(theme::HEADER_BG),
            );
            buf.set_line(right_x, area.y, &Line::from(right_span), right_w as u16);
        }
    }
}
