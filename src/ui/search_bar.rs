use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

const PLACEHOLDER: &str = "Enter a GitHub username";

pub struct SearchBar<'a> {
    pub text: &'a str,
    pub focused: bool,
    /// Spinner glyph while a lookup is running.
    pub spinner: Option<&'a str>,
}

impl<'a> Widget for SearchBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let border_style = if self.focused {
            Style::default().fg(theme::ACTIVE_BORDER)
        } else {
            Style::default().fg(theme::BORDER_COLOR)
        };

        let block = Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        let mut spans = vec![Span::styled(
            " \u{276f} ",
            Style::default()
                .fg(theme::INPUT_COLOR)
                .add_modifier(Modifier::BOLD),
        )];

        if self.text.is_empty() && !self.focused {
            spans.push(Span::styled(PLACEHOLDER, Style::default().fg(theme::DIM_TEXT)));
        } else {
            spans.push(Span::raw(self.text.to_string()));
        }
        if self.focused {
            spans.push(Span::styled("\u{258c}", Style::default().fg(theme::INPUT_COLOR)));
        }
        buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);

        let button = match self.spinner {
            Some(frame) => format!("{frame} Searching "),
            None => "[Enter] Search ".to_string(),
        };
        let button_w = UnicodeWidthStr::width(button.as_str());
        if (inner.width as usize) > button_w + 20 {
            let x = inner.x + inner.width - button_w as u16;
            let style = if self.spinner.is_some() {
                Style::default().fg(theme::ACCENT)
            } else {
                Style::default().fg(theme::DIM_TEXT)
            };
            buf.set_line(x, inner.y, &Line::from(Span::styled(button, style)), button_w as u16);
        }
    }
}
