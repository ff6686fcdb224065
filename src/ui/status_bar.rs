use crate::ui::input::InputMode;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    pub mode: InputMode,
    pub error: Option<&'a str>,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::STATUS_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let (mode_label, hints) = match self.mode {
            InputMode::Search => (" SEARCH ", " enter search \u{2502} esc browse \u{2502} ^u clear "),
            InputMode::Browse => (
                " BROWSE ",
                " j/k select \u{2502} o open repo \u{2502} p open profile \u{2502} / search \u{2502} q quit ",
            ),
        };

        let mut spans = vec![Span::styled(
            mode_label,
            Style::default()
                .fg(theme::HEADER_BG)
                .bg(theme::INPUT_COLOR)
                .add_modifier(Modifier::BOLD),
        )];

        match self.error {
            Some(msg) => spans.push(Span::styled(
                format!(" {msg} "),
                Style::default()
                    .fg(theme::ERROR_FG)
                    .bg(theme::STATUS_BG)
                    .add_modifier(Modifier::BOLD),
            )),
            None => spans.push(Span::styled(
                hints,
                Style::default().fg(theme::DIM_TEXT).bg(theme::STATUS_BG),
            )),
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_text(bar: StatusBar) -> String {
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buf::empty(area);
        bar.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn error_replaces_hints() {
        let text = render_text(StatusBar {
            mode: InputMode::Browse,
            error: Some("User not found"),
        });
        assert!(text.contains("User not found"));
        assert!(!text.contains("open repo"));
    }

    #[test]
    fn hints_follow_mode() {
        let text = render_text(StatusBar {
            mode: InputMode::Search,
            error: None,
        });
        assert!(text.contains("SEARCH"));
        assert!(text.contains("esc browse"));
    }
}
