use crate::stats::languages::{LanguageDistribution, CHART_CAPTION, CHART_MAX};
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::{Direction, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Widget},
};

const MAX_VISIBLE_BARS: u16 = 10;

pub struct LanguageChart<'a> {
    pub distribution: &'a LanguageDistribution,
}

impl<'a> LanguageChart<'a> {
    /// Rows needed to show every bar (capped) plus the border.
    pub fn height(distribution: &LanguageDistribution) -> u16 {
        (distribution.len() as u16).clamp(1, MAX_VISIBLE_BARS) + 2
    }
}

impl<'a> Widget for LanguageChart<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let block = Block::default()
            .title(Line::from(vec![
                Span::styled(" Language Breakdown ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("{CHART_CAPTION} "), Style::default().fg(theme::DIM_TEXT)),
            ]))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_COLOR));

        if self.distribution.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            if inner.height > 0 {
                buf.set_line(
                    inner.x + 1,
                    inner.y,
                    &Line::from(Span::styled(
                        "No language data",
                        Style::default().fg(theme::DIM_TEXT),
                    )),
                    inner.width.saturating_sub(1),
                );
            }
            return;
        }

        let bars: Vec<Bar> = self
            .distribution
            .chart_series()
            .into_iter()
            .enumerate()
            .map(|(i, bar)| {
                let color = theme::chart_color(i);
                Bar::default()
                    .label(Line::from(bar.label))
                    .value(bar.value)
                    .text_value(bar.text)
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(theme::HEADER_BG).bg(color))
            })
            .collect();

        BarChart::default()
            .block(block)
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .max(CHART_MAX)
            .data(BarGroup::default().bars(&bars))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::languages::aggregate_languages;
    use crate::test_utils::*;

    fn render_text(distribution: &LanguageDistribution, area: Rect) -> String {
        let mut buf = Buf::empty(area);
        LanguageChart { distribution }.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn empty_distribution_shows_placeholder() {
        let dist = LanguageDistribution::default();
        let area = Rect::new(0, 0, 60, LanguageChart::height(&dist));
        assert!(render_text(&dist, area).contains("No language data"));
    }

    #[test]
    fn bars_are_labelled() {
        let dist = aggregate_languages(&make_repos(&[Some("Go"), Some("Rust"), None]));
        let area = Rect::new(0, 0, 60, LanguageChart::height(&dist));
        let text = render_text(&dist, area);
        assert!(text.contains("Go"));
        assert!(text.contains("Rust"));
        assert!(text.contains("Languages (%)"));
    }

    #[test]
    fn height_is_capped() {
        let langs: Vec<String> = (0..30).map(|i| format!("L{i}")).collect();
        let repos = make_repos(&langs.iter().map(|l| Some(l.as_str())).collect::<Vec<_>>());
        let dist = aggregate_languages(&repos);
        assert_eq!(LanguageChart::height(&dist), MAX_VISIBLE_BARS + 2);
    }
}
