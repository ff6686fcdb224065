use crate::github::types::Repository;
use crate::ui::{format_count, theme, truncate_with_ellipsis};
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

pub const CARD_HEIGHT: u16 = 5;
const TWO_COLUMN_MIN_WIDTH: u16 = 60;

pub fn columns_for(width: u16) -> usize {
    if width >= TWO_COLUMN_MIN_WIDTH {
        2
    } else {
        1
    }
}

pub fn visible_rows(height: u16) -> usize {
    (height.saturating_sub(2) / CARD_HEIGHT) as usize
}

pub struct RepoGrid<'a> {
    pub repos: &'a [Repository],
    pub selected: usize,
    /// First visible card row.
    pub scroll: usize,
    pub focused: bool,
}

impl<'a> Widget for RepoGrid<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let border_style = if self.focused {
            Style::default().fg(theme::ACTIVE_BORDER)
        } else {
            Style::default().fg(theme::BORDER_COLOR)
        };
        let block = Block::default()
            .title(format!(" Repositories ({}) ", self.repos.len()))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 10 || inner.height == 0 {
            return;
        }

        if self.repos.is_empty() {
            buf.set_line(
                inner.x + 1,
                inner.y,
                &Line::from(Span::styled(
                    "No public repositories",
                    Style::default().fg(theme::DIM_TEXT),
                )),
                inner.width - 1,
            );
            return;
        }

        let cols = columns_for(area.width);
        let card_w = inner.width / cols as u16;
        let rows = (inner.height / CARD_HEIGHT) as usize;

        for (i, repo) in self
            .repos
            .iter()
            .enumerate()
            .skip(self.scroll * cols)
            .take(rows * cols)
        {
            let slot = i - self.scroll * cols;
            let x = inner.x + (slot % cols) as u16 * card_w;
            let y = inner.y + (slot / cols) as u16 * CARD_HEIGHT;
            let card = Rect::new(x, y, card_w, CARD_HEIGHT);
            render_card(buf, card, repo, self.focused && i == self.selected);
        }
    }
}

fn render_card(buf: &mut Buf, area: Rect, repo: &Repository, selected: bool) {
    let border = if selected {
        Style::default().fg(theme::ACCENT)
    } else {
        Style::default().fg(theme::SEPARATOR)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.width < 4 || inner.height < 3 {
        return;
    }
    let w = inner.width as usize - 1;
    let x = inner.x + 1;

    let mut name_style = Style::default().fg(theme::LINK_FG).add_modifier(Modifier::BOLD);
    if selected {
        name_style = name_style.bg(theme::SELECTED_BG);
    }
    buf.set_line(
        x,
        inner.y,
        &Line::from(Span::styled(truncate_with_ellipsis(&repo.name, w), name_style)),
        w as u16,
    );

    let (desc, desc_style) = match repo.description.as_deref().filter(|d| !d.is_empty()) {
        Some(d) => (d, Style::default()),
        None => ("No description", Style::default().fg(theme::DIM_TEXT)),
    };
    buf.set_line(
        x,
        inner.y + 1,
        &Line::from(Span::styled(truncate_with_ellipsis(desc, w), desc_style)),
        w as u16,
    );

    let mut footer = vec![
        Span::styled("\u{2605} ", Style::default().fg(theme::STAR_FG)),
        Span::raw(format_count(repo.stars)),
        Span::styled("  \u{2442} ", Style::default().fg(theme::DIM_TEXT)),
        Span::raw(format_count(repo.forks)),
    ];
    if let Some(lang) = repo.classified_language() {
        footer.push(Span::styled(
            format!("  {lang}"),
            Style::default().fg(theme::ACCENT),
        ));
    }
    buf.set_line(x, inner.y + 2, &Line::from(footer), w as u16);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn render_text(repos: &[Repository], area: Rect, scroll: usize) -> String {
        let mut buf = Buf::empty(area);
        RepoGrid {
            repos,
            selected: 0,
            scroll,
            focused: true,
        }
        .render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn two_columns_when_wide() {
        assert_eq!(columns_for(80), 2);
        assert_eq!(columns_for(40), 1);
    }

    #[test]
    fn visible_rows_excludes_border() {
        assert_eq!(visible_rows(12), 2);
        assert_eq!(visible_rows(2), 0);
    }

    #[test]
    fn cards_show_description_fallback() {
        let repos = make_repos(&[Some("Go"), None]);
        let text = render_text(&repos, Rect::new(0, 0, 80, 12), 0);
        assert!(text.contains("repo-1"));
        assert!(text.contains("repo-2"));
        assert!(text.contains("No description"));
        assert!(text.contains("Repositories (2)"));
    }

    #[test]
    fn scroll_skips_card_rows() {
        let repos = make_repos(&[None, None, None, None]);
        let text = render_text(&repos, Rect::new(0, 0, 80, 7), 1);
        assert!(!text.contains("repo-1"));
        assert!(text.contains("repo-3"));
    }

    #[test]
    fn empty_list_message() {
        let text = render_text(&[], Rect::new(0, 0, 80, 7), 0);
        assert!(text.contains("No public repositories"));
    }
}
