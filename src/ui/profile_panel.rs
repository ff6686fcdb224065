use crate::github::types::Profile;
use crate::ui::{format_count, theme, truncate_with_ellipsis};
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

pub const PROFILE_HEIGHT: u16 = 6;
const AVATAR_W: u16 = 7;

pub struct ProfilePanel<'a> {
    pub profile: &'a Profile,
}

impl<'a> Widget for ProfilePanel<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let block = Block::default()
            .title(" Profile ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_COLOR));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width < AVATAR_W + 10 {
            return;
        }

        render_avatar(buf, Rect::new(inner.x + 1, inner.y, AVATAR_W - 2, 3), self.profile);

        let x = inner.x + AVATAR_W;
        let w = inner.width - AVATAR_W;
        let p = self.profile;
        let label = Style::default().fg(theme::ACCENT);

        buf.set_line(
            x,
            inner.y,
            &Line::from(vec![
                Span::styled(p.login.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(
                    p.html_url.clone(),
                    Style::default()
                        .fg(theme::LINK_FG)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]),
            w,
        );

        let bio = p.bio.as_deref().unwrap_or("");
        buf.set_line(
            x,
            inner.y + 1,
            &Line::from(Span::styled(
                truncate_with_ellipsis(bio.lines().next().unwrap_or(""), w as usize),
                Style::default().fg(theme::DIM_TEXT),
            )),
            w,
        );

        let location = p
            .location
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or("N/A");
        buf.set_line(
            x,
            inner.y + 2,
            &Line::from(vec![
                Span::styled("Followers ", label),
                Span::raw(format_count(p.followers)),
                Span::styled("  Following ", label),
                Span::raw(format_count(p.following)),
                Span::styled("  Location ", label),
                Span::raw(location.to_string()),
            ]),
            w,
        );

        if inner.height > 3 {
            buf.set_line(
                x,
                inner.y + 3,
                &Line::from(Span::styled(
                    truncate_with_ellipsis(&p.avatar_url, w as usize),
                    Style::default().fg(theme::DIM_TEXT),
                )),
                w,
            );
        }
    }
}

fn render_avatar(buf: &mut Buf, area: Rect, profile: &Profile) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT));
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let x = inner.x + inner.width.saturating_sub(1) / 2;
    buf.set_line(
        x,
        inner.y,
        &Line::from(Span::styled(
            profile.initial(),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        1,
    );
}
