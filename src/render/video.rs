// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Render the video preview dialog.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{
    model::video::VideoPreview,
    render::{centered_rect, icons::ICON_VIDEO},
    theme::Theme,
};

pub(crate) fn draw_video(f: &mut Frame, area: Rect, preview: &VideoPreview, theme: &Theme) {
    let popup = centered_rect(area, 70, 40);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} {} ", ICON_VIDEO, preview.title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent_colour))
        .style(Style::default().bg(theme.background_colour))
        .padding(Padding::uniform(1));

    let label = |text: &'static str| Span::styled(text, Style::default().fg(theme.muted_fg));

    let lines = vec![
        Line::from(vec![
            label("Watch      "),
            Span::styled(
                preview.watch_url(),
                Style::default().fg(theme.accent_colour).add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::from(vec![label("Thumbnail  "), Span::raw(preview.thumbnail_url()).fg(theme.title_fg)]),
        Line::from(""),
        Line::from("Playback is paused. Esc to close.").fg(theme.muted_fg),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false }),
        popup,
    );
}
