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

//! Render the full-screen player overlay.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    render::{
        centered_rect, draw_message,
        icons::{ICON_NEXT, ICON_PAUSE, ICON_PLAY, ICON_PREV, ICON_SHUFFLE},
        player::draw_volume,
    },
    util::format::format_time,
};

pub(crate) fn draw_full_player(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let popup = centered_rect(area, 80, 80);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Now Playing ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent_colour))
        .style(Style::default().bg(theme.background_colour))
        .padding(Padding::uniform(1));

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let Some(song) = app.playback.current_id().and_then(|id| app.catalog.song(id)) else {
        draw_message(f, inner, "Nothing playing", theme);
        return;
    };

    let [info, _, progress_area, times, _, controls, volume, _, help] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let details = vec![
        Line::from(song.title.as_str())
            .style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)),
        Line::from(song.singers_label()).fg(theme.artist_fg),
        Line::from(song.album_name()).fg(theme.album_fg),
        Line::from(song.tags().join(" · ")).fg(theme.tag_fg),
    ];
    f.render_widget(Paragraph::new(details).alignment(Alignment::Center), info);

    let progress = app.playback.progress();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
        .ratio(progress.map_or(0.0, |p| p.ratio()))
        .label("")
        .use_unicode(true);
    f.render_widget(gauge, progress_area);

    let elapsed = progress.map_or(0.0, |p| p.elapsed);
    let duration = progress.map_or(0.0, |p| p.duration);
    let [elapsed_area, duration_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(times);
    f.render_widget(Paragraph::new(format_time(elapsed)).fg(theme.muted_fg), elapsed_area);
    f.render_widget(
        Paragraph::new(format_time(duration))
            .alignment(Alignment::Right)
            .fg(theme.muted_fg),
        duration_area,
    );

    let play_icon = if app.playback.is_playing() { ICON_PAUSE } else { ICON_PLAY };
    let shuffle_style = if app.playback.shuffle() {
        Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted_fg)
    };
    let transport = Line::from(vec![
        Span::styled(ICON_SHUFFLE, shuffle_style),
        Span::raw("    "),
        Span::raw(ICON_PREV).fg(theme.title_fg),
        Span::raw("    "),
        Span::raw(play_icon).fg(theme.accent_colour).add_modifier(Modifier::BOLD),
        Span::raw("    "),
        Span::raw(ICON_NEXT).fg(theme.title_fg),
    ]);
    f.render_widget(Paragraph::new(transport).alignment(Alignment::Center), controls);

    draw_volume(f, centered_rect(volume, 40, 100), app);

    let hint = "Space play/pause  p/n prev/next  x shuffle  z random  ,/. seek  Esc close";
    f.render_widget(
        Paragraph::new(hint).alignment(Alignment::Center).fg(theme.muted_fg),
        help,
    );
}
