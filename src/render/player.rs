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

//! Render the mini player.
//!
//! This module renders the always-visible player strip: the current song,
//! playback state, elapsed and total time, the progress bar and the volume.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    render::icons::{ICON_MUTED, ICON_PAUSE, ICON_PLAY, ICON_SHUFFLE, ICON_VOLUME},
    util::format::format_time,
};

/// Renders the player strip including song info, progress and volume.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(chunks[0]);

    let current = app
        .playback
        .current_id()
        .and_then(|id| app.catalog.song(id));

    let Some(song) = current else {
        f.render_widget(
            Paragraph::new("Nothing playing").fg(theme.muted_fg),
            info_chunks[0],
        );
        return;
    };

    let icon = if app.playback.is_playing() { ICON_PLAY } else { ICON_PAUSE };

    let mut track_line = vec![
        Span::styled(format!("{} ", icon), Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        Span::styled(&song.title, Style::default().add_modifier(Modifier::BOLD)).fg(theme.accent_colour),
        Span::raw(" by "),
        Span::styled(song.singers_label(), Style::default()).fg(theme.artist_fg),
    ];
    if app.playback.shuffle() {
        track_line.push(Span::raw(format!("  {}", ICON_SHUFFLE)).fg(theme.accent_colour));
    }
    f.render_widget(Paragraph::new(Line::from(track_line)), info_chunks[0]);

    let progress = app.playback.progress();
    let elapsed = progress.map_or(0.0, |p| p.elapsed);
    let duration = progress.map_or(0.0, |p| p.duration);

    let time_line = Line::from(vec![
        Span::styled(format_time(elapsed), Style::default().add_modifier(Modifier::BOLD)).fg(theme.accent_colour),
        Span::styled(" / ", Style::default()).fg(Color::White),
        Span::styled(format_time(duration), Style::default().add_modifier(Modifier::BOLD)).fg(theme.accent_colour),
    ]);
    f.render_widget(Paragraph::new(time_line).alignment(Alignment::Right), info_chunks[1]);

    let control_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(2), Constraint::Length(22)])
        .split(chunks[2]);

    let position_gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
        .ratio(progress.map_or(0.0, |p| p.ratio()))
        .label("")
        .use_unicode(true);
    f.render_widget(position_gauge, control_chunks[0]);

    draw_volume(f, control_chunks[2], app);
}

/// Renders the volume gauge with its icon and percentage.
pub(crate) fn draw_volume(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let volume_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(5)])
        .split(area);

    let icon = if app.muted { ICON_MUTED } else { ICON_VOLUME };
    f.render_widget(Paragraph::new(icon).fg(theme.muted_fg), volume_layout[0]);

    let volume = app.volume.unwrap_or(0).min(100);
    let vol_ratio = volume as f64 / 100.0;

    let volume_gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
        .ratio(vol_ratio)
        .label("")
        .use_unicode(true);
    f.render_widget(volume_gauge, volume_layout[1]);

    let volume_label = Paragraph::new(format!(" {}%", volume))
        .alignment(Alignment::Right)
        .fg(Color::White);
    f.render_widget(volume_label, volume_layout[2]);
}
