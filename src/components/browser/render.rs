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

//! Rendering for the browser.
//!
//! Grid density lays songs and albums out as fixed-width cards, as many per
//! row as fit, scrolling by whole rows to keep the cursor on screen. List
//! density uses a table.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
};

use crate::{
    components::BrowserView,
    model::{
        Song,
        catalog::{Catalog, CatalogStatus},
        playback::PlaybackController,
        view::{AlbumGroup, Density, ViewCoordinator, ViewMode},
    },
    render::{
        draw_message,
        icons::{ICON_PAUSE, ICON_PLAY},
    },
    theme::Theme,
    util::format::truncate,
};

const CARD_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 6;

const LOADING_MESSAGE: &str = "Loading songs...";
const LOAD_FAILED_MESSAGE: &str = "Failed to load data. Please try again later.";
const NO_MATCHES_MESSAGE: &str = "No songs match your filters.";
const NO_ALBUMS_MESSAGE: &str = "No albums found.";
const NO_ALBUM_SONGS_MESSAGE: &str = "No songs found.";

impl BrowserView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        view: &ViewCoordinator,
        catalog: &Catalog,
        playback: &PlaybackController,
        theme: &Theme,
    ) {
        match catalog.status {
            CatalogStatus::Loading => return draw_message(f, area, LOADING_MESSAGE, theme),
            CatalogStatus::Failed(_) => return draw_message(f, area, LOAD_FAILED_MESSAGE, theme),
            CatalogStatus::Ready => {}
        }

        match view.mode() {
            ViewMode::Albums => {
                let albums = view.albums();
                self.clamp(albums.len());

                if albums.is_empty() {
                    draw_message(f, area, NO_ALBUMS_MESSAGE, theme);
                } else if view.density() == Density::Grid {
                    self.draw_grid(f, area, &albums, theme, |album, width| {
                        album_card(album, width, theme)
                    });
                } else {
                    self.draw_album_table(f, area, &albums, theme);
                }
            }

            ViewMode::Songs | ViewMode::AlbumDetail { .. } => {
                let songs = view.listed_songs(catalog.songs());
                self.clamp(songs.len());

                let area = match view.selected_album() {
                    Some(album) => draw_album_header(f, area, album, songs.len(), theme),
                    None => area,
                };

                if songs.is_empty() {
                    let message = match view.mode() {
                        ViewMode::Songs => NO_MATCHES_MESSAGE,
                        _ => NO_ALBUM_SONGS_MESSAGE,
                    };
                    draw_message(f, area, message, theme);
                } else if view.density() == Density::Grid {
                    self.draw_grid(f, area, &songs, theme, |song, width| {
                        song_card(song, width, playback, theme)
                    });
                } else {
                    self.draw_song_table(f, area, &songs, playback, theme);
                }
            }
        }
    }

    fn draw_grid<T>(
        &mut self,
        f: &mut Frame,
        area: Rect,
        items: &[T],
        theme: &Theme,
        card: impl Fn(&T, usize) -> Vec<Line<'static>>,
    ) {
        let columns = (area.width / CARD_WIDTH).max(1);
        let card_width = area.width / columns;
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;

        self.columns = columns as usize;

        let cursor_row = self.cursor / self.columns;
        if cursor_row < self.scroll_row {
            self.scroll_row = cursor_row;
        } else if cursor_row >= self.scroll_row + visible_rows {
            self.scroll_row = cursor_row + 1 - visible_rows;
        }

        for row in 0..visible_rows {
            for column in 0..self.columns {
                let index = (self.scroll_row + row) * self.columns + column;
                let Some(item) = items.get(index) else {
                    return;
                };

                let rect = Rect {
                    x: area.x + column as u16 * card_width,
                    y: area.y + row as u16 * CARD_HEIGHT,
                    width: card_width,
                    height: CARD_HEIGHT.min(area.height.saturating_sub(row as u16 * CARD_HEIGHT)),
                };

                let border_colour = if index == self.cursor {
                    theme.accent_colour
                } else {
                    theme.border_colour
                };

                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border_colour));

                let inner_width = block.inner(rect).width as usize;
                f.render_widget(Paragraph::new(card(item, inner_width)).block(block), rect);
            }
        }
    }

    fn draw_song_table(
        &mut self,
        f: &mut Frame,
        area: Rect,
        songs: &[Song],
        playback: &PlaybackController,
        theme: &Theme,
    ) {
        let rows = songs.iter().map(|song| {
            let indicator = playing_icon(song, playback).unwrap_or("");

            Row::new(vec![
                Cell::from(Line::from(indicator).style(Style::default().fg(theme.accent_colour))),
                Cell::from(Line::from(song.title.clone()).style(title_style(song, playback, theme))),
                Cell::from(Line::from(song.singers_label()).style(Style::default().fg(theme.artist_fg))),
                Cell::from(Line::from(song.album_name()).style(Style::default().fg(theme.album_fg))),
                Cell::from(Line::from(song.tags().join(" · ")).style(Style::default().fg(theme.tag_fg))),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Percentage(32),
                Constraint::Percentage(26),
                Constraint::Percentage(24),
                Constraint::Percentage(18),
            ],
        )
        .header(
            Row::new(vec!["", "Title", "Singers", "Album", "Tags"])
                .style(Style::default().bold().fg(theme.accent_colour))
                .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.gauge_track_colour).fg(theme.title_fg))
        .block(Block::default());

        self.table_state.select(Some(self.cursor));
        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn draw_album_table(&mut self, f: &mut Frame, area: Rect, albums: &[AlbumGroup], theme: &Theme) {
        let rows = albums.iter().map(|album| {
            Row::new(vec![
                Cell::from(Line::from(album.name.clone()).style(Style::default().fg(theme.title_fg))),
                Cell::from(
                    Line::from(song_count(album.song_count))
                        .style(Style::default().fg(theme.muted_fg))
                        .alignment(Alignment::Right),
                ),
            ])
        });

        let table = Table::new(rows, [Constraint::Min(0), Constraint::Length(10)])
            .header(
                Row::new(vec![
                    Cell::from("Album"),
                    Cell::from(Line::from("Songs").alignment(Alignment::Right)),
                ])
                .style(Style::default().bold().fg(theme.accent_colour))
                .bottom_margin(1),
            )
            .row_highlight_style(Style::default().bg(theme.gauge_track_colour).fg(theme.title_fg))
            .block(Block::default());

        self.table_state.select(Some(self.cursor));
        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}

// Returns the area left below the header
fn draw_album_header(f: &mut Frame, area: Rect, album: &str, count: usize, theme: &Theme) -> Rect {
    let line = Line::from(vec![
        Span::styled(album.to_string(), Style::default().add_modifier(Modifier::BOLD)).fg(theme.accent_colour),
        Span::styled(format!("  {}", song_count(count)), Style::default().fg(theme.muted_fg)),
        Span::styled("  (Esc to go back)", Style::default().fg(theme.muted_fg)),
    ]);

    let header = Rect { height: area.height.min(2), ..area };
    f.render_widget(Paragraph::new(line), header);

    Rect {
        y: area.y + header.height,
        height: area.height - header.height,
        ..area
    }
}

fn song_card(song: &Song, width: usize, playback: &PlaybackController, theme: &Theme) -> Vec<Line<'static>> {
    let title = match playing_icon(song, playback) {
        Some(icon) => format!("{} {}", icon, song.title),
        None => song.title.clone(),
    };

    vec![
        Line::from(truncate(&title, width)).style(title_style(song, playback, theme)),
        Line::from(truncate(&song.singers_label(), width)).fg(theme.artist_fg),
        Line::from(truncate(&song.album_name(), width)).fg(theme.album_fg),
        Line::from(truncate(&song.tags().join(" · "), width)).fg(theme.tag_fg),
    ]
}

fn album_card(album: &AlbumGroup, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(truncate(&album.name, width))
            .style(Style::default().fg(theme.title_fg).add_modifier(Modifier::BOLD)),
        Line::from(song_count(album.song_count)).fg(theme.muted_fg),
    ]
}

fn playing_icon(song: &Song, playback: &PlaybackController) -> Option<&'static str> {
    if !playback.is_current(&song.id) {
        return None;
    }

    Some(if playback.is_playing() { ICON_PLAY } else { ICON_PAUSE })
}

fn title_style(song: &Song, playback: &PlaybackController, theme: &Theme) -> Style {
    let colour = if playback.is_current(&song.id) {
        theme.accent_colour
    } else {
        theme.title_fg
    };

    Style::default().fg(colour).add_modifier(Modifier::BOLD)
}

fn song_count(count: usize) -> String {
    match count {
        1 => "1 song".to_string(),
        n => format!("{} songs", n),
    }
}
