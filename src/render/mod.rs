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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod commander;
mod full_player;
pub(crate) mod icons;
mod player;
mod video;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    App, Overlay,
    model::{
        filter::FilterDimension,
        view::{BrowseMode, Density, ViewMode},
    },
    render::{
        commander::draw_commander, full_player::draw_full_player, icons::ICON_SHUFFLE,
        player::draw_player, video::draw_video,
    },
    theme::Theme,
};

/// Renders the user interface to the terminal frame.
///
/// It handles:
///
/// * **Layout**: Partitioning the screen into the header, filter bar, browser,
///   player and command line.
/// * **Overlays**: The filter picker, full-screen player and video preview
///   are drawn over the main layout.
/// * **Styling**: Applying colors and borders defined in the active theme.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to update internal view state (like scroll positions).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);
    draw_filter_bar(f, outer[1], app);

    let browser_block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(app.theme.border_colour));
    let browser_area = browser_block.inner(outer[2]);
    f.render_widget(browser_block, outer[2]);

    app.browser.draw(
        f,
        browser_area,
        &app.view,
        &app.catalog,
        &app.playback,
        &app.theme,
    );

    draw_player(f, outer[3], app);
    draw_commander(f, outer[4], app);

    match &app.overlay {
        Overlay::Player => draw_full_player(f, area, app),
        Overlay::Video(preview) => draw_video(f, area, preview, &app.theme),
        Overlay::None => {}
    }

    if app.filter_picker.is_active() {
        app.filter_picker.draw(
            f,
            area,
            app.catalog.vocabulary(),
            app.view.selection(),
            &app.theme,
        );
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let tab = |label: &'static str, active: bool| {
        if active {
            Span::styled(label, Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD))
        } else {
            Span::styled(label, Style::default().fg(theme.muted_fg))
        }
    };

    let mode = app.view.mode();
    let songs_active = matches!(
        mode,
        ViewMode::Songs | ViewMode::AlbumDetail { origin: BrowseMode::Songs, .. }
    );

    let density = match app.view.density() {
        Density::Grid => "grid",
        Density::List => "list",
    };

    let mut spans = vec![
        Span::styled(" songdeck ", Style::default().add_modifier(Modifier::BOLD)).fg(theme.accent_colour),
        Span::raw(" "),
        tab("1 Songs", songs_active),
        Span::raw("  "),
        tab("2 Albums", !songs_active),
        Span::styled(format!("   [{}]", density), Style::default().fg(theme.muted_fg)),
    ];

    if app.playback.shuffle() {
        spans.push(Span::styled(format!("  {} shuffle", ICON_SHUFFLE), Style::default().fg(theme.accent_colour)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_filter_bar(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(32)])
        .split(area);

    let theme = &app.theme;
    let selection = app.view.selection();

    let spans: Vec<Span> = FilterDimension::ALL
        .iter()
        .flat_map(|dimension| {
            let (value, style) = match selection.get(*dimension) {
                Some(value) => (value.to_string(), Style::default().fg(theme.accent_colour)),
                None => ("All".to_string(), Style::default().fg(theme.title_fg)),
            };

            [
                Span::styled(format!(" {}: ", dimension.label()), Style::default().fg(theme.muted_fg)),
                Span::styled(value, style),
            ]
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);
    app.search_box.draw(f, chunks[1], &app.theme);
}

/// Draws a single centered line of text, used for empty and status states.
pub(crate) fn draw_message(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let [line_area] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);

    f.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.muted_fg)),
        line_area,
    );
}

/// Computes a rectangle centered in `area`, sized as percentages of it.
pub(crate) fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(vertical);

    rect
}
