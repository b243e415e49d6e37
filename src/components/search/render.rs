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

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{components::SearchBox, theme::Theme};

const PROMPT: &str = "/ ";

impl SearchBox {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let text = if self.input.value().is_empty() && !self.active {
            Span::styled("Search songs or albums", Style::default().fg(theme.muted_fg))
        } else {
            Span::styled(self.input.value(), Style::default().fg(theme.title_fg))
        };

        let line = Line::from(vec![PROMPT.fg(theme.accent_colour), text]);
        f.render_widget(Paragraph::new(line), area);

        if self.active {
            let cursor_x = area.x + PROMPT.len() as u16 + self.input.visual_cursor() as u16;
            f.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
        }
    }
}
