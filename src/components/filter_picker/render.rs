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
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Padding, Paragraph},
};

use crate::{
    components::FilterPicker,
    model::{catalog::FilterVocabulary, filter::{FilterDimension, FilterSelection}},
    render::centered_rect,
    theme::Theme,
};

impl FilterPicker {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        vocabulary: &FilterVocabulary,
        selection: &FilterSelection,
        theme: &Theme,
    ) {
        let popup = centered_rect(area, 70, 60);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Filters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent_colour))
            .style(Style::default().bg(theme.background_colour))
            .padding(Padding::horizontal(1));

        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let focused = self.dimension();
        let tabs: Vec<Span> = FilterDimension::ALL
            .iter()
            .flat_map(|dimension| {
                let style = if *dimension == focused {
                    Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(theme.muted_fg)
                };
                [Span::styled(dimension.label(), style), Span::raw("  ")]
            })
            .collect();
        f.render_widget(Paragraph::new(Line::from(tabs)), chunks[0]);

        let current = selection.get(focused);
        let items: Vec<ListItem> = self
            .choices(vocabulary)
            .into_iter()
            .map(|choice| {
                let label = choice.map_or_else(|| "All".to_string(), |v| v.to_string());
                let chosen = current == choice.map(|v| v.to_string()).as_deref();
                let marker = if chosen { "\u{25CF} " } else { "  " };

                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.accent_colour)),
                    Span::styled(label, Style::default().fg(theme.title_fg)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().bg(theme.gauge_track_colour).add_modifier(Modifier::BOLD));
        f.render_stateful_widget(list, chunks[1], &mut self.list_state);

        let help = Line::from("Tab switch filter  Enter apply  Esc close").fg(theme.muted_fg);
        f.render_widget(Paragraph::new(help), chunks[2]);
    }
}
