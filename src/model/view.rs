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

//! View state management.
//!
//! The [`ViewCoordinator`] owns what the browser displays: the flat song
//! list, the album list, or a single album, in grid or list density. It also
//! owns the active filter selection and the visible songs derived from it.

use tracing::debug;

use crate::model::{
    Song, SongId,
    filter::{FilterDimension, FilterSelection, filter_songs},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Density {
    Grid,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BrowseMode {
    Songs,
    Albums,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ViewMode {
    Songs,
    Albums,
    AlbumDetail { album: String, origin: BrowseMode },
}

/// Songs of the visible set sharing a derived album name.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AlbumGroup {
    pub(crate) name: String,
    pub(crate) cover: String,
    pub(crate) song_count: usize,
}

/// What the browser lists for the current view mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BrowserEntry {
    Song(SongId),
    Album(String),
}

pub(crate) struct ViewCoordinator {
    mode: ViewMode,
    density: Density,
    selection: FilterSelection,
    visible: Vec<Song>,
}

impl ViewCoordinator {
    pub(crate) fn new() -> Self {
        Self {
            mode: ViewMode::Songs,
            density: Density::Grid,
            selection: FilterSelection::default(),
            visible: vec![],
        }
    }

    pub(crate) fn mode(&self) -> &ViewMode {
        &self.mode
    }

    pub(crate) fn density(&self) -> Density {
        self.density
    }

    pub(crate) fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub(crate) fn visible(&self) -> &[Song] {
        &self.visible
    }

    pub(crate) fn selected_album(&self) -> Option<&str> {
        match &self.mode {
            ViewMode::AlbumDetail { album, .. } => Some(album),
            _ => None,
        }
    }

    /// Switches between the song and album lists, leaving any album.
    pub(crate) fn set_view_mode(&mut self, mode: BrowseMode) {
        self.mode = match mode {
            BrowseMode::Songs => ViewMode::Songs,
            BrowseMode::Albums => ViewMode::Albums,
        };
        debug!(mode = ?self.mode, "View mode changed");
    }

    pub(crate) fn set_density(&mut self, density: Density) {
        self.density = density;
    }

    pub(crate) fn toggle_density(&mut self) {
        self.density = match self.density {
            Density::Grid => Density::List,
            Density::List => Density::Grid,
        };
    }

    /// Shows a single album, remembering where to return to.
    pub(crate) fn enter_album(&mut self, name: &str) {
        let origin = match &self.mode {
            ViewMode::Songs => BrowseMode::Songs,
            ViewMode::Albums => BrowseMode::Albums,
            ViewMode::AlbumDetail { origin, .. } => *origin,
        };

        self.mode = ViewMode::AlbumDetail {
            album: name.to_string(),
            origin,
        };
        debug!(album = name, "Entered album");
    }

    /// Leaves the album detail view, returning to the view it was entered
    /// from. Does nothing outside album detail.
    pub(crate) fn exit_album(&mut self) {
        if let ViewMode::AlbumDetail { origin, .. } = &self.mode {
            let origin = *origin;
            self.set_view_mode(origin);
        }
    }

    pub(crate) fn apply_filters(&mut self, selection: FilterSelection, catalog: &[Song]) {
        self.selection = selection;
        self.refresh(catalog);
    }

    pub(crate) fn set_filter(
        &mut self,
        dimension: FilterDimension,
        value: Option<String>,
        catalog: &[Song],
    ) {
        self.selection.set(dimension, value);
        self.refresh(catalog);
    }

    pub(crate) fn set_search(&mut self, text: &str, catalog: &[Song]) {
        self.selection.search = text.to_string();
        self.refresh(catalog);
    }

    pub(crate) fn reset_filters(&mut self, catalog: &[Song]) {
        self.apply_filters(FilterSelection::default(), catalog);
    }

    /// Recomputes the visible songs from scratch.
    pub(crate) fn refresh(&mut self, catalog: &[Song]) {
        self.visible = filter_songs(catalog, &self.selection);
        debug!(
            visible = self.visible.len(),
            total = catalog.len(),
            "Visible songs recomputed"
        );
    }

    /// Groups the visible songs by album, in first-seen order.
    pub(crate) fn albums(&self) -> Vec<AlbumGroup> {
        let mut groups: Vec<AlbumGroup> = vec![];

        for song in &self.visible {
            let name = song.album_name();
            match groups.iter_mut().find(|g| g.name == name) {
                Some(group) => group.song_count += 1,
                None => groups.push(AlbumGroup {
                    name,
                    cover: song
                        .album_image
                        .clone()
                        .filter(|i| !i.is_empty())
                        .unwrap_or_else(|| song.cover_image.clone()),
                    song_count: 1,
                }),
            }
        }

        groups
    }

    /// Every catalog song of the selected album, regardless of filters.
    pub(crate) fn album_songs(&self, catalog: &[Song]) -> Vec<Song> {
        let Some(album) = self.selected_album() else {
            return vec![];
        };

        catalog
            .iter()
            .filter(|s| s.album_name() == album)
            .cloned()
            .collect()
    }

    /// Songs listed by the current view, if it lists songs.
    pub(crate) fn listed_songs(&self, catalog: &[Song]) -> Vec<Song> {
        match &self.mode {
            ViewMode::Songs => self.visible.clone(),
            ViewMode::Albums => vec![],
            ViewMode::AlbumDetail { .. } => self.album_songs(catalog),
        }
    }

    pub(crate) fn entries(&self, catalog: &[Song]) -> Vec<BrowserEntry> {
        match &self.mode {
            ViewMode::Albums => self
                .albums()
                .into_iter()
                .map(|a| BrowserEntry::Album(a.name))
                .collect(),
            _ => self
                .listed_songs(catalog)
                .into_iter()
                .map(|s| BrowserEntry::Song(s.id))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::song;

    fn catalog() -> Vec<Song> {
        let mut a = song(1, "A", "EN");
        a.album = Some("First".into());
        a.album_image = Some("https://cdn/first.jpg".into());
        let mut b = song(2, "B", "HI");
        b.album = Some("Second".into());
        let mut c = song(3, "C", "EN");
        c.album = Some("First".into());
        let mut d = song(4, "D", "HI");
        d.album = Some("First".into());

        vec![a, b, c, d]
    }

    fn coordinator(catalog: &[Song]) -> ViewCoordinator {
        let mut view = ViewCoordinator::new();
        view.refresh(catalog);
        view
    }

    #[test]
    fn test_albums_grouped_in_first_seen_order() {
        let catalog = catalog();
        let view = coordinator(&catalog);

        let albums = view.albums();

        assert_eq!(albums.len(), 2);
        assert_eq!(albums[0].name, "First");
        assert_eq!(albums[0].song_count, 3);
        assert_eq!(albums[0].cover, "https://cdn/first.jpg");
        assert_eq!(albums[1].name, "Second");
        assert_eq!(albums[1].cover, catalog[1].cover_image);
    }

    #[test]
    fn test_albums_follow_filters_but_detail_ignores_them() {
        let catalog = catalog();
        let mut view = coordinator(&catalog);
        view.set_filter(FilterDimension::Language, Some("EN".into()), &catalog);

        assert_eq!(view.albums()[0].song_count, 2);

        view.set_view_mode(BrowseMode::Albums);
        view.enter_album("First");

        let ids: Vec<String> = view.album_songs(&catalog).iter().map(|s| s.id.to_string()).collect();
        assert_eq!(ids, ["1", "3", "4"]);
    }

    #[test]
    fn test_enter_then_exit_album_restores_view() {
        let catalog = catalog();
        let mut view = coordinator(&catalog);
        view.set_filter(FilterDimension::Language, Some("HI".into()), &catalog);
        view.set_view_mode(BrowseMode::Albums);
        let visible_before = view.visible().to_vec();

        view.enter_album("Second");
        assert_eq!(view.selected_album(), Some("Second"));

        view.exit_album();
        assert_eq!(view.mode(), &ViewMode::Albums);
        assert_eq!(view.visible(), visible_before.as_slice());
    }

    #[test]
    fn test_album_jump_from_songs_returns_to_songs() {
        let catalog = catalog();
        let mut view = coordinator(&catalog);

        view.enter_album("First");
        view.exit_album();

        assert_eq!(view.mode(), &ViewMode::Songs);
    }

    #[test]
    fn test_set_view_mode_clears_album() {
        let catalog = catalog();
        let mut view = coordinator(&catalog);
        view.set_view_mode(BrowseMode::Albums);
        view.enter_album("First");

        view.set_view_mode(BrowseMode::Songs);

        assert_eq!(view.selected_album(), None);
        assert!(view.album_songs(&catalog).is_empty());
    }

    #[test]
    fn test_density_independent_of_mode() {
        let catalog = catalog();
        let mut view = coordinator(&catalog);
        view.set_density(Density::List);

        view.set_view_mode(BrowseMode::Albums);
        view.enter_album("First");
        assert_eq!(view.density(), Density::List);

        view.toggle_density();
        assert_eq!(view.density(), Density::Grid);
        assert_eq!(view.selected_album(), Some("First"));
    }

    #[test]
    fn test_reset_filters_restores_full_catalog() {
        let catalog = catalog();
        let mut view = coordinator(&catalog);
        view.set_filter(FilterDimension::Language, Some("EN".into()), &catalog);
        view.set_search("c", &catalog);
        assert_eq!(view.visible().len(), 1);

        view.reset_filters(&catalog);

        assert_eq!(view.visible(), catalog.as_slice());
        assert!(view.selection().is_empty());
    }

    #[test]
    fn test_entries_per_mode() {
        let catalog = catalog();
        let mut view = coordinator(&catalog);
        assert_eq!(view.entries(&catalog).len(), 4);

        view.set_view_mode(BrowseMode::Albums);
        assert_eq!(
            view.entries(&catalog),
            vec![
                BrowserEntry::Album("First".into()),
                BrowserEntry::Album("Second".into())
            ]
        );

        view.enter_album("Second");
        assert_eq!(view.entries(&catalog), vec![BrowserEntry::Song(SongId::Number(2))]);
    }

    #[test]
    fn test_empty_catalog_is_harmless() {
        let mut view = ViewCoordinator::new();
        view.set_filter(FilterDimension::Genre, Some("Rock".into()), &[]);

        assert!(view.visible().is_empty());
        assert!(view.albums().is_empty());
        assert!(view.entries(&[]).is_empty());
    }
}
