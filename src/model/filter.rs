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

//! Catalog filtering.
//!
//! A [`FilterSelection`] holds the value chosen for each filter dimension and
//! the free-text search query. [`filter_songs`] derives the visible subset of
//! the catalog from it; the derivation is pure and always re-run in full.

use crate::model::Song;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FilterDimension {
    Language,
    Genre,
    Year,
    Singer,
    Composer,
}

impl FilterDimension {
    pub(crate) const ALL: [FilterDimension; 5] = [
        FilterDimension::Language,
        FilterDimension::Genre,
        FilterDimension::Year,
        FilterDimension::Singer,
        FilterDimension::Composer,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            FilterDimension::Language => "Language",
            FilterDimension::Genre => "Genre",
            FilterDimension::Year => "Year",
            FilterDimension::Singer => "Singer",
            FilterDimension::Composer => "Music by",
        }
    }

    /// Key of this dimension in the remote filter vocabulary document.
    pub(crate) fn vocabulary_key(self) -> &'static str {
        match self {
            FilterDimension::Language => "languages",
            FilterDimension::Genre => "genres",
            FilterDimension::Year => "years",
            FilterDimension::Singer => "singers",
            FilterDimension::Composer => "musicBy",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FilterSelection {
    pub(crate) language: Option<String>,
    pub(crate) genre: Option<String>,
    pub(crate) year: Option<String>,
    pub(crate) singer: Option<String>,
    pub(crate) composer: Option<String>,
    pub(crate) search: String,
}

impl FilterSelection {
    pub(crate) fn get(&self, dimension: FilterDimension) -> Option<&str> {
        let value = match dimension {
            FilterDimension::Language => &self.language,
            FilterDimension::Genre => &self.genre,
            FilterDimension::Year => &self.year,
            FilterDimension::Singer => &self.singer,
            FilterDimension::Composer => &self.composer,
        };
        value.as_deref()
    }

    /// Sets (or clears, with `None` or an empty value) one dimension.
    pub(crate) fn set(&mut self, dimension: FilterDimension, value: Option<String>) {
        let value = value.filter(|v| !v.is_empty());
        match dimension {
            FilterDimension::Language => self.language = value,
            FilterDimension::Genre => self.genre = value,
            FilterDimension::Year => self.year = value,
            FilterDimension::Singer => self.singer = value,
            FilterDimension::Composer => self.composer = value,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        FilterDimension::ALL.iter().all(|d| self.get(*d).is_none())
            && self.search.trim().is_empty()
    }

    /// Whether a song satisfies every non-empty selection.
    pub(crate) fn matches(&self, song: &Song) -> bool {
        let matches_exact = |selected: &Option<String>, actual: Option<&str>| match selected {
            Some(value) => actual == Some(value.as_str()),
            None => true,
        };

        let matches_year = match &self.year {
            Some(value) => song.year.as_ref().is_some_and(|y| y.to_string() == *value),
            None => true,
        };

        let matches_singer = match &self.singer {
            Some(value) => song.singers.iter().any(|s| s == value),
            None => true,
        };

        matches_exact(&self.language, song.language.as_deref())
            && matches_exact(&self.genre, song.genre.as_deref())
            && matches_year
            && matches_singer
            && matches_exact(&self.composer, song.music_by.as_deref())
            && self.matches_search(song)
    }

    fn matches_search(&self, song: &Song) -> bool {
        let query = self.search.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        song.title.to_lowercase().contains(&query)
            || song.album_name().to_lowercase().contains(&query)
    }
}

/// Derives the visible subset of the catalog, preserving catalog order.
pub(crate) fn filter_songs(catalog: &[Song], selection: &FilterSelection) -> Vec<Song> {
    catalog
        .iter()
        .filter(|song| selection.matches(song))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TagValue, tests::song};

    fn catalog() -> Vec<Song> {
        let mut a = song(1, "Alpha", "EN");
        a.singers = vec!["Asha".into(), "Kishore".into()];
        a.year = Some(TagValue::Number(1975));
        a.genre = Some("Melody".into());

        let mut b = song(2, "Bravo", "HI");
        b.singers = vec!["Kishore".into()];
        b.year = Some(TagValue::Text("1980".into()));
        b.music_by = Some("R D Burman".into());

        let mut c = song(3, "Charlie", "EN");
        c.album = Some("Midnight Sessions".into());
        c.music_by = Some("R D Burman".into());

        vec![a, b, c]
    }

    fn ids(songs: &[Song]) -> Vec<String> {
        songs.iter().map(|s| s.id.to_string()).collect()
    }

    #[test]
    fn test_empty_selection_matches_everything() {
        let selection = FilterSelection::default();

        assert!(selection.is_empty());
        assert_eq!(ids(&filter_songs(&catalog(), &selection)), ["1", "2", "3"]);
    }

    #[test]
    fn test_language_filter_keeps_catalog_order() {
        let mut selection = FilterSelection::default();
        selection.set(FilterDimension::Language, Some("EN".into()));

        assert_eq!(ids(&filter_songs(&catalog(), &selection)), ["1", "3"]);
    }

    #[test]
    fn test_singer_matches_any_performer() {
        let mut selection = FilterSelection::default();
        selection.set(FilterDimension::Singer, Some("Kishore".into()));
        assert_eq!(ids(&filter_songs(&catalog(), &selection)), ["1", "2"]);

        selection.set(FilterDimension::Singer, Some("Asha".into()));
        assert_eq!(ids(&filter_songs(&catalog(), &selection)), ["1"]);
    }

    #[test]
    fn test_year_compares_as_text() {
        let mut selection = FilterSelection::default();
        selection.set(FilterDimension::Year, Some("1975".into()));
        assert_eq!(ids(&filter_songs(&catalog(), &selection)), ["1"]);

        selection.set(FilterDimension::Year, Some("1980".into()));
        assert_eq!(ids(&filter_songs(&catalog(), &selection)), ["2"]);
    }

    #[test]
    fn test_absent_field_only_fails_its_dimension() {
        let mut selection = FilterSelection::default();
        selection.set(FilterDimension::Genre, Some("Melody".into()));

        // Songs 2 and 3 have no genre at all
        assert_eq!(ids(&filter_songs(&catalog(), &selection)), ["1"]);
    }

    #[test]
    fn test_predicates_are_anded() {
        let mut selection = FilterSelection::default();
        selection.set(FilterDimension::Composer, Some("R D Burman".into()));
        selection.set(FilterDimension::Language, Some("EN".into()));

        assert_eq!(ids(&filter_songs(&catalog(), &selection)), ["3"]);
    }

    #[test]
    fn test_search_title_or_album_case_insensitive() {
        let mut selection = FilterSelection {
            search: "  BRAV ".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_songs(&catalog(), &selection)), ["2"]);

        selection.search = "midnight".into();
        assert_eq!(ids(&filter_songs(&catalog(), &selection)), ["3"]);

        selection.search = "album".into();
        assert_eq!(ids(&filter_songs(&catalog(), &selection)), ["1", "2"]);
    }

    #[test]
    fn test_filtering_is_deterministic_subset() {
        let catalog = catalog();
        let mut selection = FilterSelection::default();
        selection.set(FilterDimension::Singer, Some("Kishore".into()));
        selection.search = "a".into();

        let first = filter_songs(&catalog, &selection);
        let second = filter_songs(&catalog, &selection);

        assert_eq!(first, second);
        assert!(first.iter().all(|s| catalog.contains(s) && selection.matches(s)));
    }

    #[test]
    fn test_set_empty_value_clears_dimension() {
        let mut selection = FilterSelection::default();
        selection.set(FilterDimension::Language, Some("EN".into()));
        selection.set(FilterDimension::Language, Some(String::new()));

        assert_eq!(selection.get(FilterDimension::Language), None);
        assert!(selection.is_empty());
    }
}
