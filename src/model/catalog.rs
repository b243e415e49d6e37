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

//! Media catalog management.
//!
//! This module provides state for the song catalog fetched at startup,
//! together with the filter vocabularies supplied alongside it and the status
//! of the load itself.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::model::{Song, SongId, TagValue, filter::FilterDimension};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CatalogStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Distinct values per filter dimension, keyed by the remote document's
/// dimension names.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub(crate) struct FilterVocabulary(BTreeMap<String, Vec<TagValue>>);

impl FilterVocabulary {
    pub(crate) fn values(&self, dimension: FilterDimension) -> &[TagValue] {
        self.0
            .get(dimension.vocabulary_key())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

pub(crate) struct Catalog {
    pub(crate) status: CatalogStatus,
    songs: Vec<Song>,
    vocabulary: FilterVocabulary,
}

impl Catalog {
    pub(crate) fn new() -> Self {
        Self {
            status: CatalogStatus::Loading,
            songs: vec![],
            vocabulary: FilterVocabulary::default(),
        }
    }

    /// Replaces the catalog wholesale.
    pub(crate) fn populate(&mut self, songs: Vec<Song>, vocabulary: FilterVocabulary) {
        self.songs = songs;
        self.vocabulary = vocabulary;
        self.status = CatalogStatus::Ready;
    }

    /// Marks the load as failed, no partial catalog is ever kept.
    pub(crate) fn fail(&mut self, reason: String) {
        self.songs.clear();
        self.vocabulary = FilterVocabulary::default();
        self.status = CatalogStatus::Failed(reason);
    }

    pub(crate) fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub(crate) fn vocabulary(&self) -> &FilterVocabulary {
        &self.vocabulary
    }

    pub(crate) fn song(&self, id: &SongId) -> Option<&Song> {
        self.songs.iter().find(|s| &s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::song;

    #[test]
    fn test_vocabulary_from_json() {
        let json = r#"{
            "languages": ["Telugu", "Hindi"],
            "years": [2020, "2019"],
            "musicBy": ["Thaman S"]
        }"#;

        let vocab: FilterVocabulary = serde_json::from_str(json).unwrap();

        assert_eq!(vocab.values(FilterDimension::Language).len(), 2);
        assert_eq!(
            vocab.values(FilterDimension::Year),
            &[TagValue::Number(2020), TagValue::Text("2019".into())]
        );
        assert_eq!(vocab.values(FilterDimension::Composer)[0].to_string(), "Thaman S");
        assert!(vocab.values(FilterDimension::Genre).is_empty());
    }

    #[test]
    fn test_populate_then_fail_clears_everything() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.status, CatalogStatus::Loading);

        catalog.populate(vec![song(1, "A", "EN")], FilterVocabulary::default());
        assert_eq!(catalog.status, CatalogStatus::Ready);
        assert!(catalog.song(&SongId::Number(1)).is_some());

        catalog.fail("boom".into());
        assert!(catalog.songs().is_empty());
        assert_eq!(catalog.status, CatalogStatus::Failed("boom".into()));
    }
}
