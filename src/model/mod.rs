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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the songs of
//! the remote catalog and the tag values used to filter them, together with
//! the state components built on top of them:
//!
//! * [`catalog`]: the fetched catalog and filter vocabularies.
//! * [`filter`]: derivation of the visible subset of the catalog.
//! * [`playback`]: the playback state machine.
//! * [`view`]: view mode, display density and album grouping.
//! * [`video`]: promotional video references.

pub(crate) mod catalog;
pub(crate) mod filter;
pub(crate) mod playback;
pub(crate) mod video;
pub(crate) mod view;

use std::fmt;

use serde::Deserialize;

pub(crate) const UNKNOWN_ALBUM: &str = "Unknown Album";

/// A tag value as it appears in the remote documents, where years are
/// usually numbers and everything else is text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub(crate) enum TagValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Number(n) => write!(f, "{}", n),
            TagValue::Text(s) => f.write_str(s),
        }
    }
}

/// Stable song identifier, numeric or textual in the metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub(crate) enum SongId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SongId::Number(n) => write!(f, "{}", n),
            SongId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct YoutubeLink {
    pub(crate) url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Song {
    pub(crate) id: SongId,
    #[serde(default)]
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) singers: Vec<String>,
    pub(crate) album: Option<String>,
    pub(crate) album_image: Option<String>,
    #[serde(default)]
    pub(crate) cover_image: String,
    #[serde(default)]
    pub(crate) audio_url: String,
    pub(crate) language: Option<String>,
    pub(crate) genre: Option<String>,
    pub(crate) year: Option<TagValue>,
    pub(crate) music_by: Option<String>,
    pub(crate) youtube: Option<YoutubeLink>,
}

impl Song {
    /// The album (movie) this song belongs to.
    ///
    /// Uses the explicit album name when present, otherwise the file stem of
    /// the album artwork reference with dashes turned into spaces, and finally
    /// [`UNKNOWN_ALBUM`].
    pub(crate) fn album_name(&self) -> String {
        if let Some(album) = self.album.as_deref().filter(|a| !a.is_empty()) {
            return album.to_string();
        }

        self.album_image
            .as_deref()
            .and_then(album_from_image)
            .unwrap_or_else(|| UNKNOWN_ALBUM.to_string())
    }

    pub(crate) fn singers_label(&self) -> String {
        if self.singers.is_empty() {
            "Unknown Artist".to_string()
        } else {
            self.singers.join(", ")
        }
    }

    /// Language, year and genre tags in display order, skipping absent ones.
    pub(crate) fn tags(&self) -> Vec<String> {
        [
            self.language.clone(),
            self.year.as_ref().map(TagValue::to_string),
            self.genre.clone(),
        ]
        .into_iter()
        .flatten()
        .filter(|t| !t.is_empty())
        .collect()
    }

    pub(crate) fn video_url(&self) -> Option<&str> {
        self.youtube
            .as_ref()
            .map(|y| y.url.as_str())
            .filter(|u| !u.is_empty())
    }
}

// e.g. ".../Ala-Vaikunthapurramuloo.jpg" -> "Ala Vaikunthapurramuloo"
fn album_from_image(image: &str) -> Option<String> {
    let filename = image.rsplit('/').next()?;
    let stem = filename.split('.').next()?;

    (!stem.is_empty()).then(|| stem.replace('-', " "))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Builds a song with the fields the reducer cares about.
    pub(crate) fn song(id: i64, title: &str, language: &str) -> Song {
        Song {
            id: SongId::Number(id),
            title: title.to_string(),
            singers: vec![],
            album: Some(format!("{} Album", title)),
            album_image: None,
            cover_image: format!("https://cdn.example/coverimages@main/{}.jpg", id),
            audio_url: format!("https://cdn.example/audio@main/{}.mp3", id),
            language: Some(language.to_string()),
            genre: None,
            year: None,
            music_by: None,
            youtube: None,
        }
    }

    #[test]
    fn test_album_name_prefers_explicit_album() {
        let mut s = song(1, "Title", "EN");
        s.album_image = Some("https://x/y/Other-Name.jpg".into());

        assert_eq!(s.album_name(), "Title Album");
    }

    #[test]
    fn test_album_name_falls_back_to_image_stem() {
        let mut s = song(1, "Title", "EN");
        s.album = None;
        s.album_image = Some("https://cdn/coverimages@main/Ala-Vaikuntha-puram.v2.jpg".into());

        assert_eq!(s.album_name(), "Ala Vaikuntha puram");
    }

    #[test]
    fn test_album_name_empty_album_is_ignored() {
        let mut s = song(1, "Title", "EN");
        s.album = Some(String::new());
        s.album_image = Some("Pushpa.png".into());

        assert_eq!(s.album_name(), "Pushpa");
    }

    #[test]
    fn test_album_name_unknown() {
        let mut s = song(1, "Title", "EN");
        s.album = None;
        assert_eq!(s.album_name(), UNKNOWN_ALBUM);

        s.album_image = Some(String::new());
        assert_eq!(s.album_name(), UNKNOWN_ALBUM);

        s.album_image = Some("https://cdn/images/".into());
        assert_eq!(s.album_name(), UNKNOWN_ALBUM);
    }

    #[test]
    fn test_song_deserialize_mixed_types() {
        let json = r#"{
            "id": "abc",
            "title": "Samajavaragamana",
            "singers": ["Sid Sriram"],
            "albumImage": "https://cdn/coverimages@main/Ala-Vaikunthapurramuloo.jpg",
            "coverImage": "https://cdn/coverimages@main/samaja.jpg",
            "audioUrl": "https://cdn/audio@main/samaja.mp3",
            "language": "Telugu",
            "year": 2020,
            "musicBy": "Thaman S",
            "youtube": { "url": "https://youtu.be/abcdefghijk" }
        }"#;

        let s: Song = serde_json::from_str(json).unwrap();

        assert_eq!(s.id, SongId::Text("abc".into()));
        assert_eq!(s.year, Some(TagValue::Number(2020)));
        assert_eq!(s.music_by.as_deref(), Some("Thaman S"));
        assert_eq!(s.album_name(), "Ala Vaikunthapurramuloo");
        assert_eq!(s.tags(), vec!["Telugu".to_string(), "2020".to_string()]);
        assert_eq!(s.video_url(), Some("https://youtu.be/abcdefghijk"));
    }

    #[test]
    fn test_song_deserialize_missing_references() {
        let s: Song = serde_json::from_str(r#"{ "id": 7, "title": "Bare" }"#).unwrap();

        assert_eq!(s.id, SongId::Number(7));
        assert!(s.cover_image.is_empty());
        assert!(s.audio_url.is_empty());
        assert_eq!(s.singers_label(), "Unknown Artist");
    }
}
