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

//! Remote catalog retrieval.
//!
//! The catalog lives in two JSON documents: the filter vocabularies and the
//! song metadata. Both are fetched concurrently at startup and both must
//! succeed, there is no partial catalog.

use std::{
    thread,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::model::{Song, catalog::FilterVocabulary};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected status {status} fetching {url}")]
    Status { url: String, status: u16 },

    #[error("Malformed document from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct MetadataDocument {
    songs: Vec<Song>,
}

pub(crate) struct CatalogClient {
    http_client: Client,
    filters_url: String,
    metadata_url: String,
}

impl CatalogClient {
    pub(crate) fn new(filters_url: &str, metadata_url: &str) -> Result<Self, FetchError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            http_client,
            filters_url: filters_url.to_string(),
            metadata_url: metadata_url.to_string(),
        })
    }

    /// Fetches both documents concurrently, returning the normalized songs and
    /// the filter vocabulary.
    pub(crate) fn fetch_catalog(&self) -> Result<(Vec<Song>, FilterVocabulary), FetchError> {
        let version = cache_buster();

        let (vocabulary, metadata) = thread::scope(|s| {
            let vocabulary = s.spawn(|| self.fetch_document(&self.filters_url, &version));
            let metadata = s.spawn(|| self.fetch_document(&self.metadata_url, &version));

            (join(vocabulary), join(metadata))
        });

        let vocabulary: FilterVocabulary = parse_document(&self.filters_url, &vocabulary?)?;
        let songs = parse_metadata(&self.metadata_url, &metadata?)?;

        info!(songs = songs.len(), "Catalog fetched");

        Ok((songs, vocabulary))
    }

    fn fetch_document(&self, url: &str, version: &str) -> Result<String, FetchError> {
        debug!(url, version, "Fetching document");

        let network_error = |e| FetchError::Network {
            url: url.to_string(),
            source: e,
        };

        let response = self
            .http_client
            .get(url)
            .query(&[("v", version)])
            .send()
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(network_error)
    }
}

fn join(
    handle: thread::ScopedJoinHandle<'_, Result<String, FetchError>>,
) -> Result<String, FetchError> {
    // Fetch threads only panic if reqwest does, surface that as is
    handle
        .join()
        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
}

fn cache_buster() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
        .to_string()
}

fn parse_document<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode {
        url: url.to_string(),
        source: e,
    })
}

/// Parses the metadata document and normalizes the media locations of every
/// song.
pub(crate) fn parse_metadata(url: &str, body: &str) -> Result<Vec<Song>, FetchError> {
    let document: MetadataDocument = parse_document(url, body)?;

    Ok(document
        .songs
        .into_iter()
        .map(|mut song| {
            normalize_urls(&mut song);
            if song.audio_url.is_empty() || song.cover_image.is_empty() {
                warn!(id = %song.id, title = %song.title, "Song has missing media references");
            }
            song
        })
        .collect())
}

/// Rewrites branch-style CDN paths into the form the CDN actually serves.
pub(crate) fn normalize_urls(song: &mut Song) {
    song.audio_url = fix_cover_path(&song.audio_url.replace("/audio/main/", "/audio@main/"));
    song.cover_image = fix_cover_path(&song.cover_image);
    if let Some(image) = song.album_image.as_mut() {
        *image = fix_cover_path(image);
    }
}

fn fix_cover_path(url: &str) -> String {
    url.replace("/coverimages/main/", "/coverimages@main/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SongId, filter::FilterDimension};

    const METADATA: &str = r#"{
        "songs": [
            {
                "id": 1,
                "title": "Butta Bomma",
                "singers": ["Armaan Malik"],
                "albumImage": "https://cdn.jsdelivr.net/gh/u/coverimages/main/Ala-Vaikunthapurramuloo.jpg",
                "coverImage": "https://cdn.jsdelivr.net/gh/u/coverimages/main/butta.jpg",
                "audioUrl": "https://cdn.jsdelivr.net/gh/u/audio/main/butta.mp3",
                "language": "Telugu",
                "year": 2020
            },
            { "id": "two", "title": "No Media" }
        ]
    }"#;

    #[test]
    fn test_parse_metadata_normalizes_urls() {
        let songs = parse_metadata("metadata.json", METADATA).unwrap();

        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].audio_url, "https://cdn.jsdelivr.net/gh/u/audio@main/butta.mp3");
        assert_eq!(
            songs[0].cover_image,
            "https://cdn.jsdelivr.net/gh/u/coverimages@main/butta.jpg"
        );
        assert_eq!(
            songs[0].album_image.as_deref(),
            Some("https://cdn.jsdelivr.net/gh/u/coverimages@main/Ala-Vaikunthapurramuloo.jpg")
        );
        assert_eq!(songs[0].album_name(), "Ala Vaikunthapurramuloo");
        assert_eq!(songs[1].id, SongId::Text("two".into()));
        assert!(songs[1].audio_url.is_empty());
    }

    #[test]
    fn test_normalize_audio_also_fixes_cover_path() {
        let mut song = parse_metadata("m", r#"{ "songs": [{ "id": 1 }] }"#).unwrap().remove(0);
        song.audio_url = "https://cdn/x/coverimages/main/a.mp3".into();

        normalize_urls(&mut song);

        assert_eq!(song.audio_url, "https://cdn/x/coverimages@main/a.mp3");
    }

    #[test]
    fn test_normalize_leaves_other_urls_alone() {
        let mut song = parse_metadata("m", r#"{ "songs": [{ "id": 1 }] }"#).unwrap().remove(0);
        song.audio_url = "https://example.com/audio/dev/a.mp3".into();

        normalize_urls(&mut song);

        assert_eq!(song.audio_url, "https://example.com/audio/dev/a.mp3");
    }

    #[test]
    fn test_parse_metadata_rejects_malformed() {
        let err = parse_metadata("metadata.json", r#"{ "tracks": [] }"#).unwrap_err();

        assert!(matches!(err, FetchError::Decode { .. }));
        assert!(err.to_string().contains("metadata.json"));
    }

    #[test]
    fn test_parse_vocabulary() {
        let vocab: FilterVocabulary =
            parse_document("filters.json", r#"{ "genres": ["Melody", "Mass"] }"#).unwrap();

        assert_eq!(vocab.values(FilterDimension::Genre).len(), 2);
    }

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status {
            url: "https://cdn/filters.json".into(),
            status: 404,
        };

        assert_eq!(err.to_string(), "Unexpected status 404 fetching https://cdn/filters.json");
    }

    #[test]
    fn test_client_error_is_not_blamed_on_a_url() {
        // An unparseable URL fails while building the request, before any I/O
        let source = Client::new()
            .get("not a url")
            .send()
            .expect_err("request should not build");

        let err = FetchError::Client(source);

        assert!(err.to_string().starts_with("Failed to build HTTP client"));
        assert!(!err.to_string().contains("fetching"));
    }
}
