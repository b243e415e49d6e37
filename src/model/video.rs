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

//! Promotional video references.
//!
//! Songs may link to a YouTube video. The link comes in several shapes (short
//! links, embeds, watch pages) and is reduced here to the 11 character video
//! id, from which the canonical watch page and thumbnail are derived.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::Song;

const VIDEO_ID_LEN: usize = 11;

static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
        .expect("valid video id pattern")
});

/// A resolved video preview for one song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VideoPreview {
    pub(crate) title: String,
    pub(crate) video_id: String,
}

impl VideoPreview {
    pub(crate) fn for_song(song: &Song) -> Option<Self> {
        let video_id = video_id(song.video_url()?)?;

        Some(Self {
            title: song.title.clone(),
            video_id,
        })
    }

    pub(crate) fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }

    pub(crate) fn thumbnail_url(&self) -> String {
        format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", self.video_id)
    }
}

/// Extracts the video id from a YouTube link, if it has one.
pub(crate) fn video_id(url: &str) -> Option<String> {
    let captures = VIDEO_ID.captures(url)?;
    let id = captures.get(2)?.as_str();

    (id.len() == VIDEO_ID_LEN).then(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{YoutubeLink, tests::song};

    #[test]
    fn test_video_id_link_shapes() {
        for url in [
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1",
            "https://www.youtube.com/v/dQw4w9WgXcQ#t=30",
        ] {
            assert_eq!(video_id(url).as_deref(), Some("dQw4w9WgXcQ"), "{}", url);
        }
    }

    #[test]
    fn test_video_id_rejects_bad_links() {
        assert_eq!(video_id("https://youtu.be/short"), None);
        assert_eq!(video_id("https://example.com/video.mp4"), None);
        assert_eq!(video_id(""), None);
    }

    #[test]
    fn test_preview_urls() {
        let mut s = song(1, "Butta Bomma", "Telugu");
        s.youtube = Some(YoutubeLink {
            url: "https://youtu.be/2mDCVzruYzQ".into(),
        });

        let preview = VideoPreview::for_song(&s).unwrap();

        assert_eq!(preview.title, "Butta Bomma");
        assert_eq!(preview.watch_url(), "https://www.youtube.com/watch?v=2mDCVzruYzQ");
        assert_eq!(
            preview.thumbnail_url(),
            "https://img.youtube.com/vi/2mDCVzruYzQ/maxresdefault.jpg"
        );
    }

    #[test]
    fn test_no_preview_without_link() {
        let mut s = song(1, "Plain", "EN");
        assert_eq!(VideoPreview::for_song(&s), None);

        s.youtube = Some(YoutubeLink { url: String::new() });
        assert_eq!(VideoPreview::for_song(&s), None);
    }
}
