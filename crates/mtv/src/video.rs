use chrono::{DateTime, FixedOffset};
use tracing::debug;

use crate::{
    Mtv,
    error::Result,
    feed::Node,
    options::{FindOptions, SearchOptions},
    resource::{Resource, parse_many, parse_one},
};

/// A music video in MTV's database.
///
/// Feed entries are not mapped onto videos yet: every parsed video comes back
/// empty, so searches currently return no results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Video {
    pub name: Option<String>,
    pub uid: Option<String>,
    pub uri: Option<String>,
    pub links: Vec<String>,
    pub updated: Option<DateTime<FixedOffset>>,
}

impl Resource for Video {
    const KIND: &'static str = "video";

    // TODO: map title, thumbnails, player, published and author.
    fn instantiate(entry: &Node, _base_url: &str) -> Self {
        debug!(target: "mtv", ?entry, "video entry");
        Video::default()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Either a video uid to look up, or a video already at hand.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoRef {
    Uid(String),
    Video(Video),
}

impl From<&str> for VideoRef {
    fn from(value: &str) -> Self {
        Self::Uid(value.to_string())
    }
}

impl From<String> for VideoRef {
    fn from(value: String) -> Self {
        Self::Uid(value)
    }
}

impl From<Video> for VideoRef {
    fn from(value: Video) -> Self {
        Self::Video(value)
    }
}

impl Mtv {
    /// Looks a video up by uid. A [`VideoRef::Video`] is returned as is;
    /// `options.uid` replaces a given uid.
    pub async fn find_video(
        &self,
        video: impl Into<VideoRef>,
        options: FindOptions,
    ) -> Result<Video> {
        let uid = match video.into() {
            VideoRef::Video(video) => return Ok(video),
            VideoRef::Uid(uid) => options.uid.unwrap_or(uid),
        };

        let body = self.request(&["video", &uid, ""], None).await?;
        parse_one(&body, &self.base_url(), &uid)
    }

    pub async fn search_videos(
        &self,
        term: impl AsRef<str>,
        options: SearchOptions,
    ) -> Result<Vec<Video>> {
        let query = options.query(term.as_ref());
        let body = self.request(&["video", "search"], Some(&query)).await?;
        parse_many(&body, &self.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_map_to_empty_videos() {
        let entry = Node::parse(
            "<entry><title>Loser</title><author><name>Beck</name></author></entry>",
        )
        .unwrap();
        assert_eq!(Video::instantiate(&entry, ""), Video::default());
    }

    #[test]
    fn feeds_yield_no_videos() {
        let body = "<feed><entry><title>Loser</title><author><name>Beck</name></author></entry></feed>";
        let videos: Vec<Video> = parse_many(body, "").unwrap();
        assert!(videos.is_empty());
    }
}
