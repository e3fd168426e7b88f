use chrono::{DateTime, FixedOffset};
use tokio::sync::OnceCell;

use crate::{
    Mtv,
    error::{MtvError, Result},
    feed::Node,
    options::{FindOptions, SearchOptions},
    resource::{Resource, parse_many, parse_one},
};

pub const DEFAULT_BROWSE_LETTER: char = 'a';

/// A musical artist in MTV's database.
#[derive(Debug, Clone, Default)]
pub struct Artist {
    pub name: Option<String>,
    /// Short id derived from `uri`.
    pub uid: Option<String>,
    pub uri: Option<String>,
    pub links: Vec<String>,
    pub updated: Option<DateTime<FixedOffset>>,
    browse: OnceCell<Vec<Artist>>,
    related: OnceCell<Vec<Artist>>,
}

impl PartialEq for Artist {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.uid == other.uid
            && self.uri == other.uri
            && self.links == other.links
            && self.updated == other.updated
    }
}

impl Artist {
    /// Builds an artist, deriving `uid` from `uri` against `base_url`.
    pub fn new(
        name: Option<String>,
        uri: Option<String>,
        links: Vec<String>,
        updated: Option<DateTime<FixedOffset>>,
        base_url: &str,
    ) -> Self {
        Self {
            uid: uri.as_deref().map(|uri| uid_from_uri(uri, base_url)),
            name,
            uri,
            links,
            updated,
            ..Self::default()
        }
    }

    /// Artists listed under the same letter as this one.
    ///
    /// Fetched on first use, then kept for the lifetime of this value.
    pub async fn browse(&self, mtv: &Mtv) -> Result<&[Artist]> {
        let uid = self.uid.as_deref().ok_or(MtvError::MissingUid)?;
        self.browse
            .get_or_try_init(|| mtv.browse_artists(uid))
            .await
            .map(Vec::as_slice)
    }

    /// Artists MTV lists as related to this one. Fetched once, like [`Artist::browse`].
    pub async fn related(&self, mtv: &Mtv) -> Result<&[Artist]> {
        self.related
            .get_or_try_init(|| mtv.related_to(self))
            .await
            .map(Vec::as_slice)
    }
}

/// Strips `{base_url}/artist` and every slash from `uri`.
///
/// Only meaningful for artist uris.
pub fn uid_from_uri(uri: &str, base_url: &str) -> String {
    uri.replace(&format!("{base_url}/artist"), "").replace('/', "")
}

fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_rfc2822(value))
        .ok()
}

impl Resource for Artist {
    const KIND: &'static str = "artist";

    fn instantiate(entry: &Node, base_url: &str) -> Self {
        let links = entry
            .children("link")
            .iter()
            .filter_map(|link| link.attribute("href"))
            .map(str::to_string)
            .collect();

        Artist::new(
            entry.text_at(&["author", "name"]).map(str::to_string),
            entry.text_at(&["author", "uri"]).map(str::to_string),
            links,
            entry.text_at(&["updated"]).and_then(parse_timestamp),
            base_url,
        )
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Either an artist name to look up, or an artist already at hand.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtistRef {
    Name(String),
    Artist(Artist),
}

impl From<&str> for ArtistRef {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl From<String> for ArtistRef {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl From<Artist> for ArtistRef {
    fn from(value: Artist) -> Self {
        Self::Artist(value)
    }
}

impl From<&Artist> for ArtistRef {
    fn from(value: &Artist) -> Self {
        Self::Artist(value.clone())
    }
}

impl Mtv {
    /// Artists whose name starts with the first character of `letter`.
    /// An empty `letter` browses [`DEFAULT_BROWSE_LETTER`].
    pub async fn browse_artists(&self, letter: impl AsRef<str>) -> Result<Vec<Artist>> {
        let letter = letter
            .as_ref()
            .chars()
            .next()
            .unwrap_or(DEFAULT_BROWSE_LETTER);
        let letter = letter.to_string();
        let body = self.request(&["artist", "browse", &letter, ""], None).await?;
        parse_many(&body, &self.base_url())
    }

    /// Looks an artist up by name. An [`ArtistRef::Artist`] is returned as is,
    /// without touching the network; `options.name` replaces a given name.
    pub async fn find_artist(
        &self,
        artist: impl Into<ArtistRef>,
        options: FindOptions,
    ) -> Result<Artist> {
        let name = match artist.into() {
            ArtistRef::Artist(artist) => return Ok(artist),
            ArtistRef::Name(name) => options.name.unwrap_or(name),
        };

        let body = self.request(&["artist", &name, ""], None).await?;
        parse_one(&body, &self.base_url(), &name)
    }

    pub async fn related_artists(&self, artist: impl Into<ArtistRef>) -> Result<Vec<Artist>> {
        let artist = self.find_artist(artist, FindOptions::default()).await?;
        self.related_to(&artist).await
    }

    async fn related_to(&self, artist: &Artist) -> Result<Vec<Artist>> {
        let uid = artist.uid.as_deref().ok_or(MtvError::MissingUid)?;
        let body = self.request(&["artist", uid, "related", ""], None).await?;
        parse_many(&body, &self.base_url())
    }

    pub async fn search_artists(
        &self,
        term: impl AsRef<str>,
        options: SearchOptions,
    ) -> Result<Vec<Artist>> {
        let query = options.query(term.as_ref());
        let body = self.request(&["artist", "search"], Some(&query)).await?;
        parse_many(&body, &self.base_url())
    }
}
