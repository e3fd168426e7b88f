use tracing::trace;

use crate::{
    error::{MtvError, Result},
    feed::Node,
};

/// A record that can be built from one feed `entry`.
pub(crate) trait Resource: Sized {
    const KIND: &'static str;

    /// Builds a record from `entry`. Fields that cannot be read are left empty.
    fn instantiate(entry: &Node, base_url: &str) -> Self;

    fn name(&self) -> Option<&str>;

    fn is_valid(&self) -> bool {
        self.name().is_some_and(|name| !name.is_empty())
    }
}

/// Maps every `entry` of a `feed` document, dropping records without a name.
pub(crate) fn parse_many<R: Resource>(body: &str, base_url: &str) -> Result<Vec<R>> {
    let root = Node::parse(body)?;
    if root.name() != "feed" {
        return Err(MtvError::MalformedFeed(format!(
            "expected <feed>, got <{}>",
            root.name()
        )));
    }

    let entries = root.children("entry");
    trace!(target: "mtv", kind = R::KIND, entries = entries.len(), "parsing feed");

    Ok(entries
        .iter()
        .map(|entry| R::instantiate(entry, base_url))
        .filter(R::is_valid)
        .collect())
}

/// Maps a single `entry` document. A `feed` document contributes its first entry.
pub(crate) fn parse_one<R: Resource>(body: &str, base_url: &str, requested: &str) -> Result<R> {
    let root = Node::parse(body)?;
    let entry = match root.name() {
        "entry" => Some(&root),
        "feed" => root.child("entry"),
        _ => None,
    };

    let not_found = || MtvError::NotFound(format!("{} {requested}", R::KIND));
    let entry = entry.ok_or_else(not_found)?;
    if entry.text_at(&["author", "name"]).is_none() {
        return Err(not_found());
    }

    Ok(R::instantiate(entry, base_url))
}
