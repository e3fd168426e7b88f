//! Generic tree view over an XML document.
//!
//! Elements are keyed by local name, attributes by `prefix:name`. Every child name maps to a list, so a
//! repeatable element such as `entry` or `link` reads the same whether the
//! document holds one of it or many.

use std::collections::BTreeMap;

use roxmltree::Document;

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    name: String,
    attributes: BTreeMap<String, String>,
    children: BTreeMap<String, Vec<Node>>,
    text: Option<String>,
}

impl Node {
    /// Parses `xml` and returns its root element.
    pub fn parse(xml: &str) -> Result<Node> {
        let doc = Document::parse(xml)?;
        Ok(Self::from_element(doc.root_element()))
    }

    fn from_element(element: roxmltree::Node<'_, '_>) -> Node {
        let attributes = element
            .attributes()
            .map(|a| (qualified_name(element, &a), a.value().to_string()))
            .collect();

        let mut children: BTreeMap<String, Vec<Node>> = BTreeMap::new();
        let mut text = String::new();
        for child in element.children() {
            if child.is_element() {
                children
                    .entry(child.tag_name().name().to_string())
                    .or_default()
                    .push(Self::from_element(child));
            } else if child.is_text() {
                text.push_str(child.text().unwrap_or_default());
            }
        }

        // leaf text is kept verbatim; around child elements it is only layout
        if !children.is_empty() && text.trim().is_empty() {
            text.clear();
        }

        Node {
            name: element.tag_name().name().to_string(),
            attributes,
            children,
            text: (!text.is_empty()).then_some(text),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// All children called `name`, in document order. Empty when there are none.
    pub fn children(&self, name: &str) -> &[Node] {
        self.children.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// The first child called `name`.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children(name).first()
    }

    /// Follows `path` through first children, e.g. `["author", "name"]`.
    pub fn at(&self, path: &[&str]) -> Option<&Node> {
        path.iter().try_fold(self, |node, name| node.child(name))
    }

    /// Text of the element at `path`, if it exists and is not empty.
    pub fn text_at(&self, path: &[&str]) -> Option<&str> {
        self.at(path).and_then(Node::text)
    }
}

/// `prefix:name` for namespaced attributes, plain `name` otherwise.
fn qualified_name(
    element: roxmltree::Node<'_, '_>,
    attribute: &roxmltree::Attribute<'_, '_>,
) -> String {
    match attribute.namespace().and_then(|ns| element.lookup_prefix(ns)) {
        Some(prefix) => format!("{prefix}:{}", attribute.name()),
        None => attribute.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
        <feed xmlns="http://www.w3.org/2005/Atom">
          <title>Artists</title>
          <entry>
            <author><name>Beck</name><uri>http://api.mtvnservices.com/1/artist/beck/</uri></author>
            <link rel="self" href="http://example.com/beck"/>
            <link rel="alternate" href="http://example.com/beck.html"/>
          </entry>
          <entry>
            <author><name>Bjork</name></author>
          </entry>
        </feed>"#;

    #[test]
    fn repeated_elements_keep_document_order() {
        let feed = Node::parse(FEED).unwrap();
        assert_eq!(feed.name(), "feed");

        let entries = feed.children("entry");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text_at(&["author", "name"]), Some("Beck"));
        assert_eq!(entries[1].text_at(&["author", "name"]), Some("Bjork"));

        let hrefs: Vec<_> = entries[0]
            .children("link")
            .iter()
            .filter_map(|l| l.attribute("href"))
            .collect();
        assert_eq!(
            hrefs,
            ["http://example.com/beck", "http://example.com/beck.html"]
        );
    }

    #[test]
    fn single_element_is_still_a_sequence() {
        let entry = Node::parse("<entry><link href=\"a\"/></entry>").unwrap();
        assert_eq!(entry.children("link").len(), 1);
        assert!(entry.children("missing").is_empty());
        assert!(entry.child("missing").is_none());
    }

    #[test]
    fn missing_paths_are_none() {
        let entry = Node::parse("<entry><author><name></name></author></entry>").unwrap();
        assert!(entry.text_at(&["author", "name"]).is_none());
        assert!(entry.text_at(&["author", "uri"]).is_none());
        assert!(entry.at(&["nope", "name"]).is_none());
    }

    #[test]
    fn leaf_text_is_kept_verbatim() {
        let entry = Node::parse(
            "<entry>\n  <author>\n    <name>  Beck </name>\n  </author>\n  <title> </title>\n</entry>",
        )
        .unwrap();
        assert_eq!(entry.text_at(&["author", "name"]), Some("  Beck "));
        assert_eq!(entry.text_at(&["title"]), Some(" "));
        assert!(entry.text().is_none());
        assert!(entry.child("author").unwrap().text().is_none());
    }

    #[test]
    fn namespaced_attributes_do_not_collide() {
        let entry = Node::parse(
            r#"<entry xmlns:media="http://search.yahoo.com/mrss/">
                 <link media:url="http://a" url="http://b" xml:lang="en" lang="fr"/>
               </entry>"#,
        )
        .unwrap();
        let link = entry.child("link").unwrap();
        assert_eq!(link.attribute("media:url"), Some("http://a"));
        assert_eq!(link.attribute("url"), Some("http://b"));
        assert_eq!(link.attribute("lang"), Some("fr"));
        assert_eq!(link.attribute("xml:lang"), Some("en"));
    }

    #[test]
    fn rejects_malformed_xml() {
        assert!(Node::parse("<feed><entry></feed>").is_err());
    }
}
