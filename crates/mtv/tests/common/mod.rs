//! Shared fixtures for the mock-server tests.

#![allow(dead_code)]

use mtv::{Mtv, MtvConfig};
use wiremock::MockServer;

pub fn client(server: &MockServer) -> Mtv {
    Mtv::with_config(MtvConfig::with_base_url(server.uri()))
}

/// An Atom `<entry>` for an artist whose uri lives under `base`.
pub fn artist_entry(base: &str, name: &str, slug: &str) -> String {
    format!(
        r#"<entry>
            <author><name>{name}</name><uri>{base}/artist/{slug}/</uri></author>
            <link rel="self" href="{base}/artist/{slug}/"/>
            <updated>2009-04-07T12:00:00Z</updated>
          </entry>"#
    )
}

pub fn feed(entries: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
        <feed xmlns="http://www.w3.org/2005/Atom">{}</feed>"#,
        entries.concat()
    )
}

pub fn bare_entry(entry: String) -> String {
    entry.replacen("<entry>", r#"<entry xmlns="http://www.w3.org/2005/Atom">"#, 1)
}
