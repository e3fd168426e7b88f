use url::form_urlencoded;

pub const DEFAULT_MAX_RESULT: u32 = 1;

/// Search parameters shared by artist and video searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Replaces the positional search term when set.
    pub term: Option<String>,
    pub max_result: Option<u32>,
    pub start_index: Option<u32>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn max_result(mut self, max_result: u32) -> Self {
        self.max_result = Some(max_result);
        self
    }

    pub fn start_index(mut self, start_index: u32) -> Self {
        self.start_index = Some(start_index);
        self
    }

    /// Builds `term=..&max-result=..[&start-index=..]`.
    pub(crate) fn query(&self, term: &str) -> String {
        let term = self.term.as_deref().unwrap_or(term);
        let max_result = self.max_result.unwrap_or(DEFAULT_MAX_RESULT).to_string();
        let start_index = self.start_index.map(|i| i.to_string());

        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("term", term);
        query.append_pair("max-result", &max_result);
        if let Some(start_index) = &start_index {
            query.append_pair("start-index", start_index);
        }
        query.finish()
    }
}

/// Overrides applied by `find_artist` and `find_video`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindOptions {
    pub name: Option<String>,
    pub uid: Option<String>,
}

impl FindOptions {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn uid(uid: impl Into<String>) -> Self {
        Self {
            uid: Some(uid.into()),
            ..Self::default()
        }
    }
}
