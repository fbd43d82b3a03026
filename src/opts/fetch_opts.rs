/// What to fetch: a pagination cursor or a server-side search term. A
/// non-blank search term wins over the cursor; with neither set the
/// well-known first page is fetched.
#[derive(Clone, Debug, Default)]
pub struct FetchOpts {
    pub cursor: Option<String>,
    pub search: Option<String>,
}

impl FetchOpts {
    pub fn first_page() -> FetchOpts {
        FetchOpts::default()
    }

    pub fn from_cursor(cursor: impl AsRef<str>) -> FetchOpts {
        FetchOpts {
            cursor: Some(String::from(cursor.as_ref())),
            search: None,
        }
    }

    pub fn from_search(term: impl AsRef<str>) -> FetchOpts {
        FetchOpts {
            cursor: None,
            search: Some(String::from(term.as_ref())),
        }
    }

    /// The effective search term. Blank terms mean "use cursor mode".
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::FetchOpts;

    #[test]
    fn test_blank_search_means_cursor_mode() {
        assert_eq!(FetchOpts::from_search("   ").search_term(), None);
        assert_eq!(FetchOpts::from_search("").search_term(), None);
        assert_eq!(FetchOpts::first_page().search_term(), None);
        assert_eq!(FetchOpts::from_search(" luke ").search_term(), Some("luke"));
    }
}
