//! Failures surfaced by the data loader.

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Transport reported a non-success status.
    #[error("failed to fetch {url}: {status}")]
    Fetch { url: String, status: u16 },
    /// Body was not valid JSON for the expected document shape.
    #[error("failed to parse {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// Request never produced a response (network down, bad URL).
    #[error("network error fetching {url}: {detail}")]
    Transport { url: String, detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = LoadError::Fetch {
            url: "./data/theme.json".into(),
            status: 404,
        };
        assert_eq!(err.to_string(), "failed to fetch ./data/theme.json: 404");
    }

    #[test]
    fn test_parse_error_carries_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LoadError::Parse {
            url: "./data/games.json".into(),
            source,
        };
        assert!(err.to_string().starts_with("failed to parse ./data/games.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
