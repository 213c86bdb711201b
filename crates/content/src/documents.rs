//! Serde shapes of the three site documents.
//!
//! Every field a page can render without is an `Option`; consumers treat
//! `None` as "skip this effect", never as an error. `socialMedia` keeps
//! the document's key order (`serde_json` map with `preserve_order`).

use serde::{Deserialize, Deserializer};

/// Top-level shape of `branding.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandingDocument {
    pub brand: Option<Brand>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub logo: Option<Logo>,
    pub organization_name: Option<String>,
    pub slogan: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    /// Platform key -> profile URL, in document order.
    pub social_media: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Logo {
    /// URL of the logo image.
    pub title: Option<String>,
    pub favicon: Option<String>,
}

/// Top-level shape of `theme.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeDocument {
    pub colors: Option<ThemeColors>,
    pub font: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeColors {
    pub primary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub text: Option<String>,
}

/// Top-level shape of `games.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GamesDocument {
    pub title: Option<String>,
    pub tagline: Option<String>,
    /// A `games` field that is absent or not a sequence renders nothing.
    #[serde(default, deserialize_with = "lenient_games")]
    pub games: Option<Vec<GameDescriptor>>,
    pub countdown: Option<CountdownConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameDescriptor {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub thumbnail: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountdownConfig {
    /// Timestamp string understood by the platform date parser.
    pub target: Option<String>,
    pub title: Option<String>,
}

fn lenient_games<'de, D>(deserializer: D) -> Result<Option<Vec<GameDescriptor>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        // Elements that don't parse are dropped individually; the rest
        // still render
        serde_json::Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_minimal() {
        let doc: BrandingDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.brand.is_none());
    }

    #[test]
    fn test_branding_full() {
        let doc: BrandingDocument = serde_json::from_str(
            r#"{"brand":{"logo":{"title":"logo.png","favicon":"fav.ico"},
                "organizationName":"FunKids","slogan":"Play!","email":"hi@funkids.example",
                "socialMedia":{"github":"https://github.com/funkids","x":"https://x.com/funkids"}}}"#,
        )
        .unwrap();
        let brand = doc.brand.unwrap();
        assert_eq!(brand.organization_name.as_deref(), Some("FunKids"));
        assert_eq!(brand.logo.unwrap().favicon.as_deref(), Some("fav.ico"));
        assert!(brand.mobile.is_none());
        let keys: Vec<&String> = brand.social_media.as_ref().unwrap().keys().collect();
        assert_eq!(keys, ["github", "x"]);
    }

    #[test]
    fn test_games_not_a_sequence_is_tolerated() {
        let doc: GamesDocument = serde_json::from_str(r#"{"games":"oops"}"#).unwrap();
        assert!(doc.games.is_none());
    }

    #[test]
    fn test_malformed_game_entry_keeps_the_rest() {
        let doc: GamesDocument =
            serde_json::from_str(r#"{"games":[{"name":"A"},{"name":"B"},5]}"#).unwrap();
        let games = doc.games.unwrap();
        let names: Vec<_> = games.iter().map(|g| g.name.as_deref()).collect();
        assert_eq!(names, [Some("A"), Some("B")]);
    }

    #[test]
    fn test_games_sequence_order_preserved() {
        let doc: GamesDocument = serde_json::from_str(
            r#"{"games":[{"name":"A"},{"name":"B"},{"name":"C"}]}"#,
        )
        .unwrap();
        let games = doc.games.unwrap();
        let names: Vec<_> = games.iter().map(|g| g.name.as_deref()).collect();
        assert_eq!(names, [Some("A"), Some("B"), Some("C")]);
    }

    #[test]
    fn test_theme_without_colors() {
        let doc: ThemeDocument = serde_json::from_str(r#"{"font":"Comic Sans MS"}"#).unwrap();
        assert!(doc.colors.is_none());
        assert_eq!(doc.font.as_deref(), Some("Comic Sans MS"));
    }
}
