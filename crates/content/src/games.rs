//! Game card markup.

use crate::documents::GameDescriptor;

/// Thumbnail used when a descriptor has none.
pub const PLACEHOLDER_THUMBNAIL: &str =
    "https://via.placeholder.com/300x200/4A90E2/FFFFFF?text=Game";

/// Difficulty label used when a descriptor has none.
pub const DEFAULT_DIFFICULTY: &str = "Easy";

/// Sentinel launch target for games without a URL.
pub const LAUNCH_PLACEHOLDER: &str = "#";

/// One card. Cards are focusable and carry their launch URL as a data
/// attribute; the UI layer wires up activation.
pub fn game_card_html(game: &GameDescriptor) -> String {
    let thumbnail = game.thumbnail.as_deref().unwrap_or(PLACEHOLDER_THUMBNAIL);
    let name = game.name.as_deref().unwrap_or_default();
    // description has no fallback; absent renders empty
    let description = game.description.as_deref().unwrap_or_default();
    let difficulty = game.difficulty.as_deref().unwrap_or(DEFAULT_DIFFICULTY);
    let url = game.url.as_deref().unwrap_or(LAUNCH_PLACEHOLDER);
    format!(
        concat!(
            "<div class=\"game-card\" role=\"listitem\" tabindex=\"0\" data-url=\"{url}\">",
            "<img src=\"{thumbnail}\" alt=\"{name}\" class=\"game-thumbnail\" loading=\"lazy\">",
            "<h3 class=\"game-title\">{name}</h3>",
            "<p class=\"game-description\">{description}</p>",
            "<span class=\"game-difficulty difficulty-{suffix}\">{difficulty}</span>",
            "</div>"
        ),
        url = url,
        thumbnail = thumbnail,
        name = name,
        description = description,
        suffix = difficulty.to_lowercase(),
        difficulty = difficulty,
    )
}

/// Grid contents: cards concatenated in input order, committed by the
/// UI layer in one assignment.
pub fn games_grid_html(games: &[GameDescriptor]) -> String {
    games.iter().map(game_card_html).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(name: &str) -> GameDescriptor {
        GameDescriptor {
            name: Some(name.into()),
            description: Some(format!("{name} is fun")),
            ..GameDescriptor::default()
        }
    }

    #[test]
    fn test_one_card_per_descriptor_in_order() {
        let games = [game("Maze"), game("Puzzle"), game("Quiz")];
        let html = games_grid_html(&games);
        assert_eq!(html.matches("class=\"game-card\"").count(), 3);
        let maze = html.find("Maze").unwrap();
        let puzzle = html.find("Puzzle").unwrap();
        let quiz = html.find("Quiz").unwrap();
        assert!(maze < puzzle && puzzle < quiz);
    }

    #[test]
    fn test_thumbnail_placeholder() {
        let html = game_card_html(&game("Maze"));
        assert!(html.contains(PLACEHOLDER_THUMBNAIL));

        let mut with_thumb = game("Maze");
        with_thumb.thumbnail = Some("maze.png".into());
        let html = game_card_html(&with_thumb);
        assert!(html.contains("src=\"maze.png\""));
        assert!(!html.contains(PLACEHOLDER_THUMBNAIL));
    }

    #[test]
    fn test_difficulty_fallback_and_selector_suffix() {
        let html = game_card_html(&game("Maze"));
        assert!(html.contains("difficulty-easy"));
        assert!(html.contains(">Easy</span>"));

        let mut hard = game("Maze");
        hard.difficulty = Some("Hard".into());
        let html = game_card_html(&hard);
        assert!(html.contains("difficulty-hard"));
        assert!(html.contains(">Hard</span>"));
    }

    #[test]
    fn test_missing_description_renders_empty() {
        let mut g = game("Maze");
        g.description = None;
        let html = game_card_html(&g);
        assert!(html.contains("<p class=\"game-description\"></p>"));
    }

    #[test]
    fn test_missing_url_uses_sentinel() {
        let html = game_card_html(&game("Maze"));
        assert!(html.contains("data-url=\"#\""));

        let mut g = game("Maze");
        g.url = Some("https://play.example/maze".into());
        assert!(game_card_html(&g).contains("data-url=\"https://play.example/maze\""));
    }
}
