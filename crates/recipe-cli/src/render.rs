//! Plain-text rendering of recipes

use recipe_box_core::{Recipe, RecipeField};

const EXCERPT_WIDTH: usize = 60;

/// One line per recipe for listings
pub fn excerpt(recipe: &Recipe) -> String {
    let summary = truncate(&recipe.description, EXCERPT_WIDTH);
    if summary.is_empty() {
        format!("#{:<4} {}", recipe.id, recipe.title)
    } else {
        format!("#{:<4} {} - {}", recipe.id, recipe.title, summary)
    }
}

/// Full detail view
pub fn full(recipe: &Recipe) -> String {
    let mut out = format!("#{} {}\n", recipe.id, recipe.title);
    for field in RecipeField::ALL {
        if field == RecipeField::Title {
            continue;
        }
        let value = recipe.field(field);
        if field.is_multiline() {
            out.push_str(&format!("\n{}:\n{}\n", field.label(), value));
        } else {
            out.push_str(&format!("{}: {}\n", field.label(), value));
        }
    }
    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let cut: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salad() -> Recipe {
        Recipe {
            id: 2,
            title: "Salad".to_string(),
            ingredients: "lettuce\ntomato".to_string(),
            instructions: "Toss".to_string(),
            description: "Crisp".to_string(),
            image_url: "https://example.com/salad.jpg".to_string(),
            servings: 3,
        }
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt(&salad()), "#2    Salad - Crisp");
        let mut plain = salad();
        plain.description.clear();
        assert_eq!(excerpt(&plain), "#2    Salad");
    }

    #[test]
    fn test_excerpt_truncates_long_description() {
        let mut long = salad();
        long.description = "word ".repeat(40);
        let line = excerpt(&long);
        assert!(line.ends_with("..."));
        assert!(line.chars().count() < 80);
    }

    #[test]
    fn test_full_lists_every_field() {
        let text = full(&salad());
        assert!(text.starts_with("#2 Salad\n"));
        assert!(text.contains("Servings: 3"));
        assert!(text.contains("Ingredients:\nlettuce\ntomato"));
        assert!(text.contains("Image URL: https://example.com/salad.jpg"));
    }
}
