//! Recipe Box terminal client.
//!
//! Each invocation loads the collection from the server, performs one
//! operation through the shared state manager and prints the result.
//! Notices go to stderr; data goes to stdout.

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recipe_box_core::{ClientConfig, ConfigError, HttpRecipeApi, RecipeBook, RecipeField, RecipeId};

mod render;

#[derive(Parser, Debug)]
#[command(name = "recipes")]
#[command(about = "Browse and edit recipes on a Recipe Box server")]
struct Cli {
    /// Base URL of the recipe API [default: $RECIPE_API_URL, then http://127.0.0.1:3000]
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List recipes, optionally filtered by a search term
    List {
        /// Case-insensitive match on title, ingredients or description
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Show one recipe in full
    Show { id: RecipeId },
    /// Create a recipe
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Update fields of an existing recipe
    Edit {
        id: RecipeId,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a recipe
    Delete { id: RecipeId },
}

#[derive(Args, Debug, Default)]
struct FieldArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    ingredients: Option<String>,
    #[arg(long)]
    instructions: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    image_url: Option<String>,
    #[arg(long)]
    servings: Option<String>,
}

/// An explicit `--api-url` wins over the environment
fn client_config(api_url: Option<&str>) -> Result<ClientConfig, ConfigError> {
    match api_url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env(),
    }
}

impl FieldArgs {
    /// Fields given on the command line, in form order
    fn assignments(&self) -> Vec<(RecipeField, &str)> {
        RecipeField::ALL
            .into_iter()
            .filter_map(|field| {
                let value = match field {
                    RecipeField::Title => &self.title,
                    RecipeField::Ingredients => &self.ingredients,
                    RecipeField::Instructions => &self.instructions,
                    RecipeField::Description => &self.description,
                    RecipeField::ImageUrl => &self.image_url,
                    RecipeField::Servings => &self.servings,
                };
                value.as_deref().map(|v| (field, v))
            })
            .collect()
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipe_box_core=info,recipes=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = client_config(cli.api_url.as_deref())?;
    tracing::debug!("-- Using recipe API at {}", config.base_url());

    let mut book = RecipeBook::new(HttpRecipeApi::new(config));
    let outcome = run(&mut book, cli.command).await;

    for notice in book.state_mut().take_notices() {
        eprintln!("{notice}");
    }
    outcome
}

async fn run(book: &mut RecipeBook<HttpRecipeApi>, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::List { search } => {
            book.load().await?;
            if let Some(term) = search {
                book.state_mut().set_search_term(term);
            }
            let displayed = book.state().displayed();
            if displayed.is_empty() {
                println!("No recipes found.");
            }
            for recipe in displayed {
                println!("{}", render::excerpt(recipe));
            }
        }
        Commands::Show { id } => {
            book.load().await?;
            let recipe = book
                .state()
                .recipe(id)
                .with_context(|| format!("no recipe with id {id}"))?;
            print!("{}", render::full(recipe));
        }
        Commands::Add { fields } => {
            let state = book.state_mut();
            state.show_new_form();
            for (field, value) in fields.assignments() {
                state.set_draft_field(field, value)?;
            }
            let id = book.create().await?;
            tracing::info!("created recipe {id}");
            if let Some(recipe) = book.state().recipe(id) {
                print!("{}", render::full(recipe));
            }
        }
        Commands::Edit { id, fields } => {
            let assignments = fields.assignments();
            if assignments.is_empty() {
                bail!("nothing to change; pass at least one field flag");
            }
            book.load().await?;
            let recipe = book
                .state()
                .recipe(id)
                .cloned()
                .with_context(|| format!("no recipe with id {id}"))?;
            let state = book.state_mut();
            state.select(&recipe);
            for (field, value) in assignments {
                state.set_selected_field(field, value)?;
            }
            if let Some(result) = book.update_selected().await {
                result?;
            }
            if let Some(recipe) = book.state().recipe(id) {
                print!("{}", render::full(recipe));
            }
        }
        Commands::Delete { id } => {
            book.delete(id).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_search() {
        let cli = Cli::try_parse_from(["recipes", "list", "--search", "sal"]).unwrap();
        match cli.command {
            Commands::List { search } => assert_eq!(search.as_deref(), Some("sal")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_api_url_flag() {
        let cli =
            Cli::try_parse_from(["recipes", "delete", "3", "--api-url", "http://kitchen:8080"])
                .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://kitchen:8080"));
        assert!(matches!(cli.command, Commands::Delete { id: 3 }));

        let config = client_config(cli.api_url.as_deref()).unwrap();
        assert_eq!(config.recipe_url(3).as_str(), "http://kitchen:8080/api/recipes/3");
    }

    #[test]
    fn test_api_url_flag_is_optional() {
        let cli = Cli::try_parse_from(["recipes", "list"]).unwrap();
        assert!(cli.api_url.is_none());
        assert!(client_config(Some("kitchen")).is_err());
    }

    #[test]
    fn test_edit_assignments_in_form_order() {
        let cli = Cli::try_parse_from([
            "recipes",
            "edit",
            "7",
            "--servings",
            "4",
            "--title",
            "Stew",
        ])
        .unwrap();
        let Commands::Edit { id, fields } = cli.command else {
            panic!("expected edit");
        };
        assert_eq!(id, 7);
        assert_eq!(
            fields.assignments(),
            vec![(RecipeField::Title, "Stew"), (RecipeField::Servings, "4")]
        );
    }

    #[test]
    fn test_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["recipes", "show", "soup"]).is_err());
    }
}
