//! Line commands of the terminal front end.

use crate::{services::FetchController, view::Page};

pub const HELP: &str = "Type a title to search, an empty line for recommendations, \
:refresh to reload recommendations, :quit to exit.";

pub const REFRESH_UNAVAILABLE: &str =
    "Refresh is only offered for recommendations; submit an empty search first.";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Refresh,
    /// Raw line, untrimmed; a blank line loads recommendations
    Search(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":quit" | ":q" => Command::Quit,
            ":help" | ":h" => Command::Help,
            ":refresh" | ":r" => Command::Refresh,
            _ => Command::Search(line.to_string()),
        }
    }
}

/// What the front end should do after a command
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Exit,
    Message(&'static str),
    Rendered(Page),
}

/// Runs a command against the controller
///
/// `Refresh` only reaches the catalog while the page offers the refresh
/// affordance.
pub async fn execute(controller: &FetchController, command: Command) -> Reply {
    match command {
        Command::Quit => Reply::Exit,
        Command::Help => Reply::Message(HELP),
        Command::Refresh => {
            if !controller.render().await.has_refresh() {
                tracing::debug!("Refresh requested while a search is active");
                return Reply::Message(REFRESH_UNAVAILABLE);
            }
            controller.load_recommendations().await;
            Reply::Rendered(controller.render().await)
        }
        Command::Search(query) => {
            controller.run_search(&query).await;
            Reply::Rendered(controller.render().await)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{models::Movie, services::providers::MockMovieCatalog};

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(":quit"), Command::Quit);
        assert_eq!(Command::parse(" :q\n"), Command::Quit);
        assert_eq!(Command::parse(":help"), Command::Help);
        assert_eq!(Command::parse(":r"), Command::Refresh);
        assert_eq!(Command::parse(":refresh "), Command::Refresh);
        assert_eq!(Command::parse(""), Command::Search(String::new()));
        assert_eq!(
            Command::parse("  alien "),
            Command::Search("  alien ".to_string())
        );
    }

    #[tokio::test]
    async fn test_refresh_refused_while_search_active() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_search_movies()
            .times(1)
            .returning(|_, _| Ok(vec![Movie::new("9", "Alien")]));
        catalog.expect_fetch_recommendations().never();

        let controller = FetchController::new(Arc::new(catalog));
        execute(&controller, Command::parse("alien")).await;

        let reply = execute(&controller, Command::Refresh).await;
        assert_eq!(reply, Reply::Message(REFRESH_UNAVAILABLE));
        assert_eq!(controller.snapshot().await.active_query_text, "alien");
    }

    #[tokio::test]
    async fn test_refresh_reloads_recommendations() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_fetch_recommendations()
            .times(1)
            .returning(|_| Ok(vec![Movie::new("1", "Dune")]));

        let controller = FetchController::new(Arc::new(catalog));
        assert!(controller.render().await.has_refresh());

        let Reply::Rendered(page) = execute(&controller, Command::Refresh).await else {
            panic!("refresh should render the page");
        };
        assert_eq!(page.heading(), Some("Recommended Movies"));
        assert_eq!(page.cards().len(), 1);
    }

    #[tokio::test]
    async fn test_padded_query_reaches_catalog_untrimmed() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_search_movies()
            .withf(|query, _| query == "  alien ")
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let controller = FetchController::new(Arc::new(catalog));
        let Reply::Rendered(page) = execute(&controller, Command::parse("  alien ")).await else {
            panic!("search should render the page");
        };
        assert_eq!(page.heading(), Some("Search Results for \"  alien \""));
        assert!(!page.has_refresh());
    }

    #[tokio::test]
    async fn test_blank_line_loads_recommendations() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_fetch_recommendations()
            .times(1)
            .returning(|_| Ok(vec![]));
        catalog.expect_search_movies().never();

        let controller = FetchController::new(Arc::new(catalog));
        let reply = execute(&controller, Command::parse("   ")).await;
        assert!(matches!(reply, Reply::Rendered(page) if page.has_refresh()));
    }

    #[tokio::test]
    async fn test_quit_and_help_skip_catalog() {
        let controller = FetchController::new(Arc::new(MockMovieCatalog::new()));
        assert_eq!(execute(&controller, Command::Quit).await, Reply::Exit);
        assert_eq!(execute(&controller, Command::Help).await, Reply::Message(HELP));
    }
}
