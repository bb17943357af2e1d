//! Pure mapping from `ViewState` to a page tree.
//!
//! Nothing here performs I/O or keeps state; `render` can be called as often
//! as the caller likes.

use crate::{models::Movie, services::ViewState};

pub mod text;

pub const RECOMMENDED_HEADING: &str = "Recommended Movies";
pub const REFRESH_LABEL: &str = "Refresh Recommendations";
pub const NO_RECOMMENDATIONS: &str = "No recommendations available.";
pub const NO_SEARCH_RESULTS: &str = "No movies found for your search.";
pub const RATING_PLACEHOLDER: &str = "N/A";

/// Overview length shown on a card before it is cut
pub const OVERVIEW_PREVIEW_CHARS: usize = 150;

/// Rendered page
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    /// Spinner only
    Loading,
    Results(ResultsView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub error_banner: Option<String>,
    pub heading: String,
    /// Present only while showing recommendations
    pub refresh: Option<RefreshAction>,
    pub content: Content,
}

/// The refresh affordance offered next to the recommendations heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshAction {
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Empty { message: &'static str },
    Grid(Vec<Card>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub key: String,
    pub title: String,
    pub overview: Option<String>,
    pub rating: String,
    pub release_year: Option<String>,
    pub poster: Poster,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poster {
    Image { url: String, alt: String },
    Placeholder,
}

impl Page {
    pub fn is_loading(&self) -> bool {
        matches!(self, Page::Loading)
    }

    pub fn results(&self) -> Option<&ResultsView> {
        match self {
            Page::Loading => None,
            Page::Results(results) => Some(results),
        }
    }

    pub fn heading(&self) -> Option<&str> {
        self.results().map(|r| r.heading.as_str())
    }

    pub fn has_refresh(&self) -> bool {
        self.results().is_some_and(|r| r.refresh.is_some())
    }

    pub fn error_banner(&self) -> Option<&str> {
        self.results().and_then(|r| r.error_banner.as_deref())
    }

    pub fn cards(&self) -> &[Card] {
        match self.results().map(|r| &r.content) {
            Some(Content::Grid(cards)) => cards,
            _ => &[],
        }
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        match self.results().map(|r| &r.content) {
            Some(Content::Empty { message }) => Some(*message),
            _ => None,
        }
    }
}

/// Renders the page for the given state
pub fn render(state: &ViewState) -> Page {
    if state.is_loading {
        return Page::Loading;
    }

    let searching = !state.active_query_text.is_empty();

    let heading = if searching {
        format!("Search Results for \"{}\"", state.active_query_text)
    } else {
        RECOMMENDED_HEADING.to_string()
    };

    let refresh = (!searching).then_some(RefreshAction {
        label: REFRESH_LABEL,
    });

    let content = if state.items.is_empty() {
        Content::Empty {
            message: if searching {
                NO_SEARCH_RESULTS
            } else {
                NO_RECOMMENDATIONS
            },
        }
    } else {
        Content::Grid(state.items.iter().map(render_card).collect())
    };

    Page::Results(ResultsView {
        error_banner: state.error_message.clone(),
        heading,
        refresh,
        content,
    })
}

fn render_card(movie: &Movie) -> Card {
    Card {
        key: movie.id.clone(),
        title: movie.title.clone(),
        overview: non_blank(movie.overview.as_deref()).map(truncate_overview),
        rating: format_rating(movie.rating),
        release_year: movie.release_year.map(|year| year.to_string()),
        poster: match non_blank(movie.poster_url.as_deref()) {
            Some(url) => Poster::Image {
                url: url.to_string(),
                alt: movie.title.clone(),
            },
            None => Poster::Placeholder,
        },
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// One decimal place, or the placeholder when unrated
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) if r.is_finite() => format!("{:.1}", r),
        _ => RATING_PLACEHOLDER.to_string(),
    }
}

/// Cuts an overview for display, on a character boundary
pub fn truncate_overview(overview: &str) -> String {
    if overview.chars().count() <= OVERVIEW_PREVIEW_CHARS {
        return overview.to_string();
    }
    let cut: String = overview.chars().take(OVERVIEW_PREVIEW_CHARS).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(items: Vec<Movie>, query: &str) -> ViewState {
        ViewState {
            items,
            active_query_text: query.to_string(),
            ..ViewState::default()
        }
    }

    #[test]
    fn test_loading_suppresses_everything() {
        let state = ViewState {
            items: vec![Movie::new("1", "Dune")],
            is_loading: true,
            error_message: Some("stale".to_string()),
            active_query_text: String::new(),
        };
        let page = render(&state);
        assert_eq!(page, Page::Loading);
        assert_eq!(page.error_banner(), None);
        assert!(page.cards().is_empty());
    }

    #[test]
    fn test_recommendation_heading_offers_refresh() {
        let page = render(&state_with(vec![], ""));
        assert_eq!(page.heading(), Some("Recommended Movies"));
        assert!(page.has_refresh());
    }

    #[test]
    fn test_search_heading_hides_refresh() {
        let page = render(&state_with(vec![], "alien"));
        assert_eq!(page.heading(), Some("Search Results for \"alien\""));
        assert!(!page.has_refresh());
    }

    #[test]
    fn test_empty_messages_follow_query_context() {
        assert_eq!(
            render(&state_with(vec![], "")).empty_message(),
            Some(NO_RECOMMENDATIONS)
        );
        assert_eq!(
            render(&state_with(vec![], "matrix")).empty_message(),
            Some(NO_SEARCH_RESULTS)
        );
    }

    #[test]
    fn test_error_banner_keeps_stale_grid() {
        let state = ViewState {
            items: vec![Movie::new("1", "Dune")],
            error_message: Some("Failed to search movies (HTTP 503)".to_string()),
            ..ViewState::default()
        };
        let page = render(&state);
        assert_eq!(page.error_banner(), Some("Failed to search movies (HTTP 503)"));
        assert_eq!(page.cards().len(), 1);
    }

    #[test]
    fn test_rating_formatting() {
        assert_eq!(format_rating(Some(7.8)), "7.8");
        assert_eq!(format_rating(Some(8.0)), "8.0");
        assert_eq!(format_rating(Some(0.0)), "0.0");
        assert_eq!(format_rating(None), "N/A");
        assert_eq!(format_rating(Some(f64::NAN)), "N/A");
    }

    #[test]
    fn test_year_omitted_when_absent() {
        let with_year = render_card(&Movie::new("1", "The Matrix").with_release_year(1999));
        let without_year = render_card(&Movie::new("2", "Untitled"));
        assert_eq!(with_year.release_year.as_deref(), Some("1999"));
        assert_eq!(without_year.release_year, None);
    }

    #[test]
    fn test_poster_or_placeholder() {
        let with_poster =
            render_card(&Movie::new("1", "Inception").with_poster("https://img/1.jpg"));
        assert_eq!(
            with_poster.poster,
            Poster::Image {
                url: "https://img/1.jpg".to_string(),
                alt: "Inception".to_string()
            }
        );

        assert_eq!(render_card(&Movie::new("2", "X")).poster, Poster::Placeholder);
        assert_eq!(
            render_card(&Movie::new("3", "Y").with_poster("")).poster,
            Poster::Placeholder
        );
    }

    #[test]
    fn test_cards_follow_item_order() {
        let items = vec![
            Movie::new("238", "The Godfather"),
            Movie::new("603", "The Matrix"),
            Movie::new("13", "Forrest Gump"),
        ];
        let page = render(&state_with(items, ""));
        let keys: Vec<&str> = page.cards().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["238", "603", "13"]);
    }

    #[test]
    fn test_overview_truncated_without_mutating_item() {
        let long = "word ".repeat(60);
        let movie = Movie::new("1", "Long").with_overview(long.clone());
        let card = render_card(&movie);

        let shown = card.overview.unwrap();
        assert!(shown.ends_with('…'));
        assert!(shown.chars().count() <= OVERVIEW_PREVIEW_CHARS + 1);
        assert_eq!(movie.overview.as_deref(), Some(long.as_str()));
    }

    #[test]
    fn test_short_and_blank_overviews() {
        assert_eq!(truncate_overview("Short."), "Short.");
        assert_eq!(render_card(&Movie::new("1", "A").with_overview("  ")).overview, None);
    }
}
