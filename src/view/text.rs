//! Plain-text rendering of a `Page` for terminal output.

use std::fmt;

use super::{Card, Content, Page, Poster, ResultsView};

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Loading => writeln!(f, "Loading..."),
            Page::Results(results) => fmt::Display::fmt(results, f),
        }
    }
}

impl fmt::Display for ResultsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.error_banner {
            writeln!(f, "[error] {}", error)?;
            writeln!(f)?;
        }

        match &self.refresh {
            Some(action) => writeln!(f, "{}    [{}]", self.heading, action.label)?,
            None => writeln!(f, "{}", self.heading)?,
        }
        writeln!(f, "{}", "=".repeat(self.heading.chars().count()))?;

        match &self.content {
            Content::Empty { message } => writeln!(f, "{}", message),
            Content::Grid(cards) => {
                for (index, card) in cards.iter().enumerate() {
                    write!(f, "{:>2}. ", index + 1)?;
                    fmt::Display::fmt(card, f)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  * {}", self.title, self.rating)?;
        if let Some(year) = &self.release_year {
            write!(f, "  ({})", year)?;
        }
        writeln!(f)?;

        if let Some(overview) = &self.overview {
            writeln!(f, "    {}", overview)?;
        }
        match &self.poster {
            Poster::Image { url, .. } => writeln!(f, "    poster: {}", url),
            Poster::Placeholder => writeln!(f, "    poster: none"),
        }
    }
}
