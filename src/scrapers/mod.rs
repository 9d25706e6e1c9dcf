use crate::domain::RestaurantMenu;
use crate::error::Result;
use chrono::{Datelike, Local, NaiveDate};
use scraper::{ElementRef, Html, Selector};

pub(crate) mod date_text;
pub(crate) mod dish_text;
pub(crate) mod pivnice_ucapa;
pub(crate) mod suzies;
pub(crate) mod veroni_cafe;

pub use pivnice_ucapa::PivniceUCapaScraper;
pub use suzies::SuziesScraper;
pub use veroni_cafe::VeroniCafeScraper;

/// Extracts one restaurant's menu for the target day out of its fetched page.
pub trait MenuScraper {
    fn extract_menu(&self, document: &Html, target_date: NaiveDate) -> Result<RestaurantMenu>;
}

/// The three supported restaurant pages. Each site has a fixed URL and its
/// own scraper; dispatch is by identity, never by probing the document shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    PivniceUCapa,
    SuziesSteakPub,
    VeroniCafe,
}

impl Site {
    pub fn url(self) -> &'static str {
        match self {
            Site::PivniceUCapa => "https://www.pivnice-ucapa.cz/denni-menu.php",
            Site::SuziesSteakPub => "http://www.suzies.cz/poledni-menu.html",
            Site::VeroniCafe => "https://www.menicka.cz/4921-veroni-coffee--chocolate.html",
        }
    }

    pub fn scraper(self) -> Box<dyn MenuScraper> {
        match self {
            Site::PivniceUCapa => Box::new(PivniceUCapaScraper),
            // Suzies headings carry no year; assume the current one.
            Site::SuziesSteakPub => Box::new(SuziesScraper::new(Local::now().year())),
            Site::VeroniCafe => Box::new(VeroniCafeScraper),
        }
    }
}

/// Trimmed text of the first descendant matching `selector`, if any.
pub(crate) fn child_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

pub(crate) fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}
