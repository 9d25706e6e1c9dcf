use super::{child_text, MenuScraper};
use crate::domain::{Dish, DishKind, RestaurantMenu};
use crate::error::{MenuError, Result};
use crate::scrapers::date_text;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

const RESTAURANT_NAME: &str = "Suzies Steak Pub";
const SOUP_CATEGORY: &str = "Polévka";

static DAY_BLOCK: Lazy<Selector> = Lazy::new(|| Selector::parse("#weekly-menu .day").unwrap());
static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h4").unwrap());
static ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse(".item").unwrap());
static CATEGORY: Lazy<Selector> = Lazy::new(|| Selector::parse(".category").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse(".title").unwrap());
static TEXT: Lazy<Selector> = Lazy::new(|| Selector::parse(".text").unwrap());
static PRICE: Lazy<Selector> = Lazy::new(|| Selector::parse(".price").unwrap());

/// Weekly menu with one `.day` card per weekday. The heading spells the date
/// without a year, so the scraper is told which year to assume. Prices are
/// bare numbers with an implied Kč.
pub struct SuziesScraper {
    default_year: i32,
}

impl SuziesScraper {
    pub fn new(default_year: i32) -> Self {
        Self { default_year }
    }
}

impl MenuScraper for SuziesScraper {
    fn extract_menu(&self, document: &Html, target_date: NaiveDate) -> Result<RestaurantMenu> {
        let mut menu = RestaurantMenu::empty(RESTAURANT_NAME);

        for block in document.select(&DAY_BLOCK) {
            let heading = child_text(block, &HEADING).ok_or_else(|| {
                MenuError::DateParse("day block without a heading".to_string())
            })?;
            if date_text::parse(&heading, Some(self.default_year))? != target_date {
                continue;
            }

            for item in block.select(&ITEM) {
                let category = child_text(item, &CATEGORY).unwrap_or_default();
                let title = child_text(item, &TITLE)
                    .filter(|title| !title.is_empty())
                    .ok_or_else(|| {
                        MenuError::DishParse("menu item without a title".to_string())
                    })?;

                if category == SOUP_CATEGORY {
                    menu.dishes.push(Dish {
                        kind: DishKind::Soup,
                        name: title,
                        price: String::new(),
                    });
                    continue;
                }

                let mut name = format!("{category} {title}").trim().to_string();
                if let Some(text) = child_text(item, &TEXT).filter(|text| !text.is_empty()) {
                    name = format!("{name}: {text}");
                }
                let price = child_text(item, &PRICE)
                    .filter(|price| !price.is_empty())
                    .map(|price| format!("{price} Kč"))
                    .unwrap_or_default();

                menu.dishes.push(Dish {
                    kind: DishKind::MainCourse,
                    name,
                    price,
                });
            }

            // First matching day wins; ignore any duplicate blocks.
            break;
        }

        Ok(menu)
    }
}
