use super::{child_text, has_class, MenuScraper};
use crate::domain::{Dish, DishKind, RestaurantMenu};
use crate::error::{MenuError, Result};
use crate::scrapers::{date_text, dish_text};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

const RESTAURANT_NAME: &str = "Veroni Cafe";

static DAY_BLOCK: Lazy<Selector> = Lazy::new(|| Selector::parse(".obsah .menicka").unwrap());
static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("div.nadpis").unwrap());
static DISH_ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("ul li").unwrap());
static NAME: Lazy<Selector> = Lazy::new(|| Selector::parse(".polozka").unwrap());
static PRICE: Lazy<Selector> = Lazy::new(|| Selector::parse(".cena").unwrap());

/// Listing on menicka.cz, one `.menicka` card per day. Rows are classed
/// `polevka` or `jidlo`; anything else (ads, spacers) is skipped. Soups list
/// a price here, mains are numbered.
pub struct VeroniCafeScraper;

impl MenuScraper for VeroniCafeScraper {
    fn extract_menu(&self, document: &Html, target_date: NaiveDate) -> Result<RestaurantMenu> {
        let mut menu = RestaurantMenu::empty(RESTAURANT_NAME);

        for block in document.select(&DAY_BLOCK) {
            let heading = child_text(block, &HEADING).ok_or_else(|| {
                MenuError::DateParse("day card without a heading".to_string())
            })?;
            // This site always spells the year out, two or four digits.
            if date_text::parse(&heading, None)? != target_date {
                continue;
            }

            for row in block.select(&DISH_ROW) {
                let kind = if has_class(row, "polevka") {
                    DishKind::Soup
                } else if has_class(row, "jidlo") {
                    DishKind::MainCourse
                } else {
                    continue;
                };

                let raw_name = child_text(row, &NAME).ok_or_else(|| {
                    MenuError::DishParse("menu row without a dish name".to_string())
                })?;
                let name = match kind {
                    DishKind::Soup => raw_name,
                    DishKind::MainCourse => dish_text::strip_ordinal(&raw_name),
                };
                if name.is_empty() {
                    return Err(MenuError::DishParse(
                        "menu row with an empty dish name".to_string(),
                    ));
                }

                menu.dishes.push(Dish {
                    kind,
                    name,
                    price: child_text(row, &PRICE).unwrap_or_default(),
                });
            }

            // First matching day wins; ignore any duplicate blocks.
            break;
        }

        Ok(menu)
    }
}
