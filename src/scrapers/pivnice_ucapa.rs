use super::{child_text, has_class, MenuScraper};
use crate::domain::{Dish, DishKind, RestaurantMenu};
use crate::error::{MenuError, Result};
use crate::scrapers::{date_text, dish_text};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

const RESTAURANT_NAME: &str = "Pivnice u Capa";

static DAY_BLOCK: Lazy<Selector> = Lazy::new(|| Selector::parse("div.listek > div").unwrap());
static DATE: Lazy<Selector> = Lazy::new(|| Selector::parse(".date").unwrap());
static DISH_ROW: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".row-polevka, .row-food").unwrap());
static SOUP_NAME: Lazy<Selector> = Lazy::new(|| Selector::parse(".polevka").unwrap());
static FOOD_NAME: Lazy<Selector> = Lazy::new(|| Selector::parse(".food").unwrap());
static PRICE: Lazy<Selector> = Lazy::new(|| Selector::parse(".price").unwrap());

/// Weekly listing under `div.listek`, one child block per day. Dates are
/// spelled out in full, the soup row has no price.
pub struct PivniceUCapaScraper;

impl MenuScraper for PivniceUCapaScraper {
    fn extract_menu(&self, document: &Html, target_date: NaiveDate) -> Result<RestaurantMenu> {
        let mut menu = RestaurantMenu::empty(RESTAURANT_NAME);

        for block in document.select(&DAY_BLOCK) {
            let date_raw = child_text(block, &DATE).ok_or_else(|| {
                MenuError::DateParse("day block without a date field".to_string())
            })?;
            if date_text::parse(&date_raw, None)? != target_date {
                continue;
            }

            for row in block.select(&DISH_ROW) {
                let dish = if has_class(row, "row-polevka") {
                    let name = child_text(row, &SOUP_NAME)
                        .filter(|name| !name.is_empty())
                        .ok_or_else(|| {
                            MenuError::DishParse("soup row without a dish name".to_string())
                        })?;
                    Dish {
                        kind: DishKind::Soup,
                        name,
                        price: String::new(),
                    }
                } else {
                    let raw_name = child_text(row, &FOOD_NAME).ok_or_else(|| {
                        MenuError::DishParse("food row without a dish name".to_string())
                    })?;
                    let name = dish_text::strip_ordinal(&raw_name);
                    if name.is_empty() {
                        return Err(MenuError::DishParse(format!(
                            "food row name '{raw_name}' is empty after stripping"
                        )));
                    }
                    Dish {
                        kind: DishKind::MainCourse,
                        name,
                        price: child_text(row, &PRICE).unwrap_or_default(),
                    }
                };
                menu.dishes.push(dish);
            }

            // First matching day wins; ignore any duplicate blocks.
            break;
        }

        Ok(menu)
    }
}
