use crate::domain::MenuReport;
use chrono::{Datelike, NaiveDate};

/// Formats the report for the console: a dated header, then one block per
/// restaurant in fixed order. Restaurants without a match keep their header
/// and list nothing.
pub fn render_report(report: &MenuReport, target_date: NaiveDate) -> String {
    let mut out = format!(
        "Your menu for your favorite restaurants for {}.{}.{}\n",
        target_date.day(),
        target_date.month(),
        target_date.year()
    );

    for menu in report.menus() {
        out.push('\n');
        out.push_str(&menu.restaurant_name);
        out.push('\n');
        for dish in &menu.dishes {
            out.push_str(&format!("{}: {} - {}\n", dish.kind, dish.name, dish.price));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Dish, DishKind, RestaurantMenu};

    #[test]
    fn renders_header_dishes_and_empty_restaurants() {
        let report = MenuReport {
            pivnice_ucapa: RestaurantMenu {
                restaurant_name: "Pivnice u Capa".to_string(),
                dishes: vec![
                    Dish {
                        kind: DishKind::Soup,
                        name: "Hovězí vývar".to_string(),
                        price: String::new(),
                    },
                    Dish {
                        kind: DishKind::MainCourse,
                        name: "Smažený sýr".to_string(),
                        price: "135 Kč".to_string(),
                    },
                ],
            },
            suzies_steak_pub: RestaurantMenu::empty("Suzies Steak Pub"),
            veroni_cafe: RestaurantMenu::empty("Veroni Cafe"),
        };
        let target = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();

        let rendered = render_report(&report, target);

        assert_eq!(
            rendered,
            "Your menu for your favorite restaurants for 3.6.2024\n\
             \n\
             Pivnice u Capa\n\
             Soup: Hovězí vývar - \n\
             Main food: Smažený sýr - 135 Kč\n\
             \n\
             Suzies Steak Pub\n\
             \n\
             Veroni Cafe\n"
        );
    }
}
