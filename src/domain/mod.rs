mod menu;

pub use menu::{Dish, DishKind, MenuReport, RestaurantMenu};
