use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishKind {
    Soup,
    MainCourse,
}

impl fmt::Display for DishKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DishKind::Soup => write!(f, "Soup"),
            DishKind::MainCourse => write!(f, "Main food"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dish {
    pub kind: DishKind,
    pub name: String,
    pub price: String,
}

/// One restaurant's offer for the target day. `dishes` keeps page order and
/// stays empty when no day on the page matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantMenu {
    pub restaurant_name: String,
    pub dishes: Vec<Dish>,
}

impl RestaurantMenu {
    pub fn empty(restaurant_name: &str) -> Self {
        Self {
            restaurant_name: restaurant_name.to_string(),
            dishes: Vec::new(),
        }
    }
}

/// One slot per supported site, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuReport {
    pub pivnice_ucapa: RestaurantMenu,
    pub suzies_steak_pub: RestaurantMenu,
    pub veroni_cafe: RestaurantMenu,
}

impl MenuReport {
    pub fn menus(&self) -> [&RestaurantMenu; 3] {
        [&self.pivnice_ucapa, &self.suzies_steak_pub, &self.veroni_cafe]
    }
}
