use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Bad target date '{0}'. Correct format is DD.MM.YYYY")]
    ArgumentFormat(String),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Date parse error: {0}")]
    DateParse(String),
    #[error("Dish parse error: {0}")]
    DishParse(String),
}

pub type Result<T> = std::result::Result<T, MenuError>;
