use crate::domain::{MenuReport, RestaurantMenu};
use crate::error::Result;
use crate::scrapers::Site;
use chrono::NaiveDate;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

pub struct ScrapingService {
    client: Client,
}

impl ScrapingService {
    pub fn new(client: Client) -> Self {
        info!("Created new Scraping service");
        Self { client }
    }

    /// Visits the three sites in report order, one second apart.
    pub async fn scrape_all(&self, target_date: NaiveDate) -> Result<MenuReport> {
        let pivnice_ucapa = self.scrape_site(Site::PivniceUCapa, target_date).await?;
        sleep(Duration::from_secs(1)).await;
        let suzies_steak_pub = self.scrape_site(Site::SuziesSteakPub, target_date).await?;
        sleep(Duration::from_secs(1)).await;
        let veroni_cafe = self.scrape_site(Site::VeroniCafe, target_date).await?;

        Ok(MenuReport {
            pivnice_ucapa,
            suzies_steak_pub,
            veroni_cafe,
        })
    }

    async fn scrape_site(&self, site: Site, target_date: NaiveDate) -> Result<RestaurantMenu> {
        info!("Visiting {}", site.url());
        let response = self.client.get(site.url()).send().await?.error_for_status()?;
        let body = response.text().await?;
        let document = Html::parse_document(&body);
        site.scraper().extract_menu(&document, target_date)
    }
}
