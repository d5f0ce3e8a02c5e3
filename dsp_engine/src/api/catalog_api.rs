use std::fmt::Debug;

use dsp_common::Money;
use log::*;

use crate::{
    db_types::{NewProduct, Product, ProductCategory},
    traits::{CatalogApiError, CatalogManagement},
};

/// `CatalogApi` serves the product listing and owns the demo preset seeding.
pub struct CatalogApi<B> {
    db: B,
}

impl<B> Debug for CatalogApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CatalogApi")
    }
}

impl<B> CatalogApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> CatalogApi<B>
where B: CatalogManagement
{
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogApiError> {
        self.db.fetch_products().await
    }

    /// Seeds the demo presets into an empty catalogue. A catalogue that already has products is left alone.
    /// Returns the number of products inserted.
    pub async fn seed_presets_if_empty(&self) -> Result<usize, CatalogApiError> {
        if self.db.product_count().await? > 0 {
            return Ok(0);
        }
        let presets = preset_products();
        let mut inserted = 0;
        for product in presets {
            let sku = product.sku.clone();
            match self.db.insert_product(product).await {
                Ok(_) => inserted += 1,
                Err(CatalogApiError::DuplicateSku(_)) => {
                    debug!("🏪️ Preset {sku} already exists, skipping");
                },
                Err(e) => return Err(e),
            }
        }
        info!("🏪️ Seeded {inserted} preset products into the empty catalogue");
        Ok(inserted)
    }
}

/// The demo catalogue. Also used verbatim as the mocked product listing when storage is unavailable.
pub fn preset_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            sku: "VPS-1".to_string(),
            title: "VPS Nano".to_string(),
            description: Some("1 vCPU • 1GB RAM • 20GB SSD".to_string()),
            price: Money::from_cents(399),
            category: ProductCategory::Vps,
            stock: 200,
        },
        NewProduct {
            sku: "VPS-2".to_string(),
            title: "VPS Micro".to_string(),
            description: Some("2 vCPU • 2GB RAM • 40GB SSD".to_string()),
            price: Money::from_cents(699),
            category: ProductCategory::Vps,
            stock: 150,
        },
        NewProduct {
            sku: "DM-1".to_string(),
            title: ".com Domain".to_string(),
            description: Some("1 year registration".to_string()),
            price: Money::from_cents(949),
            category: ProductCategory::Domain,
            stock: 999,
        },
        NewProduct {
            sku: "PNL-1".to_string(),
            title: "Game Panel".to_string(),
            description: Some("Pterodactyl slot".to_string()),
            price: Money::from_cents(249),
            category: ProductCategory::Panel,
            stock: 500,
        },
    ]
}
