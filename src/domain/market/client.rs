//! Markets sub-client with a TTL list cache.

use crate::client::GdMatkaClient;
use crate::domain::market::{self, Market, MarketForm, MarketStatus};
use crate::error::SdkError;
use crate::shared::MarketId;
use std::sync::atomic::Ordering;
use std::time::Instant;

/// Sub-client for market (game) operations.
pub struct Markets<'a> {
    pub(crate) client: &'a GdMatkaClient,
}

impl<'a> Markets<'a> {
    /// All markets, in server order. Uses the TTL cache.
    ///
    /// Records that fail validation are logged and skipped so one bad row does
    /// not blank the whole list. A fetch that overlaps an invalidation is
    /// returned but not cached.
    pub async fn list(&self) -> Result<Vec<Market>, SdkError> {
        {
            let cache = self.client.market_cache.read().await;
            if let Some((markets, fetched_at)) = cache.as_ref() {
                if fetched_at.elapsed() < self.client.market_cache_ttl {
                    tracing::debug!(count = markets.len(), "Market list served from cache");
                    return Ok(markets.clone());
                }
            }
        }

        let generation = self.client.market_cache_generation.load(Ordering::SeqCst);
        let raw = self.client.http.get_markets().await?;
        let mut markets = Vec::with_capacity(raw.len());
        for resp in raw {
            match Market::try_from(resp) {
                Ok(m) => markets.push(m),
                Err(e) => tracing::warn!(error = %e, "Skipping invalid market record"),
            }
        }

        let mut cache = self.client.market_cache.write().await;
        if self.client.market_cache_generation.load(Ordering::SeqCst) == generation {
            *cache = Some((markets.clone(), Instant::now()));
        } else {
            tracing::debug!("Market cache invalidated during fetch, not storing");
        }
        Ok(markets)
    }

    /// A single market, always fetched fresh.
    pub async fn get(&self, id: &MarketId) -> Result<Market, SdkError> {
        let resp = self.client.http.get_market(id).await?;
        resp.try_into()
            .map_err(|e: market::ValidationError| SdkError::Validation(e.to_string()))
    }

    pub async fn create(&self, form: &MarketForm) -> Result<(), SdkError> {
        let request = form.validate()?;
        self.client.ensure_authenticated().await?;
        self.client.http.create_market(&request).await?;
        self.invalidate().await;
        tracing::info!(name = %request.name, "Market created");
        Ok(())
    }

    pub async fn update(&self, id: &MarketId, form: &MarketForm) -> Result<(), SdkError> {
        let request = form.validate()?;
        self.client.ensure_authenticated().await?;
        self.client.http.update_market(id, &request).await?;
        self.invalidate().await;
        tracing::info!(%id, name = %request.name, "Market updated");
        Ok(())
    }

    /// Activate or deactivate a market, keeping the rest of its settings.
    pub async fn set_status(&self, market: &Market, status: MarketStatus) -> Result<(), SdkError> {
        let form = MarketForm {
            status,
            ..MarketForm::from(market)
        };
        self.update(&market.id, &form).await
    }

    pub async fn delete(&self, id: &MarketId) -> Result<(), SdkError> {
        self.client.ensure_authenticated().await?;
        self.client.http.delete_market(id).await?;
        self.invalidate().await;
        tracing::info!(%id, "Market deleted");
        Ok(())
    }

    /// Drop the cached market list.
    pub async fn invalidate(&self) {
        self.client.invalidate_market_cache().await;
    }
}
