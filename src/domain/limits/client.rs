//! Limits and settings sub-clients.

use crate::client::GdMatkaClient;
use crate::domain::limits::wire::LimitUpdateRequest;
use crate::domain::limits::{AppSettings, LimitRow, WithdrawalWindowForm};
use crate::error::SdkError;
use crate::shared::{parse_non_negative_amount, LimitId};

/// Sub-client for minimum bet/deposit/withdraw limits.
pub struct Limits<'a> {
    pub(crate) client: &'a GdMatkaClient,
}

impl<'a> Limits<'a> {
    /// All limit rows. Rows without an id cannot be updated, so they are
    /// logged and skipped like invalid market records.
    pub async fn list(&self) -> Result<Vec<LimitRow>, SdkError> {
        let raw = self.client.http.get_minimum_limits().await?;
        let mut rows = Vec::with_capacity(raw.len());
        for resp in raw {
            match LimitRow::try_from(resp) {
                Ok(row) => rows.push(row),
                Err(e) => tracing::warn!(error = %e, "Skipping invalid limit row"),
            }
        }
        Ok(rows)
    }

    /// Set the minimum for one row. `0` removes the floor.
    pub async fn update(&self, id: &LimitId, amount_input: &str) -> Result<(), SdkError> {
        let amount = parse_non_negative_amount(amount_input)?;
        self.client.ensure_authenticated().await?;
        self.client
            .http
            .update_minimum_limit(id, &LimitUpdateRequest { amount })
            .await?;
        tracing::info!(%id, %amount, "Minimum limit updated");
        Ok(())
    }
}

/// Sub-client for app settings (withdrawal window).
pub struct Settings<'a> {
    pub(crate) client: &'a GdMatkaClient,
}

impl<'a> Settings<'a> {
    pub async fn get(&self) -> Result<AppSettings, SdkError> {
        Ok(self.client.http.get_app_settings().await?.into())
    }

    /// Write the withdrawal window, keeping every other setting from `current`.
    pub async fn update(
        &self,
        current: &AppSettings,
        form: &WithdrawalWindowForm,
    ) -> Result<(), SdkError> {
        let body = form.apply_to(current)?;
        self.client.ensure_authenticated().await?;
        self.client.http.update_app_settings(&body).await?;
        tracing::info!(
            open = ?body.withdraw_open_time,
            close = ?body.withdraw_close_time,
            enabled = form.enabled,
            "Withdrawal window updated"
        );
        Ok(())
    }
}
