//! Bets sub-client.

use crate::client::GdMatkaClient;
use crate::domain::bid::BetEdit;
use crate::error::SdkError;
use crate::shared::BetId;

/// Sub-client for editing and deleting individual bets.
pub struct Bets<'a> {
    pub(crate) client: &'a GdMatkaClient,
}

impl<'a> Bets<'a> {
    pub async fn update(&self, id: &BetId, edit: &BetEdit) -> Result<(), SdkError> {
        let request = edit.validate()?;
        self.client.ensure_authenticated().await?;
        self.client.http.update_bet(id, &request).await?;
        tracing::info!(%id, digits = %request.digits, points = %request.points, "Bet updated");
        Ok(())
    }

    pub async fn delete(&self, id: &BetId) -> Result<(), SdkError> {
        self.client.ensure_authenticated().await?;
        self.client.http.delete_bet(id).await?;
        tracing::info!(%id, "Bet deleted");
        Ok(())
    }
}
