//! Users sub-client.

use crate::client::GdMatkaClient;
use crate::domain::bid::{Bid, Winning};
use crate::domain::fund::FundHistory;
use crate::domain::user::wire::{ChangeStatusRequest, DeleteUserRequest, FundRequest};
use crate::domain::user::{User, UserDetail, UserStatus};
use crate::error::SdkError;
use crate::shared::{parse_amount, UserId};

/// Sub-client for user accounts.
pub struct Users<'a> {
    pub(crate) client: &'a GdMatkaClient,
}

impl<'a> Users<'a> {
    pub async fn get(&self, id: &UserId) -> Result<User, SdkError> {
        Ok(self.client.http.get_user(id).await?.into())
    }

    /// Profile, fund history, bids and winnings, fetched concurrently.
    ///
    /// All four must succeed. The first failure fails the whole load and the
    /// other results are dropped.
    pub async fn detail(&self, id: &UserId) -> Result<UserDetail, SdkError> {
        let http = &self.client.http;
        let result = futures_util::try_join!(
            http.get_user(id),
            http.get_user_funds(id),
            http.get_user_bids(id),
            http.get_user_winnings(id),
        );

        let (user, funds, bids, winnings) = match result {
            Ok(parts) => parts,
            Err(e) => {
                tracing::warn!(%id, error = %e, "User detail load failed");
                return Err(e.into());
            }
        };

        Ok(UserDetail {
            user: user.into(),
            funds: FundHistory::from(funds),
            bids: bids.into_iter().map(Bid::from).collect(),
            winnings: winnings.into_iter().map(Winning::from).collect(),
        })
    }

    pub async fn add_funds(&self, id: &UserId, amount_input: &str) -> Result<(), SdkError> {
        let amount = parse_amount(amount_input)?;
        self.client.ensure_authenticated().await?;
        self.client
            .http
            .add_funds(id, &FundRequest { amount, kind: None })
            .await?;
        tracing::info!(%id, %amount, "Funds added");
        Ok(())
    }

    /// Credit a bonus. Same endpoint as [`Self::add_funds`], tagged `"bonus"`.
    pub async fn bonus_funds(&self, id: &UserId, amount_input: &str) -> Result<(), SdkError> {
        let amount = parse_amount(amount_input)?;
        self.client.ensure_authenticated().await?;
        let request = FundRequest {
            amount,
            kind: Some("bonus".to_string()),
        };
        self.client.http.add_funds(id, &request).await?;
        tracing::info!(%id, %amount, "Bonus added");
        Ok(())
    }

    pub async fn withdraw_funds(&self, id: &UserId, amount_input: &str) -> Result<(), SdkError> {
        let amount = parse_amount(amount_input)?;
        self.client.ensure_authenticated().await?;
        self.client
            .http
            .withdraw_funds(id, &FundRequest { amount, kind: None })
            .await?;
        tracing::info!(%id, %amount, "Funds withdrawn");
        Ok(())
    }

    pub async fn change_status(&self, id: &UserId, status: UserStatus) -> Result<(), SdkError> {
        self.client.ensure_authenticated().await?;
        let request = ChangeStatusRequest {
            user_id: id.clone(),
            status,
        };
        self.client.http.change_user_status(&request).await?;
        tracing::info!(%id, %status, "User status changed");
        Ok(())
    }

    pub async fn delete(&self, id: &UserId) -> Result<(), SdkError> {
        self.client.ensure_authenticated().await?;
        self.client
            .http
            .delete_user(&DeleteUserRequest { user_id: id.clone() })
            .await?;
        tracing::info!(%id, "User deleted");
        Ok(())
    }
}
