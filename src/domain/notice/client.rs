//! Notices sub-client.

use crate::client::GdMatkaClient;
use crate::domain::notice::wire::NoticeRequest;
use crate::domain::notice::{encode_content, Notice};
use crate::error::SdkError;

pub struct Notices<'a> {
    pub(crate) client: &'a GdMatkaClient,
}

impl<'a> Notices<'a> {
    pub async fn get(&self) -> Result<Notice, SdkError> {
        let resp = self.client.http.get_notice().await?;
        Ok(Notice::try_from(resp)?)
    }

    /// Replace the notice with `markdown`.
    pub async fn publish(&self, markdown: &str) -> Result<(), SdkError> {
        self.client.ensure_authenticated().await?;
        let request = NoticeRequest {
            content: encode_content(markdown),
        };
        self.client.http.post_notice(&request).await?;
        tracing::info!(chars = markdown.chars().count(), "Notice published");
        Ok(())
    }
}
