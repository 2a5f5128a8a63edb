//! `/api/contact`

use async_trait::async_trait;
use folio_core::{ApiResult, ContactApi, ContactMessage, ContactReceipt};
use tracing::instrument;

use crate::client::ApiClient;

#[async_trait]
impl ContactApi for ApiClient {
    #[instrument(skip(self, message), fields(subject = %message.subject))]
    async fn send_contact(&self, message: &ContactMessage) -> ApiResult<ContactReceipt> {
        self.fetch(self.post("/api/contact").json(message)).await
    }
}
