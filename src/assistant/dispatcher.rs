use std::sync::{mpsc::Sender, Arc};

use tokio::runtime::Handle;

use crate::usecases::{
    city_guide::{CityGuide, CredentialSource, TextGenerator},
    contracts::ReplyDispatcher,
};

const GUIDE_REPLY_UNDELIVERED: &str = "GUIDE_REPLY_UNDELIVERED";

/// Runs round trips on the tokio runtime and posts each reply back to the UI
/// thread through `reply_tx`.
pub struct TokioReplyDispatcher<C, G> {
    runtime: Handle,
    guide: Arc<CityGuide<C, G>>,
    reply_tx: Sender<String>,
}

impl<C, G> TokioReplyDispatcher<C, G> {
    pub fn new(runtime: Handle, guide: Arc<CityGuide<C, G>>, reply_tx: Sender<String>) -> Self {
        Self {
            runtime,
            guide,
            reply_tx,
        }
    }
}

impl<C, G> ReplyDispatcher for TokioReplyDispatcher<C, G>
where
    C: CredentialSource + 'static,
    G: TextGenerator + 'static,
{
    fn dispatch(&self, prompt: String) {
        let guide = Arc::clone(&self.guide);
        let reply_tx = self.reply_tx.clone();

        self.runtime.spawn(async move {
            let reply = guide.reply(&prompt).await;
            if reply_tx.send(reply).is_err() {
                tracing::warn!(
                    code = GUIDE_REPLY_UNDELIVERED,
                    "assistant reply arrived after the UI stopped listening"
                );
            }
        });
    }
}
