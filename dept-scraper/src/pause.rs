use std::time::Duration;

use async_trait::async_trait;

#[async_trait]
pub trait Pause {
    async fn sleep(&self, duration: Duration);
}

pub struct TokioPause;

#[async_trait]
impl Pause for TokioPause {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
