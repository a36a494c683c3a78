/// User-facing notifications (the platform's alert dialog).
#[async_trait::async_trait]
pub trait AlertPort: Send + Sync {
    async fn alert(&self, message: &str);
}
