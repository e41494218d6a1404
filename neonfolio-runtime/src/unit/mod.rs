// Scenario tests driving whole views on tokio's paused clock


/// Let every task woken by the last clock move run to its next await.
async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}
