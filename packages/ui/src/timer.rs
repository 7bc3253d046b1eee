use std::time::Duration;

/// Sleep on whichever executor the app is running on.
pub async fn sleep_ms(ms: u64) {
    let duration = Duration::from_millis(ms);
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Today's date in the user's timezone.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
