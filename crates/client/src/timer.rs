use std::time::Duration;

/// Sleep on whichever timer the target provides.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Run `action` once after `delay`.
///
/// Dropping the future before the delay elapses cancels the action,
/// so a task owned by a component scope never fires after unmount.
pub async fn after<F: FnOnce()>(delay: Duration, action: F) {
    sleep(delay).await;
    action();
}
