//! Clock, sleep and the one-shot loading gate.

use std::time::Duration;

use dioxus::prelude::*;

/// Milliseconds on a monotonic clock. Only differences are meaningful.
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.performance())
            .map(|perf| perf.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use once_cell::sync::Lazy;
        use std::time::Instant;

        static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);
        ORIGIN.elapsed().as_secs_f64() * 1000.0
    }
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    {
        let ms = duration.as_millis().min(u32::MAX as u128) as u32;
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(duration).await;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Loading,
    Loaded,
}

/// Starts loading, opens once after `delay`, never closes again.
#[derive(Debug, Clone)]
pub struct LoadingGate {
    delay: Duration,
    state: GateState,
}

impl LoadingGate {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: GateState::Loading,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == GateState::Loading
    }

    /// Time still to wait given `elapsed` since the gate was created.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        match self.state {
            GateState::Loading => self.delay.saturating_sub(elapsed),
            GateState::Loaded => Duration::ZERO,
        }
    }

    /// Returns `true` exactly once: on the first call with `elapsed >= delay`.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.state == GateState::Loading && elapsed >= self.delay {
            self.state = GateState::Loaded;
            return true;
        }
        false
    }
}

/// `true` while the preloader should be shown.
///
/// The timer task belongs to the calling scope and is dropped with it.
pub fn use_loading_gate(delay: Duration) -> ReadOnlySignal<bool> {
    let mut loading = use_signal(|| true);

    use_hook(move || {
        spawn(async move {
            let started = now_ms();
            let mut gate = LoadingGate::new(delay);
            while gate.is_loading() {
                let elapsed = Duration::from_secs_f64(((now_ms() - started) / 1000.0).max(0.0));
                if gate.advance(elapsed) {
                    tracing::debug!("[loading] gate opened after {:.0} ms", now_ms() - started);
                    loading.set(false);
                    break;
                }
                // Timers may fire slightly early; re-check against the clock.
                sleep(gate.remaining(elapsed).max(Duration::from_millis(1))).await;
            }
        });
    });

    loading.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_stays_loading_before_delay() {
        let mut gate = LoadingGate::new(Duration::from_millis(2000));
        assert!(!gate.advance(Duration::from_millis(0)));
        assert!(!gate.advance(Duration::from_millis(1999)));
        assert!(gate.is_loading());
        assert_eq!(
            gate.remaining(Duration::from_millis(1500)),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn gate_opens_exactly_once_and_never_reverts() {
        let mut gate = LoadingGate::new(Duration::from_millis(2000));
        assert!(gate.advance(Duration::from_millis(2000)));
        assert!(!gate.is_loading());
        assert!(!gate.advance(Duration::from_millis(2500)));
        assert!(!gate.advance(Duration::from_millis(0)));
        assert!(!gate.is_loading());
        assert_eq!(gate.remaining(Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn clock_is_monotonic() {
        let a = now_ms();
        let b = now_ms();
        assert!(b >= a);
    }
}
