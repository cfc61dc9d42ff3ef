use crate::utils::config::EnvConfig;
use std::time::{Duration, Instant};

#[cfg(test)]
use std::sync::atomic::{AtomicI8, Ordering};

#[cfg(test)]
static ENABLED_OVERRIDE: AtomicI8 = AtomicI8::new(-1);

/// プロファイルログが有効かを返す。
pub fn enabled() -> bool {
    #[cfg(test)]
    {
        let override_value = ENABLED_OVERRIDE.load(Ordering::SeqCst);
        if override_value >= 0 {
            return override_value == 1;
        }
    }
    EnvConfig::get().profile
}

/// 計測開始用タイマー。
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    /// 計測を開始する。
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    /// 経過時間をログに出力する。
    pub fn log(self) {
        log_duration(self.label, self.start.elapsed(), "");
    }

    /// 追加情報付きで経過時間をログに出力する。
    pub fn log_with(self, extra: &str) {
        log_duration(self.label, self.start.elapsed(), extra);
    }
}

/// 計測済みの経過時間をログに出力する。
pub fn log_duration(label: &str, elapsed: Duration, extra: &str) {
    if !enabled() {
        return;
    }

    if extra.is_empty() {
        eprintln!("PROFILE label={} ms={}", label, elapsed.as_millis());
    } else {
        eprintln!(
            "PROFILE label={} ms={} {}",
            label,
            elapsed.as_millis(),
            extra
        );
    }
}

#[cfg(test)]
pub fn set_enabled_override(value: bool) {
    ENABLED_OVERRIDE.store(if value { 1 } else { 0 }, Ordering::SeqCst);
}

#[cfg(test)]
pub fn clear_enabled_override() {
    ENABLED_OVERRIDE.store(-1, Ordering::SeqCst);
}
