//! # Timer 模块
//!
//! 一次性唤醒定时器，基于 Host 的单调时间线。

use std::time::Duration;

use tracing::trace;

/// 一次性唤醒定时器
///
/// 同一时刻最多只有一个截止时间；重新调度会覆盖旧的。
#[derive(Debug, Clone, Default)]
pub struct WakeTimer {
    deadline: Option<Duration>,
}

impl WakeTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 在单调时间 `now` 之后 `delay` 触发
    pub fn schedule(&mut self, now: Duration, delay: Duration) {
        let deadline = now + delay;
        trace!(deadline_ms = deadline.as_millis() as u64, "唤醒已调度");
        self.deadline = Some(deadline);
    }

    /// 取消尚未触发的唤醒
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// 检查是否到期；到期时消费截止时间，只触发一次
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_fires_once_after_deadline() {
        let mut timer = WakeTimer::new();
        timer.schedule(ms(100), ms(900));

        assert!(!timer.poll(ms(999)));
        assert!(timer.poll(ms(1000)));
        assert!(!timer.poll(ms(2000)));
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_cancel_and_reschedule() {
        let mut timer = WakeTimer::new();
        timer.schedule(ms(0), ms(500));
        timer.cancel();
        assert!(!timer.poll(ms(600)));

        timer.schedule(ms(0), ms(500));
        timer.schedule(ms(0), ms(800));
        assert_eq!(timer.deadline(), Some(ms(800)));
        assert!(!timer.poll(ms(600)));
    }
}
