//! 自动过期的界面状态
//!
//! 错误提示和 "Copied" 反馈都只显示一段时间，由主循环的 tick 清除

use std::time::{Duration, Instant};

/// A value that clears itself once its deadline passes.
///
/// Setting a new value restarts the deadline.
#[derive(Debug, Clone)]
pub struct Transient<T> {
    value: Option<T>,
    deadline: Option<Instant>,
    ttl: Duration,
}

impl<T> Transient<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            value: None,
            deadline: None,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn set(&mut self, value: T, now: Instant) {
        self.value = Some(value);
        self.deadline = Some(now + self.ttl);
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Modify the value in place without touching the deadline.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn clear(&mut self) {
        self.value = None;
        self.deadline = None;
    }

    /// Clear the value if `now` is at or past the deadline. Returns whether
    /// anything was cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.clear();
                true
            }
            _ => false,
        }
    }
}
