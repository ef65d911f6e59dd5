//! 定时器封装模块
//!
//! `gloo_timers::callback::Interval` 在 drop 时自动 `clearInterval`，
//! 正好满足 `Scheduler::Handle` 的取消语义。

use gloo_timers::callback::{Interval, Timeout};

use crate::carousel::Scheduler;

/// 基于 `setInterval` 的调度器
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&self, millis: u32, tick: Box<dyn Fn()>) -> Interval {
        Interval::new(millis, move || tick())
    }
}

/// 延迟执行一次，不需要取消
pub fn after(millis: u32, callback: impl FnOnce() + 'static) {
    Timeout::new(millis, callback).forget();
}
