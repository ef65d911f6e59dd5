//! 轮播状态机
//!
//! `Carousel` 只负责索引与方向；`AutoAdvance` 持有定时器句柄，
//! 保证任意时刻最多只有一个定时器在运行。

/// 切换方向，只用于选择过渡动画
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn css_class(&self) -> &'static str {
        match self {
            Direction::Forward => "slide-forward",
            Direction::Backward => "slide-backward",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    active: usize,
    direction: Direction,
    count: usize,
}

impl Carousel {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// 替换幻灯片列表（例如默认图被真实数据替换），回到初始状态
    pub fn set_count(&mut self, count: usize) {
        *self = Self::new(count);
    }

    /// 没有幻灯片时所有切换都是空操作，返回 `false`
    pub fn next(&mut self) -> bool {
        if self.count == 0 {
            return false;
        }
        self.active = (self.active + 1) % self.count;
        self.direction = Direction::Forward;
        true
    }

    pub fn prev(&mut self) -> bool {
        if self.count == 0 {
            return false;
        }
        self.active = (self.active + self.count - 1) % self.count;
        self.direction = Direction::Backward;
        true
    }

    /// 方向按传入的原始下标与当前下标比较，越界下标取模后定位
    pub fn jump_to(&mut self, index: usize) -> bool {
        if self.count == 0 {
            return false;
        }
        self.direction = if index > self.active {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.active = index % self.count;
        true
    }
}

// =========================================================
// 自动切换
// =========================================================

/// 周期性定时器的来源
///
/// 返回的句柄在 drop 时必须取消定时器（浏览器中见 `web::timer`）。
pub trait Scheduler {
    type Handle;

    fn every(&self, millis: u32, tick: Box<dyn Fn()>) -> Self::Handle;
}

pub struct AutoAdvance<S: Scheduler> {
    scheduler: S,
    interval_ms: u32,
    handle: Option<S::Handle>,
}

impl<S: Scheduler> AutoAdvance<S> {
    pub fn new(scheduler: S, interval_ms: u32) -> Self {
        Self {
            scheduler,
            interval_ms,
            handle: None,
        }
    }

    /// 取消旧定时器后按新的幻灯片数量重新调度；数量为 0 时不调度
    pub fn restart(&mut self, count: usize, tick: impl Fn() + 'static) {
        self.stop();
        if count == 0 {
            return;
        }
        self.handle = Some(self.scheduler.every(self.interval_ms, Box::new(tick)));
    }

    /// 组件卸载时调用
    pub fn stop(&mut self) {
        // drop 即取消
        self.handle.take();
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    // =========================================================
    // 状态机
    // =========================================================

    #[test]
    fn test_initial_state() {
        let c = Carousel::new(3);
        assert_eq!(c.active(), 0);
        assert_eq!(c.direction(), Direction::Forward);
    }

    #[test]
    fn test_next_wraps_forward() {
        let mut c = Carousel::new(3);
        c.next();
        c.next();
        assert_eq!(c.active(), 2);
        c.next();
        assert_eq!(c.active(), 0);
        assert_eq!(c.direction(), Direction::Forward);
    }

    #[test]
    fn test_prev_wraps_backward() {
        let mut c = Carousel::new(3);
        c.prev();
        assert_eq!(c.active(), 2);
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn test_next_then_prev_is_identity() {
        for count in 1..=6 {
            for start in 0..count {
                let mut c = Carousel::new(count);
                c.jump_to(start);
                c.next();
                c.prev();
                assert_eq!(c.active(), start, "count={} start={}", count, start);
            }
        }
    }

    #[test]
    fn test_jump_to_wraps_and_sets_direction() {
        let mut c = Carousel::new(4);
        c.jump_to(2);
        assert_eq!((c.active(), c.direction()), (2, Direction::Forward));
        c.jump_to(1);
        assert_eq!((c.active(), c.direction()), (1, Direction::Backward));
        c.jump_to(9);
        assert_eq!(c.active(), 1);
    }

    #[test]
    fn test_jump_past_end_moves_forward() {
        let mut c = Carousel::new(3);
        c.jump_to(1);
        c.jump_to(3);
        assert_eq!((c.active(), c.direction()), (0, Direction::Forward));
    }

    #[test]
    fn test_index_always_in_range() {
        for count in 1..=5 {
            let mut c = Carousel::new(count);
            for step in 0..20 {
                match step % 3 {
                    0 => c.next(),
                    1 => c.prev(),
                    _ => c.jump_to(step * 7),
                };
                assert!(c.active() < count);
            }
        }
    }

    #[test]
    fn test_empty_carousel_rejects_transitions() {
        let mut c = Carousel::new(0);
        assert!(!c.next());
        assert!(!c.prev());
        assert!(!c.jump_to(3));
        assert_eq!(c.active(), 0);
    }

    #[test]
    fn test_set_count_resets_state() {
        let mut c = Carousel::new(3);
        c.prev();
        c.set_count(5);
        assert_eq!(c, Carousel::new(5));
    }

    // =========================================================
    // 自动切换
    // =========================================================

    /// 记录存活句柄数量，并允许手动触发 tick
    #[derive(Clone, Default)]
    struct FakeScheduler {
        live: Rc<Cell<usize>>,
        ticks: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
        last_interval: Rc<Cell<u32>>,
    }

    struct FakeHandle {
        live: Rc<Cell<usize>>,
    }

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    impl Scheduler for FakeScheduler {
        type Handle = FakeHandle;

        fn every(&self, millis: u32, tick: Box<dyn Fn()>) -> FakeHandle {
            self.live.set(self.live.get() + 1);
            self.last_interval.set(millis);
            self.ticks.borrow_mut().push(Rc::from(tick));
            FakeHandle {
                live: self.live.clone(),
            }
        }
    }

    impl FakeScheduler {
        fn fire_latest(&self) {
            let tick = self.ticks.borrow().last().cloned();
            if let Some(tick) = tick {
                tick();
            }
        }
    }

    #[test]
    fn test_auto_advance_ticks_next() {
        let scheduler = FakeScheduler::default();
        let carousel = Rc::new(RefCell::new(Carousel::new(3)));
        let mut auto = AutoAdvance::new(scheduler.clone(), 4000);

        let target = carousel.clone();
        auto.restart(3, move || {
            target.borrow_mut().next();
        });
        scheduler.fire_latest();
        scheduler.fire_latest();

        assert_eq!(carousel.borrow().active(), 2);
        assert_eq!(scheduler.last_interval.get(), 4000);
    }

    #[test]
    fn test_restart_never_duplicates_timer() {
        let scheduler = FakeScheduler::default();
        let mut auto = AutoAdvance::new(scheduler.clone(), 4000);

        auto.restart(3, || {});
        auto.restart(5, || {});
        auto.restart(2, || {});

        assert_eq!(scheduler.live.get(), 1);
        assert!(auto.is_running());
    }

    #[test]
    fn test_no_timer_for_empty_slides() {
        let scheduler = FakeScheduler::default();
        let mut auto = AutoAdvance::new(scheduler.clone(), 4000);

        auto.restart(3, || {});
        auto.restart(0, || {});

        assert_eq!(scheduler.live.get(), 0);
        assert!(!auto.is_running());
    }

    #[test]
    fn test_stop_cancels_timer() {
        let scheduler = FakeScheduler::default();
        let mut auto = AutoAdvance::new(scheduler.clone(), 4000);
        auto.restart(3, || {});

        auto.stop();
        assert_eq!(scheduler.live.get(), 0);

        // 重复 stop 是安全的
        auto.stop();
        assert_eq!(scheduler.live.get(), 0);
    }

    #[test]
    fn test_drop_cancels_timer() {
        let scheduler = FakeScheduler::default();
        {
            let mut auto = AutoAdvance::new(scheduler.clone(), 4000);
            auto.restart(3, || {});
        }
        assert_eq!(scheduler.live.get(), 0);
    }
}
