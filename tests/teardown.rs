//! Unmounting at any point must stop every timer: no state changes after
//! teardown, however long the clock keeps running.

mod common;

use common::{builtin_page, ms};
use devfolio::motion::{
    AlwaysRevealed, Clock, CounterConfig, ManualClock, NumericCounter, StaggeredList,
    TypewriterConfig, TypewriterSequencer,
};

const FRAME: u64 = 20;

#[test]
fn counter_cancelled_at_any_tick_stays_put() {
    for ticks in 0..=80u64 {
        let mut counter = NumericCounter::new(CounterConfig::new(99.9, ms(1500), 1).unwrap());
        counter.start(ms(0));
        for n in 0..ticks {
            counter.tick(ms(n * FRAME));
        }
        counter.cancel();
        let frozen = counter.display();
        for n in ticks..ticks + 200 {
            assert!(!counter.tick(ms(n * FRAME)));
        }
        assert_eq!(counter.display(), frozen, "cancelled after {ticks} ticks");
    }
}

#[test]
fn typewriter_cancelled_at_any_tick_stays_put() {
    for ticks in 0..=80u64 {
        let config = TypewriterConfig::new("$ run connect", ms(80)).unwrap();
        let mut typewriter = TypewriterSequencer::new(config, ms(0));
        typewriter.start(ms(0));
        for n in 0..ticks {
            typewriter.tick(ms(n * FRAME));
        }
        typewriter.cancel();
        let frozen = typewriter.current_display();
        for n in ticks..ticks + 200 {
            assert!(!typewriter.tick(ms(n * FRAME)));
        }
        assert_eq!(typewriter.current_display(), frozen, "cancelled after {ticks} ticks");
        assert!(!typewriter.is_mounted());
    }
}

#[test]
fn stagger_cancelled_at_any_tick_stays_put() {
    for ticks in 0..=30u64 {
        let mut list = StaggeredList::new(4, ms(100));
        list.trigger(ms(0));
        for n in 0..ticks {
            list.tick(ms(n * FRAME));
        }
        list.cancel();
        let frozen = list.flags();
        for n in ticks..ticks + 100 {
            assert!(!list.tick(ms(n * FRAME)));
        }
        assert_eq!(list.flags(), frozen);
    }
}

#[test]
fn page_unmounted_at_any_tick_stays_put() {
    for ticks in (0..=150u64).step_by(7) {
        let clock = ManualClock::new();
        let mut page = builtin_page(&clock);
        for _ in 0..ticks {
            let now = clock.now();
            let frame = page.frame(now);
            page.observe(&AlwaysRevealed, &frame.regions, now);
            page.tick(now);
            clock.advance(ms(FRAME));
        }
        page.unmount();
        let frozen = page.display();
        for _ in 0..100 {
            clock.advance(ms(FRAME));
            let now = clock.now();
            let frame = page.frame(now);
            assert_eq!(page.observe(&AlwaysRevealed, &frame.regions, now), 0);
            assert!(!page.tick(now));
        }
        assert_eq!(page.display(), frozen, "unmounted after {ticks} ticks");
        assert!(!page.is_mounted());
    }
}
