use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::{Clock, SessionSnapshot, SpinEvent, SpinSequencer, WheelConfig};
use yew::prelude::*;

pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

type BrowserSequencer = SpinSequencer<BrowserClock, SmallRng>;

pub struct SpinSequencerHandle {
    pub snapshot: SessionSnapshot,
    pub spin: Callback<()>,
}

/// Glue between the sequencer and the browser: forwards events to the page
/// and keeps exactly one timeout armed for the sequencer's next deadline.
#[derive(Clone)]
struct Driver {
    sequencer: Rc<RefCell<BrowserSequencer>>,
    timer: Rc<RefCell<Option<Timeout>>>,
    handler: Rc<RefCell<Callback<SpinEvent>>>,
    snapshot: UseStateHandle<SessionSnapshot>,
}

impl Driver {
    fn spin(&self) {
        let events = self.sequencer.borrow_mut().request_spin();
        self.apply(events);
    }

    fn wake(&self) {
        let events = self.sequencer.borrow_mut().advance();
        self.apply(events);
    }

    fn apply(&self, events: Vec<SpinEvent>) {
        if events.is_empty() && self.timer.borrow().is_some() {
            return;
        }

        let handler = self.handler.borrow().clone();
        for event in events {
            handler.emit(event);
        }

        let (snapshot, deadline) = {
            let sequencer = self.sequencer.borrow();
            (sequencer.snapshot(), sequencer.next_deadline())
        };
        self.snapshot.set(snapshot);
        self.arm(deadline);
    }

    fn arm(&self, deadline: Option<u64>) {
        let timeout = deadline.map(|deadline| {
            let delay = deadline.saturating_sub(BrowserClock.now_ms());
            let driver = self.clone();
            Timeout::new(u32::try_from(delay).unwrap_or(u32::MAX), move || {
                driver.timer.borrow_mut().take();
                driver.wake();
            })
        });
        *self.timer.borrow_mut() = timeout;
    }
}

#[hook]
pub fn use_spin_sequencer(config: WheelConfig, on_event: Callback<SpinEvent>) -> SpinSequencerHandle {
    let sequencer = use_mut_ref(move || {
        SpinSequencer::new(config, BrowserClock, SmallRng::from_entropy())
    });
    let timer = use_mut_ref(|| None::<Timeout>);
    let handler = use_mut_ref(Callback::<SpinEvent>::noop);
    let snapshot = use_state(SessionSnapshot::new);

    *handler.borrow_mut() = on_event;

    // Unmounting is the only way to abandon an in-flight spin
    {
        let timer = timer.clone();
        use_effect_with((), move |_| {
            move || {
                timer.borrow_mut().take();
            }
        });
    }

    let driver = Driver {
        sequencer,
        timer,
        handler,
        snapshot: snapshot.clone(),
    };

    SpinSequencerHandle {
        snapshot: (*snapshot).clone(),
        spin: Callback::from(move |_| driver.spin()),
    }
}
