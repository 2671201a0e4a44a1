//! Host-side mock collaborators shared by the unit tests.

extern crate std;

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::hal::{AnalogInput, Clock, DigitalInput};

#[derive(Default)]
struct PinState {
    level: bool,
    script: VecDeque<bool>,
    reads: usize,
}

/// Digital pin whose level is driven by the test through a cloned handle.
///
/// Scripted levels are consumed one per read before falling back to the
/// steady level.
#[derive(Clone)]
pub struct MockPin {
    state: Rc<RefCell<PinState>>,
}

impl MockPin {
    pub fn new(level: bool) -> Self {
        Self {
            state: Rc::new(RefCell::new(PinState {
                level,
                ..PinState::default()
            })),
        }
    }

    pub fn set(&self, level: bool) {
        self.state.borrow_mut().level = level;
    }

    pub fn script(&self, levels: &[bool]) {
        self.state.borrow_mut().script.extend(levels.iter().copied());
    }

    pub fn reads(&self) -> usize {
        self.state.borrow().reads
    }
}

impl DigitalInput for MockPin {
    fn is_high(&mut self) -> bool {
        let mut state = self.state.borrow_mut();
        state.reads += 1;
        match state.script.pop_front() {
            Some(level) => level,
            None => state.level,
        }
    }
}

/// Analog pin returning whatever sample the test last stored.
#[derive(Clone)]
pub struct MockAnalog {
    sample: Rc<Cell<u16>>,
}

impl MockAnalog {
    pub fn new(sample: u16) -> Self {
        Self {
            sample: Rc::new(Cell::new(sample)),
        }
    }

    pub fn set(&self, sample: u16) {
        self.sample.set(sample);
    }
}

impl AnalogInput for MockAnalog {
    fn sample(&mut self) -> u16 {
        self.sample.get()
    }
}

/// Clock advanced by hand.
#[derive(Clone)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}
