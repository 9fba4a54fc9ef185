/*!
Scripted kernel for tests - a tiny single-threaded event loop

Behaves like a simulator from the bridge's point of view: events run in
order, callbacks may call back into the shims, and a finish request lets
the already-scheduled events drain before stopping.
*/

use crate::kernel::{ControlOp, SimulationKernel};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::ffi::CStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lifecycle {
    Running,
    TerminationRequested,
    Stopped,
}

type Action = Box<dyn FnOnce(&ScriptedKernel)>;

struct Scheduled {
    seq: u64,
    name: &'static str,
    action: Action,
}

pub(crate) struct ScriptedKernel {
    state: Cell<Lifecycle>,
    history: RefCell<Vec<Lifecycle>>,
    queue: RefCell<VecDeque<Scheduled>>,
    next_seq: Cell<u64>,
    // Events with seq below this were scheduled before finish was requested
    cutoff: Cell<Option<u64>>,
    evaluated: RefCell<Vec<&'static str>>,
    controls: RefCell<Vec<ControlOp>>,
    messages: RefCell<Vec<Vec<u8>>>,
}

impl ScriptedKernel {
    pub(crate) fn new() -> Self {
        Self {
            state: Cell::new(Lifecycle::Running),
            history: RefCell::new(vec![Lifecycle::Running]),
            queue: RefCell::new(VecDeque::new()),
            next_seq: Cell::new(0),
            cutoff: Cell::new(None),
            evaluated: RefCell::new(Vec::new()),
            controls: RefCell::new(Vec::new()),
            messages: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn schedule(&self, name: &'static str, action: impl FnOnce(&ScriptedKernel) + 'static) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.queue.borrow_mut().push_back(Scheduled {
            seq,
            name,
            action: Box::new(action),
        });
    }

    /// Dispatch events until the queue is empty
    pub(crate) fn run(&self) {
        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(event) = next else { break };

            let admitted = match self.cutoff.get() {
                Some(cutoff) => event.seq < cutoff,
                None => true,
            };
            if !admitted || self.state.get() == Lifecycle::Stopped {
                continue;
            }

            self.evaluated.borrow_mut().push(event.name);
            (event.action)(self);
        }

        if self.state.get() == Lifecycle::TerminationRequested {
            self.transition(Lifecycle::Stopped);
        }
    }

    pub(crate) fn state(&self) -> Lifecycle {
        self.state.get()
    }

    pub(crate) fn history(&self) -> Vec<Lifecycle> {
        self.history.borrow().clone()
    }

    pub(crate) fn evaluated(&self) -> Vec<&'static str> {
        self.evaluated.borrow().clone()
    }

    pub(crate) fn controls(&self) -> Vec<ControlOp> {
        self.controls.borrow().clone()
    }

    pub(crate) fn messages(&self) -> Vec<Vec<u8>> {
        self.messages.borrow().clone()
    }

    fn transition(&self, to: Lifecycle) {
        self.state.set(to);
        self.history.borrow_mut().push(to);
    }
}

impl SimulationKernel for ScriptedKernel {
    fn control(&self, op: ControlOp) {
        self.controls.borrow_mut().push(op);

        if op == ControlOp::Finish && self.state.get() == Lifecycle::Running {
            self.cutoff.set(Some(self.next_seq.get()));
            self.transition(Lifecycle::TerminationRequested);
        }
    }

    fn print(&self, text: &CStr) {
        // Copy out: the buffer is gone once this call returns
        self.messages
            .borrow_mut()
            .push(text.to_bytes_with_nul().to_vec());
    }
}
