use std::cell::RefCell;
use std::rc::Rc;

use fltk::{frame::Frame, prelude::*};

use crate::app::infrastructure::timer::TimerGuard;
use crate::app::services::typewriter::Typewriter;

const CARET: char = '|';

/// Drives a [`Typewriter`] from a single FLTK timeout and mirrors its
/// text into a label. Stopping (or dropping) the controller removes the
/// timeout, so no step runs once the hero is gone.
pub struct TypewriterController {
    machine: Rc<RefCell<Typewriter>>,
    label: Frame,
    timer: Option<TimerGuard>,
}

impl TypewriterController {
    pub fn new(machine: Typewriter, label: Frame) -> Self {
        let mut controller = Self {
            machine: Rc::new(RefCell::new(machine)),
            label,
            timer: None,
        };
        controller.render();
        controller
    }

    pub fn is_running(&self) -> bool {
        self.timer.as_ref().is_some_and(TimerGuard::is_pending)
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        let machine = self.machine.clone();
        let mut label = self.label.clone();
        let delay = machine.borrow().initial_delay();

        self.timer = Some(TimerGuard::schedule(delay, move |handle| {
            let next = machine.borrow_mut().step();
            render_into(&mut label, &machine.borrow());
            TimerGuard::rearm(handle, next);
        }));
    }

    pub fn stop(&mut self) {
        self.timer = None;
    }

    fn render(&mut self) {
        render_into(&mut self.label, &self.machine.borrow());
    }
}

fn render_into(label: &mut Frame, machine: &Typewriter) {
    let caret = if machine.caret_visible() { CARET } else { ' ' };
    label.set_label(&format!("{}{}", machine.displayed_text(), caret));
    label.redraw();
}
