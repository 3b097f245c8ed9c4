use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    fmt,
    rc::{Rc, Weak},
    time::Duration,
};

use crate::config::{CURSOR_BLINK, TYPING_TICK};

use super::{Disposer, Scheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTiming {
    /// Wait before the first character is scheduled.
    pub delay: Duration,
    /// One character is revealed per tick.
    pub tick: Duration,
    /// Cursor visibility flips once per blink period.
    pub blink: Duration,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            delay: Duration::ZERO,
            tick: TYPING_TICK,
            blink: CURSOR_BLINK,
        }
    }
}

impl TypingTiming {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }
}

/// Partial reveal of a target string, counted in `char`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingState {
    text: String,
    total: usize,
    revealed: usize,
}

impl TypingState {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let total = text.chars().count();
        Self {
            text,
            total,
            revealed: 0,
        }
    }

    pub fn target(&self) -> &str {
        &self.text
    }

    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    pub fn total_len(&self) -> usize {
        self.total
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.total
    }

    pub fn revealed(&self) -> &str {
        match self.text.char_indices().nth(self.revealed) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    /// Reveals one more character. Returns `false` once the whole string is shown.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.revealed += 1;
        true
    }

    pub fn restart(&mut self, text: impl Into<String>) {
        *self = Self::new(text);
    }
}

/// Blinking cursor overlay; visible on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorBlink {
    visible: bool,
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl CursorBlink {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypingEvent {
    /// The revealed prefix changed.
    Revealed(String),
    /// The cursor blinked on or off.
    Cursor(bool),
}

struct Shared {
    state: RefCell<TypingState>,
    cursor: Cell<CursorBlink>,
    reveal: RefCell<Option<Disposer>>,
    on_event: RefCell<Box<dyn FnMut(TypingEvent)>>,
    queued: RefCell<VecDeque<TypingEvent>>,
    dispatching: Cell<bool>,
}

impl Shared {
    /// Delivers `event` in order. Events raised while the observer is running (e.g. by a
    /// `restart` issued from inside it) are queued and delivered after it returns.
    fn emit(&self, event: TypingEvent) {
        self.queued.borrow_mut().push_back(event);
        if self.dispatching.replace(true) {
            return;
        }
        loop {
            let next = self.queued.borrow_mut().pop_front();
            let Some(event) = next else {
                break;
            };
            (self.on_event.borrow_mut())(event);
        }
        self.dispatching.set(false);
    }

    fn tick(&self) {
        let revealed = {
            let mut state = self.state.borrow_mut();
            state.advance().then(|| state.revealed().to_owned())
        };
        match revealed {
            Some(text) => self.emit(TypingEvent::Revealed(text)),
            None => {
                let finished = self.reveal.borrow_mut().take();
                if let Some(handle) = finished {
                    log::debug!(
                        "typing complete after {} chars",
                        self.state.borrow().total_len()
                    );
                    handle.dispose();
                }
            }
        }
    }

    fn blink(&self) {
        let mut cursor = self.cursor.get();
        let visible = cursor.toggle();
        self.cursor.set(cursor);
        self.emit(TypingEvent::Cursor(visible));
    }

    fn cancel_reveal(&self) {
        let pending = self.reveal.borrow_mut().take();
        if let Some(handle) = pending {
            handle.dispose();
        }
    }
}

/// Typing animation: reveals a string one character per tick after a start delay, alongside
/// a cursor that blinks until the engine is torn down.
///
/// All three timers (start delay, reveal, blink) are cancelled by [`TypingEngine::teardown`]
/// or by dropping the engine.
pub struct TypingEngine<S: Scheduler + Clone + 'static> {
    scheduler: S,
    timing: TypingTiming,
    shared: Rc<Shared>,
    delay: Option<Disposer>,
    blink: Option<Disposer>,
}

impl<S: Scheduler + Clone + 'static> TypingEngine<S> {
    pub fn start(
        scheduler: S,
        text: impl Into<String>,
        timing: TypingTiming,
        on_event: impl FnMut(TypingEvent) + 'static,
    ) -> Self {
        let shared = Rc::new(Shared {
            state: RefCell::new(TypingState::new(text)),
            cursor: Cell::new(CursorBlink::default()),
            reveal: RefCell::new(None),
            on_event: RefCell::new(Box::new(on_event)),
            queued: RefCell::new(VecDeque::new()),
            dispatching: Cell::new(false),
        });
        let weak = Rc::downgrade(&shared);
        let blink = scheduler.interval(
            timing.blink,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.blink();
                }
            }),
        );
        let mut engine = Self {
            scheduler,
            timing,
            shared,
            delay: None,
            blink: Some(blink),
        };
        engine.schedule_reveal();
        engine
    }

    fn schedule_reveal(&mut self) {
        let scheduler = self.scheduler.clone();
        let tick = self.timing.tick;
        let weak: Weak<Shared> = Rc::downgrade(&self.shared);
        let handle = self.scheduler.timeout(
            self.timing.delay,
            Box::new(move || {
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                let ticker = Rc::downgrade(&shared);
                let reveal = scheduler.interval(
                    tick,
                    Box::new(move || {
                        if let Some(shared) = ticker.upgrade() {
                            shared.tick();
                        }
                    }),
                );
                *shared.reveal.borrow_mut() = Some(reveal);
            }),
        );
        self.delay = Some(handle);
    }

    /// Starts over with `text`: pending delay and reveal timers are cancelled, the revealed
    /// prefix is cleared and the start delay runs again. The cursor keeps blinking.
    pub fn restart(&mut self, text: impl Into<String>) {
        if let Some(delay) = self.delay.take() {
            delay.dispose();
        }
        self.shared.cancel_reveal();
        self.shared.state.borrow_mut().restart(text);
        self.shared.emit(TypingEvent::Revealed(String::new()));
        self.schedule_reveal();
    }

    pub fn revealed(&self) -> String {
        self.shared.state.borrow().revealed().to_owned()
    }

    pub fn revealed_len(&self) -> usize {
        self.shared.state.borrow().revealed_len()
    }

    pub fn is_complete(&self) -> bool {
        self.shared.state.borrow().is_complete()
    }

    pub fn cursor_visible(&self) -> bool {
        self.shared.cursor.get().is_visible()
    }

    pub fn teardown(mut self) {
        if let Some(delay) = self.delay.take() {
            delay.dispose();
        }
        if let Some(blink) = self.blink.take() {
            blink.dispose();
        }
        self.shared.cancel_reveal();
    }
}

impl<S: Scheduler + Clone + 'static> Drop for TypingEngine<S> {
    fn drop(&mut self) {
        self.shared.cancel_reveal();
    }
}

impl<S: Scheduler + Clone + 'static> fmt::Debug for TypingEngine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypingEngine")
            .field("timing", &self.timing)
            .field("state", &self.shared.state.borrow())
            .field("cursor", &self.shared.cursor.get())
            .finish()
    }
}
