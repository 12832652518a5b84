use std::collections::HashMap;
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use crate::input::{InputEvent, Key};

/// Ticks a movement key stays held without a fresh press or repeat, for
/// terminals that never report key releases. Covers the OS repeat delay.
pub const HOLD_WINDOW_TICKS: u64 = 30;

pub enum Event {
    Key(KeyEvent),
    /// Left click at a terminal column/row
    Click { column: u16, row: u16 },
    Tick,
}

/// Reads terminal events on a background thread and paces ticks.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(tick_rate_ms);

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                if event::poll(timeout).unwrap_or(false) {
                    let forwarded = match event::read() {
                        Ok(crossterm::event::Event::Key(key)) => Some(Event::Key(key)),
                        Ok(crossterm::event::Event::Mouse(mouse))
                            if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
                        {
                            Some(Event::Click {
                                column: mouse.column,
                                row: mouse.row,
                            })
                        }
                        Ok(_) => None,
                        Err(_) => return,
                    };
                    if let Some(ev) = forwarded {
                        if tx.send(ev).is_err() {
                            return;
                        }
                    }
                }
                if last_tick.elapsed() >= tick_rate {
                    if tx.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}

fn logical_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Char(' ') => Key::Fire,
        _ => Key::Other,
    }
}

/// Translate a terminal key event. Unknown keys are dropped.
pub fn translate_key(key: KeyEvent) -> Option<InputEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::Quit);
    }
    match (key.kind, key.code) {
        (KeyEventKind::Press, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) => {
            Some(InputEvent::Quit)
        }
        (KeyEventKind::Press, code) => match logical_key(code) {
            Key::Other => None,
            k => Some(InputEvent::KeyDown(k)),
        },
        // holding fire does not autofire
        (KeyEventKind::Repeat, code) => match logical_key(code) {
            Key::Up | Key::Down => Some(InputEvent::KeyDown(logical_key(code))),
            _ => None,
        },
        (KeyEventKind::Release, code) => match logical_key(code) {
            Key::Other => None,
            k => Some(InputEvent::KeyUp(k)),
        },
    }
}

/// Synthesizes key releases on terminals without release reporting.
pub struct KeyHold {
    last_seen: HashMap<Key, u64>,
    releases_reported: bool,
}

impl KeyHold {
    pub fn new(releases_reported: bool) -> Self {
        Self {
            last_seen: HashMap::new(),
            releases_reported,
        }
    }

    pub fn observe(&mut self, event: &InputEvent, tick: u64) {
        match event {
            InputEvent::KeyDown(k @ (Key::Up | Key::Down)) => {
                self.last_seen.insert(*k, tick);
            }
            InputEvent::KeyUp(k) => {
                self.last_seen.remove(k);
            }
            _ => {}
        }
    }

    /// Key releases for movement keys that have gone quiet.
    pub fn expire(&mut self, tick: u64) -> Vec<InputEvent> {
        if self.releases_reported {
            return Vec::new();
        }
        let stale: Vec<Key> = self
            .last_seen
            .iter()
            .filter(|(_, seen)| tick.saturating_sub(**seen) > HOLD_WINDOW_TICKS)
            .map(|(&k, _)| k)
            .collect();
        stale
            .into_iter()
            .map(|k| {
                self.last_seen.remove(&k);
                InputEvent::KeyUp(k)
            })
            .collect()
    }
}
