/// Logical keys the game reacts to. Everything else maps to `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Fire,
    Other,
}

/// One discrete input event, already decoupled from the terminal backend.
/// Pointer coordinates are screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    PointerClick { x: i32, y: i32 },
    KeyDown(Key),
    KeyUp(Key),
}
