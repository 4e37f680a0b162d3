use crossterm::event::Event as CtEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use crate::events::AppEvent;
use crate::events::Event;
use crate::events::PointerEvent;
use crate::events::SimEvent;
use crate::viewport::Point;
use crate::viewport::PointerSource;

/// Pointer source for a canvas drawn at `(x, y)` in the terminal, where every terminal cell is
/// one pixel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TerminalPointer {
    pub x: u16,
    pub y: u16,
}

impl TerminalPointer {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl PointerSource for TerminalPointer {
    type Event = MouseEvent;

    fn canvas_point(&self, event: &MouseEvent) -> Option<Point> {
        Some(Point::new(
            event.column as f64 - self.x as f64,
            event.row as f64 - self.y as f64,
        ))
    }
}

/// Converts a crossterm event into a lifecanvas event
pub fn convert_event<P>(event: CtEvent, pointer: &P) -> Option<Event>
where
    P: PointerSource<Event = MouseEvent>,
{
    match event {
        CtEvent::Key(key_event) => convert_key(key_event),
        CtEvent::Mouse(mouse_event) => {
            let point = pointer.canvas_point(&mouse_event);

            let event = match (mouse_event.kind, point) {
                (MouseEventKind::Down(MouseButton::Left), Some(p)) => PointerEvent::Press(p),
                (MouseEventKind::Drag(MouseButton::Left), Some(p)) => PointerEvent::Drag(p),
                (MouseEventKind::Up(MouseButton::Left), _) => PointerEvent::Release,
                _ => return None,
            };

            Some(Event::Pointer(event))
        }
        CtEvent::Resize(cols, rows) => Some(Event::App(AppEvent::Resize { cols, rows })),
        _ => None,
    }
}

fn convert_key(key_event: KeyEvent) -> Option<Event> {
    // Some terminals also report releases
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    let event = match key_event {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('q'),
            ..
        } => Event::App(AppEvent::Exit),
        KeyEvent {
            code: KeyCode::Char('g'),
            ..
        } => Event::App(AppEvent::ToggleGridlines),
        KeyEvent {
            code: KeyCode::Char('i'),
            ..
        } => Event::Sim(SimEvent::Initialize),
        KeyEvent {
            code: KeyCode::Char('c'),
            ..
        } => Event::Sim(SimEvent::Clear),
        KeyEvent {
            code: KeyCode::Char(' ' | 'a'),
            ..
        } => Event::Sim(SimEvent::ToggleAuto),
        KeyEvent {
            code: KeyCode::Char('s' | 'n'),
            ..
        } => Event::Sim(SimEvent::Step),
        _ => return None,
    };

    Some(event)
}
