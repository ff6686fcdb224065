use crate::lookup::LookupResult;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
    LookupFinished {
        request_id: u64,
        result: LookupResult,
    },
}
