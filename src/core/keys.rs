#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    PrevImage,
    NextImage,
    ResetDrones,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowLeft" => Some(KeyAction::PrevImage),
        "ArrowRight" => Some(KeyAction::NextImage),
        "o" | "O" => Some(KeyAction::ResetDrones),
        _ => None,
    }
}
