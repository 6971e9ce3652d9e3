/// What a click on the music toggle should do given the element's state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
}

pub fn toggle_action(paused: bool) -> ToggleAction {
    if paused {
        ToggleAction::Play
    } else {
        ToggleAction::Pause
    }
}
