use super::*;

#[test]
fn ui_state_defaults_to_dark_with_menu_closed() {
    let state = UiState::default();
    assert!(state.dark_mode);
    assert!(!state.menu_open);
}

#[test]
fn menu_toggles_and_closes() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
    state.toggle_menu();
    state.close_menu();
    assert!(!state.menu_open);
}
