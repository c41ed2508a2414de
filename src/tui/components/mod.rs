// Components module - UI building blocks
//
// Stateful children (own view state, implement Interactive):
// - Toggle button: hover state, emits TogglePersons
// - Card list: selection and inline editing, emits DeletePerson/NameChanged
//
// Presentational pieces (render functions over borrowed data):
// - Intro paragraph, person card, status bar, logs panel, help overlay, toast

pub mod card_list;
pub mod formatters;
pub mod help;
pub mod intro;
pub mod logs_panel;
pub mod person_card;
pub mod status_bar;
pub mod toast;
pub mod toggle_button;

pub use toast::Toast;
