pub mod keyboard;
pub mod pointer;

pub use keyboard::{wire_detail_buttons, wire_global_keydown};
pub use pointer::{wire_input_handlers, InputWiring};
