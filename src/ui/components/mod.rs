pub mod chat_area;
pub mod chat_list;
pub mod contacts;
pub mod input_bar;
pub mod nav_bar;
pub mod placeholder;
pub mod video_call;
pub mod welcome;
