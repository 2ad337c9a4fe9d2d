//! UI Components
//!
//! Leptos components for the user details form and stored list.

mod field_input;
mod notice_banner;
mod user_form;
mod user_list;

pub use field_input::FieldInput;
pub use notice_banner::NoticeBanner;
pub use user_form::UserForm;
pub use user_list::UserList;
