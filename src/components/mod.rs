//! UI Components
//!
//! Dashboard sections and their building blocks.

mod contact_section;
mod delete_button;
mod notice_stack;
mod priority_section;
mod thought_panel;
mod todo_section;
mod water_tracker;

pub use contact_section::ContactSection;
pub use delete_button::DeleteButton;
pub use notice_stack::NoticeStack;
pub use priority_section::PrioritySection;
pub use thought_panel::ThoughtPanel;
pub use todo_section::TodoSection;
pub use water_tracker::WaterTracker;
