// Export formats built on the same visibility and date rules as the HTML renderer.

pub mod handlers;
pub mod print;
pub mod text;
