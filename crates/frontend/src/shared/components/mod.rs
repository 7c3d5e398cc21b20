pub mod card_animated;
pub mod nav_link;
pub mod page_header;
pub mod ui;

pub use card_animated::{stagger, CardAnimated};
pub use nav_link::NavLink;
pub use page_header::PageHeader;
