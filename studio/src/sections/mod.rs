// Shared sections: navbar, cursor and page building blocks
// Developed by Lyndon Domini Catan (c)2025

mod cursor;
mod filter_bar;
mod icons;
mod nav;
mod page_header;

pub use cursor::{CURSOR_ROOT_CLASS, CursorState, CustomCursor};
pub use filter_bar::{FilterBar, stagger};
pub use icons::*;
pub use nav::{Navbar, Theme, is_scrolled};
pub use page_header::PageHeader;
