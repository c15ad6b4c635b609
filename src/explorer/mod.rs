mod nav;
mod normalize;
mod page;

pub use nav::{Explorer, NavEntry, START_PAGE_LABEL};
pub use normalize::strip_wrappers;
pub use page::{ArgRef, EnumValueRef, FieldRef, Page, Section, TypeRef};
pub use page::{call_page, start_page, type_page};
