pub mod entry;
pub mod table;

pub use entry::{EntryRow, LookupResult, Selector};
pub use table::SheetTable;
