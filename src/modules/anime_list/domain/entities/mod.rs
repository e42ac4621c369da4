pub mod list_entry;
