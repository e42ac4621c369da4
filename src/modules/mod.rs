pub mod anime_list;
pub mod catalog;
pub mod http;
pub mod provider;
pub mod users;
