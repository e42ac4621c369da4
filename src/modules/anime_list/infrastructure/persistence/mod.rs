pub mod anime_list_repository_impl;

pub use anime_list_repository_impl::AnimeListRepositoryImpl;
