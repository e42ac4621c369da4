pub mod anime_list_repository;
