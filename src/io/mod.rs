pub mod config_cache;
