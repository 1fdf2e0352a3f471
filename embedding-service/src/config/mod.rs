pub mod embedding_config;
