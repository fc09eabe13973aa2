mod kv_store_port;

pub use kv_store_port::KeyValueStore;
