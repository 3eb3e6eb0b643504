//! Repository layer for database operations.
//!
//! Repository structs encapsulate the queries and mutations for each table,
//! following the Data Mapper pattern recommended by SeaORM. Entities stay
//! pure data models; all access goes through these methods.

pub mod pair;
pub mod zone_cache;

pub use pair::PairRepository;
pub use zone_cache::ZoneCacheRepository;
