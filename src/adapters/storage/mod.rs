pub mod realtime_db;
