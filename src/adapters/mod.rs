pub mod email;
pub mod http;
pub mod notify;
pub mod storage;
