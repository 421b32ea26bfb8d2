//! Request layer: transport, token storage, and the auth and wallet clients

pub mod api;
pub mod http;
pub mod storage;
pub mod wallet;

#[cfg(test)]
pub(crate) mod testing;
