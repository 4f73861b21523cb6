pub mod clipboard;
#[cfg(target_arch = "wasm32")]
pub mod observer;
pub mod platform;
pub mod storage;
pub mod timing;
