// src/backend/utils/log.rs

/// Writes a line to the canister debug log (stderr in native test builds).
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::utils::log::print(&format!($($arg)*))
    };
}

pub fn print(message: &str) {
    #[cfg(target_arch = "wasm32")]
    ic_cdk::api::print(message);
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", message);
}
