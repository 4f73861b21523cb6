//! Platform detection and startup helpers.

use crate::error::PageError;

/// Element id Dioxus web mounts into.
pub const MOUNT_POINT: &str = "main";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }
}

/// Check the mount element exists before launching (web only; native renders into its own window).
pub fn ensure_mount_point(id: &str) -> Result<(), PageError> {
    #[cfg(target_arch = "wasm32")]
    {
        let found = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
            .is_some();
        if !found {
            return Err(PageError::MissingMountPoint(id.to_string()));
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;

    Ok(())
}

/// Stop with a diagnostic. On the web this surfaces as an uncaught JS error.
pub fn halt(err: &PageError) -> ! {
    tracing::error!("[startup] {err}");

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen::throw_str(&err.to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        panic!("{err}")
    }
}

/// Whether the host offers `IntersectionObserver`.
pub fn intersection_observer_supported() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|window| {
                js_sys::Reflect::has(&window, &wasm_bindgen::JsValue::from_str("IntersectionObserver"))
                    .unwrap_or(false)
            })
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_has_no_mount_check_or_observer() {
        assert_eq!(Platform::current(), Platform::Native);
        assert!(ensure_mount_point(MOUNT_POINT).is_ok());
        assert!(!intersection_observer_supported());
    }
}
