//! Write-only clipboard access.

use crate::error::PageError;

pub async fn copy_to_clipboard(payload: String) -> Result<(), PageError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let fail = |msg: &str| PageError::Clipboard(msg.to_string());
        let window = web_sys::window().ok_or_else(|| fail("window unavailable"))?;
        let document = window.document().ok_or_else(|| fail("document unavailable"))?;
        let body = document.body().ok_or_else(|| fail("missing body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| fail("unable to create textarea"))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| fail("textarea cast failed"))?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document
            .dyn_ref::<web_sys::HtmlDocument>()
            .map(|html| html.exec_command("copy").unwrap_or(false))
            .unwrap_or(false);
        textarea.remove();
        if !copied {
            return Err(fail("clipboard copy blocked"));
        }
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| PageError::Clipboard(err.to_string()))?;
        clipboard
            .set_text(payload)
            .map_err(|err| PageError::Clipboard(err.to_string()))
    }
}
