//! Platform glue for clipboard access and editor selection.
//!
//! The web build talks to the DOM through `web-sys`; native builds use
//! `arboard` for the clipboard and leave selection to the host view.

/// Copy `payload` to the system clipboard.
pub async fn copy_to_clipboard(payload: String) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or("window unavailable")?;
        let document = window.document().ok_or("document unavailable")?;
        let body = document.body().ok_or("missing body")?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| "Unable to create textarea")?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| "Textarea cast failed")?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        if !document.exec_command("copy").unwrap_or(false) {
            textarea.remove();
            return Err("Clipboard copy blocked".into());
        }
        textarea.remove();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard.set_text(payload).map_err(|err| err.to_string())
    }
}

/// Focus the textarea with `element_id` and select the UTF-16 span `start..end`.
///
/// Native webviews render the selection through the host's status line
/// instead, so this is a no-op there.
pub fn select_in_textarea(element_id: &str, start: usize, end: usize) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let textarea = document
            .get_element_by_id(element_id)
            .ok_or_else(|| format!("No element with id `{element_id}`"))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| "Textarea cast failed")?;

        let start = u32::try_from(start).unwrap_or(u32::MAX);
        let end = u32::try_from(end).unwrap_or(u32::MAX);
        textarea.focus().ok();
        textarea
            .set_selection_range(start, end)
            .map_err(|_| "Unable to set selection".to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (element_id, start, end);
        Ok(())
    }
}
