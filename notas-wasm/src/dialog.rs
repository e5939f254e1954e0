pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub(crate) fn confirm(message: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    window.confirm_with_message(message).unwrap_or(false)
}
