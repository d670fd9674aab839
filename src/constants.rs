use polygon_core::Control;

// DOM element ids the web frontend expects in `index.html`.

pub const CANVAS_ID: &str = "app-canvas";
pub const PAUSE_BUTTON_ID: &str = "btn-pause";
pub const COLOR_BUTTON_ID: &str = "btn-color";
pub const RESET_BUTTON_ID: &str = "btn-reset";
pub const SHARE_BUTTON_ID: &str = "btn-share";
pub const SHARE_PANEL_ID: &str = "share-panel";

// Button id -> control it triggers
pub const CONTROL_BUTTONS: [(&str, Control); 4] = [
    (PAUSE_BUTTON_ID, Control::TogglePause),
    (COLOR_BUTTON_ID, Control::ChangeColor),
    (RESET_BUTTON_ID, Control::ResetView),
    (SHARE_BUTTON_ID, Control::ToggleShare),
];
