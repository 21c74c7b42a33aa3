// DOM hooks and presentation timings used by the web frontend.
//
// Kept free of web-sys so host tests can `include!` this file.

// Element ids expected in index.html
pub const SCENE_REGION_ID: &str = "scene-region";
pub const CATEGORY_STRIP_ID: &str = "nav-scroll";
pub const ITEM_STRIP_ID: &str = "submenu-scroll";
pub const SUBMENU_CONTAINER_ID: &str = "submenu-container";
pub const DESKTOP_MENU_ID: &str = "desktop-menu";
pub const SPLIT_DIVIDER_ID: &str = "split-divider";
pub const FLOATING_UI_ID: &str = "floating-ui";
pub const NOTICE_ID: &str = "notice";
pub const LOADING_ID: &str = "loading";
pub const STATUS_READOUT_ID: &str = "status-readout";

// Floating control buttons
pub const RESET_VIEW_BUTTON_ID: &str = "reset-view";
pub const SHOWCASE_VIEW_BUTTON_ID: &str = "showcase-view";
pub const SHARE_BUTTON_ID: &str = "share-view";
pub const HELP_BUTTON_ID: &str = "help-toggle";

// Data attributes used for event delegation
pub const DATA_CATEGORY: &str = "data-category";
pub const DATA_ITEM: &str = "data-item";

// CSS custom properties written on <body>
pub const SPLIT_CSS_VAR: &str = "--split-percent";
pub const CUBE_COLOR_CSS_VAR: &str = "--cube-color";

// Timings (ms)
pub const NOTICE_VISIBLE_MS: i32 = 2500;
pub const LOADING_FADE_DELAY_MS: i32 = 500; // pause at 100% before fading
pub const LOADING_FADE_MS: i32 = 800;

// Share payload
pub const SHARE_TITLE: &str = "3D Scene Viewer";
pub const SHARE_TEXT: &str = "Check out this interactive 3D scene";
