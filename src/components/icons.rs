//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight, LuCloudDownload as Pull,
        LuDownload as Download, LuFile as File, LuFiles as Files, LuHash as Hash,
        LuHouse as Home, LuInfo as Info, LuSearch as Search, LuTag as Tag, LuTriangleAlert as Alert,
        LuUser as User, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight,
        BsCloudArrowDown as Pull, BsDownload as Download, BsExclamationTriangle as Alert,
        BsFileEarmark as File, BsFiles as Files, BsHash as Hash, BsHouseFill as Home,
        BsInfoCircle as Info, BsPerson as User, BsSearch as Search, BsTag as Tag,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(FILE, File);
themed_icon!(FILES, Files);
themed_icon!(SEARCH, Search);
themed_icon!(TAG, Tag);
themed_icon!(INFO, Info);
themed_icon!(HASH, Hash);
themed_icon!(USER, User);
themed_icon!(DOWNLOAD, Download);
themed_icon!(PULL, Pull);
themed_icon!(ALERT, Alert);
themed_icon!(CLOSE, Close);
