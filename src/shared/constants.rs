// Shell-wide defaults. `ShellConfig` starts from these values.

/// Widths strictly below this many logical pixels are compact.
pub const DEFAULT_BREAKPOINT_PX: u32 = 768;

/// Where unauthenticated users and signed-out sessions are sent.
pub const LOGIN_PATH: &str = "/auth";

pub const DASHBOARD_PATH: &str = "/dashboard";
pub const PROFILE_SETTINGS_PATH: &str = "/dashboard/profile";

/// Width assumed while rendering on the server (no window to sample).
pub const SERVER_RENDER_WIDTH: u32 = 1024;

pub const DEFAULT_TOAST_DISMISS_MS: u32 = 4000;

pub const SIGN_OUT_SUCCESS_MESSAGE: &str = "Signed out successfully";
pub const SIGN_OUT_ERROR_MESSAGE: &str = "Error signing out";
