//! Site-wide settings (single source of truth for names, contact and
//! layout thresholds).

/// Document title used by the shell and as the suffix of page titles.
pub const SITE_TITLE: &str = "Lyndon's Virtual Studio";

/// Owner name as shown in headings.
pub const OWNER_NAME: &str = "Lyndon Domini Catan";

/// First name, rendered bold in the navbar brand.
pub const OWNER_FIRST_NAME: &str = "Lyndon";

/// Last name, rendered after the bold first name in the navbar brand.
pub const OWNER_LAST_NAME: &str = "Catan";

/// Professional role shown on the home and about pages.
pub const OWNER_ROLE: &str = "UI/UX Designer";

/// Contact address for `mailto:` links and the about page.
pub const CONTACT_EMAIL: &str = "lyndoncatan75@gmail.com";

/// Viewports at or below this width (px) are treated as mobile: no custom
/// cursor, no hero tilt.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Vertical scroll offset (px) after which the navbar condenses.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Maximum hero tilt in degrees at the container edge (half of this per
/// side, since pointer offsets are normalised to -0.5..=0.5).
pub const HERO_TILT_DEGREES: f64 = 3.0;

/// `mailto:` href for the contact address.
pub fn mailto() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}

/// True when a viewport of `width` px gets the desktop-only effects.
pub fn is_desktop_width(width: f64) -> bool {
    width > MOBILE_BREAKPOINT_PX
}

/// Install the browser console logger.
///
/// Debug builds log everything down to `Debug`; release builds keep `Info`
/// and above. Calling it twice is harmless (the second init is ignored).
pub fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    _ = console_log::init_with_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_uses_contact_email() {
        assert_eq!(mailto(), "mailto:lyndoncatan75@gmail.com");
    }

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(!is_desktop_width(320.0));
        assert!(!is_desktop_width(768.0));
        assert!(is_desktop_width(769.0));
        assert!(is_desktop_width(1440.0));
    }
}
