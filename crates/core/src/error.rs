//! Error types for the icon generator core.

use thiserror::Error;

/// Errors produced while building or exporting an icon.
#[derive(Debug, Error)]
pub enum IconError {
    /// A raster size was zero, or the raster size list was empty.
    #[error("invalid dimensions: raster sizes must be non-zero")]
    InvalidDimensions,

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A theme could not be constructed from the given colors.
    #[error("invalid theme: {0}")]
    InvalidTheme(String),

    /// No built-in theme has the requested name.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// A layout parameter was out of its valid range.
    #[error("invalid layout parameter: {0}")]
    InvalidParams(String),

    /// A raster size was above the supported maximum.
    #[error("raster size {size} exceeds the maximum of {max} pixels")]
    RasterTooLarge { size: u32, max: u32 },

    /// The serialized scene could not be parsed.
    #[error("svg error: {0}")]
    Svg(String),

    /// The rasterizer could not produce a bitmap.
    #[error("render error: {0}")]
    Render(String),

    /// A file could not be written or an image could not be encoded.
    #[error("I/O error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let msg = IconError::InvalidDimensions.to_string();
        assert!(
            msg.contains("non-zero"),
            "expected message mentioning non-zero sizes, got: {msg}"
        );
    }

    #[test]
    fn invalid_color_includes_message() {
        let err = IconError::InvalidColor("bad hex".into());
        let msg = format!("{err}");
        assert!(msg.contains("bad hex"), "missing message in: {msg}");
    }

    #[test]
    fn invalid_theme_includes_message() {
        let err = IconError::InvalidTheme("needs 6 colors".into());
        let msg = format!("{err}");
        assert!(msg.contains("needs 6 colors"), "missing message in: {msg}");
    }

    #[test]
    fn unknown_theme_includes_name() {
        let err = IconError::UnknownTheme("plaid".into());
        let msg = format!("{err}");
        assert!(msg.contains("plaid"), "missing theme name in: {msg}");
    }

    #[test]
    fn raster_too_large_names_size_and_limit() {
        let msg = IconError::RasterTooLarge {
            size: 100000,
            max: 4096,
        }
        .to_string();
        assert!(msg.contains("100000"), "missing size in: {msg}");
        assert!(msg.contains("4096"), "missing limit in: {msg}");
        assert!(!msg.contains("non-zero"), "misleading message: {msg}");
    }

    #[test]
    fn render_error_includes_message() {
        let err = IconError::Render("pixmap allocation failed".into());
        assert!(err.to_string().contains("pixmap allocation failed"));
    }

    #[test]
    fn icon_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IconError>();
    }

    #[test]
    fn icon_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<IconError>();
    }
}
