// Structured color values for the canvas surface. The theme system hands us
// colors in the textual form `rgb(r, g, b)`; we parse that once into channels
// and format `rgba(r, g, b, a)` strings at draw time instead of splicing text.

use palette::Srgb;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected a color of the form rgb(r, g, b), got `{0}`")]
    Shape(String),
    #[error("channel `{0}` is not an integer in 0..=255")]
    Channel(String),
}

/// Parse a CSS `rgb(r, g, b)` string into channels.
///
/// Only the comma-separated integer form is accepted; that is the only shape
/// the theme stylesheet produces. Anything else is an error so the caller can
/// fall back to a default accent instead of emitting a malformed draw command.
pub fn parse_rgb(css: &str) -> Result<Srgb<u8>, ColorParseError> {
    let s = css.trim();
    let inner = s
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ColorParseError::Shape(css.to_string()))?;

    let channels: Vec<&str> = inner.split(',').map(str::trim).collect();
    if channels.len() != 3 {
        return Err(ColorParseError::Shape(css.to_string()));
    }

    let parse = |c: &str| {
        c.parse::<u8>()
            .map_err(|_| ColorParseError::Channel(c.to_string()))
    };
    Ok(Srgb::new(
        parse(channels[0])?,
        parse(channels[1])?,
        parse(channels[2])?,
    ))
}

/// An accent color with an injected alpha channel, ready for the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Srgb<u8>,
    pub alpha: f32,
}

impl Rgba {
    pub fn new(rgb: Srgb<u8>, alpha: f32) -> Self {
        Self { rgb, alpha }
    }

    /// Format as a CSS `rgba(r, g, b, a)` string.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.rgb.red, self.rgb.green, self.rgb.blue, self.alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_rgb() {
        assert_eq!(parse_rgb("rgb(59, 130, 246)"), Ok(Srgb::new(59, 130, 246)));
    }

    #[test]
    fn parses_with_uneven_whitespace() {
        assert_eq!(parse_rgb("  rgb(0,255, 7)  "), Ok(Srgb::new(0, 255, 7)));
    }

    #[test]
    fn rejects_hex_and_rgba_shapes() {
        assert!(matches!(parse_rgb("#3b82f6"), Err(ColorParseError::Shape(_))));
        assert!(matches!(
            parse_rgb("rgba(1, 2, 3, 0.5)"),
            Err(ColorParseError::Shape(_))
        ));
        assert!(matches!(
            parse_rgb("rgb(1, 2)"),
            Err(ColorParseError::Shape(_))
        ));
        assert!(matches!(
            parse_rgb("rgb(1, 2, 3, 4)"),
            Err(ColorParseError::Shape(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_channels() {
        assert!(matches!(
            parse_rgb("rgb(300, 0, 0)"),
            Err(ColorParseError::Channel(_))
        ));
        assert!(matches!(
            parse_rgb("rgb(12%, 0, 0)"),
            Err(ColorParseError::Channel(_))
        ));
    }

    #[test]
    fn formats_rgba_like_the_stylesheet_expects() {
        let c = Rgba::new(Srgb::new(59, 130, 246), 0.4);
        assert_eq!(c.to_css(), "rgba(59, 130, 246, 0.4)");
    }
}
