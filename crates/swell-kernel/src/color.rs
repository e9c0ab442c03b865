use std::fmt;

/// Error returned by [`Rgb::from_hex`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError {
    pub input: String,
    pub message: &'static str,
}

impl ColorParseError {
    fn new(input: &str, message: &'static str) -> Self {
        Self { input: input.to_string(), message }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}: {}", self.input, self.message)
    }
}

impl std::error::Error for ColorParseError {}

/// Straight (non-premultiplied) RGB color with channels nominally in `[0, 1]`.
///
/// Channels are not clamped on construction; the kernel passes them through
/// and the display clamps.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Parses `#rrggbb` or `#rgb`. The leading `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.is_ascii() {
            return Err(ColorParseError::new(s, "non-ascii characters"));
        }

        let nibble = |c: u8| -> Result<u8, ColorParseError> {
            (c as char)
                .to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| ColorParseError::new(s, "expected hex digits"))
        };

        let bytes = digits.as_bytes();
        match bytes.len() {
            6 => {
                let mut ch = [0u8; 3];
                for (i, pair) in bytes.chunks_exact(2).enumerate() {
                    ch[i] = (nibble(pair[0])? << 4) | nibble(pair[1])?;
                }
                Ok(Self::from_u8(ch[0], ch[1], ch[2]))
            }
            3 => {
                let mut ch = [0u8; 3];
                for (i, &c) in bytes.iter().enumerate() {
                    let n = nibble(c)?;
                    ch[i] = (n << 4) | n;
                }
                Ok(Self::from_u8(ch[0], ch[1], ch[2]))
            }
            _ => Err(ColorParseError::new(s, "expected 3 or 6 hex digits")),
        }
    }

    /// Formats as lowercase `#rrggbb`, clamping each channel to `[0, 1]`.
    pub fn to_hex(self) -> String {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", q(self.r), q(self.g), q(self.b))
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub fn scaled(self, k: f32) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digits() {
        assert_eq!(Rgb::from_hex("#ff0000").unwrap(), Rgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn parses_three_digits() {
        let c = Rgb::from_hex("#444").unwrap();
        assert_eq!(c, Rgb::from_u8(0x44, 0x44, 0x44));
    }

    #[test]
    fn hash_is_optional() {
        assert_eq!(Rgb::from_hex("00ff00").unwrap(), Rgb::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn uppercase_digits_accepted() {
        assert_eq!(Rgb::from_hex("#FFFFFF").unwrap(), Rgb::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn only_one_hash_is_stripped() {
        assert!(Rgb::from_hex("##ff0000").is_err());
        assert!(Rgb::from_hex("###f00").is_err());
        assert_eq!(Rgb::from_hex("  #f00 ").unwrap(), Rgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn rejects_bad_length() {
        assert!(Rgb::from_hex("#ff00").is_err());
    }

    #[test]
    fn rejects_non_hex() {
        let err = Rgb::from_hex("#gg0000").unwrap_err();
        assert_eq!(err.message, "expected hex digits");
    }

    #[test]
    fn formats_back_to_hex() {
        let c: Rgb = "#1a2b3c".parse().unwrap();
        assert_eq!(c.to_hex(), "#1a2b3c");
    }

    #[test]
    fn to_hex_clamps_out_of_range() {
        assert_eq!(Rgb::new(2.0, -1.0, 0.5).to_hex(), "#ff0080");
    }
}
