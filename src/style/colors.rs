//! Brand palette.

/// A named brand color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandColor {
    pub name: &'static str,
    pub hex: &'static str,
}

impl BrandColor {
    pub const fn new(name: &'static str, hex: &'static str) -> Self {
        Self { name, hex }
    }

    /// `--color-{name}`
    pub fn css_var(&self) -> String {
        format!("--color-{}", self.name)
    }

    /// `var(--color-{name})`, for use in inline styles.
    pub fn var(&self) -> String {
        format!("var({})", self.css_var())
    }

    /// Red, green and blue channels. `None` if `hex` is not `#rrggbb`.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let digits = self.hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }

    /// `rgba(...)` with the given alpha, clamped to `[0, 1]`.
    pub fn with_alpha(&self, alpha: f32) -> Option<String> {
        let (r, g, b) = self.rgb()?;
        Some(format!("rgba({r}, {g}, {b}, {})", alpha.clamp(0.0, 1.0)))
    }
}

pub const PRIMARY: BrandColor = BrandColor::new("primary", "#ff6b35");
pub const PRIMARY_DARK: BrandColor = BrandColor::new("primary-dark", "#e85a24");
pub const SECONDARY: BrandColor = BrandColor::new("secondary", "#1d3557");
pub const ACCENT: BrandColor = BrandColor::new("accent", "#2ec4b6");
pub const SURFACE: BrandColor = BrandColor::new("surface", "#fdfcfa");
pub const INK: BrandColor = BrandColor::new("ink", "#1f2933");
pub const MUTED: BrandColor = BrandColor::new("muted", "#6b7280");

pub const PALETTE: [BrandColor; 7] = [PRIMARY, PRIMARY_DARK, SECONDARY, ACCENT, SURFACE, INK, MUTED];

/// The palette as a `:root` block of CSS custom properties.
pub fn root_css() -> String {
    let mut css = String::from(":root{");
    for color in PALETTE {
        css.push_str(&format!("{}:{};", color.css_var(), color.hex));
    }
    css.push('}');
    css
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn palette_is_well_formed() {
        let names: HashSet<_> = PALETTE.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), PALETTE.len());
        for color in PALETTE {
            assert!(color.rgb().is_some(), "{} has a bad hex value", color.name);
        }
    }

    #[test]
    fn css_rendering() {
        assert_eq!(PRIMARY.css_var(), "--color-primary");
        assert_eq!(PRIMARY.var(), "var(--color-primary)");
        assert!(root_css().starts_with(":root{--color-primary:#ff6b35;"));
    }

    #[test]
    fn rgb_channels() {
        assert_eq!(PRIMARY.rgb(), Some((0xff, 0x6b, 0x35)));
        assert_eq!(BrandColor::new("bad", "ff6b35").rgb(), None);
        assert_eq!(BrandColor::new("short", "#fff").rgb(), None);
        assert_eq!(
            SECONDARY.with_alpha(2.0).as_deref(),
            Some("rgba(29, 53, 87, 1)")
        );
    }
}
