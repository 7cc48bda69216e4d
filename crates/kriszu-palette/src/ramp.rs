//! The 11-step accent ramp: five darker shades, the base, five lighter tints.
//!
//! Unlike the graded [`Gradient`](crate::Gradient), this ramp is darkest
//! first and is built by plain channel blending, so every entry is a whole
//! 8-bit color.

use kriszu_color::Color;

/// Number of colors in a ramp.
pub const RAMP_LEN: usize = 11;

/// Blend levels on each side of the base, outermost first.
const LEVELS: [f64; 5] = [0.5, 0.4, 0.3, 0.2, 0.1];

/// Darken by 0.5 … 0.1, the base, then lighten by 0.1 … 0.5.
///
/// Position 5 (0-based) is always `base` unchanged.
#[must_use]
pub fn ramp_around_base(base: Color) -> [Color; RAMP_LEN] {
    let mut ramp = [base; RAMP_LEN];
    for (i, level) in LEVELS.iter().enumerate() {
        ramp[i] = base.darken(*level);
        ramp[RAMP_LEN - 1 - i] = base.lighten(*level);
    }
    ramp
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        Color::parse_hex(s).unwrap()
    }

    #[test]
    fn red_ramp() {
        let ramp = ramp_around_base(hex("#F53F3F"));
        let expected = [
            "#852a2a", "#9b2e2e", "#b23232", "#c83737", "#df3b3b", "#f53f3f",
            "#f65252", "#f76565", "#f87979", "#f98c8c", "#fa9f9f",
        ];
        for (i, (color, want)) in ramp.iter().zip(expected).enumerate() {
            if i == 3 {
                // 63 * 0.8 + 20.5 * 0.2 lands on 54.5 give or take an ulp.
                let (r, g, _) = color.to_rgb8();
                assert_eq!(r, 0xc8);
                assert!(g == 0x36 || g == 0x37, "{color}");
            } else {
                assert_eq!(color.to_hex(), want, "position {i}");
            }
        }
    }

    #[test]
    fn centre_is_base() {
        for s in ["#165DFF", "#00B42A", "#000000", "#ffffff"] {
            assert_eq!(ramp_around_base(hex(s))[5], hex(s));
        }
    }

    #[test]
    fn white_ramp_darkens_toward_anchor() {
        let ramp = ramp_around_base(Color::WHITE);
        assert_eq!(ramp[0].to_hex(), "#8a8a8a");
        // Lightening white stays white.
        for c in &ramp[6..] {
            assert_eq!(*c, Color::WHITE);
        }
    }

    #[test]
    fn values_rise_across_the_ramp() {
        let ramp = ramp_around_base(hex("#722ED1"));
        for pair in ramp.windows(2) {
            assert!(pair[0].value() <= pair[1].value() + 1e-9, "{pair:?}");
        }
    }
}
