//! Color ramps for field rendering
//!
//! Each ramp maps a normalized value in `[0, 1]` to a color by
//! piecewise-linear interpolation over a small anchor table.

use plotters::style::RGBColor;

/// Color ramp used by the heatmap, contour and surface renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMap {
    /// Perceptually uniform dark-violet to yellow ramp (default).
    #[default]
    Viridis,

    /// Dark-blue through magenta to yellow.
    Plasma,

    /// Diverging blue-white-red; midpoint maps to white.
    BlueRed,

    /// Black to white.
    Grayscale,
}

impl ColorMap {
    /// Sample the ramp at `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f64) -> RGBColor {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.5 };
        match self {
            ColorMap::Viridis => lerp_anchors(&VIRIDIS, t),
            ColorMap::Plasma => lerp_anchors(&PLASMA, t),
            ColorMap::BlueRed => blue_red(t),
            ColorMap::Grayscale => {
                let v = (255.0 * t) as u8;
                RGBColor(v, v, v)
            }
        }
    }
}

// Anchor values at t = 0, 0.25, 0.5, 0.75, 1.
const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

const PLASMA: [(u8, u8, u8); 5] = [
    (13, 8, 135),
    (126, 3, 168),
    (204, 71, 120),
    (248, 149, 64),
    (240, 249, 33),
];

fn lerp_anchors(anchors: &[(u8, u8, u8)], t: f64) -> RGBColor {
    let segments = anchors.len() - 1;
    let scaled = t * segments as f64;
    let i = (scaled.floor() as usize).min(segments - 1);
    let frac = scaled - i as f64;

    let (r0, g0, b0) = anchors[i];
    let (r1, g1, b1) = anchors[i + 1];
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;

    RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// Diverging ramp: t = 0 is blue, t = 0.5 is white, t = 1 is red.
fn blue_red(t: f64) -> RGBColor {
    let r = (255.0 * t) as u8;
    let b = (255.0 * (1.0 - t)) as u8;
    let g = (255.0 * (1.0 - 2.0 * (t - 0.5).abs())).clamp(0.0, 255.0) as u8;
    RGBColor(r, g, b)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viridis_endpoints() {
        assert_eq!(ColorMap::Viridis.sample(0.0), RGBColor(68, 1, 84));
        assert_eq!(ColorMap::Viridis.sample(1.0), RGBColor(253, 231, 37));
    }

    #[test]
    fn test_sample_clamps_out_of_range() {
        assert_eq!(
            ColorMap::Grayscale.sample(-3.0),
            ColorMap::Grayscale.sample(0.0)
        );
        assert_eq!(
            ColorMap::Grayscale.sample(42.0),
            ColorMap::Grayscale.sample(1.0)
        );
    }

    #[test]
    fn test_blue_red_midpoint_is_white() {
        let mid = ColorMap::BlueRed.sample(0.5);
        assert_eq!(mid, RGBColor(127, 255, 127));
    }

    #[test]
    fn test_blue_red_extremes() {
        assert_eq!(ColorMap::BlueRed.sample(0.0), RGBColor(0, 0, 255));
        assert_eq!(ColorMap::BlueRed.sample(1.0), RGBColor(255, 0, 0));
    }

    #[test]
    fn test_non_finite_input_maps_to_midpoint() {
        assert_eq!(
            ColorMap::Viridis.sample(f64::NAN),
            ColorMap::Viridis.sample(0.5)
        );
    }

    #[test]
    fn test_grayscale_monotone() {
        let lo = ColorMap::Grayscale.sample(0.2);
        let hi = ColorMap::Grayscale.sample(0.8);
        assert!(lo.0 < hi.0);
    }
}
