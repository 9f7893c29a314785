//! Fixed chart palette shared by both presets.
//!
//! Hue scales run 10 (lightest) to 100 (darkest). Derived accessors pick
//! steps out of these scales based on background luminance; the scales
//! themselves never vary per theme.

use serde::Serialize;

/// One hue sampled at ten lightness steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HueScale {
    pub s10: &'static str,
    pub s20: &'static str,
    pub s30: &'static str,
    pub s40: &'static str,
    pub s50: &'static str,
    pub s60: &'static str,
    pub s70: &'static str,
    pub s80: &'static str,
    pub s90: &'static str,
    pub s100: &'static str,
}

impl HueScale {
    /// Steps from lightest to darkest.
    pub fn ascending(&self) -> [&'static str; 10] {
        [
            self.s10, self.s20, self.s30, self.s40, self.s50, self.s60, self.s70, self.s80,
            self.s90, self.s100,
        ]
    }

    /// Steps from darkest to lightest.
    pub fn descending(&self) -> [&'static str; 10] {
        let mut steps = self.ascending();
        steps.reverse();
        steps
    }
}

/// The full set of chart hue scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartScales {
    pub blue: HueScale,
    pub red: HueScale,
    pub green: HueScale,
    pub blue_green: HueScale,
    pub orange: HueScale,
    pub purple: HueScale,
    pub gray: HueScale,
}

pub static CHART: ChartScales = ChartScales {
    blue: HueScale {
        s10: "#e4f0fb",
        s20: "#c2e0f7",
        s30: "#9bcdf1",
        s40: "#6fb6ea",
        s50: "#459ce2",
        s60: "#2b7fd4",
        s70: "#1d64b8",
        s80: "#144b94",
        s90: "#0d366e",
        s100: "#08244c",
    },
    red: HueScale {
        s10: "#fdeaea",
        s20: "#fac9c9",
        s30: "#f5a3a3",
        s40: "#ee7a7a",
        s50: "#e45353",
        s60: "#d43434",
        s70: "#b52525",
        s80: "#8f1a1a",
        s90: "#691212",
        s100: "#460b0b",
    },
    green: HueScale {
        s10: "#e7f7ec",
        s20: "#c4ecd1",
        s30: "#99ddb1",
        s40: "#6cca8f",
        s50: "#43b26c",
        s60: "#2f9655",
        s70: "#237a44",
        s80: "#195e34",
        s90: "#114425",
        s100: "#0a2c18",
    },
    blue_green: HueScale {
        s10: "#e2f5f4",
        s20: "#bce8e6",
        s30: "#8fd7d4",
        s40: "#61c2be",
        s50: "#3aa8a4",
        s60: "#2a8c89",
        s70: "#1f716f",
        s80: "#165755",
        s90: "#0e3e3d",
        s100: "#082827",
    },
    orange: HueScale {
        s10: "#fff2e2",
        s20: "#ffddb6",
        s30: "#ffc585",
        s40: "#fca953",
        s50: "#f28b27",
        s60: "#d97211",
        s70: "#b35a0b",
        s80: "#8c4507",
        s90: "#663105",
        s100: "#421f03",
    },
    purple: HueScale {
        s10: "#f1ecfb",
        s20: "#ddd0f5",
        s30: "#c3aeee",
        s40: "#a689e4",
        s50: "#8964d6",
        s60: "#7046c0",
        s70: "#5a34a0",
        s80: "#45267e",
        s90: "#311a5c",
        s100: "#1f0f3c",
    },
    gray: HueScale {
        s10: "#fafafa",
        s20: "#f0f2f6",
        s30: "#e6eaf1",
        s40: "#d5dae5",
        s50: "#bfc5d3",
        s60: "#a3a8b8",
        s70: "#808495",
        s80: "#555867",
        s90: "#31333f",
        s100: "#0e1117",
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::is_color;

    #[test]
    fn every_palette_entry_is_a_legal_color() {
        let scales = [
            &CHART.blue,
            &CHART.red,
            &CHART.green,
            &CHART.blue_green,
            &CHART.orange,
            &CHART.purple,
            &CHART.gray,
        ];
        for scale in scales {
            for step in scale.ascending() {
                assert!(is_color(step), "illegal palette entry: {step}");
            }
        }
    }

    #[test]
    fn descending_reverses_ascending() {
        let asc = CHART.blue.ascending();
        let desc = CHART.blue.descending();
        assert_eq!(asc[0], desc[9]);
        assert_eq!(asc[9], desc[0]);
    }
}
