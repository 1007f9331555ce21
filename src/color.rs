use std::collections::{BTreeMap, BTreeSet};

use palette::{Hsl, IntoColor, Srgb};

/// 8-bit sRGB colour, independent of any UI toolkit.
pub type Rgb = Srgb<u8>;

const RED: Rgb = Srgb::new(220, 40, 40);
const GREEN: Rgb = Srgb::new(40, 170, 60);
const GRAY: Rgb = Srgb::new(128, 128, 128);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Srgb::new(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Fixed colour for conventional binary diagnosis labels.
fn conventional_color(class: &str) -> Option<Rgb> {
    let lower = class.to_ascii_lowercase();
    match lower.as_str() {
        "malignant" | "positive" => Some(RED),
        "benign" | "negative" => Some(GREEN),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Color mapping: class label → Rgb
// ---------------------------------------------------------------------------

/// Maps class labels to distinct colours.
#[derive(Debug, Clone, Default)]
pub struct ClassColors {
    mapping: BTreeMap<String, Rgb>,
}

impl ClassColors {
    /// Conventional labels get red/green; the rest share evenly spaced hues
    /// in sorted label order.
    pub fn new(classes: &BTreeSet<String>) -> Self {
        let mut mapping = BTreeMap::new();
        let mut rest = Vec::new();
        for class in classes {
            match conventional_color(class) {
                Some(c) => {
                    mapping.insert(class.clone(), c);
                }
                None => rest.push(class),
            }
        }
        let palette = generate_palette(rest.len());
        mapping.extend(rest.into_iter().cloned().zip(palette));

        ClassColors { mapping }
    }

    /// Look up the colour for a class label.
    pub fn color_for(&self, class: &str) -> Rgb {
        self.mapping.get(class).copied().unwrap_or(GRAY)
    }

    /// Return the legend entries (label → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Rgb)> {
        self.mapping.iter().map(|(k, c)| (k.clone(), *c)).collect()
    }
}
