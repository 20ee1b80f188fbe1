use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use mycelia_ai::PlantRecord;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: plant type → Color32
// ---------------------------------------------------------------------------

/// Maps each plant type ("Vivace", "Arbuste", …) to a distinct colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map from the distinct non-empty types of `plants`.
    pub fn from_plants(plants: &[PlantRecord]) -> Self {
        let kinds: BTreeSet<&str> = plants
            .iter()
            .map(|p| p.kind.as_str())
            .filter(|k| !k.is_empty())
            .collect();
        let palette = generate_palette(kinds.len());
        let mapping = kinds
            .into_iter()
            .zip(palette)
            .map(|(k, c)| (k.to_string(), c))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Colour for a plant type; unknown or empty types are grey.
    pub fn color_for(&self, kind: &str) -> Color32 {
        self.mapping
            .get(kind)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Legend entries (type → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping
            .iter()
            .map(|(k, c)| (k.clone(), *c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(4);
        assert_eq!(colors.len(), 4);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn one_colour_per_distinct_type() {
        let plant = |kind: &str| PlantRecord {
            kind: kind.to_string(),
            ..Default::default()
        };
        let map = ColorMap::from_plants(&[plant("Vivace"), plant("Arbuste"), plant("Vivace"), plant("")]);
        let legend = map.legend_entries();
        assert_eq!(legend.len(), 2);
        assert_eq!(legend[0].0, "Arbuste");
        assert_eq!(map.color_for(""), Color32::GRAY);
        assert_ne!(map.color_for("Vivace"), Color32::GRAY);
    }
}
