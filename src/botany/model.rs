use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Measure – a numeric cell after coercion
// ---------------------------------------------------------------------------

/// A coerced numeric value. Whole numbers are narrowed to `Integer`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Integer(i64),
    Decimal(f64),
}

impl Measure {
    /// Narrow a parsed float: no fractional part → `Integer`.
    pub fn from_f64(value: f64) -> Self {
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            Measure::Integer(value as i64)
        } else {
            Measure::Decimal(value)
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Measure::Integer(i) => *i as f64,
            Measure::Decimal(v) => *v,
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Integer(i) => write!(f, "{i}"),
            Measure::Decimal(v) => write!(f, "{v}"),
        }
    }
}

// ---------------------------------------------------------------------------
// PlantRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single plant (one data row of the source CSV).
///
/// Text fields are empty when the source cell is blank or missing; numeric
/// bounds are `None` when blank or unparseable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantRecord {
    pub common_name: String,
    pub scientific_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub height_min: Option<Measure>,
    pub height_max: Option<Measure>,
    pub width_min: Option<Measure>,
    pub width_max: Option<Measure>,
    pub companions: String,
    pub usage: String,
    pub ph_min: Option<Measure>,
    pub ph_max: Option<Measure>,
    pub humidity: String,
    pub exposure: String,
    pub foliage: String,
    pub habit: String,
    pub roots: String,
    pub ecology: String,
    pub landscape_uses: String,
    pub fertilizer: String,
    pub bloom_period: String,
    pub flower_color: String,
    pub fruiting: String,
    pub toxic: String,
    pub notes: String,
}

impl PlantRecord {
    /// Soil pH bounds as floats.
    pub fn ph_range(&self) -> (Option<f64>, Option<f64>) {
        as_f64_pair(self.ph_min, self.ph_max)
    }

    /// Height bounds in centimetres.
    pub fn height_range(&self) -> (Option<f64>, Option<f64>) {
        as_f64_pair(self.height_min, self.height_max)
    }

    /// Width bounds in centimetres.
    pub fn width_range(&self) -> (Option<f64>, Option<f64>) {
        as_f64_pair(self.width_min, self.width_max)
    }

    /// Name shown in listings: common name, falling back to the scientific one.
    pub fn display_name(&self) -> &str {
        if self.common_name.is_empty() {
            &self.scientific_name
        } else {
            &self.common_name
        }
    }
}

fn as_f64_pair(min: Option<Measure>, max: Option<Measure>) -> (Option<f64>, Option<f64>) {
    (min.map(|m| m.as_f64()), max.map(|m| m.as_f64()))
}

/// Format an optional `(min, max)` pair for display: `6-7.5`, `40`, or `–`.
pub fn format_range(min: Option<Measure>, max: Option<Measure>) -> String {
    match (min, max) {
        (None, None) => "–".to_string(),
        (Some(a), Some(b)) if a == b => a.to_string(),
        (Some(a), Some(b)) => format!("{a}-{b}"),
        (Some(a), None) => format!("{a}-?"),
        (None, Some(b)) => format!("?-{b}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_narrow_to_integer() {
        assert_eq!(Measure::from_f64(6.0), Measure::Integer(6));
        assert_eq!(Measure::from_f64(7.5), Measure::Decimal(7.5));
        assert_eq!(Measure::from_f64(-0.0), Measure::Integer(0));
    }

    #[test]
    fn out_of_range_whole_numbers_stay_decimal() {
        let two_pow_63 = 9_223_372_036_854_775_808.0_f64;
        assert_eq!(Measure::from_f64(two_pow_63), Measure::Decimal(two_pow_63));
        assert_eq!(Measure::from_f64(-two_pow_63), Measure::Integer(i64::MIN));
        assert_eq!(Measure::from_f64(1e19), Measure::Decimal(1e19));
    }

    #[test]
    fn measure_display_and_conversion() {
        assert_eq!(Measure::Integer(40).to_string(), "40");
        assert_eq!(Measure::Decimal(6.5).to_string(), "6.5");
        assert_eq!(Measure::Integer(3).as_f64(), 3.0);
    }

    #[test]
    fn range_formatting() {
        let six = Some(Measure::Integer(6));
        let seven_half = Some(Measure::Decimal(7.5));
        assert_eq!(format_range(six, seven_half), "6-7.5");
        assert_eq!(format_range(six, six), "6");
        assert_eq!(format_range(None, None), "–");
        assert_eq!(format_range(None, six), "?-6");
    }

    #[test]
    fn record_serializes_with_normalized_field_names() {
        let record = PlantRecord {
            common_name: "Lavande vraie".into(),
            kind: "Vivace".into(),
            ph_min: Some(Measure::Integer(6)),
            ph_max: Some(Measure::Decimal(8.5)),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "Vivace");
        assert_eq!(json["ph_min"], 6);
        assert_eq!(json["ph_max"], 8.5);
        assert!(json["height_min"].is_null());
    }

    #[test]
    fn display_name_falls_back_to_scientific() {
        let record = PlantRecord {
            scientific_name: "Salvia officinalis".into(),
            ..Default::default()
        };
        assert_eq!(record.display_name(), "Salvia officinalis");
    }
}
