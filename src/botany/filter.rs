use crate::error::{BotanyError, Result};

use super::model::PlantRecord;

// ---------------------------------------------------------------------------
// pH filter: a target value or an inclusive interval
// ---------------------------------------------------------------------------

/// Query interval for soil pH. A single target is the interval `[v, v]`;
/// either side of a range may be open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhFilter {
    min: Option<f64>,
    max: Option<f64>,
}

impl PhFilter {
    /// Match plants whose pH interval contains `value`.
    pub fn exact(value: f64) -> Result<Self> {
        check_finite(value)?;
        Ok(Self {
            min: Some(value),
            max: Some(value),
        })
    }

    /// Match plants whose pH interval overlaps `[min, max]`.
    pub fn between(min: Option<f64>, max: Option<f64>) -> Result<Self> {
        if let Some(v) = min {
            check_finite(v)?;
        }
        if let Some(v) = max {
            check_finite(v)?;
        }
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(BotanyError::invalid_argument(format!(
                    "pH range minimum {lo} is greater than maximum {hi}"
                )));
            }
        }
        Ok(Self { min, max })
    }

    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        (self.min, self.max)
    }

    /// Interval overlap test.
    ///
    /// A plant without any pH bound never matches. Otherwise it is rejected
    /// only when a defined bound lies entirely outside the query interval.
    pub fn matches(&self, plant: &PlantRecord) -> bool {
        let (plant_min, plant_max) = plant.ph_range();
        if plant_min.is_none() && plant_max.is_none() {
            return false;
        }
        if let (Some(query_min), Some(plant_max)) = (self.min, plant_max) {
            if plant_max < query_min {
                return false;
            }
        }
        if let (Some(query_max), Some(plant_min)) = (self.max, plant_min) {
            if plant_min > query_max {
                return false;
            }
        }
        true
    }
}

fn check_finite(value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(BotanyError::invalid_argument(format!(
            "pH bound must be a finite number, got {value}"
        )))
    }
}

// ---------------------------------------------------------------------------
// PlantQuery: the conjunctive attribute search
// ---------------------------------------------------------------------------

/// Parameters of [`crate::botany::BotanyDatabase::search`]. Omitted filters
/// are no-ops; present ones are combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlantQuery {
    pub ph: Option<PhFilter>,
    /// Case-insensitive substring of the humidity text.
    pub humidity: Option<String>,
    /// Exposure / sun requirement. Accepted but not applied yet.
    pub sun: Option<String>,
}

impl PlantQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ph(mut self, ph: PhFilter) -> Self {
        self.ph = Some(ph);
        self
    }

    pub fn with_humidity(mut self, humidity: impl Into<String>) -> Self {
        self.humidity = Some(humidity.into());
        self
    }

    pub fn with_sun(mut self, sun: impl Into<String>) -> Self {
        self.sun = Some(sun.into());
        self
    }

    /// Compile the query once so the per-record check does not re-allocate.
    pub(crate) fn predicate(&self) -> QueryPredicate<'_> {
        QueryPredicate {
            ph: self.ph.as_ref(),
            humidity: self.humidity.as_deref().map(|h| h.trim().to_lowercase()),
        }
    }

    /// Whether a single plant passes every filter of this query.
    pub fn matches(&self, plant: &PlantRecord) -> bool {
        self.predicate().matches(plant)
    }
}

/// A [`PlantQuery`] with its humidity needle lowercased up front.
pub(crate) struct QueryPredicate<'a> {
    ph: Option<&'a PhFilter>,
    humidity: Option<String>,
}

impl QueryPredicate<'_> {
    pub(crate) fn matches(&self, plant: &PlantRecord) -> bool {
        if let Some(ph) = self.ph {
            if !ph.matches(plant) {
                return false;
            }
        }
        if let Some(needle) = &self.humidity {
            if !plant.humidity.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::botany::model::Measure;

    fn plant(ph_min: Option<Measure>, ph_max: Option<Measure>, humidity: &str) -> PlantRecord {
        PlantRecord {
            ph_min,
            ph_max,
            humidity: humidity.to_string(),
            ..Default::default()
        }
    }

    fn six_to_seven_half() -> PlantRecord {
        plant(Some(Measure::Integer(6)), Some(Measure::Decimal(7.5)), "Sol frais à humide")
    }

    #[test]
    fn ph_range_overlap() {
        let p = six_to_seven_half();
        assert!(PhFilter::between(Some(5.0), Some(6.0)).unwrap().matches(&p));
        assert!(PhFilter::between(Some(7.5), Some(9.0)).unwrap().matches(&p));
        assert!(!PhFilter::between(Some(4.0), Some(5.5)).unwrap().matches(&p));
    }

    #[test]
    fn ph_target_value() {
        let p = six_to_seven_half();
        assert!(PhFilter::exact(7.0).unwrap().matches(&p));
        assert!(!PhFilter::exact(8.0).unwrap().matches(&p));
    }

    #[test]
    fn open_sided_ranges() {
        let p = six_to_seven_half();
        assert!(PhFilter::between(None, Some(6.0)).unwrap().matches(&p));
        assert!(!PhFilter::between(Some(8.0), None).unwrap().matches(&p));
        assert!(PhFilter::between(None, None).unwrap().matches(&p));
    }

    #[test]
    fn plants_without_ph_never_match() {
        let p = plant(None, None, "");
        assert!(!PhFilter::exact(7.0).unwrap().matches(&p));
        assert!(!PhFilter::between(None, None).unwrap().matches(&p));
    }

    #[test]
    fn half_known_ph_uses_the_known_bound() {
        let p = plant(None, Some(Measure::Integer(6)), "");
        assert!(PhFilter::exact(5.0).unwrap().matches(&p));
        assert!(!PhFilter::exact(6.5).unwrap().matches(&p));
    }

    #[test]
    fn invalid_ph_shapes_fail_fast() {
        assert!(matches!(
            PhFilter::between(Some(8.0), Some(6.0)),
            Err(BotanyError::InvalidArgument { .. })
        ));
        assert!(PhFilter::exact(f64::NAN).is_err());
        assert!(PhFilter::between(Some(f64::INFINITY), None).is_err());
    }

    #[test]
    fn humidity_is_case_insensitive_substring() {
        let p = six_to_seven_half();
        assert!(PlantQuery::new().with_humidity("HUMIDE").matches(&p));
        assert!(PlantQuery::new().with_humidity("  frais ").matches(&p));
        assert!(!PlantQuery::new().with_humidity("sec").matches(&p));
        assert!(!PlantQuery::new().with_humidity("humide").matches(&plant(None, None, "")));
    }

    #[test]
    fn sun_is_accepted_without_effect() {
        let p = plant(None, None, "");
        assert!(PlantQuery::new().with_sun("Plein soleil").matches(&p));
    }

    #[test]
    fn filters_are_conjunctive() {
        let p = six_to_seven_half();
        let ph = PhFilter::exact(7.0).unwrap();
        assert!(PlantQuery::new().with_ph(ph).with_humidity("humide").matches(&p));
        assert!(!PlantQuery::new().with_ph(ph).with_humidity("sec").matches(&p));
    }
}
