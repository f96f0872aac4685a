//! Domain types for near-Earth objects and their close approaches.

mod time;

pub use time::{cd_to_datetime, datetime_to_str, CAD_DATETIME_FORMAT, OUTPUT_DATETIME_FORMAT};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Primary designation of a near-Earth object (e.g. `433` or `2020 AB1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Designation(pub String);

impl Designation {
    /// Create a new designation
    pub fn new(designation: impl Into<String>) -> Self {
        Self(designation.into())
    }

    /// Get the designation as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Designation {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Designation {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A near-Earth object.
#[derive(Debug, Clone, PartialEq)]
pub struct NearEarthObject {
    /// Primary designation, unique across the data set
    pub designation: Designation,

    /// IAU name, if the object has one
    pub name: Option<String>,

    /// Diameter in kilometers, if known
    pub diameter: Option<f64>,

    /// Whether NASA flags the object as potentially hazardous
    pub hazardous: bool,
}

impl NearEarthObject {
    /// Create a NEO, normalizing an empty name and a non-finite diameter to
    /// "unknown".
    pub fn new(
        designation: impl Into<Designation>,
        name: Option<String>,
        diameter: Option<f64>,
        hazardous: bool,
    ) -> Self {
        Self {
            designation: designation.into(),
            name: name.filter(|n| !n.trim().is_empty()),
            diameter: diameter.filter(|d| d.is_finite()),
            hazardous,
        }
    }

    /// Designation followed by the name in parentheses when there is one.
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.to_string(),
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hazard = if self.hazardous { "is" } else { "is not" };
        match self.diameter {
            Some(diameter) => write!(
                f,
                "NEO {} has a diameter of {:.3} km and {} potentially hazardous.",
                self.fullname(),
                diameter,
                hazard
            ),
            None => write!(
                f,
                "NEO {} has an unknown diameter and {} potentially hazardous.",
                self.fullname(),
                hazard
            ),
        }
    }
}

/// A single close approach of a NEO to Earth.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproach {
    /// Designation of the approaching NEO
    pub designation: Designation,

    /// Time of closest approach, UTC
    pub time: NaiveDateTime,

    /// Nominal approach distance in astronomical units
    pub distance: f64,

    /// Velocity relative to Earth in km/s
    pub velocity: f64,

    /// The approaching NEO, linked by the database after loading
    pub neo: Option<Arc<NearEarthObject>>,
}

impl CloseApproach {
    /// Create an approach that is not yet linked to its NEO.
    pub fn new(
        designation: impl Into<Designation>,
        time: NaiveDateTime,
        distance: f64,
        velocity: f64,
    ) -> Self {
        Self {
            designation: designation.into(),
            time,
            distance,
            velocity,
            neo: None,
        }
    }

    /// Attach the approaching NEO.
    #[must_use]
    pub fn with_neo(mut self, neo: Arc<NearEarthObject>) -> Self {
        self.neo = Some(neo);
        self
    }

    /// Approach time formatted as `YYYY-MM-DD HH:MM`.
    pub fn time_str(&self) -> String {
        datetime_to_str(&self.time)
    }

    /// Full name of the NEO, falling back to the bare designation when the
    /// approach is not linked.
    pub fn neo_fullname(&self) -> String {
        self.neo
            .as_ref()
            .map_or_else(|| self.designation.to_string(), |neo| neo.fullname())
    }
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.time_str(),
            self.neo_fullname(),
            self.distance,
            self.velocity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn eros() -> NearEarthObject {
        NearEarthObject::new("433", Some("Eros".to_string()), Some(16.84), false)
    }

    #[test]
    fn test_new_neo_normalizes_unknowns() {
        let neo = NearEarthObject::new("2020 AB", Some("  ".to_string()), Some(f64::NAN), true);
        assert_eq!(neo.name, None);
        assert_eq!(neo.diameter, None);
        assert!(neo.hazardous);
    }

    #[test]
    fn test_fullname() {
        assert_eq!(eros().fullname(), "433 (Eros)");
        let unnamed = NearEarthObject::new("2020 AB", None, None, false);
        assert_eq!(unnamed.fullname(), "2020 AB");
    }

    #[test]
    fn test_neo_display() {
        assert_eq!(
            eros().to_string(),
            "NEO 433 (Eros) has a diameter of 16.840 km and is not potentially hazardous."
        );
        let unknown = NearEarthObject::new("2020 AB", None, None, true);
        assert_eq!(
            unknown.to_string(),
            "NEO 2020 AB has an unknown diameter and is potentially hazardous."
        );
    }

    #[test]
    fn test_approach_display_uses_linked_neo() {
        let time = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let approach = CloseApproach::new("433", time, 0.25, 5.1);
        assert_eq!(
            approach.to_string(),
            "On 2020-01-01 12:30, '433' approaches Earth at a distance of 0.25 au and a velocity of 5.10 km/s."
        );

        let linked = approach.with_neo(Arc::new(eros()));
        assert!(linked.to_string().contains("'433 (Eros)'"));
    }
}
