//! Row types read from the shop database and their JSON shapes

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product with `product_type = 1`, joined with its category name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Service {
    pub name: String,
    pub price: f64,
    #[serde(rename = "variablePrice")]
    pub variable_price: bool,
    pub consultation: bool,
    pub category: String,
}

/// A physical location with contact details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// One open/close window for a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct LocationHours {
    pub weekday: String,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
}

/// Customer testimonial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Testimonial {
    pub name: String,
    pub rating: i32,
    pub posted: NaiveDateTime,
    pub content: Option<String>,
}

/// Location fields with its hours attached.
///
/// `hours` is omitted from the JSON entirely when the location has no
/// hours rows, never serialized as `null` or `[]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationDetails {
    #[serde(flatten)]
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<Vec<LocationHours>>,
}

impl LocationDetails {
    pub fn new(location: Location, hours: Vec<LocationHours>) -> Self {
        Self {
            location,
            hours: (!hours.is_empty()).then_some(hours),
        }
    }
}

/// Detail level for the locations listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMode {
    #[default]
    Basic,
    Full,
}

impl ListMode {
    /// Only the exact value `full` selects full mode; anything else is basic.
    pub fn from_param(mode: Option<&str>) -> Self {
        match mode {
            Some("full") => Self::Full,
            _ => Self::Basic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn location() -> Location {
        Location {
            id: 3,
            name: "Downtown".into(),
            address: Some("1 Main St".into()),
            phone: None,
        }
    }

    #[test]
    fn service_uses_camel_case_keys() {
        let service = Service {
            name: "Cut".into(),
            price: 25.0,
            variable_price: true,
            consultation: false,
            category: "Hair".into(),
        };

        let value = serde_json::to_value(&service).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Cut",
                "price": 25.0,
                "variablePrice": true,
                "consultation": false,
                "category": "Hair"
            })
        );
    }

    #[test]
    fn details_without_hours_omit_the_key() {
        let details = LocationDetails::new(location(), vec![]);
        let value = serde_json::to_value(&details).unwrap();

        assert_eq!(value["id"], 3);
        assert_eq!(value["name"], "Downtown");
        assert!(value.get("hours").is_none());
    }

    #[test]
    fn details_flatten_location_and_hours() {
        let hours = vec![LocationHours {
            weekday: "Monday".into(),
            open_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            close_time: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
        }];
        let value = serde_json::to_value(LocationDetails::new(location(), hours)).unwrap();

        assert_eq!(value["address"], "1 Main St");
        assert_eq!(
            value["hours"],
            json!([{ "weekday": "Monday", "open_time": "09:00:00", "close_time": "17:30:00" }])
        );
    }

    #[test]
    fn list_mode_defaults_to_basic() {
        assert_eq!(ListMode::from_param(None), ListMode::Basic);
        assert_eq!(ListMode::from_param(Some("basic")), ListMode::Basic);
        assert_eq!(ListMode::from_param(Some("FULL")), ListMode::Basic);
        assert_eq!(ListMode::from_param(Some("")), ListMode::Basic);
        assert_eq!(ListMode::from_param(Some("full")), ListMode::Full);
    }
}
