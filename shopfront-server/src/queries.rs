//! Query functions - store reads composed into response payloads
//!
//! An empty result is not an error: it yields a message without `data`.

use serde::Serialize;

use crate::db::{DbError, Store};
use crate::models::{ListMode, Location, LocationDetails, Service, Testimonial};

/// Response envelope: a human-readable message and optional data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}

/// Locations listing payload, shaped by [`ListMode`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LocationList {
    Basic(Vec<Location>),
    Full(Vec<LocationDetails>),
}

pub async fn list_services(store: &dyn Store) -> Result<ApiResponse<Vec<Service>>, DbError> {
    let services = store.services().await?;

    if services.is_empty() {
        return Ok(ApiResponse::message(
            "There are no services currently in the database.",
        ));
    }

    Ok(ApiResponse::with_data(
        "Successfully retrieved all services.",
        services,
    ))
}

/// Fetch one location and attach its hours.
///
/// `requested` is the id as the client wrote it, echoed in the message.
/// A hours-query failure is returned as-is, independent of the location query.
pub async fn get_location(
    store: &dyn Store,
    id: i64,
    requested: &str,
) -> Result<ApiResponse<LocationDetails>, DbError> {
    let Some(location) = store.location(id).await? else {
        return Ok(location_not_found());
    };

    let hours = store.location_hours(location.id).await?;

    Ok(ApiResponse::with_data(
        format!(
            "Successfully retrieved location details for id #{}.",
            requested
        ),
        LocationDetails::new(location, hours),
    ))
}

/// Response for an id that matches no location
pub fn location_not_found() -> ApiResponse<LocationDetails> {
    ApiResponse::message("No location could be found with the provided id.")
}

/// List all locations; in full mode each one gets its hours.
///
/// Hours are fetched one location at a time, in listing order.
pub async fn list_locations(
    store: &dyn Store,
    mode: ListMode,
) -> Result<ApiResponse<LocationList>, DbError> {
    let locations = store.locations().await?;

    if locations.is_empty() {
        return Ok(ApiResponse::message(
            "No locations currently exist within the database.",
        ));
    }

    match mode {
        ListMode::Basic => Ok(ApiResponse::with_data(
            "Successfully retrieved basic data for all locations.",
            LocationList::Basic(locations),
        )),
        ListMode::Full => {
            let mut details = Vec::with_capacity(locations.len());
            for location in locations {
                let hours = store.location_hours(location.id).await?;
                details.push(LocationDetails::new(location, hours));
            }
            tracing::debug!(count = details.len(), "attached hours to locations");

            Ok(ApiResponse::with_data(
                "Successfully retrieved full data for all locations.",
                LocationList::Full(details),
            ))
        }
    }
}

pub async fn list_testimonials(
    store: &dyn Store,
) -> Result<ApiResponse<Vec<Testimonial>>, DbError> {
    let testimonials = store.testimonials().await?;

    if testimonials.is_empty() {
        return Ok(ApiResponse::message(
            "There are currently no testimonials in the system.",
        ));
    }

    Ok(ApiResponse::with_data(
        "Successfully retrieved all testimonials.",
        testimonials,
    ))
}
