//! Store trait and the MySQL-backed implementation
//!
//! Every statement binds its inputs positionally; nothing is formatted
//! into SQL text.

use async_trait::async_trait;
use sqlx::MySqlPool;

use super::DbError;
use crate::models::{Location, LocationHours, Service, Testimonial};

/// `Products.product_type` value that marks a service
pub const SERVICE_PRODUCT_TYPE: i32 = 1;

const SERVICES_SQL: &str = r#"
    SELECT p.product_name AS name,
           p.price * 1e0 AS price,
           p.variablePrice AS variable_price,
           p.consultation_required AS consultation,
           c.category_name AS category
    FROM Products AS p
    JOIN ProductCategory AS c ON c.id = p.category
    WHERE p.product_type = ?
"#;

const LOCATION_SQL: &str =
    "SELECT id, location_name AS name, address, phone FROM Locations WHERE id = ?";

const LOCATIONS_SQL: &str = "SELECT id, location_name AS name, address, phone FROM Locations";

const LOCATION_HOURS_SQL: &str =
    "SELECT weekday, open_time, close_time FROM LocationHours WHERE location = ?";

const TESTIMONIALS_SQL: &str = r#"
    SELECT poster_name AS name,
           rating,
           CAST(posted AS DATETIME) AS posted,
           content
    FROM Testimonials
"#;

/// Read-only access to the shop database (testable)
#[async_trait]
pub trait Store: Send + Sync {
    /// All products flagged as services, with their category name
    async fn services(&self) -> Result<Vec<Service>, DbError>;

    /// A single location, `None` when no row has this id
    async fn location(&self, id: i64) -> Result<Option<Location>, DbError>;

    /// All locations in table order
    async fn locations(&self) -> Result<Vec<Location>, DbError>;

    /// Opening hours rows for one location (possibly empty)
    async fn location_hours(&self, location_id: i64) -> Result<Vec<LocationHours>, DbError>;

    /// All testimonials
    async fn testimonials(&self) -> Result<Vec<Testimonial>, DbError>;
}

/// Store backed by a MySQL pool
#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl Store for MySqlStore {
    async fn services(&self) -> Result<Vec<Service>, DbError> {
        let rows = sqlx::query_as::<_, Service>(SERVICES_SQL)
            .bind(SERVICE_PRODUCT_TYPE)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn location(&self, id: i64) -> Result<Option<Location>, DbError> {
        let row = sqlx::query_as::<_, Location>(LOCATION_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn locations(&self) -> Result<Vec<Location>, DbError> {
        let rows = sqlx::query_as::<_, Location>(LOCATIONS_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn location_hours(&self, location_id: i64) -> Result<Vec<LocationHours>, DbError> {
        let rows = sqlx::query_as::<_, LocationHours>(LOCATION_HOURS_SQL)
            .bind(location_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, DbError> {
        let rows = sqlx::query_as::<_, Testimonial>(TESTIMONIALS_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
