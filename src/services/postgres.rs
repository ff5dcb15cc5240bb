use std::time::Duration;

use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

use async_trait::async_trait;

use crate::config::DatabaseSettings;
use crate::core::distance::{validate_search_area, METERS_PER_MILE};
use crate::models::{Amenities, Club, ClubFilters, Difficulty, GeoPoint, PriceTier, Services};
use crate::services::store::{ClubStore, StoreError};

/// PostGIS-backed club store
///
/// The radius query runs in the database: `ST_DWithin` over the clubs'
/// geography column bounds the candidate set, `ST_Distance / 1609.34`
/// annotates each row with miles, and the hard filters are appended as
/// AND-combined predicates.
pub struct PostgresClubStore {
    pool: PgPool,
}

impl PostgresClubStore {
    /// Connect and run pending migrations
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    pub async fn from_settings(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            &settings.url,
            settings.max_connections.unwrap_or(10),
            settings.min_connections.unwrap_or(1),
        )
        .await
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }

    fn build_radius_query(
        center: GeoPoint,
        radius_miles: f64,
        filters: &ClubFilters,
    ) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(
            "SELECT id, club_name, address, city, state, zip_code, latitude, longitude, \
             price_tier, difficulty, number_of_holes, club_membership, \
             driving_range, putting_green, chipping_green, practice_bunker, restaurant, lodging_on_site, \
             motor_cart, pull_cart, golf_clubs_rental, club_fitting, golf_lessons, \
             technologies, updated_at, \
             ST_Distance(geom::geography, ST_SetSRID(ST_MakePoint(",
        );
        qb.push_bind(center.longitude);
        qb.push(", ");
        qb.push_bind(center.latitude);
        qb.push("), 4326)::geography) / ");
        qb.push(METERS_PER_MILE);
        qb.push(
            " AS distance_miles \
             FROM clubs \
             WHERE ST_DWithin(geom::geography, ST_SetSRID(ST_MakePoint(",
        );
        qb.push_bind(center.longitude);
        qb.push(", ");
        qb.push_bind(center.latitude);
        qb.push("), 4326)::geography, ");
        qb.push_bind(radius_miles * METERS_PER_MILE);
        qb.push(")");

        if let Some(tier) = filters.price_tier {
            qb.push(" AND price_tier = ");
            qb.push_bind(tier.as_str());
        }
        if let Some(difficulty) = filters.difficulty {
            qb.push(" AND difficulty = ");
            qb.push_bind(difficulty.as_str());
        }
        if let Some(holes) = &filters.number_of_holes {
            qb.push(" AND LOWER(number_of_holes) = LOWER(");
            qb.push_bind(holes.clone());
            qb.push(")");
        }
        if let Some(membership) = &filters.club_membership {
            qb.push(" AND LOWER(club_membership) = LOWER(");
            qb.push_bind(membership.clone());
            qb.push(")");
        }

        // Column names come from the canonical flag tables, never from input
        for (column, required) in filters.amenities.flags() {
            if required {
                qb.push(" AND ");
                qb.push(column);
                qb.push(" = TRUE");
            }
        }
        for (column, required) in filters.services.flags() {
            if required {
                qb.push(" AND ");
                qb.push(column);
                qb.push(" = TRUE");
            }
        }

        if !filters.technologies.is_empty() {
            let wanted: Vec<String> = filters
                .technologies
                .iter()
                .map(|t| t.to_ascii_lowercase())
                .collect();
            qb.push(" AND EXISTS (SELECT 1 FROM unnest(technologies) AS tech WHERE LOWER(tech) = ANY(");
            qb.push_bind(wanted);
            qb.push("))");
        }

        qb
    }

    fn row_to_candidate(row: &PgRow) -> Result<(Club, f64), sqlx::Error> {
        let id: uuid::Uuid = row.try_get("id")?;

        let price_tier = row
            .try_get::<Option<String>, _>("price_tier")?
            .and_then(|raw| match PriceTier::try_from(raw) {
                Ok(tier) => Some(tier),
                Err(e) => {
                    tracing::warn!("club {}: {}", id, e);
                    None
                }
            });
        let difficulty = row
            .try_get::<Option<String>, _>("difficulty")?
            .and_then(|raw| match Difficulty::try_from(raw) {
                Ok(difficulty) => Some(difficulty),
                Err(e) => {
                    tracing::warn!("club {}: {}", id, e);
                    None
                }
            });

        let club = Club {
            id,
            club_name: row.try_get("club_name")?,
            address: row.try_get("address")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            zip_code: row.try_get("zip_code")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            price_tier,
            difficulty,
            number_of_holes: row.try_get("number_of_holes")?,
            club_membership: row.try_get("club_membership")?,
            amenities: Amenities {
                driving_range: row.try_get("driving_range")?,
                putting_green: row.try_get("putting_green")?,
                chipping_green: row.try_get("chipping_green")?,
                practice_bunker: row.try_get("practice_bunker")?,
                restaurant: row.try_get("restaurant")?,
                lodging_on_site: row.try_get("lodging_on_site")?,
            },
            services: Services {
                motor_cart: row.try_get("motor_cart")?,
                pull_cart: row.try_get("pull_cart")?,
                golf_clubs_rental: row.try_get("golf_clubs_rental")?,
                club_fitting: row.try_get("club_fitting")?,
                golf_lessons: row.try_get("golf_lessons")?,
            },
            technologies: row
                .try_get::<Option<Vec<String>>, _>("technologies")?
                .unwrap_or_default(),
            updated_at: row.try_get("updated_at")?,
        };

        let distance_miles: f64 = row.try_get("distance_miles")?;

        Ok((club, distance_miles))
    }
}

#[async_trait]
impl ClubStore for PostgresClubStore {
    async fn find_within_radius(
        &self,
        center: GeoPoint,
        radius_miles: f64,
        filters: &ClubFilters,
    ) -> Result<Vec<(Club, f64)>, StoreError> {
        validate_search_area(center, radius_miles)?;

        let mut query = Self::build_radius_query(center, radius_miles, filters);
        let rows = query.build().fetch_all(&self.pool).await?;

        tracing::debug!(
            "radius query returned {} clubs within {} miles",
            rows.len(),
            radius_miles
        );

        let candidates = rows
            .iter()
            .map(Self::row_to_candidate)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(candidates)
    }
}
