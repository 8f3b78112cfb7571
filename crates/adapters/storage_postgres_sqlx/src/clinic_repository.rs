//! `PostgreSQL` implementation of [`ClinicRepository`].

use std::future::Future;

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};

use buscadog_app::ports::ClinicRepository;
use buscadog_domain::clinic::{Clinic, ClusterBucket};
use buscadog_domain::error::BuscaDogError;
use buscadog_domain::geo::BoundingBox;

use crate::error::StorageError;

/// Wrapper for converting bucket rows into domain [`ClusterBucket`].
struct BucketRow(ClusterBucket);

impl<'r> FromRow<'r, PgRow> for BucketRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self(ClusterBucket {
            lat: row.try_get("lat")?,
            lng: row.try_get("lng")?,
            count: row.try_get("count")?,
        }))
    }
}

/// Wrapper for converting detail rows into domain [`Clinic`].
struct ClinicRow(Clinic);

impl<'r> FromRow<'r, PgRow> for ClinicRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Clinic {
            id: row.try_get("id")?,
            name: row.try_get("nombre")?,
            lat: row.try_get("latitud")?,
            lon: row.try_get("longitud")?,
            municipality: row.try_get("municipio")?,
            postal_code: row.try_get("codigo_postal")?,
        }))
    }
}

// The stored functions return (lat, lon, total) and (id, nombre, lat, lon,
// municipio, codigo_postal); the aliases rename them to the wire contract
// and the casts pin the decode types regardless of the declared column
// types on the database side.
const SELECT_CLUSTERS: &str = "\
SELECT lat::float8 AS lat, lon::float8 AS lng, total::bigint AS count \
FROM public.veterinarias_agrupadas_bbox($1::float8, $2::float8, $3::float8, $4::float8, $5::int, $6::int)";

const SELECT_CLINICS: &str = "\
SELECT id::bigint AS id, nombre, lat::float8 AS latitud, lon::float8 AS longitud, municipio, codigo_postal \
FROM public.veterinarias_detalle_bbox($1::float8, $2::float8, $3::float8, $4::float8, $5::int)";

/// `PostgreSQL`-backed clinic repository.
///
/// All spatial work happens inside the stored functions; this type only
/// binds the validated parameters and decodes the rows.
pub struct PgClinicRepository {
    pool: PgPool,
}

impl PgClinicRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ClinicRepository for PgClinicRepository {
    fn clusters_in_bbox(
        &self,
        bbox: BoundingBox,
        precision: i64,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<ClusterBucket>, BuscaDogError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<BucketRow> = sqlx::query_as(SELECT_CLUSTERS)
                .bind(bbox.south)
                .bind(bbox.west)
                .bind(bbox.north)
                .bind(bbox.east)
                .bind(precision)
                .bind(limit)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }

    fn find_in_bbox(
        &self,
        bbox: BoundingBox,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<Clinic>, BuscaDogError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<ClinicRow> = sqlx::query_as(SELECT_CLINICS)
                .bind(bbox.south)
                .bind(bbox.west)
                .bind(bbox.north)
                .bind(bbox.east)
                .bind(limit)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }
}
