//! API client for the AutoLoc backend
//!
//! Thin, observable pass-through: every request goes to the single fixed
//! origin with a JSON content type, every request/response pair is logged,
//! and failures propagate unchanged. No retries, no caching. List
//! accessors normalize each entity once, at this boundary.

use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, info};

use autoloc_core::{
    ApiConfig, ApiError, CarDto, CarPayload, CarRecord, ReservationDto, ReservationRecord,
    ReservationStats, Result, UserDto, UserRecord,
};

/// HTTP client bound to the fixed backend origin.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn settle(&self, method: &str, path: &str, response: &Response) -> Result<()> {
        if response.ok() {
            info!("<- {} {} {}", response.status(), method, path);
            Ok(())
        } else {
            error!("<- {} {} {}", response.status(), method, path);
            Err(ApiError::status(response.status(), path))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        info!("-> GET {path}");
        let response = Request::get(&self.config.url(path))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| {
                error!("x GET {path}: {e}");
                ApiError::network(e.to_string())
            })?;
        self.settle("GET", path, &response)?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        info!("-> POST {path}");
        let response = Request::post(&self.config.url(path))
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                error!("x POST {path}: {e}");
                ApiError::network(e.to_string())
            })?;
        self.settle("POST", path, &response)
    }

    async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        info!("-> PUT {path}");
        let response = Request::put(&self.config.url(path))
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                error!("x PUT {path}: {e}");
                ApiError::network(e.to_string())
            })?;
        self.settle("PUT", path, &response)
    }

    async fn put_empty(&self, path: &str) -> Result<()> {
        info!("-> PUT {path}");
        let response = Request::put(&self.config.url(path))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| {
                error!("x PUT {path}: {e}");
                ApiError::network(e.to_string())
            })?;
        self.settle("PUT", path, &response)
    }

    async fn delete_empty(&self, path: &str) -> Result<()> {
        info!("-> DELETE {path}");
        let response = Request::delete(&self.config.url(path))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| {
                error!("x DELETE {path}: {e}");
                ApiError::network(e.to_string())
            })?;
        self.settle("DELETE", path, &response)
    }

    /// List cars, normalized.
    pub async fn list_cars(&self) -> Result<Vec<CarRecord>> {
        let dtos: Vec<CarDto> = self.get_json("/voitures").await?;
        Ok(dtos.into_iter().map(CarRecord::from).collect())
    }

    /// Flip a car's availability server-side; callers reload to observe it.
    pub async fn toggle_car_availability(&self, id: i64) -> Result<()> {
        self.put_empty(&format!("/voitures/{id}/disponibilite"))
            .await
    }

    pub async fn create_car(&self, payload: &CarPayload) -> Result<()> {
        self.post_json("/voitures", payload).await
    }

    pub async fn update_car(&self, id: i64, payload: &CarPayload) -> Result<()> {
        self.put_json(&format!("/voitures/{id}"), payload)
            .await
    }

    pub async fn delete_car(&self, id: i64) -> Result<()> {
        self.delete_empty(&format!("/voitures/{id}")).await
    }

    /// List reservations, normalized.
    pub async fn list_reservations(&self) -> Result<Vec<ReservationRecord>> {
        let dtos: Vec<ReservationDto> = self.get_json("/reservations").await?;
        Ok(dtos.into_iter().map(ReservationRecord::from).collect())
    }

    /// Reservation counters; an independent read, never derived from the list.
    pub async fn reservation_stats(&self) -> Result<ReservationStats> {
        self.get_json("/reservations/stats").await
    }

    pub async fn validate_reservation(&self, id: i64) -> Result<()> {
        self.put_empty(&format!("/reservations/{id}/valider"))
            .await
    }

    pub async fn refuse_reservation(&self, id: i64) -> Result<()> {
        self.put_empty(&format!("/reservations/{id}/refuser"))
            .await
    }

    /// List users, normalized.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>> {
        let dtos: Vec<UserDto> = self.get_json("/utilisateurs").await?;
        Ok(dtos.into_iter().map(UserRecord::from).collect())
    }

    pub async fn toggle_user_active(&self, id: i64) -> Result<()> {
        self.put_empty(&format!("/utilisateurs/{id}/toggle-actif"))
            .await
    }

    pub async fn delete_user(&self, id: i64) -> Result<()> {
        self.delete_empty(&format!("/utilisateurs/{id}"))
            .await
    }
}
