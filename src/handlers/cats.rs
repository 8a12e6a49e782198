use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::database::cats::{CatChanges, CatsRepository, NewCat};
use crate::database::models::Cat;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, serde::Deserialize)]
pub struct CreateCatRequest {
    pub name: String,
    pub age: i32,
    pub breed: String,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct UpdateCatRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub breed: Option<String>,
}

fn validate_create(req: &CreateCatRequest) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    if req.name.trim().is_empty() {
        errors.insert("name".to_string(), "must not be empty".to_string());
    }
    if req.breed.trim().is_empty() {
        errors.insert("breed".to_string(), "must not be empty".to_string());
    }
    if req.age < 0 {
        errors.insert("age".to_string(), "must not be negative".to_string());
    }
    errors
}

fn validate_update(req: &UpdateCatRequest) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    if matches!(&req.name, Some(name) if name.trim().is_empty()) {
        errors.insert("name".to_string(), "must not be empty".to_string());
    }
    if matches!(&req.breed, Some(breed) if breed.trim().is_empty()) {
        errors.insert("breed".to_string(), "must not be empty".to_string());
    }
    if matches!(req.age, Some(age) if age < 0) {
        errors.insert("age".to_string(), "must not be negative".to_string());
    }
    errors
}

/// POST /cats (public)
pub async fn create_cat(
    State(state): State<AppState>,
    Json(body): Json<CreateCatRequest>,
) -> Result<(StatusCode, Json<Cat>), ApiError> {
    let errors = validate_create(&body);
    if !errors.is_empty() {
        return Err(ApiError::validation_error("Invalid cat", errors));
    }

    let cat = CatsRepository::new(state.pool.clone())
        .create(NewCat {
            name: body.name,
            age: body.age,
            breed: body.breed,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(cat)))
}

/// GET /cats
pub async fn list_cats(State(state): State<AppState>) -> Result<Json<Vec<Cat>>, ApiError> {
    let cats = CatsRepository::new(state.pool.clone()).list().await?;
    Ok(Json(cats))
}

/// GET /cats/:id
pub async fn get_cat(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Cat>, ApiError> {
    let cat = CatsRepository::new(state.pool.clone())
        .find(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Cat not found"))?;
    Ok(Json(cat))
}

/// PATCH /cats/:id
pub async fn update_cat(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateCatRequest>,
) -> Result<Json<Cat>, ApiError> {
    let errors = validate_update(&body);
    if !errors.is_empty() {
        return Err(ApiError::validation_error("Invalid cat", errors));
    }

    let cat = CatsRepository::new(state.pool.clone())
        .update(
            id,
            CatChanges {
                name: body.name,
                age: body.age,
                breed: body.breed,
            },
        )
        .await?
        .ok_or_else(|| ApiError::not_found("Cat not found"))?;
    Ok(Json(cat))
}

/// DELETE /cats/:id
pub async fn delete_cat(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    CatsRepository::new(state.pool.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_name_breed_and_non_negative_age() {
        let req = CreateCatRequest {
            name: " ".to_string(),
            age: -1,
            breed: String::new(),
        };
        let errors = validate_create(&req);
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("age"));
        assert!(errors.contains_key("breed"));
    }

    #[test]
    fn valid_create_passes() {
        let req = CreateCatRequest {
            name: "Miso".to_string(),
            age: 3,
            breed: "Tabby".to_string(),
        };
        assert!(validate_create(&req).is_empty());
    }

    #[test]
    fn update_only_checks_provided_fields() {
        assert!(validate_update(&UpdateCatRequest::default()).is_empty());

        let req = UpdateCatRequest {
            name: Some(String::new()),
            age: Some(-2),
            breed: None,
        };
        let errors = validate_update(&req);
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("age"));
    }
}
