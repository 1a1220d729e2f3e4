//! Employee CRUD endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Employee, EmployeeRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{EmployeeId, JsonBody};
use crate::http::server::AppState;
use crate::models::EmployeeDraft;

/// Query parameters for the list endpoint
#[derive(Deserialize)]
pub struct ListParams {
    pub department: Option<String>,
}

/// Response for a successful create
#[derive(Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: i64,
}

/// Response for a successful update or delete
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /api/employees - list employees, optionally by department
///
/// An empty `department=` value means no filter, same as omitting it.
async fn list_employees(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let repo = EmployeeRepo::new(&state.pool);
    let employees = match params.department.as_deref() {
        Some(department) if !department.is_empty() => {
            repo.list_by_department(department).await?
        }
        _ => repo.list_all().await?,
    };

    Ok(Json(employees))
}

/// GET /api/employees/{id} - fetch one employee
async fn get_employee(
    State(state): State<Arc<AppState>>,
    EmployeeId(id): EmployeeId,
) -> Result<Json<Employee>, ApiError> {
    let employee = EmployeeRepo::new(&state.pool)
        .get(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(employee))
}

/// POST /api/employees - create an employee
async fn create_employee(
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<EmployeeDraft>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let employee = draft.validate()?;
    let id = EmployeeRepo::new(&state.pool).insert(&employee).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Employee created successfully",
            id,
        }),
    ))
}

/// PUT /api/employees/{id} - overwrite an employee
async fn update_employee(
    State(state): State<Arc<AppState>>,
    EmployeeId(id): EmployeeId,
    JsonBody(draft): JsonBody<EmployeeDraft>,
) -> Result<Json<MessageResponse>, ApiError> {
    let employee = draft.validate()?;
    let affected = EmployeeRepo::new(&state.pool).update(id, &employee).await?;
    if affected == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(Json(MessageResponse {
        message: "Employee updated successfully",
    }))
}

/// DELETE /api/employees/{id} - remove an employee
async fn delete_employee(
    State(state): State<Arc<AppState>>,
    EmployeeId(id): EmployeeId,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = EmployeeRepo::new(&state.pool).delete(id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(Json(MessageResponse {
        message: "Employee deleted successfully",
    }))
}

/// Employee routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route(
            "/api/employees/{id}",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
}
