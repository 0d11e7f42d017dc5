use super::{database, state};

use axum::{
    Json,
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
#[allow(unused_imports)]
use tracing::{debug, error, info};

pub mod animals;
pub mod owners;

/// Animal types the clinic accepts, matched case-insensitively.
pub const VALID_TYPES: [&str; 5] = ["perro", "gato", "conejo", "hámster", "hamster"];

#[derive(Serialize)]
pub struct OwnerResource {
    pub id: i32,
    pub name: String,
    pub surname: String,
}

impl From<&database::owners::Model> for OwnerResource {
    fn from(owner: &database::owners::Model) -> Self {
        Self {
            id: owner.id,
            name: owner.name.clone(),
            surname: owner.surname.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct AnimalResource {
    pub id: i32,
    pub nombre: String,
    pub tipo: String,
    pub peso: f64,
    pub enfermedad: Option<String>,
    pub comentarios: Option<String>,
    pub owner_id: i32,
}

impl From<&database::animals::Model> for AnimalResource {
    fn from(animal: &database::animals::Model) -> Self {
        Self {
            id: animal.id,
            nombre: animal.nombre.clone(),
            tipo: animal.tipo.clone(),
            peso: animal.peso,
            enfermedad: animal.enfermedad.clone(),
            comentarios: animal.comentarios.clone(),
            owner_id: animal.owner_id,
        }
    }
}

/* Top-level resources and collections ship under "data", records
 * embedded in a mensaje response are bare objects */

#[derive(Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

#[derive(Serialize)]
pub struct CreatedResponse<T> {
    pub mensaje: String,
    pub datos: T,
}

#[derive(Serialize)]
pub struct UpdatedResponse<T> {
    pub mensaje: String,
    pub datos_actualizados: T,
}

#[derive(Deserialize)]
pub struct OwnerEdit {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct AnimalExtra {
    pub enfermedad: Option<String>,
    pub comentarios: Option<String>,
}

#[derive(Deserialize)]
pub struct AnimalEdit {
    pub nombre: Option<String>,
    pub tipo: Option<String>,
    pub peso: Option<Value>,
    #[serde(default, deserialize_with = "present_or_omitted")]
    pub enfermedad: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_or_omitted")]
    pub comentarios: Option<Option<String>>,
}

/* Outer None: key omitted from the body. Some(None): key sent as
 * explicit null. Some(Some(_)): key sent with a value, empty string
 * included. Clearing a field and leaving it alone are different
 * requests. */
fn present_or_omitted<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub(crate) fn supplied(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

pub(crate) fn valid_type(tipo: &str) -> bool {
    VALID_TYPES.contains(&tipo.to_lowercase().as_str())
}

/// Accepts what the API counts as a decimal: a JSON number, or a string
/// holding an integer or decimal literal. Anything else is rejected.
pub(crate) fn as_decimal(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|peso| peso.is_finite()),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|peso| peso.is_finite()),
        _ => None,
    }
}

#[derive(Serialize)]
pub(crate) struct MensajeResponse {
    pub mensaje: String,
}

pub(crate) fn clinica_api_err(status: StatusCode, mensaje: &str) -> Response<Body> {
    (
        status,
        Json(MensajeResponse {
            mensaje: mensaje.to_string(),
        }),
    )
        .into_response()
}

pub(crate) fn clinica_api_response<T: Serialize>(status: StatusCode, body: T) -> Response<Body> {
    (status, Json(body)).into_response()
}
