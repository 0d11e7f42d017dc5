use super::{
    AnimalEdit, AnimalExtra, AnimalResource, CreatedResponse, DataResponse, MensajeResponse,
    UpdatedResponse, as_decimal, clinica_api_err, clinica_api_response,
    database::entities::{AnimalModel, Animals, Owners},
    state::AppState,
    supplied, valid_type,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde_json::Value;
#[allow(unused_imports)]
use tracing::{debug, error, info};

pub async fn get_all_animals(State(state): State<AppState>) -> impl IntoResponse {
    let animals = match Animals::find().all(&state.db).await {
        Ok(animals) => animals,
        Err(_) => {
            return clinica_api_err(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch animals");
        }
    };

    // No animals is a 404 here, the owner listing answers 200 instead
    if animals.is_empty() {
        return clinica_api_err(StatusCode::NOT_FOUND, "No hay ningún animal registrado");
    }

    clinica_api_response(
        StatusCode::OK,
        DataResponse {
            data: animals.iter().map(AnimalResource::from).collect::<Vec<_>>(),
        },
    )
}

pub async fn get_animal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let animal = match Animals::find_by_id(id).one(&state.db).await {
        Ok(animal) => animal,
        Err(_) => {
            return clinica_api_err(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch animal");
        }
    };

    let animal = match animal {
        Some(animal) => animal,
        None => {
            return clinica_api_err(
                StatusCode::NOT_FOUND,
                &format!("No se ha encontrado ningún animal con el identificador {id}"),
            );
        }
    };

    clinica_api_response(
        StatusCode::OK,
        DataResponse {
            data: AnimalResource::from(&animal),
        },
    )
}

/* POST /animal/{owner_id}/{tipo}/{nombre}/{peso}
 *
 * Checks run in a fixed order and the first failure answers alone:
 * owner exists, tipo non-empty, nombre non-empty, peso numeric, tipo
 * in the whitelist. An unresolved owner is a 403, every other
 * rejection is a 400. */

pub async fn post_animal(
    State(state): State<AppState>,
    Path((owner_id, tipo, nombre, peso)): Path<(i32, String, String, String)>,
    extra: Option<Json<AnimalExtra>>,
) -> impl IntoResponse {
    let owner = match Owners::find_by_id(owner_id).one(&state.db).await {
        Ok(owner) => owner,
        Err(_) => {
            return clinica_api_err(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch owner");
        }
    };

    if owner.is_none() {
        return clinica_api_err(
            StatusCode::FORBIDDEN,
            &format!(
                "No se ha podido registrar el animal, no se ha encontrado ningún dueño con el identificador {owner_id}"
            ),
        );
    }

    if tipo.is_empty() {
        return clinica_api_err(StatusCode::BAD_REQUEST, "El campo tipo no puede estar vacío");
    }

    if nombre.is_empty() {
        return clinica_api_err(
            StatusCode::BAD_REQUEST,
            "El campo nombre no puede estar vacío",
        );
    }

    let peso = match as_decimal(&Value::String(peso)) {
        Some(peso) => peso,
        None => {
            return clinica_api_err(StatusCode::BAD_REQUEST, "El peso debe ser un número decimal");
        }
    };

    if !valid_type(&tipo) {
        return clinica_api_err(
            StatusCode::BAD_REQUEST,
            "El tipo de animal seleccionado no está disponible",
        );
    }

    let extra = extra.map(|Json(extra)| extra).unwrap_or_default();

    let animal = AnimalModel {
        nombre: Set(nombre),
        tipo: Set(tipo),
        peso: Set(peso),
        enfermedad: Set(extra.enfermedad),
        comentarios: Set(extra.comentarios),
        owner_id: Set(owner_id),
        ..Default::default()
    };

    match animal.insert(&state.db).await {
        Ok(animal) => clinica_api_response(
            StatusCode::CREATED,
            CreatedResponse {
                mensaje: format!(
                    "Animal añadido correctamente, el identificador del dueño es {owner_id}"
                ),
                datos: AnimalResource::from(&animal),
            },
        ),
        Err(e) => clinica_api_err(
            StatusCode::INTERNAL_SERVER_ERROR,
            &format!("Failed to insert animal: {e}"),
        ),
    }
}

pub async fn put_animal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(edit): Json<AnimalEdit>,
) -> impl IntoResponse {
    let animal = match Animals::find_by_id(id).one(&state.db).await {
        Ok(animal) => animal,
        Err(_) => {
            return clinica_api_err(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch animal");
        }
    };

    let animal = match animal {
        Some(animal) => animal,
        None => {
            return clinica_api_err(
                StatusCode::NOT_FOUND,
                &format!("No se ha encontrado ningún animal con el identificador {id}"),
            );
        }
    };

    // Validated only when the body carries them
    if let Some(tipo) = supplied(&edit.tipo) {
        if !valid_type(tipo) {
            return clinica_api_err(
                StatusCode::BAD_REQUEST,
                "El tipo de animal seleccionado no está disponible",
            );
        }
    }

    let peso = match &edit.peso {
        Some(Value::String(text)) if text.is_empty() => None,
        Some(value) => match as_decimal(value) {
            Some(peso) => Some(peso),
            None => {
                return clinica_api_err(
                    StatusCode::BAD_REQUEST,
                    "El peso debe ser un número decimal",
                );
            }
        },
        None => None,
    };

    let mut active_animal: AnimalModel = animal.into();

    if let Some(nombre) = supplied(&edit.nombre) {
        active_animal.nombre = Set(nombre.to_string());
    }

    if let Some(tipo) = supplied(&edit.tipo) {
        active_animal.tipo = Set(tipo.to_string());
    }

    if let Some(peso) = peso {
        active_animal.peso = Set(peso);
    }

    /* enfermedad and comentarios overwrite whenever the key is in the
     * body, explicit null and empty string both clear */
    if let Some(enfermedad) = edit.enfermedad {
        active_animal.enfermedad = Set(enfermedad);
    }

    if let Some(comentarios) = edit.comentarios {
        active_animal.comentarios = Set(comentarios);
    }

    match active_animal.update(&state.db).await {
        Ok(animal) => {
            info!("Updated animal: {id}");
            clinica_api_response(
                StatusCode::OK,
                UpdatedResponse {
                    mensaje: format!("Animal con el identificador {id} actualizado correctamente"),
                    datos_actualizados: AnimalResource::from(&animal),
                },
            )
        }
        Err(_) => {
            error!("Failed to update animal: {id}");
            clinica_api_err(StatusCode::INTERNAL_SERVER_ERROR, "Failed to update animal")
        }
    }
}

pub async fn delete_animal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let animal = match Animals::find_by_id(id).one(&state.db).await {
        Ok(animal) => animal,
        Err(_) => {
            return clinica_api_err(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch animal");
        }
    };

    if animal.is_none() {
        return clinica_api_err(
            StatusCode::NOT_FOUND,
            &format!("No se ha encontrado ningún animal con el identificador {id}"),
        );
    }

    match Animals::delete_by_id(id).exec(&state.db).await {
        Ok(_) => clinica_api_response(
            StatusCode::OK,
            MensajeResponse {
                mensaje: format!("Se ha eliminado correctamente el animal con identificador {id}"),
            },
        ),
        Err(_) => clinica_api_err(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete animal"),
    }
}
