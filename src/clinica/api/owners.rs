use super::{
    CreatedResponse, DataResponse, MensajeResponse, OwnerEdit, OwnerResource, UpdatedResponse,
    clinica_api_err, clinica_api_response,
    database::{
        animals,
        entities::{Animals, OwnerModel, Owners},
    },
    state::AppState,
    supplied,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set, TransactionTrait,
};
#[allow(unused_imports)]
use tracing::{debug, error, info};

pub async fn get_all_owners(State(state): State<AppState>) -> impl IntoResponse {
    let owners = match Owners::find().all(&state.db).await {
        Ok(owners) => owners,
        Err(_) => {
            return clinica_api_err(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch owners");
        }
    };

    // An empty clinic is still a 200, unlike the animal listing
    clinica_api_response(
        StatusCode::OK,
        DataResponse {
            data: owners.iter().map(OwnerResource::from).collect::<Vec<_>>(),
        },
    )
}

pub async fn get_owner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let owner = match Owners::find_by_id(id).one(&state.db).await {
        Ok(owner) => owner,
        Err(_) => {
            return clinica_api_err(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch owner");
        }
    };

    let owner = match owner {
        Some(owner) => owner,
        None => {
            return clinica_api_err(
                StatusCode::NOT_FOUND,
                &format!("No se ha encontrado ningún dueño con el identificador {id}"),
            );
        }
    };

    clinica_api_response(
        StatusCode::OK,
        DataResponse {
            data: OwnerResource::from(&owner),
        },
    )
}

pub async fn post_owner(
    State(state): State<AppState>,
    Path((nombre, apellido)): Path<(String, String)>,
) -> impl IntoResponse {
    if nombre.is_empty() || apellido.is_empty() {
        return clinica_api_err(
            StatusCode::BAD_REQUEST,
            "Nombre o apellido vacío, rellene los 2 campos",
        );
    }

    let owner = OwnerModel {
        name: Set(nombre),
        surname: Set(apellido),
        ..Default::default()
    };

    match owner.insert(&state.db).await {
        Ok(owner) => clinica_api_response(
            StatusCode::CREATED,
            CreatedResponse {
                mensaje: "Dueño añadido correctamente".to_string(),
                datos: OwnerResource::from(&owner),
            },
        ),
        Err(e) => clinica_api_err(
            StatusCode::INTERNAL_SERVER_ERROR,
            &format!("Failed to insert owner: {e}"),
        ),
    }
}

pub async fn put_owner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(edit): Json<OwnerEdit>,
) -> impl IntoResponse {
    let owner = match Owners::find_by_id(id).one(&state.db).await {
        Ok(owner) => owner,
        Err(_) => {
            return clinica_api_err(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch owner");
        }
    };

    let owner = match owner {
        Some(owner) => owner,
        None => {
            return clinica_api_err(
                StatusCode::NOT_FOUND,
                &format!("No se ha encontrado ningún Owner con el identificador {id}"),
            );
        }
    };

    let mut active_owner: OwnerModel = owner.into();

    if let Some(nombre) = supplied(&edit.nombre) {
        active_owner.name = Set(nombre.to_string());
    }

    if let Some(apellido) = supplied(&edit.apellido) {
        active_owner.surname = Set(apellido.to_string());
    }

    match active_owner.update(&state.db).await {
        Ok(owner) => {
            info!("Updated owner: {id}");
            clinica_api_response(
                StatusCode::OK,
                UpdatedResponse {
                    mensaje: format!("Owner con el identificador {id} actualizado correctamente"),
                    datos_actualizados: OwnerResource::from(&owner),
                },
            )
        }
        Err(_) => {
            error!("Failed to update owner: {id}");
            clinica_api_err(StatusCode::INTERNAL_SERVER_ERROR, "Failed to update owner")
        }
    }
}

pub async fn delete_owner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let owner = match Owners::find_by_id(id).one(&state.db).await {
        Ok(owner) => owner,
        Err(_) => {
            return clinica_api_err(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch owner");
        }
    };

    if owner.is_none() {
        return clinica_api_err(
            StatusCode::NOT_FOUND,
            &format!("No se ha encontrado ningún dueño con el identificador {id}"),
        );
    }

    /* The owner and its animals go together or not at all, both
     * deletes run in one transaction */
    let cascade = state
        .db
        .transaction::<_, (), DbErr>(move |txn| {
            Box::pin(async move {
                Animals::delete_many()
                    .filter(animals::Column::OwnerId.eq(id))
                    .exec(txn)
                    .await?;

                Owners::delete_by_id(id).exec(txn).await?;

                Ok(())
            })
        })
        .await;

    match cascade {
        Ok(()) => clinica_api_response(
            StatusCode::OK,
            MensajeResponse {
                mensaje: format!("Se ha eliminado correctamente el Owner con identificador {id}"),
            },
        ),
        Err(_) => clinica_api_err(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete owner"),
    }
}
