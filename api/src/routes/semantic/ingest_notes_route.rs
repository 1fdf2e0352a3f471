//! POST /semantic/ingest: embed notes and store them for semantic search.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use tracing::{info, instrument};
use vector_store::{CollectionSpec, Distance, Payload, PointKey, PointRecord};

use crate::{
    core::{app_state::AppState, http::message_response::MessageResponse},
    error_handler::{AppError, AppResult},
    middleware_layer::json_extractor::ValidatedJson,
    routes::semantic::ingest_notes_request::{IngestNotesRequest, NoteDocument},
};

/// Embeds every note's content in one batch, recreates the collection with
/// the embedding dimensionality (cosine), then upserts all notes at once.
///
/// The collection is replaced, not appended to. Recreate and upsert are not
/// atomic: if the upsert fails the collection is left empty.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/semantic/ingest \
///   -H 'content-type: application/json' \
///   -d '{"notes":[{"title":"Button","content":"Primary action button","tags":["ui"]}]}'
/// ```
#[instrument(
    name = "ingest_notes_route",
    skip(state, body),
    fields(collection = %body.collection_name, notes = body.notes.len())
)]
pub async fn ingest_notes_route(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<IngestNotesRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let texts: Vec<String> = body.notes.iter().map(|n| n.content.clone()).collect();
    let vectors = state.embeddings.embed_text_batch(&texts).await?;

    let Some(first) = vectors.first() else {
        return Err(AppError::BadRequest("No notes to ingest.".into()));
    };

    let spec = CollectionSpec {
        name: body.collection_name,
        vector_size: first.len() as u64,
        distance: Distance::Cosine,
    };

    let points: Vec<PointRecord> = body
        .notes
        .into_iter()
        .zip(vectors)
        .enumerate()
        .map(|(idx, (note, vector))| note_to_point(idx, note, vector))
        .collect();

    let written = {
        let _guard = state.locks.write(&spec.name).await;
        state.vector_store.recreate_collection(&spec).await?;
        state.vector_store.upsert_points(&spec.name, points).await?
    };

    info!(written, dim = spec.vector_size, "notes ingested");
    Ok((
        StatusCode::ACCEPTED,
        Json(MessageResponse::new(format!(
            "Ingested {written} notes into collection '{}'.",
            spec.name
        ))),
    ))
}

/// The note's own id wins; otherwise its zero-based position in the request.
fn note_to_point(idx: usize, note: NoteDocument, vector: Vec<f32>) -> PointRecord {
    let id = note.id.unwrap_or(PointKey::Num(idx as u64));

    let mut payload = Payload::new();
    payload.insert("title".into(), json!(note.title));
    payload.insert("content".into(), json!(note.content));
    payload.insert("type".into(), json!(note.kind));
    payload.insert("tags".into(), json!(note.tags));

    PointRecord {
        id,
        vector,
        payload,
    }
}
