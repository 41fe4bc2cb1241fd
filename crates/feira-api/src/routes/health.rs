use axum::Json;

pub async fn ping() -> Json<&'static str> {
    Json("pong")
}
