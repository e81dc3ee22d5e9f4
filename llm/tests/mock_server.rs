use serde_json::json;
use tokio::sync::mpsc;
use warp::Filter;

/// Spawn a fake Ollama server answering `/api/generate` with `reply` and
/// `/api/embed` with `embeddings`. Returns the base URL and a shutdown
/// handle.
pub async fn spawn_mock_server(
    reply: &'static str,
    embeddings: Vec<Vec<f32>>,
) -> (String, mpsc::Sender<()>) {
    let generate = warp::path!("api" / "generate").and(warp::post()).map(move || {
        warp::reply::json(&json!({
            "model": "mock",
            "created_at": "2024-01-01T00:00:00Z",
            "response": reply,
            "done": true,
        }))
    });
    let embeddings = serde_json::to_value(&embeddings).unwrap();
    let embed = warp::path!("api" / "embed").and(warp::post()).map(move || {
        warp::reply::json(&json!({
            "model": "mock",
            "embeddings": embeddings.clone(),
        }))
    });

    let (tx, mut rx) = mpsc::channel::<()>(1);
    let (addr, server) = warp::serve(generate.or(embed)).bind_with_graceful_shutdown(
        ([127, 0, 0, 1], 0),
        async move {
            let _ = rx.recv().await;
        },
    );
    tokio::spawn(server);
    (format!("http://{addr}"), tx)
}
