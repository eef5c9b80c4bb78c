use std::sync::{Arc, Mutex};

use axum::extract::{RawQuery, State};
use axum::routing::get;
use axum::{Json, Router};
use car_catalog::state::{CarSource, FetchError, HttpCarSource};
use car_catalog::{
    query, Car, CarsEndpoint, Catalog, FuelType, InMemoryKeyValueStore, SearchFilters, StateStore,
};
use tokio::net::TcpListener;

use crate::support::ids;

async fn spawn_server() -> String {
    let endpoint = Arc::new(CarsEndpoint::new(Catalog::builtin()));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, query::router(endpoint)).await.unwrap();
    });
    format!("http://{}/", addr)
}

type SeenQueries = Arc<Mutex<Vec<Option<String>>>>;

/// Server that records each raw query string and answers with no cars.
async fn spawn_recorder() -> (String, SeenQueries) {
    async fn record(State(seen): State<SeenQueries>, RawQuery(raw): RawQuery) -> Json<Vec<Car>> {
        seen.lock().unwrap().push(raw);
        Json(Vec::new())
    }

    let seen = SeenQueries::default();
    let app = Router::new()
        .route("/api/cars", get(record))
        .with_state(seen.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), seen)
}

#[tokio::test]
async fn http_source_sends_only_present_filters() {
    let (base, seen) = spawn_recorder().await;
    let source = HttpCarSource::new(base);

    let filters = SearchFilters::new()
        .fuel_type(FuelType::Diesel)
        .min_price(100_000)
        .max_price(700_000);
    source.fetch(&filters).await.unwrap();
    source.fetch(&SearchFilters::new().brand("honda")).await.unwrap();
    source.fetch(&SearchFilters::new()).await.unwrap();

    let seen = seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 3);
    assert_eq!(
        seen[0].as_deref(),
        Some("minPrice=100000&maxPrice=700000&fuelType=Diesel")
    );
    assert_eq!(seen[1].as_deref(), Some("brand=honda"));
    assert!(seen[2].as_deref().unwrap_or("").is_empty());
}

#[tokio::test]
async fn http_source_filters_on_the_server() {
    let source = HttpCarSource::new(spawn_server().await);
    let cars = source
        .fetch(
            &SearchFilters::new()
                .fuel_type(FuelType::Diesel)
                .min_price(100_000)
                .max_price(700_000),
        )
        .await
        .unwrap();
    assert_eq!(ids(&cars), vec![6, 9, 10, 12]);
}

#[tokio::test]
async fn store_searches_over_http() {
    let source = HttpCarSource::new(spawn_server().await);
    let store = StateStore::open(InMemoryKeyValueStore::new());

    let state = store.search(&source, SearchFilters::new().brand("honda")).await;
    assert_eq!(ids(state.results()), vec![2]);
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = HttpCarSource::new(format!("http://{}", addr));
    let err = source.fetch(&SearchFilters::new()).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));

    let store = StateStore::open(InMemoryKeyValueStore::new());
    let state = store.search(&source, SearchFilters::new()).await;
    assert!(state.results().is_empty());
    assert!(!state.is_loading());
}
