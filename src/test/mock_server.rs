use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use reqwest::Client;
use serde_json::{Value, json};

use crate::api::PrivatApi;

#[derive(Clone, Debug)]
pub enum Reply {
    Rates(Value),
    DelayedRates(Duration, Value),
    Status(u16),
    Html,
    BrokenJson,
}

struct MockState {
    replies: HashMap<String, Reply>,
    fallback: Reply,
    hits: AtomicUsize,
}

/// Stand-in for the PrivatBank archive endpoint, replying per `date` query
/// parameter.
pub struct MockServer {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockServer {
    pub async fn start(fallback: Reply, replies: Vec<(&str, Reply)>) -> Self {
        let state = Arc::new(MockState {
            replies: replies
                .into_iter()
                .map(|(date, reply)| (date.to_string(), reply))
                .collect(),
            fallback,
            hits: AtomicUsize::new(0),
        });

        let app = Router::new()
            .route("/p24api/exchange_rates", get(exchange_rates))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/p24api/exchange_rates?json&date=", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub fn api(&self, timeout: Duration) -> PrivatApi {
        let client = Client::builder()
            .no_proxy()
            .timeout(timeout)
            .build()
            .unwrap();
        PrivatApi::with_client(client, self.base_url())
    }
}

async fn exchange_rates(
    State(state): State<Arc<MockState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let date = params.get("date").cloned().unwrap_or_default();
    let reply = state
        .replies
        .get(&date)
        .cloned()
        .unwrap_or_else(|| state.fallback.clone());

    match reply {
        Reply::Rates(body) => Json(body).into_response(),
        Reply::DelayedRates(delay, body) => {
            tokio::time::sleep(delay).await;
            Json(body).into_response()
        }
        Reply::Status(code) => (
            StatusCode::from_u16(code).unwrap(),
            "upstream unavailable",
        )
            .into_response(),
        Reply::Html => Html("<html><body>maintenance</body></html>").into_response(),
        Reply::BrokenJson => (
            [(header::CONTENT_TYPE, "application/json")],
            "{\"exchangeRate\": [",
        )
            .into_response(),
    }
}

pub fn rates_body(date: &str) -> Value {
    json!({
        "date": date,
        "bank": "PB",
        "baseCurrency": 980,
        "baseCurrencyLit": "UAH",
        "exchangeRate": [
            {
                "baseCurrency": "UAH",
                "currency": "EUR",
                "saleRateNB": 41.4,
                "purchaseRateNB": 41.4,
                "saleRate": 41.9,
                "purchaseRate": 40.9
            },
            {
                "baseCurrency": "UAH",
                "currency": "USD",
                "saleRateNB": 38.2,
                "purchaseRateNB": 38.2,
                "saleRate": 38.6,
                "purchaseRate": 38.0
            },
            {
                "baseCurrency": "UAH",
                "currency": "PLN",
                "saleRateNB": 9.6,
                "purchaseRateNB": 9.6
            }
        ]
    })
}
