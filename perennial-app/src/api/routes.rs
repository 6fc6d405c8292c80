use axum::{extract::{Query, State}, http::StatusCode, Json};
use perennial_core::{SrsConfig, DEFAULT_SCRIPT};
use std::sync::Arc;

use crate::api::dto::{parse_script, PreviewInput, SimulateIn, SimulateQuery, SimulationOut};

#[derive(Clone)]
pub struct AppState {
    /// Fills in whatever a query or body leaves out.
    pub defaults: SrsConfig,
}

pub async fn simulate_get(State(st): State<Arc<AppState>>, Query(q): Query<SimulateQuery>)
    -> Result<Json<SimulationOut>, StatusCode>
{
    let script = parse_script(q.script.as_deref()).ok_or(StatusCode::BAD_REQUEST)?;
    let input = PreviewInput::resolve(&st.defaults, q.base_interval_days, q.ease_multiplier, q.interval_modifier);
    let out = input.simulate(&script);
    tracing::debug!(label = %out.label, "projected path");
    Ok(Json(out))
}

pub async fn simulate_post(State(st): State<Arc<AppState>>, Json(body): Json<SimulateIn>) -> Json<SimulationOut> {
    let script = body.script.unwrap_or_else(|| DEFAULT_SCRIPT.to_vec());
    let input = PreviewInput::resolve(&st.defaults, body.base_interval_days, body.ease_multiplier, body.interval_modifier);
    let out = input.simulate(&script);
    tracing::debug!(label = %out.label, "projected path");
    Json(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(defaults: SrsConfig) -> State<Arc<AppState>> {
        State(Arc::new(AppState { defaults }))
    }

    #[tokio::test]
    async fn get_uses_defaults_for_missing_params() {
        let Json(out) = simulate_get(state(SrsConfig::default()), Query(SimulateQuery::default()))
            .await
            .unwrap();
        assert_eq!(out.path.intervals(), &[1, 3, 10, 27, 94]);
    }

    #[tokio::test]
    async fn get_with_script() {
        let q = SimulateQuery {
            base_interval_days: Some(5.0),
            script: Some("again".into()),
            ..Default::default()
        };
        let Json(out) = simulate_get(state(SrsConfig::default()), Query(q)).await.unwrap();
        assert_eq!(out.label, "5d -> 0d");
    }

    #[tokio::test]
    async fn get_rejects_bad_script() {
        let q = SimulateQuery {
            script: Some("good,later".into()),
            ..Default::default()
        };
        let err = simulate_get(state(SrsConfig::default()), Query(q)).await.unwrap_err();
        assert_eq!(err, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn post_takes_config_body() {
        let body: SimulateIn = serde_json::from_value(serde_json::json!({
            "base_interval_days": 2,
            "ease_multiplier": 1.3,
            "interval_modifier": 1.0
        }))
        .unwrap();
        let Json(out) = simulate_post(state(SrsConfig::default()), Json(body)).await;
        assert_eq!(out.path.intervals(), &[2, 3, 6, 9, 17]);

        let body = SimulateIn {
            script: Some(vec![]),
            ..Default::default()
        };
        let Json(out) = simulate_post(state(SrsConfig::default()), Json(body)).await;
        assert_eq!(out.path.intervals(), &[1]);
        assert_eq!(out.final_ease, None);
    }

    #[tokio::test]
    async fn post_fills_missing_fields_from_state() {
        let body: SimulateIn =
            serde_json::from_value(serde_json::json!({ "ease_multiplier": 1.3 })).unwrap();
        let Json(out) = simulate_post(state(SrsConfig::new(2, 2.5, 1.0)), Json(body)).await;
        assert_eq!(out.path.intervals(), &[2, 3, 6, 9, 17]);
    }
}
