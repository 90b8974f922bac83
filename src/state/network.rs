use crate::state::messages::{NetworkRequest, NetworkResponse};
use log::{debug, error};
use nba_api::{ApiResult, NbaClient};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::mpsc;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';

/// Requests in flight, plus whether the last one to finish failed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct LoadingState {
    pub in_flight: usize,
    pub failed: bool,
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Spinner glyph for animation frame `frame`; `None` when idle and healthy.
    pub fn spinner_char(&self, frame: usize) -> Option<char> {
        if self.is_loading() {
            Some(SPINNER_CHARS[frame % SPINNER_CHARS.len()])
        } else if self.failed {
            Some(ERROR_CHAR)
        } else {
            None
        }
    }
}

/// Runs fetches against `C`, one task per request so a slow play-by-play
/// never holds back a scoreboard refresh.
pub struct NetworkWorker<C: NbaClient> {
    client: C,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    in_flight: Arc<AtomicUsize>,
}

impl<C: NbaClient> NetworkWorker<C> {
    pub fn new(
        client: C,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self { client, requests, responses, in_flight: Arc::new(AtomicUsize::new(0)) }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            let in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            let loading_state = LoadingState { in_flight, failed: false };
            if self
                .responses
                .send(NetworkResponse::LoadingStateChanged { loading_state })
                .await
                .is_err()
            {
                break;
            }

            let client = self.client.clone();
            let responses = self.responses.clone();
            let in_flight = self.in_flight.clone();
            tokio::spawn(async move {
                let result = handle_request(&client, &request).await;
                let failed = result.is_err();
                let response = result.unwrap_or_else(|err| NetworkResponse::Error {
                    request: request.clone(),
                    message: err.to_string(),
                });
                debug!("network request complete: {request:?}");

                let remaining = in_flight.fetch_sub(1, Ordering::SeqCst).saturating_sub(1);
                if let Err(e) = responses.send(response).await {
                    error!("Failed to send network response: {e}");
                    return;
                }
                let loading_state = LoadingState { in_flight: remaining, failed };
                let _ = responses
                    .send(NetworkResponse::LoadingStateChanged { loading_state })
                    .await;
            });
        }
    }
}

async fn handle_request<C: NbaClient>(
    client: &C,
    request: &NetworkRequest,
) -> ApiResult<NetworkResponse> {
    match request {
        NetworkRequest::LoadScoreboard => {
            debug!("loading scoreboard");
            let games = client.fetch_scoreboard().await?;
            Ok(NetworkResponse::ScoreboardLoaded { games })
        }
        NetworkRequest::LoadBoxScore { game_id } => {
            debug!("loading box score for {game_id}");
            let box_score = client.fetch_box_score(game_id).await?;
            Ok(NetworkResponse::BoxScoreLoaded { game_id: game_id.clone(), box_score })
        }
        NetworkRequest::LoadPlayByPlay { game_id } => {
            debug!("loading play-by-play for {game_id}");
            let play_by_play = client.fetch_play_by_play(game_id).await?;
            Ok(NetworkResponse::PlayByPlayLoaded { game_id: game_id.clone(), play_by_play })
        }
    }
}
