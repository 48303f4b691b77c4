use crate::cli::Args;
use crate::providers::env::{GOOGLE_MAPS_API_KEY, GOOGLE_VISION_API_KEY};
use crate::providers::imagery::{GoogleStreetView, ImageryProvider};
use crate::providers::recognition::{GoogleVision, RecognitionProvider};
use crate::storage::games::HashMapGamesStorage;
use crate::storage::interface::IGameStorage;
use crate::warn_if_env_var_is_missing;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext<GS: IGameStorage> {
    pub games: GS,
    pub imagery: Arc<dyn ImageryProvider>,
    pub recognition: Arc<dyn RecognitionProvider>,
}

pub fn init(args: &Args) -> AppContext<HashMapGamesStorage> {
    warn_if_env_var_is_missing!(
        GOOGLE_MAPS_API_KEY,
        "Location resolution and view capture will fail."
    );
    warn_if_env_var_is_missing!(GOOGLE_VISION_API_KEY, "Clue inference will fail.");
    AppContext {
        games: HashMapGamesStorage::new(args.round_duration_secs),
        imagery: Arc::new(GoogleStreetView::new(args.imagery_api_url.clone())),
        recognition: Arc::new(GoogleVision::new(args.recognition_api_url.clone())),
    }
}
