pub const GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";
pub const GOOGLE_VISION_API_KEY: &str = "GOOGLE_VISION_API_KEY";

#[macro_export]
macro_rules! warn_if_env_var_is_missing {
    ($var:expr, $message:expr) => {
        if let Err(_) = std::env::var($var) {
            tracing::warn!(
                "The `{}` environment variable isn't set. {}",
                $var,
                $message
            );
        }
    };
}
