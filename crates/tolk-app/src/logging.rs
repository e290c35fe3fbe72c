use std::env;

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, `RUST_LOG` filters and `TOLK_LOG_JSON` switches format
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if json_enabled(env::var("TOLK_LOG_JSON").ok().as_deref()) {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn json_enabled(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some(v) if v == "1" || v.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flag_parsing() {
        assert!(json_enabled(Some("1")));
        assert!(json_enabled(Some("TRUE")));
        assert!(json_enabled(Some(" true ")));
        assert!(!json_enabled(Some("0")));
        assert!(!json_enabled(Some("")));
        assert!(!json_enabled(None));
    }
}
