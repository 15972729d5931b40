#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use portfolio_showcase::config::PageConfig;
    use portfolio_showcase::content::Portfolio;
    use portfolio_showcase::telemetry::{log_event, LogLevel};
    use serde_json::json;

    let config = PageConfig::from_build_env();

    match Portfolio::load() {
        Ok(portfolio) => log_event(
            config.log_level,
            LogLevel::Info,
            "content_ok",
            json!({
                "internships": portfolio.internships.len(),
                "projects": portfolio.projects.len(),
                "designs": portfolio.designs.len(),
            }),
        ),
        Err(error) => {
            log_event(
                config.log_level,
                LogLevel::Warn,
                "content_invalid",
                json!({ "error": error.to_string() }),
            );
            std::process::exit(1);
        }
    }

    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    portfolio_showcase::run();
}
