use super::*;

use std::{
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_settings_file(contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("cart_cli_settings_{suffix}.toml"));
    fs::write(&path, contents).expect("write settings");
    path
}

#[test]
fn file_values_override_defaults() {
    let path = temp_settings_file(
        r#"
server_url = "https://shop.example/events/"
notification_timeout_ms = 2500
mini_cart_timeout_ms = "1000"
currency_symbol = "€"
checkout_url = "/checkout/"
"#,
    );
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, &path);
    fs::remove_file(path).expect("cleanup");

    assert_eq!(settings.server_url, "https://shop.example/events/");
    assert_eq!(settings.ui.notification_timeout, Duration::from_millis(2500));
    assert_eq!(settings.ui.mini_cart_timeout, Duration::from_millis(1000));
    assert_eq!(settings.ui.currency_symbol, "€");
    assert_eq!(settings.ui.checkout_url, "/checkout/");
    assert_eq!(settings.ui.cart_url, "/booking/cart/");
}

#[test]
fn missing_or_broken_file_keeps_defaults() {
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, Path::new("/nonexistent/cart.toml"));
    assert_eq!(settings, Settings::default());

    let path = temp_settings_file("server_url = [unterminated");
    apply_file_overrides(&mut settings, &path);
    fs::remove_file(path).expect("cleanup");
    assert_eq!(settings, Settings::default());
}

#[test]
fn app_prefixed_env_wins_over_plain_env() {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("CART_SERVER_URL", "http://plain.example/"),
        ("APP__SERVER_URL", "http://app.example/"),
        ("APP__NOTIFICATION_TIMEOUT_MS", "750"),
        ("APP__MINI_CART_TIMEOUT_MS", "not-a-number"),
        ("APP__CURRENCY_SYMBOL", "$"),
    ]);
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, |key| vars.get(key).map(|v| v.to_string()));

    assert_eq!(settings.server_url, "http://app.example/");
    assert_eq!(settings.ui.notification_timeout, Duration::from_millis(750));
    assert_eq!(settings.ui.mini_cart_timeout, Duration::from_millis(5000));
    assert_eq!(settings.ui.currency_symbol, "$");
}

#[test]
fn page_url_gets_directory_slash() {
    assert_eq!(
        parse_page_url("http://127.0.0.1:8000/events/7")
            .expect("url")
            .as_str(),
        "http://127.0.0.1:8000/events/7/"
    );
    assert_eq!(
        parse_page_url(" https://shop.example ").expect("url").as_str(),
        "https://shop.example/"
    );
    assert!(parse_page_url("not a url").is_err());
    assert!(parse_page_url("mailto:shop@example.com").is_err());
}
