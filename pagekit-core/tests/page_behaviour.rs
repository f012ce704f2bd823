use chrono::NaiveDate;
use pagekit_core::{
    PageConfig, ScrollPlan, ThemeMode, anchor_target, format_display_date, scroll_destination,
};

#[test]
fn anchor_click_scrolls_to_target_minus_navbar() {
    let config = PageConfig::default();
    let target = anchor_target("#section1").expect("fragment present");
    assert_eq!(target, "section1");

    let (target_top, navbar_height) = (900.0, 64.0);
    let destination = scroll_destination(target_top, navbar_height);
    let plan = ScrollPlan::new(0.0, destination, config.scroll_duration_ms);

    assert!((plan.position_at(150.0) - destination / 2.0).abs() < 1e-9);
    assert!((plan.position_at(f64::from(config.scroll_duration_ms)) - 836.0).abs() < 1e-9);
}

#[test]
fn theme_toggles_restore_initial_mode() {
    let start = ThemeMode::from_class_present(false);
    let once = start.toggled();
    assert!(once.class_present());
    assert_eq!(once.toggled(), start);
}

#[test]
fn date_display_follows_day_month_year() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    assert_eq!(format_display_date(date), "5/3/2024");
}

#[test]
fn config_round_trips_through_camel_case_json() {
    let config = PageConfig {
        navbar_selector: "#top-bar".into(),
        ..PageConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"navbarSelector\":\"#top-bar\""));
    assert_eq!(PageConfig::from_json(&json).unwrap(), config);
}
