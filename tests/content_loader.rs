mod common;

use common::temp_file;
use devfolio::content::{ContentError, Portfolio};

#[test]
fn builtin_round_trips_through_toml() {
    let builtin = Portfolio::builtin();
    let body = toml::to_string(&builtin).unwrap();
    let (_dir, path) = temp_file("site.toml", &body);
    assert_eq!(Portfolio::load_from(&path).unwrap(), builtin);
}

#[test]
fn no_path_means_builtin() {
    assert_eq!(Portfolio::load_or_builtin(None).unwrap(), Portfolio::builtin());
}

#[test]
fn negative_metric_is_rejected() {
    let mut portfolio = Portfolio::builtin();
    portfolio.pipeline.metrics[1].value = -5.0;
    let err = portfolio.validate().unwrap_err();
    assert!(matches!(err, ContentError::ValidationError { .. }));
    assert!(err.to_string().contains("Deployment Failures"));
}

#[test]
fn nan_metric_is_rejected() {
    let mut portfolio = Portfolio::builtin();
    portfolio.hero.metrics[0].value = f64::NAN;
    assert!(portfolio.validate().is_err());
}

#[test]
fn blank_prompt_is_rejected() {
    let mut portfolio = Portfolio::builtin();
    portfolio.contact.prompt = "   ".into();
    assert!(portfolio.validate().is_err());
}

#[test]
fn missing_section_is_parse_error() {
    let (_dir, path) = temp_file("site.toml", "skills = []\n");
    assert!(matches!(
        Portfolio::load_from(&path),
        Err(ContentError::ParseError { .. })
    ));
}
