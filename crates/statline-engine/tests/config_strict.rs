#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use statline_engine::StatsdConfig;

#[test]
fn ok_minimal_section() {
    let ok = r#"
host: "statsd.internal"
"#;
    let cfg: StatsdConfig = serde_yaml::from_str(ok).expect("must parse");
    cfg.validate().expect("must validate");
    assert_eq!(cfg.host, "statsd.internal");
    assert_eq!(cfg.port, 8125);
    assert_eq!(cfg.prefix, "vllm");
}

#[test]
fn explicit_fields() {
    let ok = r#"
host: "10.0.0.7"
port: 9125
prefix: "engine0"
"#;
    let cfg: StatsdConfig = serde_yaml::from_str(ok).expect("must parse");
    assert_eq!(cfg.port, 9125);
    assert_eq!(cfg.prefix, "engine0");
}

#[test]
fn deny_unknown_fields() {
    let bad = r#"
host: "statsd.internal"
protocol: tcp # not a thing
"#;
    serde_yaml::from_str::<StatsdConfig>(bad).expect_err("must fail");
}

#[test]
fn missing_host_fails() {
    let bad = r#"
port: 8125
"#;
    serde_yaml::from_str::<StatsdConfig>(bad).expect_err("must fail");
}

#[test]
fn empty_host_fails_validate() {
    let cfg: StatsdConfig = serde_yaml::from_str(r#"host: """#).expect("must parse");
    cfg.validate().expect_err("must fail");
}
