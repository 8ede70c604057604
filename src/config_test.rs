use super::*;

fn lookup_from(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    let pairs = pairs.to_vec();
    move |key: &str| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_reads_host_and_port() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", " 8080 ")])).unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn from_lookup_blank_host_falls_back_to_default() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("HOST", "  ")])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
}

#[test]
fn from_lookup_rejects_invalid_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { var: "PORT", ref value } if value == "not-a-port"));
}

#[test]
fn from_lookup_rejects_out_of_range_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: \"70000\"");
}
