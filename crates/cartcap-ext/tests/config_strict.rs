#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use cartcap_core::error::CartCapError;
use cartcap_core::policy::{DEFAULT_ADD_EXCEEDS, DEFAULT_UPDATE_EXCEEDS};
use cartcap_ext::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
messages:
  add_exceeds: "No more than {max}."
  add_exceedz: "typo should fail"
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, CartCapError::BadRequest(_)));
}

#[test]
fn ok_minimal_config_uses_default_messages() {
    let ok = "version: 1\n";
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.messages.add_exceeds, DEFAULT_ADD_EXCEEDS);
    assert_eq!(cfg.messages.update_exceeds, DEFAULT_UPDATE_EXCEEDS);
}

#[test]
fn unsupported_version_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(matches!(err, CartCapError::BadRequest(_)));
}

#[test]
fn template_without_placeholder_rejected() {
    let bad = r#"
version: 1
messages:
  update_exceeds: "Too many of this product."
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    let text = err.to_string();
    assert!(text.contains("update_exceeds"), "got: {text}");
}
