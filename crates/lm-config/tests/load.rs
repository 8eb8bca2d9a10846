use lm_config::{
    ConfigError, MixtureDef, ValidationError, load, parse_json, parse_yaml, save_yaml,
    validate_mixture,
};
use lm_liquids::LiquidDatabase;

const TWO_COMPONENT: &str = r#"
H2O:
  default_coeffs: true
C7H16:
"#;

#[test]
fn component_order_follows_the_document() {
    let mixture = parse_yaml(TWO_COMPONENT).unwrap();
    let ids: Vec<&str> = mixture.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, ["H2O", "C7H16"]);

    let reversed = parse_yaml("C7H16:\nH2O:\n").unwrap();
    let ids: Vec<&str> = reversed.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, ["C7H16", "H2O"]);
}

#[test]
fn empty_entry_means_defaults() {
    let mixture = parse_yaml(TWO_COMPONENT).unwrap();
    for (_, component) in mixture.iter() {
        assert!(component.default_coeffs);
        assert!(component.coeffs.is_none());
    }
}

#[test]
fn explicit_coefficients_are_parsed() {
    let yaml = r#"
H2O:
MyHeptane:
  default_coeffs: false
  coeffs:
    w: 100.204
    tc: 540.2
    pc: 2.7358e6
    vc: 0.428
    zc: 0.261
    tt: 182.57
    tb: 371.58
    omega: 0.3495
    rho: { a: 61.38396836, b: 0.26211, c: 540.2, d: 0.28141 }
    pv: { a: 87.829, b: -6996.4, c: -9.8802, d: 7.2099e-6, e: 2.0 }
    hl: { tc: 540.2, a: 499121.79, b: 0.38795 }
    cp: { a: 1376.0, b: 2.9 }
    mu: { a: -24.451, b: 1533.1, c: 2.0087 }
    k: { a: 0.215, b: -3.03e-4 }
    sigma: { tc: 540.2, a: 0.054143, b: 1.2512 }
    d: { a: 147.18, b: 20.1, wf: 100.204, wa: 28.0 }
"#;
    let mixture = parse_yaml(yaml).unwrap();
    let (id, component) = mixture.iter().nth(1).unwrap();
    assert_eq!(id, "MyHeptane");
    assert!(!component.default_coeffs);

    let coeffs = component.coeffs.unwrap();
    let builtin = LiquidDatabase::builtin();
    let heptane = &builtin.lookup("C7H16").unwrap().coeffs;
    assert_eq!(coeffs.w, heptane.w);
    assert_eq!(coeffs.pv, heptane.pv);
    assert_eq!(coeffs.mu.d, 0.0);
}

#[test]
fn declined_defaults_without_coeffs_is_rejected() {
    let err = parse_yaml("C7H16:\n  default_coeffs: false\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Validation(ValidationError::MissingCoeffs { id }) if id == "C7H16"
    ));
}

#[test]
fn coefficients_alongside_defaults_are_rejected() {
    let coeffs = LiquidDatabase::builtin().lookup("H2O").unwrap().coeffs.clone();
    let mut mixture = MixtureDef::default().with_coeffs("H2O", coeffs);
    if let Some(Some(component)) = mixture.components.get_mut("H2O") {
        component.default_coeffs = true;
    }

    assert!(matches!(
        validate_mixture(&mixture),
        Err(ValidationError::ConflictingCoeffs { id }) if id == "H2O"
    ));
}

#[test]
fn malformed_coefficient_block_is_rejected() {
    // Missing every required constant
    let err = parse_yaml("C7H16:\n  default_coeffs: false\n  coeffs:\n    w: 100.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)));

    // Unknown key in the component block
    let err = parse_yaml("H2O:\n  defaultCoeffs: yes\n").unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)));
}

#[test]
fn implausible_coefficients_are_rejected() {
    let mut coeffs = LiquidDatabase::builtin().lookup("H2O").unwrap().coeffs.clone();
    coeffs.vc = -1.0;
    let mixture = MixtureDef::default().with_coeffs("Water2", coeffs);
    assert!(matches!(
        validate_mixture(&mixture),
        Err(ValidationError::InvalidCoeffs { id, .. }) if id == "Water2"
    ));
}

#[test]
fn empty_mixture_is_rejected() {
    assert!(matches!(
        parse_yaml("{}"),
        Err(ConfigError::Validation(ValidationError::Empty))
    ));
}

#[test]
fn json_uses_the_same_shape() {
    let mixture = parse_json(r#"{ "H2O": null, "C8H18": { "default_coeffs": true } }"#).unwrap();
    let ids: Vec<&str> = mixture.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, ["H2O", "C8H18"]);
}

#[test]
fn roundtrip_yaml_file() {
    let coeffs = LiquidDatabase::builtin().lookup("C8H18").unwrap().coeffs.clone();
    let mixture = MixtureDef::default()
        .with_default("H2O")
        .with_coeffs("Octane", coeffs);

    let path = std::env::temp_dir().join("lm_config_roundtrip.yaml");
    save_yaml(&path, &mixture).unwrap();
    let loaded = load(&path).unwrap();

    assert_eq!(mixture, loaded);
}
