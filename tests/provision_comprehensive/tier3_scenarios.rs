//! Tier 3: End-to-end command scenarios
//!
//! Each test mirrors one documented `svcat provision` invocation.

use std::sync::Arc;

use svcat::{Error, ParseError, ProvisionInput, Svcat};

use crate::test_utils::RecordingProvisioner;

fn svcat() -> (Svcat, Arc<RecordingProvisioner>) {
    let backend = Arc::new(RecordingProvisioner::new());
    (Svcat::new(backend.clone()), backend)
}

/// `svcat provision myinst --class=mysqldb --plan=free -p location=eastus -p sslEnforcement=disabled`
#[test]
fn scenario_flat_parameters() {
    let (svcat, backend) = svcat();
    let input = ProvisionInput::new("myinst", "mysqldb", "free")
        .param("location=eastus")
        .param("sslEnforcement=disabled");

    let instance = svcat.provision(&input).unwrap();

    assert_eq!(backend.calls(), 1);
    let request = backend.last_request().unwrap();
    assert_eq!(request.instance_name(), "myinst");
    assert_eq!(request.namespace(), "default");
    assert_eq!(request.class_name(), "mysqldb");
    assert_eq!(request.plan_name(), "free");
    let flat = request.parameters().as_flat().unwrap();
    let pairs: Vec<_> = flat.iter().collect();
    assert_eq!(
        pairs,
        vec![("location", "eastus"), ("sslEnforcement", "disabled")]
    );
    assert!(request.secrets().is_empty());

    assert_eq!(
        instance.spec.parameters,
        Some(serde_json::json!({"location": "eastus", "sslEnforcement": "disabled"}))
    );
}

/// `-p zeta=1 -p alpha=2`
#[test]
fn scenario_flat_parameters_keep_command_line_order() {
    let (svcat, backend) = svcat();
    let input = ProvisionInput::new("myinst", "mysqldb", "free")
        .param("zeta=1")
        .param("alpha=2");

    let instance = svcat.provision(&input).unwrap();

    let names: Vec<_> = backend
        .last_request()
        .unwrap()
        .parameters()
        .as_flat()
        .unwrap()
        .names()
        .map(str::to_string)
        .collect();
    assert_eq!(names, vec!["zeta", "alpha"]);

    let wire = instance.spec.parameters.unwrap();
    let keys: Vec<_> = wire.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["zeta", "alpha"]);
}

/// `--params-json '{"encrypt":true}' -p foo=bar`
#[test]
fn scenario_json_with_param_is_usage_error() {
    let (svcat, backend) = svcat();
    let input = ProvisionInput::new("myinst", "mysqldb", "free")
        .params_json(r#"{"encrypt":true}"#)
        .param("foo=bar");

    let err = svcat.provision(&input).unwrap_err();

    assert!(matches!(err, Error::Usage { .. }));
    assert_eq!(backend.calls(), 0);
}

/// `-s mysecret[dbparams]`
#[test]
fn scenario_secret_reference() {
    let (svcat, backend) = svcat();
    let input = ProvisionInput::new("myinst", "mysqldb", "free").secret("mysecret[dbparams]");

    let instance = svcat.provision(&input).unwrap();

    let request = backend.last_request().unwrap();
    assert_eq!(request.secrets().len(), 1);
    assert_eq!(request.secrets().get("mysecret"), Some("dbparams"));
    assert!(request.parameters().is_empty());
    assert_eq!(instance.spec.parameters_from.len(), 1);
}

/// `-s badformat`
#[test]
fn scenario_bad_secret_reference() {
    let (svcat, backend) = svcat();
    let input = ProvisionInput::new("myinst", "mysqldb", "free").secret("badformat");

    let err = svcat.provision(&input).unwrap_err();

    match &err {
        Error::InvalidParam { flag, source } => {
            assert_eq!(*flag, "--secret");
            assert_eq!(
                source,
                &ParseError::InvalidSecretRef {
                    entry: "badformat".into()
                }
            );
        }
        other => panic!("Expected InvalidParam, got: {:?}", other),
    }
    assert!(err.to_string().contains("badformat"));
    assert_eq!(backend.calls(), 0);
}

/// No positional arguments
#[test]
fn scenario_missing_instance_name() {
    let (svcat, backend) = svcat();
    let input = ProvisionInput {
        class_name: "mysqldb".into(),
        plan_name: "free".into(),
        ..Default::default()
    };

    let err = svcat.provision(&input).unwrap_err();

    assert!(err.is_usage());
    assert_eq!(err.to_string(), "an instance name is required");
    assert_eq!(backend.calls(), 0);
}

/// `svcat provision secure-instance --class mysqldb --plan secureDB --params-json '{...}'`
#[test]
fn scenario_structured_parameters_with_namespace() {
    let (svcat, backend) = svcat();
    let json = r#"{
        "encrypt" : true,
        "firewallRules" : [
            { "name": "AllowSome", "startIPAddress": "75.70.113.50", "endIPAddress" : "75.70.113.131" },
            { "name": "AllowMore", "startIPAddress": "13.54.0.0", "endIPAddress" : "13.56.0.0" }
        ]
    }"#;
    let input = ProvisionInput::new("secure-instance", "mysqldb", "secureDB")
        .namespace("databases")
        .params_json(json);

    let instance = svcat.provision(&input).unwrap();

    assert_eq!(instance.namespace(), "databases");
    let request = backend.last_request().unwrap();
    let value = request.parameters().as_structured().unwrap();
    assert_eq!(value["firewallRules"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["firewallRules"][1]["endIPAddress"], "13.56.0.0");
}
