//! Contract tests for response interpretation.

use hrp_client::{FALLBACK_ERROR_MESSAGE, PredictError, interpret_response};

#[test]
fn success_body_parses_verbatim() {
    let body = br#"{"probability":0.23,"prediction":0,"message":"Low risk"}"#;
    let response = interpret_response(200, body).expect("contract body");
    assert!((response.probability - 0.23).abs() < f64::EPSILON);
    assert_eq!(response.prediction, 0);
    assert_eq!(response.message, "Low risk");
}

#[test]
fn high_risk_body_parses_verbatim() {
    let body =
        br#"{"probability":0.81,"prediction":1,"message":"Elevated risk, consult a physician"}"#;
    let response = interpret_response(200, body).expect("contract body");
    assert_eq!(response.prediction, 1);
    assert_eq!(response.message, "Elevated risk, consult a physician");
}

#[test]
fn extra_fields_are_tolerated() {
    let body = br#"{"probability":0.5,"prediction":1,"message":"ok","model_version":"2.1"}"#;
    assert!(interpret_response(200, body).is_ok());
}

#[test]
fn service_error_text_is_preserved() {
    let body = br#"{"error":"Age must be between 18 and 100"}"#;
    let err = interpret_response(400, body).unwrap_err();
    match &err {
        PredictError::Service { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message.as_deref(), Some("Age must be between 18 and 100"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.user_message(), "Age must be between 18 and 100");
}

#[test]
fn error_status_without_error_body_falls_back() {
    let err = interpret_response(500, b"Internal Server Error").unwrap_err();
    assert!(matches!(
        err,
        PredictError::Service {
            status: 500,
            message: None
        }
    ));
    assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
}

#[test]
fn malformed_success_body_falls_back() {
    let cases: [&[u8]; 4] = [
        b"",
        b"not json",
        br#"{"probability":0.5}"#,
        br#"{"prediction":"high","probability":0.5,"message":"x"}"#,
    ];
    for body in cases {
        let err = interpret_response(200, body).unwrap_err();
        assert!(
            matches!(err, PredictError::MalformedResponse(_)),
            "{body:?}"
        );
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
    }
}

#[test]
fn all_two_hundreds_count_as_success() {
    let body = br#"{"probability":0.1,"prediction":0,"message":"ok"}"#;
    assert!(interpret_response(201, body).is_ok());
    assert!(interpret_response(299, body).is_ok());
    assert!(interpret_response(301, body).is_err());
    assert!(interpret_response(199, body).is_err());
}
