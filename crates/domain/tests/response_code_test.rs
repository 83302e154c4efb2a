use doh_gateway_domain::{GatewayError, ResponseCode};

#[test]
fn test_standard_table() {
    assert_eq!(ResponseCode::from_status(0), Ok(ResponseCode::NoError));
    assert_eq!(ResponseCode::from_status(2), Ok(ResponseCode::ServFail));
    assert_eq!(ResponseCode::from_status(3), Ok(ResponseCode::NXDomain));
    assert_eq!(ResponseCode::from_status(5), Ok(ResponseCode::Refused));
    assert_eq!(ResponseCode::from_status(16), Ok(ResponseCode::BadVers));
    assert_eq!(ResponseCode::from_status(21), Ok(ResponseCode::BadAlg));
}

#[test]
fn test_out_of_table_status_is_an_error() {
    for status in [11, 15, 22, 99, 4096] {
        assert!(
            matches!(
                ResponseCode::from_status(status),
                Err(GatewayError::InvalidResponseCode(s)) if s == status
            ),
            "status {}",
            status
        );
    }
}

#[test]
fn test_status_roundtrip() {
    for status in [0u16, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 16, 17, 18, 19, 20, 21] {
        let code = ResponseCode::from_status(status).unwrap();
        assert_eq!(code.status(), status);
    }
}

#[test]
fn test_display() {
    assert_eq!(ResponseCode::NoError.to_string(), "NOERROR");
    assert_eq!(ResponseCode::NXDomain.to_string(), "NXDOMAIN");
    assert_eq!(ResponseCode::ServFail.to_string(), "SERVFAIL");
}
