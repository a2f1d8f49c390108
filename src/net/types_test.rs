use super::*;
use serde_json::json;

#[test]
fn login_response_missing_success_is_failure() {
    let resp: LoginResponse = serde_json::from_value(json!({ "message": "nope" })).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.message.as_deref(), Some("nope"));
}

#[test]
fn login_response_null_message_is_none() {
    let resp: LoginResponse = serde_json::from_value(json!({ "success": false, "message": null })).unwrap();
    assert_eq!(resp.message, None);
}

#[test]
fn credentials_serialize_field_names() {
    let body = serde_json::to_value(Credentials { username: "admin".into(), password: "admin123".into() }).unwrap();
    assert_eq!(body, json!({ "username": "admin", "password": "admin123" }));
}

#[test]
fn log_entry_requires_both_fields() {
    assert!(serde_json::from_value::<LogEntry>(json!({ "timestamp": "t1" })).is_err());
}

#[test]
fn live_packet_tolerates_partial_body() {
    let packet: LivePacket = serde_json::from_value(json!({ "protocol": "TCP", "length": 1500 })).unwrap();
    assert_eq!(display_value(&packet.protocol), "TCP");
    assert_eq!(display_value(&packet.length), "1500");
    assert_eq!(display_value(&packet.src_ip), "");
}

#[test]
fn display_value_scalars() {
    assert_eq!(display_value(&json!("12")), "12");
    assert_eq!(display_value(&json!(12)), "12");
    assert_eq!(display_value(&json!(2.5)), "2.5");
    assert_eq!(display_value(&json!(true)), "true");
    assert_eq!(display_value(&json!(null)), "");
    assert_eq!(display_value(&json!({ "a": 1 })), r#"{"a":1}"#);
}

#[test]
fn dashboard_stats_from_object() {
    let stats = DashboardStats::from_response(&json!({ "totalNetwork": 120, "totalWeb": "45" })).unwrap();
    assert_eq!(display_value(&stats.total_network), "120");
    assert_eq!(display_value(&stats.total_web), "45");
}

#[test]
fn dashboard_stats_missing_fields_are_null() {
    let stats = DashboardStats::from_response(&json!({ "totalNetwork": 7 })).unwrap();
    assert_eq!(stats.total_web, serde_json::Value::Null);
}

#[test]
fn dashboard_stats_non_object_is_none() {
    assert!(DashboardStats::from_response(&json!(null)).is_none());
    assert!(DashboardStats::from_response(&json!([1, 2])).is_none());
    assert!(DashboardStats::from_response(&json!("busy")).is_none());
}

#[test]
fn display_value_whole_floats_drop_fraction() {
    assert_eq!(display_value(&json!(1532.0)), "1532");
    assert_eq!(display_value(&json!(-4.0)), "-4");
    assert_eq!(display_value(&json!(0.0)), "0");
    assert_eq!(display_value(&json!(1532.5)), "1532.5");
}

#[test]
fn to_js_json_normalizes_nested_numbers() {
    let body: serde_json::Value =
        serde_json::from_str(r#"{"confidence":1.0,"scores":[0.5,2.0],"meta":{"rows":10.0}}"#).unwrap();
    assert_eq!(to_js_json(&body), r#"{"confidence":1,"scores":[0.5,2],"meta":{"rows":10}}"#);
}
