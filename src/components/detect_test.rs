use super::*;
use serde_json::json;

#[test]
fn result_is_rendered_as_compact_json() {
    let renders = result_renders(&json!({ "prediction": "Attack", "confidence": 0.93 }));
    assert_eq!(renders, vec![Render::set_text(RESULT_ID, r#"{"prediction":"Attack","confidence":0.93}"#)]);
}

#[test]
fn result_keeps_server_key_order() {
    let body: serde_json::Value = serde_json::from_str(r#"{"z":1,"a":2}"#).unwrap();
    assert_eq!(result_renders(&body), vec![Render::set_text(RESULT_ID, r#"{"z":1,"a":2}"#)]);
}

#[test]
fn non_object_results_still_render() {
    assert_eq!(result_renders(&json!([1, 2])), vec![Render::set_text(RESULT_ID, "[1,2]")]);
    assert_eq!(result_renders(&json!(null)), vec![Render::set_text(RESULT_ID, "null")]);
}

#[test]
fn whole_float_scores_print_as_integers() {
    let body: serde_json::Value = serde_json::from_str(r#"{"confidence":1.0}"#).unwrap();
    assert_eq!(result_renders(&body), vec![Render::set_text(RESULT_ID, r#"{"confidence":1}"#)]);
}
