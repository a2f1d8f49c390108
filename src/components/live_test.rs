use super::*;
use serde_json::json;

#[test]
fn packet_fields_land_in_their_nodes() {
    let packet: LivePacket = serde_json::from_value(json!({
        "timestamp": 1_718_000_000.25,
        "src_ip": "192.168.1.10",
        "dst_ip": "10.0.0.7",
        "protocol": "TCP",
        "length": 1420,
        "prediction": "Attack"
    }))
    .unwrap();

    assert_eq!(
        packet_renders(&packet),
        vec![
            Render::set_text(SRC_ID, "192.168.1.10"),
            Render::set_text(DST_ID, "10.0.0.7"),
            Render::set_text(PROTOCOL_ID, "TCP"),
            Render::set_text(LENGTH_ID, "1420"),
            Render::set_text(PREDICTION_ID, "Attack"),
        ]
    );
}

#[test]
fn waiting_packet_renders_placeholders() {
    let packet: LivePacket = serde_json::from_value(json!({
        "src_ip": "Scanning...",
        "dst_ip": "Scanning...",
        "protocol": "WAITING",
        "length": 0,
        "prediction": "Benign"
    }))
    .unwrap();

    let renders = packet_renders(&packet);
    assert_eq!(renders[2], Render::set_text(PROTOCOL_ID, "WAITING"));
    assert_eq!(renders[3], Render::set_text(LENGTH_ID, "0"));
}
