use super::*;

#[test]
fn from_path_roundtrips_every_page() {
    for kind in PageKind::ALL {
        assert_eq!(PageKind::from_path(kind.path()), Some(kind));
    }
}

#[test]
fn from_path_ignores_query_and_trailing_slash() {
    assert_eq!(PageKind::from_path("/dashboard/"), Some(PageKind::Dashboard));
    assert_eq!(PageKind::from_path("/logs?page=2"), Some(PageKind::Logs));
    assert_eq!(PageKind::from_path(""), Some(PageKind::Login));
    assert_eq!(PageKind::from_path("/#top"), Some(PageKind::Login));
}

#[test]
fn from_path_unknown_is_none() {
    assert_eq!(PageKind::from_path("/admin"), None);
}

#[test]
fn documents_carry_the_expected_ids() {
    let expected: [(PageKind, &[&str]); 5] = [
        (PageKind::Login, &["loginForm", "username", "password", "particles"]),
        (PageKind::Dashboard, &["totalNetwork", "totalWeb", "particles"]),
        (PageKind::Logs, &["logList"]),
        (PageKind::Detect, &["uploadFile", "detectBtn", "detectResult"]),
        (PageKind::LiveMonitor, &["liveSrc", "liveDst", "liveProtocol", "liveLength", "livePrediction"]),
    ];
    for (kind, ids) in expected {
        let doc = kind.document();
        for id in ids {
            assert!(doc.get_element_by_id(id).is_some(), "{kind:?} missing #{id}");
        }
    }
}

#[test]
fn only_login_and_dashboard_have_particles() {
    for kind in PageKind::ALL {
        let has = kind.document().get_element_by_id("particles").is_some();
        assert_eq!(has, matches!(kind, PageKind::Login | PageKind::Dashboard), "{kind:?}");
    }
}

#[test]
fn registries_wire_triggers() {
    assert_eq!(
        PageKind::Login.registry().handlers(Trigger::Submit("loginForm")).collect::<Vec<_>>(),
        vec![Component::FormSubmitter]
    );
    assert_eq!(
        PageKind::Detect.registry().handlers(Trigger::Click("detectBtn")).collect::<Vec<_>>(),
        vec![Component::FileUploader]
    );
    assert_eq!(
        PageKind::Dashboard.registry().handlers(Trigger::Ready).collect::<Vec<_>>(),
        vec![Component::StatFetcher, Component::ParticleField]
    );
    assert_eq!(PageKind::Detect.registry().handlers(Trigger::Ready).count(), 0);
}

#[test]
fn fresh_documents_are_empty_of_rendered_content() {
    let doc = PageKind::Logs.document();
    assert!(doc.require("logList").unwrap().children.is_empty());
}
