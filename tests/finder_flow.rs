use chrono::NaiveDate;

use sessionBoard::models::date::parse_date;
use sessionBoard::models::session::parse_catalog;
use sessionBoard::service::finder::{find_session_on_date, upcoming_sessions};

// Shape of the deployed data file: wrapped array, Spanish keys.
const DATA: &str = r#"{
    "sesiones": [
        {
            "fecha": "01/03/2025",
            "materia": "Álgebra Lineal",
            "profesor": "R. Vega",
            "horario": "18:00 - 20:00",
            "enlace": "https://meet.example.com/algebra"
        },
        {
            "fecha": "05/03/2025",
            "materia": "Estadística",
            "profesor": "M. Torres",
            "horario": "19:00 - 21:00",
            "enlace": "https://meet.example.com/estadistica"
        },
        {
            "fecha": "2025-03-02",
            "materia": "Programación",
            "profesor": "L. Prieto",
            "horario": "17:00 - 19:00",
            "enlace": "https://meet.example.com/programacion"
        }
    ],
    "enlaces_fijos": [
        { "nombre": "Aula virtual", "enlace": "https://campus.example.com" }
    ]
}"#;

#[test]
fn finds_todays_session_in_the_deployed_data_shape() {
    let catalog = parse_catalog(DATA).unwrap();
    let reference = parse_date("01/03/2025").unwrap();

    let found = find_session_on_date(&catalog.sessions, reference)
        .unwrap()
        .expect("a session is scheduled on the reference date");
    assert_eq!(found.subject, "Álgebra Lineal");
}

#[test]
fn matches_iso_dated_entries_against_a_slash_reference() {
    let catalog = parse_catalog(DATA).unwrap();
    let reference = parse_date("02/03/2025").unwrap();

    let found = find_session_on_date(&catalog.sessions, reference)
        .unwrap()
        .expect("the ISO-dated entry matches");
    assert_eq!(found.subject, "Programación");
}

#[test]
fn upcoming_excludes_today_and_comes_back_sorted_and_truncated() {
    let catalog = parse_catalog(DATA).unwrap();
    let reference = parse_date("01/03/2025").unwrap();

    let upcoming = upcoming_sessions(&catalog.sessions, reference, 2).unwrap();
    let dates: Vec<NaiveDate> = upcoming.iter().map(|s| s.parsed_date().unwrap()).collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
        ]
    );
}

#[test]
fn a_reference_after_every_session_yields_nothing() {
    let catalog = parse_catalog(DATA).unwrap();
    let reference = parse_date("31/12/2025").unwrap();

    assert!(find_session_on_date(&catalog.sessions, reference)
        .unwrap()
        .is_none());
    assert!(upcoming_sessions(&catalog.sessions, reference, 5)
        .unwrap()
        .is_empty());
}

#[test]
fn a_malformed_entry_fails_loudly_instead_of_miscomparing() {
    let raw = r#"[
        { "date": "31/13/2025", "subject": "s", "instructor": "i", "schedule": "h", "link": "l" }
    ]"#;
    let catalog = parse_catalog(raw).unwrap();
    let reference = parse_date("01/03/2025").unwrap();

    assert!(find_session_on_date(&catalog.sessions, reference).is_err());
    assert!(upcoming_sessions(&catalog.sessions, reference, 5).is_err());
}
