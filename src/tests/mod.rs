use crate::browse::{Pager, Session};
use crate::directory::{ApiEnvelope, Employee};
use crate::{output, search, view};

// Trimmed-down capture of a real API body: three records, two pages worth of
// fields we ignore (gender, login, registered) left in place to prove the
// decoder tolerates them.
const FIXTURE: &str = r#"{
  "results": [
    {
      "gender": "female",
      "name": {"title": "Ms", "first": "nora", "last": "jensen"},
      "location": {
        "street": {"number": 5372, "name": "Mosevej"},
        "city": "aalborg",
        "state": "Nordjylland",
        "country": "Denmark",
        "postcode": 51225
      },
      "email": "nora.jensen@example.com",
      "login": {"uuid": "cc90b1a8-0000-0000-0000-000000000001"},
      "dob": {"date": "1993-07-20T09:44:18.674Z", "age": 30},
      "registered": {"date": "2010-01-01T00:00:00.000Z", "age": 14},
      "phone": "71715799",
      "cell": "90501284",
      "picture": {
        "large": "https://randomuser.me/api/portraits/women/1.jpg",
        "medium": "https://randomuser.me/api/portraits/med/women/1.jpg",
        "thumbnail": "https://randomuser.me/api/portraits/thumb/women/1.jpg"
      },
      "nat": "DK"
    },
    {
      "gender": "male",
      "name": {"title": "Mr", "first": "logan", "last": "mackay"},
      "location": {
        "street": {"number": 12, "name": "Pine Rd"},
        "city": "ottawa",
        "state": "Ontario",
        "country": "Canada",
        "postcode": "K1A 0B1"
      },
      "email": "logan.mackay@example.com",
      "login": {"uuid": "cc90b1a8-0000-0000-0000-000000000002"},
      "dob": {"date": "1985-03-15T12:00:00.000Z", "age": 39},
      "registered": {"date": "2008-06-01T00:00:00.000Z", "age": 16},
      "phone": "613-555-0199",
      "cell": "613-555-0142",
      "picture": {
        "large": "https://randomuser.me/api/portraits/men/2.jpg",
        "medium": "https://randomuser.me/api/portraits/med/men/2.jpg",
        "thumbnail": "https://randomuser.me/api/portraits/thumb/men/2.jpg"
      },
      "nat": "CA"
    },
    {
      "gender": "female",
      "name": {"title": "Mrs", "first": "norah", "last": "walsh"},
      "location": {
        "street": {"number": 88, "name": "High Street"},
        "city": "portland",
        "state": "Oregon",
        "country": "United States",
        "postcode": 97035
      },
      "email": "norah.walsh@example.com",
      "login": {"uuid": "cc90b1a8-0000-0000-0000-000000000003"},
      "dob": {"date": "1990-11-02T22:10:05.000Z", "age": 33},
      "registered": {"date": "2012-09-09T00:00:00.000Z", "age": 11},
      "phone": "(541) 555-0110",
      "cell": "(541) 555-0187",
      "picture": {
        "large": "https://randomuser.me/api/portraits/women/3.jpg",
        "medium": "https://randomuser.me/api/portraits/med/women/3.jpg",
        "thumbnail": "https://randomuser.me/api/portraits/thumb/women/3.jpg"
      },
      "nat": "US"
    }
  ],
  "info": {"seed": "abc123", "results": 3, "page": 1, "version": "1.4"}
}"#;

fn fixture_employees() -> Vec<Employee> {
    match serde_json::from_str::<ApiEnvelope>(FIXTURE).unwrap() {
        ApiEnvelope::Directory(directory) => directory.results,
        ApiEnvelope::Error { error } => panic!("fixture decoded as error: {error}"),
    }
}

#[test]
fn fixture_decodes_with_envelope_info() {
    match serde_json::from_str::<ApiEnvelope>(FIXTURE).unwrap() {
        ApiEnvelope::Directory(directory) => {
            assert_eq!(directory.results.len(), 3);
            assert_eq!(directory.info.seed, "abc123");
            assert_eq!(directory.info.page, 1);
        }
        ApiEnvelope::Error { .. } => panic!("fixture decoded as error"),
    }
}

#[test]
fn renderer_produces_exactly_one_card_per_record() {
    colored::control::set_override(false);
    let employees = fixture_employees();
    let cards = view::gallery_cards(&employees);
    assert_eq!(cards.len(), employees.len());
}

#[test]
fn filtering_is_idempotent() {
    let employees = fixture_employees();
    let once = search::by_name(&employees, "nora");
    let twice = search::by_name(&once, "nora");
    assert_eq!(once, twice);
    // "nora jensen" and "norah walsh" both contain the substring.
    assert_eq!(once.len(), 2);
}

#[test]
fn filtering_matches_across_the_full_name() {
    let employees = fixture_employees();
    // The space between first and last is part of the haystack.
    let hit = search::by_name(&employees, "an mack");
    assert_eq!(hit.len(), 1);
    assert_eq!(hit[0].name.last, "mackay");
}

#[test]
fn filtering_never_mutates_the_original_list() {
    let employees = fixture_employees();
    let before = employees.clone();
    let subset = search::by_name(&employees, "walsh");
    assert_eq!(subset.len(), 1);
    assert_eq!(employees, before);
}

#[test]
fn empty_query_returns_the_whole_list() {
    let employees = fixture_employees();
    assert_eq!(search::by_name(&employees, "  ").len(), employees.len());
}

#[test]
fn regex_filter_is_case_insensitive_and_validates_patterns() {
    let employees = fixture_employees();
    let hits = search::by_name_regex(&employees, "^NORA").unwrap();
    assert_eq!(hits.len(), 2);
    assert!(search::by_name_regex(&employees, "(unclosed").is_err());
}

#[test]
fn locality_label_follows_the_north_america_rule() {
    let employees = fixture_employees();
    assert_eq!(employees[0].locality(), "Denmark");
    assert_eq!(employees[1].locality(), "Ontario");
    assert_eq!(employees[2].locality(), "Oregon");
}

#[test]
fn pager_index_stays_in_bounds_under_any_sequence() {
    let employees = fixture_employees();
    let mut pager = Pager::open(employees.len(), 0).unwrap();
    let moves = [false, false, true, true, true, true, false, true, false];
    for forward in moves {
        if forward {
            pager.next();
        } else {
            pager.prev();
        }
        assert!(pager.index() < employees.len());
    }
}

#[test]
fn session_filter_and_reset_round_trip() {
    let employees = fixture_employees();
    let mut session = Session::new(employees.clone());

    assert_eq!(session.apply_filter("jensen"), 1);
    assert_eq!(session.active().len(), 1);
    assert_eq!(session.query(), Some("jensen"));
    assert_eq!(session.all().len(), employees.len());

    // Filtering again re-derives from the full list, not the subset.
    assert_eq!(session.apply_filter("walsh"), 1);
    assert_eq!(session.active()[0].name.last, "walsh");

    session.reset();
    assert_eq!(session.active().len(), employees.len());
    assert!(session.query().is_none());
}

#[test]
fn session_open_respects_the_active_subset() {
    let employees = fixture_employees();
    let mut session = Session::new(employees);
    session.apply_filter("no-such-person");
    assert!(session.open(0).is_none());

    session.reset();
    let pager = session.open(10).unwrap();
    assert_eq!(pager.index(), session.active().len() - 1);
}

#[test]
fn export_records_flatten_the_derived_fields() {
    let employees = fixture_employees();
    let records = output::build_records(&employees);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].name, "Nora Jensen");
    assert_eq!(records[0].locality, "Denmark");
    assert_eq!(records[0].postcode, "51225");
    assert_eq!(records[0].birthday, "1993-07-20");
    assert_eq!(records[1].locality, "Ontario");
}

#[test]
fn html_export_embeds_every_record() {
    let employees = fixture_employees();
    let records = output::build_records(&employees);
    let html = String::from_utf8(output::render_html(&records)).unwrap();
    assert!(html.contains("Nora Jensen"));
    assert!(html.contains("Logan Mackay"));
    assert!(html.contains("Norah Walsh"));
    assert!(html.contains("directory-data"));
}

#[test]
fn csv_export_has_a_header_and_one_row_per_record() {
    let employees = fixture_employees();
    let records = output::build_records(&employees);
    let csv = String::from_utf8(output::render_csv(&records)).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), records.len() + 1);
    assert!(lines[0].starts_with("name,email,phone"));
    assert!(lines[3].contains("norah.walsh@example.com"));
}
