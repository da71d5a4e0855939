use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use ttv_parser::{Event, EventTime, GoalType, JsonValue, Match, Report, ReportHead, Team};

const PLAYER: &str = "Owen Goal";

fn assert_event(event: Event, expected_type: &str) {
    let mut expected = json!({
        "event_type": expected_type,
        "time": {
            "regular": event.time.regular,
            "added": event.time.added,
        },
        "player": event.player,
        "team": event.team.to_string(),
    });
    if let ttv_parser::EventKind::Goal(goal_type) = &event.kind {
        expected["type"] = json!(goal_type.code());
    }
    assert_eq!(event.json_value().unwrap(), expected);
}

#[test]
fn test_event_types() {
    assert_event(Event::goal(EventTime::at(1), PLAYER, Team::Host, GoalType::OpenPlay), "GOAL");
    assert_event(Event::goal(EventTime::at(2), PLAYER, Team::Host, GoalType::OwnGoal), "OWN_GOAL");
    assert_event(Event::goal(EventTime::at(3), PLAYER, Team::Visitor, GoalType::Penalty), "PENALTY");
    assert_event(Event::missed_penalty(EventTime::at(4), PLAYER, Team::Visitor), "MISSED_PENALTY");
    assert_event(Event::red_card(EventTime::new(5, Some(1)), PLAYER, Team::Host), "RED_CARD");
}

#[test]
fn test_serialize_event() {
    let goal = Event::goal(EventTime::at(1), "PP", Team::Visitor, GoalType::OpenPlay);
    assert_eq!(
        serde_json::to_string(&goal).unwrap(),
        r#"{"event_type":"GOAL","time":{"regular":1,"added":null},"player":"PP","team":"Visitor","type":"m"}"#
    );
}

#[test]
fn test_unrecognized_goal_code_kept() {
    let goal = Event::goal(EventTime::at(7), PLAYER, Team::Host, GoalType::from_code("mo"));
    let value = goal.json_value().unwrap();
    assert_eq!(value["event_type"], "GOAL");
    assert_eq!(value["type"], "mo");
}

#[test]
fn test_serialize_match_and_head() {
    let m = Match {
        host: Some("Foo Utd".into()),
        visitor: Some("Barham".into()),
        kickoff: NaiveTime::from_hms_opt(9, 5, 0),
        ht_score: None,
        ft_score: None,
        events: Vec::new(),
    };
    let report = Report {
        head: ReportHead {
            competition: "SERIE A".into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            subpages: (1, 2),
        },
        body: vec![m],
    };
    assert_eq!(
        report.json_value().unwrap(),
        json!({
            "head": {"competition": "SERIE A", "date": "2024-05-01", "subpages": [1, 2]},
            "body": [{
                "host": "Foo Utd",
                "visitor": "Barham",
                "kickoff": "09.05",
                "ht_score": null,
                "ft_score": null,
                "events": []
            }]
        })
    );
}

#[test]
fn test_field_order_follows_declaration() {
    let m = Match {
        ht_score: Some((1, 0)),
        ft_score: Some((2, 1)),
        ..Match::default()
    };
    let json = serde_json::to_string(&m).unwrap();
    let positions: Vec<usize> = ["host", "visitor", "kickoff", "ht_score", "ft_score", "events"]
        .iter()
        .map(|field| json.find(&format!("\"{}\"", field)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", json);
    assert!(json.contains(r#""ht_score":[1,0]"#));
}
