#![forbid(unsafe_code)]
use chrono::{Datelike, NaiveDate, Weekday};
use roulement::{
    generate_schedule, prepare_report, ConflictKind, PlanError, PlanOptions, Schedule, Scheduler,
    ShiftLabel, ShiftTemplate, TextTable, WorkingDaySource,
};

fn roster(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

fn t(name: &str, hours: f64) -> ShiftTemplate {
    ShiftTemplate::new(name, hours)
}

fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

fn label(schedule: &Schedule, employee: &str, date: NaiveDate) -> String {
    schedule
        .get(employee)
        .and_then(|e| e.label_on(date))
        .map(|l| l.to_string())
        .unwrap_or_default()
}

fn scenario_b_options() -> PlanOptions {
    PlanOptions::new(vec![t("7-16", 9.0), t("8-17", 9.0)]).with_saturday(vec![t("8-13", 5.0)])
}

#[test]
fn weekdays_only_when_saturday_is_off() {
    let opts = PlanOptions::new(vec![t("7-16", 9.0)]);
    let schedule = generate_schedule(&roster(&["Ana", "Luis", "Eva"]), 2025, 3, &opts).unwrap();

    assert_eq!(schedule.employees.len(), 3);
    for person in &schedule.employees {
        assert_eq!(person.days.len(), 21);
        for day in &person.days {
            assert!(!matches!(day.date.weekday(), Weekday::Sat | Weekday::Sun));
            assert_eq!(day.label, ShiftLabel::Template(t("7-16", 9.0)));
        }
    }
    assert_eq!(schedule.employees_without_rest().len(), 3);
}

#[test]
fn cohorts_alternate_and_saturdays_use_their_rotation() {
    let schedule =
        generate_schedule(&roster(&["Ana", "Luis", "Eva"]), 2025, 3, &scenario_b_options()).unwrap();

    // Première semaine ISO = samedi 1er mars seul ; la semaine du 10 a l'index 2.
    assert_eq!(label(&schedule, "Ana", march(11)), "7-16");
    assert_eq!(label(&schedule, "Ana", march(18)), "8-17");
    assert_eq!(label(&schedule, "Ana", march(31)), "8-17");
    // Équipe A = 2 premiers noms, équipe B = Eva.
    assert_eq!(label(&schedule, "Luis", march(11)), "7-16");
    assert_eq!(label(&schedule, "Eva", march(11)), "8-17");
    assert_eq!(label(&schedule, "Eva", march(18)), "7-16");

    for person in &schedule.employees {
        assert_eq!(person.days.len(), 26);
        for day in person.days.iter().filter(|d| d.date.weekday() == Weekday::Sat) {
            assert_eq!(day.label.to_string(), "8-13");
        }
    }
}

#[test]
fn rest_days_follow_alphabetical_priority() {
    let schedule =
        generate_schedule(&roster(&["Ana", "Luis", "Eva"]), 2025, 3, &scenario_b_options()).unwrap();

    assert_eq!(schedule.get("Ana").unwrap().rest_days(), vec![march(3)]);
    assert_eq!(schedule.get("Eva").unwrap().rest_days(), vec![march(4)]);
    assert_eq!(schedule.get("Luis").unwrap().rest_days(), vec![march(5)]);
    assert!(Scheduler::new().audit(&schedule).unwrap().is_empty());
}

#[test]
fn unconfigured_saturdays_do_not_count_as_worked() {
    let opts = PlanOptions::new(vec![t("7-16", 9.0), t("8-17", 9.0)]).with_saturday(Vec::new());
    let schedule = generate_schedule(&roster(&["Ana", "Luis", "Eva"]), 2025, 3, &opts).unwrap();

    for person in &schedule.employees {
        for day in person.days.iter().filter(|d| d.date.weekday() == Weekday::Sat) {
            assert_eq!(day.label, ShiftLabel::NoTemplateConfigured);
        }
        let rests = person.rest_days();
        assert_eq!(rests.len(), 1);
        assert_ne!(rests[0].weekday(), Weekday::Sat);
    }
    assert_eq!(schedule.get("Ana").unwrap().rest_days(), vec![march(3)]);
}

#[test]
fn empty_weekday_rotation_is_rejected() {
    let opts = PlanOptions::new(Vec::new()).with_saturday(vec![t("8-13", 5.0)]);
    let err = generate_schedule(&roster(&["Ana"]), 2025, 3, &opts).unwrap_err();
    assert!(matches!(err, PlanError::InvalidConfiguration(_)));
}

#[test]
fn invalid_month_is_rejected() {
    let opts = PlanOptions::new(vec![t("7-16", 9.0)]);
    let err = generate_schedule(&roster(&["Ana"]), 2025, 0, &opts).unwrap_err();
    assert!(matches!(err, PlanError::InvalidMonth { year: 2025, month: 0 }));
}

#[test]
fn empty_roster_gives_empty_schedule() {
    let schedule = generate_schedule(&[], 2025, 3, &scenario_b_options()).unwrap();
    assert!(schedule.is_empty());
}

#[test]
fn generation_is_deterministic() {
    let names = roster(&["Ana", "Luis", "Eva", "Zoe", "Ben"]);
    let a = generate_schedule(&names, 2025, 3, &scenario_b_options()).unwrap();
    let b = generate_schedule(&names, 2025, 3, &scenario_b_options()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn cohort_b_is_one_step_ahead() {
    let opts = PlanOptions::new(vec![t("A", 8.0), t("B", 8.0), t("C", 8.0)]);
    let names = roster(&["p1", "p2", "p3", "p4", "p5"]);
    let schedule = generate_schedule(&names, 2025, 3, &opts).unwrap();

    // Samedi non travaillé : la semaine du 3 mars a l'index 0, celle du 10 l'index 1.
    for name in ["p1", "p2", "p3"] {
        assert_eq!(label(&schedule, name, march(3)), "A");
        assert_eq!(label(&schedule, name, march(12)), "B");
    }
    for name in ["p4", "p5"] {
        assert_eq!(label(&schedule, name, march(3)), "B");
        assert_eq!(label(&schedule, name, march(12)), "C");
    }
}

#[test]
fn single_template_is_shared_by_both_cohorts() {
    let opts = PlanOptions::new(vec![t("7-16", 9.0)]);
    let schedule = generate_schedule(&roster(&["Ana", "Luis"]), 2025, 3, &opts).unwrap();
    assert_eq!(label(&schedule, "Ana", march(12)), "7-16");
    assert_eq!(label(&schedule, "Luis", march(12)), "7-16");
}

#[test]
fn friday_rotation_overrides_weekday_template() {
    let opts = PlanOptions::new(vec![t("7-16", 9.0)]).with_friday(vec![t("8-12", 4.0), t("8-13", 5.0)]);
    let schedule = generate_schedule(&roster(&["Ana", "Luis"]), 2025, 3, &opts).unwrap();

    assert_eq!(label(&schedule, "Ana", march(6)), "7-16");
    assert_eq!(label(&schedule, "Ana", march(7)), "8-12");
    assert_eq!(label(&schedule, "Luis", march(7)), "8-13");
    assert_eq!(label(&schedule, "Ana", march(14)), "8-13");
    assert_eq!(label(&schedule, "Luis", march(14)), "8-12");
}

#[test]
fn january_weeks_keep_calendar_order() {
    // 2027-01-01 tombe en semaine ISO 53 de 2026 : elle reste la première.
    let opts = PlanOptions::new(vec![t("T0", 8.0), t("T1", 8.0)]);
    let schedule = generate_schedule(&roster(&["Ana"]), 2027, 1, &opts).unwrap();
    let jan = |d| NaiveDate::from_ymd_opt(2027, 1, d).unwrap();
    assert_eq!(label(&schedule, "Ana", jan(1)), "T0");
    assert_eq!(label(&schedule, "Ana", jan(4)), "T1");
}

#[test]
fn december_tail_in_next_iso_year_rotates_last() {
    // 29-31 décembre 2025 = semaine ISO 1 de 2026 : dernier index de rotation.
    let opts = PlanOptions::new(vec![t("T0", 8.0), t("T1", 8.0)]);
    let schedule = generate_schedule(&roster(&["Ana"]), 2025, 12, &opts).unwrap();
    let dec = |d| NaiveDate::from_ymd_opt(2025, 12, d).unwrap();
    assert_eq!(label(&schedule, "Ana", dec(1)), "T0");
    assert_eq!(label(&schedule, "Ana", dec(8)), "T1");
    assert_eq!(label(&schedule, "Ana", dec(22)), "T1");
    assert_eq!(label(&schedule, "Ana", dec(29)), "T0");
    assert_eq!(label(&schedule, "Ana", dec(31)), "T0");
}

#[test]
fn saturday_templates_rotate_weekly_for_both_cohorts() {
    let opts = PlanOptions::new(vec![t("7-16", 9.0), t("8-17", 9.0)]).with_saturday(vec![
        t("S0", 5.0),
        t("S1", 5.0),
        t("S2", 5.0),
    ]);
    let schedule = generate_schedule(&roster(&["Ana", "Luis", "Eva"]), 2025, 3, &opts).unwrap();

    let saturdays = [1, 8, 15, 22, 29];
    for name in ["Ana", "Luis", "Eva"] {
        let labels: Vec<String> = saturdays
            .iter()
            .map(|&d| label(&schedule, name, march(d)))
            .collect();
        assert_eq!(labels, ["S0", "S1", "S2", "S0", "S1"], "{name}");
    }
}

#[test]
fn at_most_two_rests_per_date() {
    let names: Vec<String> = (1..=13).map(|i| format!("E{i:02}")).collect();
    let schedule = generate_schedule(&names, 2025, 3, &scenario_b_options()).unwrap();

    for d in 3..=8 {
        assert_eq!(schedule.rest_count_on(march(d)), 2);
    }
    assert_eq!(schedule.get("E13").unwrap().rest_days(), vec![march(10)]);
    for person in &schedule.employees {
        assert_eq!(person.rest_days().len(), 1);
    }
}

#[test]
fn saturated_full_weeks_leave_last_employee_without_rest() {
    // 4 semaines complètes x 6 jours x 2 places = 48 repos possibles.
    let names: Vec<String> = (0..49).map(|i| format!("E{i:02}")).collect();
    let schedule = generate_schedule(&names, 2025, 3, &scenario_b_options()).unwrap();

    assert_eq!(schedule.employees_without_rest(), vec!["E48"]);
    assert_eq!(schedule.rest_count_on(march(31)), 0);
    assert!(Scheduler::new().audit(&schedule).unwrap().is_empty());
}

#[test]
fn audit_flags_edited_schedules() {
    let mut schedule =
        generate_schedule(&roster(&["Ana", "Luis", "Eva"]), 2025, 3, &scenario_b_options()).unwrap();
    for person in &mut schedule.employees {
        let day = person.days.iter_mut().find(|d| d.date == march(10)).unwrap();
        day.label = ShiftLabel::RestDay;
    }
    schedule.get_mut("Ana").unwrap().days.retain(|d| d.date != march(12));

    let conflicts = Scheduler::new().audit(&schedule).unwrap();
    assert!(conflicts
        .iter()
        .any(|c| c.date == Some(march(10)) && c.kind == ConflictKind::RestCapExceeded { count: 3 }));
    assert_eq!(
        conflicts
            .iter()
            .filter(|c| c.kind == ConflictKind::MultipleRestDays { count: 2 })
            .count(),
        3
    );
    assert!(conflicts.iter().any(|c| c.employee.as_deref() == Some("Ana")
        && c.date == Some(march(12))
        && c.kind == ConflictKind::MissingDay));
}

#[test]
fn audit_flags_rest_when_saturday_is_off() {
    let opts = PlanOptions::new(vec![t("7-16", 9.0)]);
    let mut schedule = generate_schedule(&roster(&["Ana"]), 2025, 3, &opts).unwrap();
    schedule.employees[0].days[0].label = ShiftLabel::RestDay;

    let conflicts = Scheduler::new().audit(&schedule).unwrap();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].kind, ConflictKind::RestWithoutSaturdayWork);
}

/// Une seule semaine, dimanche compris.
struct OneWeek;

impl WorkingDaySource for OneWeek {
    fn month_days(&self, _year: i32, _month: u32) -> Result<Vec<NaiveDate>, PlanError> {
        Ok((3..=9).map(march).collect())
    }
}

#[test]
fn custom_source_and_text_report() {
    let opts = PlanOptions::new(vec![t("7-16", 9.0)]).with_saturday(vec![t("8-13", 5.0)]);
    let schedule = Scheduler::with_source(OneWeek)
        .generate(&roster(&["Ana"]), 2025, 3, &opts)
        .unwrap();

    let report = prepare_report(&schedule, "Ana", &TextTable).unwrap();
    assert_eq!(report.rest_days, 1);
    insta::assert_snapshot!(report.content, @r"
    Ana
    2025-03-03 Monday    REST DAY              0.00
    2025-03-04 Tuesday   7-16                  9.00
    2025-03-05 Wednesday 7-16                  9.00
    2025-03-06 Thursday  7-16                  9.00
    2025-03-07 Friday    7-16                  9.00
    2025-03-08 Saturday  8-13                  5.00
    ");

    assert!(prepare_report(&schedule, "Nobody", &TextTable).is_err());
}
