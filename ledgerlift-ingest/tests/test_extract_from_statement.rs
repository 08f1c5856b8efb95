use ledgerlift_core::{CurrencyFormat, RunningBalance};
use ledgerlift_ingest::{
    ClassifierRules, Extractor, LineClassifier, LineOutcome, LinePattern, SkipReason, split_pages,
};
use rust_decimal::Decimal;
use std::str::FromStr;

const STATEMENT: &str = "\
Acme Bank plc
Statement Date: 01 Jan - 31 Jan
Date Type Description Amount Balance
01 Jan Opening balance 5,000.00 4,000.00
12 Jan DEP Salary payment 1,000.00 5,000.00
13 Jan DEB Grocery store 45.50 4,954.50
14 Jan Interest credit 2.00 4,956.50
Page 1 of 2
\u{000C}
Orig date 14 Jan
20 Jan SO Rent - Flat 2B 1,200.00 3,756.50
21 Jan Refund, corner shop 3,756.50 7,513.00
Totals 6,004.00 7,513.00
";

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn rows(ex: &ledgerlift_ingest::Extraction) -> Vec<[&str; 4]> {
    ex.records.iter().map(|r| r.columns()).collect()
}

#[test]
fn test_full_statement() {
    let ex = Extractor::default().run(split_pages(STATEMENT)).unwrap();

    assert_eq!(
        rows(&ex),
        vec![
            ["12 Jan", "DEP", "Salary payment", "$1,000.00"],
            ["13 Jan", "DEB", "Grocery store", "-$45.50"],
            ["14 Jan", "", "Interest credit", "$2.00"],
            ["20 Jan", "SO", "Rent - Flat 2B", "-$1,200.00"],
            ["21 Jan", "", "Refund, corner shop", "$3,756.50"],
        ]
    );
    assert_eq!(ex.len(), 5);
    assert_eq!(ex.stats.pages, 2);
    assert_eq!(ex.stats.matched_typed, 3);
    assert_eq!(ex.stats.matched_untyped, 2);
    assert_eq!(ex.closing.get(), Some(d("7513.00")));
}

#[test]
fn test_scenarios_as_fold_steps() {
    let ex = Extractor::default();

    // A: first line, no prior balance -> credit
    let (state, a) = ex
        .step(RunningBalance::unset(), "12 Jan DEP Salary payment 1,000.00 5,000.00")
        .unwrap();
    let LineOutcome::Accepted { pattern, record } = a else {
        panic!("scenario A should be accepted");
    };
    assert_eq!(pattern, LinePattern::Typed);
    assert_eq!(record.columns(), ["12 Jan", "DEP", "Salary payment", "$1,000.00"]);
    assert_eq!(state.get(), Some(d("5000.00")));

    // B: balance drops -> debit
    let (state, b) = ex
        .step(state, "13 Jan DEB Grocery store 45.50 4,954.50")
        .unwrap();
    let LineOutcome::Accepted { record, .. } = b else {
        panic!("scenario B should be accepted");
    };
    assert_eq!(record.columns(), ["13 Jan", "DEB", "Grocery store", "-$45.50"]);

    // C: header line -> skipped, state unchanged
    let (after_c, c) = ex.step(state, "Statement Date: 01 Jan - 31 Jan").unwrap();
    assert_eq!(c, LineOutcome::Skipped(SkipReason::HeaderKeyword));
    assert_eq!(after_c, state);

    // D: untyped, balance rises -> credit
    let (state, dd) = ex.step(after_c, "14 Jan Interest credit 2.00 4,956.50").unwrap();
    let LineOutcome::Accepted { pattern, record } = dd else {
        panic!("scenario D should be accepted");
    };
    assert_eq!(pattern, LinePattern::Untyped);
    assert_eq!(record.columns(), ["14 Jan", "", "Interest credit", "$2.00"]);
    assert_eq!(state.get(), Some(d("4956.50")));
}

#[test]
fn test_sign_follows_balance_moves() {
    let balances = ["100.00", "90.00", "90.00", "1,090.00", "1,089.99", "5.00", "5.01"];
    let text: String = balances
        .iter()
        .enumerate()
        .map(|(i, b)| format!("{} Mar Row {} 1.00 {}\n", i + 1, i, b))
        .collect();

    let ex = Extractor::default().run_text(&text).unwrap();
    assert_eq!(ex.len(), balances.len());

    assert!(!ex.records[0].is_debit(), "first line is always a credit");
    for i in 1..balances.len() {
        let dropped = ex.records[i].balance < ex.records[i - 1].balance;
        assert_eq!(ex.records[i].is_debit(), dropped, "row {i}");
    }
}

#[test]
fn test_rerun_is_identical() {
    let ex = Extractor::default();
    let first = ex.run(split_pages(STATEMENT)).unwrap();
    let second = ex.run(split_pages(STATEMENT)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_typed_kind_is_uppercase_code() {
    let ex = Extractor::default().run(split_pages(STATEMENT)).unwrap();
    for r in &ex.records {
        assert!(
            r.kind.is_empty()
                || ((2..=4).contains(&r.kind.len())
                    && r.kind.chars().all(|c| c.is_ascii_uppercase())),
            "bad type code {:?}",
            r.kind
        );
    }
}

#[test]
fn test_pages_without_text() {
    let pages = vec![None, Some("9 Feb CHG Card fee 3.00 97.00".to_string()), None];
    let ex = Extractor::default().run(pages).unwrap();
    assert_eq!(ex.len(), 1);
    assert_eq!(ex.stats.empty_pages, 2);
    assert_eq!(ex.records[0].amount, "$3.00");
}

#[test]
fn test_narrative_only_document() {
    let ex = Extractor::default()
        .run_text("Dear customer,\nthank you for banking with us.\n")
        .unwrap();
    assert!(ex.is_empty());
    assert_eq!(ex.stats.skipped, 2);
}

#[test]
fn test_every_matched_line_resolves() {
    let classifier = LineClassifier::default();
    let lines = [
        "12 Jan DEP Salary 1,000.00 5,000.00",
        "13 Jan DEB Shop \u{0664}\u{0665}.\u{0665}\u{0660} 4,954.50",
        "14 Jan Windfall 1.00 999,999,999,999,999,999,999,999.99",
        "15 Jan Loss 1.00 100,000,000,000,000,000,000,000,000,000.00",
        "16 Jan CHG Fee 0.00 0.00",
    ];

    let ex = Extractor::default();
    let mut state = RunningBalance::unset();
    for line in lines {
        let matched = classifier.classify(line).is_match();
        let (next, outcome) = ex.step(state, line).expect("matched lines always resolve");
        assert_eq!(matched, matches!(outcome, LineOutcome::Accepted { .. }), "{line}");
        state = next;
    }

    let out = ex.run_text(&lines.join("\n")).unwrap();
    assert_eq!(out.len(), 3);
}

#[test]
fn test_custom_symbol_and_rules() {
    let ex = Extractor::new(
        LineClassifier::new(ClassifierRules {
            header_prefixes: vec!["Buchung".to_string()],
            skip_markers: vec!["Seite".to_string()],
        }),
        CurrencyFormat::new("€"),
    );
    let out = ex
        .run_text("Buchung Text Betrag Saldo\n1 Apr Miete 800.00 1,200.00\n2 Apr Kaffee 2.50 1,197.50\nSeite 1\n")
        .unwrap();
    assert_eq!(out.records[0].amount, "€800.00");
    assert_eq!(out.records[1].amount, "-€2.50");
}
