use curp_analysis::entities::{ENTITIES, UNKNOWN_ENTITY};
use curp_analysis::report::{MISMATCH_MESSAGE, SHAPE_MESSAGE, VALID_MESSAGE};
use curp_analysis::{Analyzer, Field, Outcome, analyze, analyze_curp};

#[test]
fn well_formed_code_is_decomposed_and_accepted() {
    let analysis = analyze_curp("GOMJ800101HDFRRL01");
    let parts = analysis.decomposition().expect("decomposed");

    assert_eq!(analysis.outcome(), Outcome::Valid);
    assert_eq!(analysis.message(), VALID_MESSAGE);
    assert_eq!(analysis.tokens().len(), 12);
    assert!(analysis.tokens().iter().all(|t| !t.is_empty()));
    assert_eq!(parts.field(Field::BirthEntity), "DF");
    assert!(parts.description(Field::BirthEntity).contains("DISTRITO FEDERAL"));
    assert_eq!(parts.field(Field::Sex), "H");
    assert_eq!(parts.description(Field::Sex), "Male");
}

#[test]
fn short_input_is_a_shape_error() {
    let report = analyze("AB12");

    assert_eq!(report.outcome, Outcome::ShapeError);
    assert_eq!(report.message(), SHAPE_MESSAGE);
    assert!(report.tokens.is_empty());
    assert!(report.descriptions.is_empty());
    assert_eq!((report.total_letters, report.total_digits), (2, 2));
}

#[test]
fn leading_digit_block_is_a_grammar_mismatch() {
    let analysis = analyze_curp("1234800101HDFRRL01");

    assert_eq!(analysis.outcome(), Outcome::GrammarMismatch);
    assert_eq!(analysis.message(), MISMATCH_MESSAGE);
    assert_eq!(analysis.tokens().len(), 12);
    assert_eq!(analysis.descriptions().len(), 12);
}

#[test]
fn misplaced_classes_are_a_grammar_mismatch() {
    for input in ["12ABCD345678EFGHI9", "9ABCD12345X6EFGHI7", "ABCDX12345678EFGHI"] {
        let analysis = analyze_curp(input);
        assert_eq!(analysis.outcome(), Outcome::GrammarMismatch, "{input}");
        assert_eq!(analysis.tokens().concat(), input);
    }
}

#[test]
fn undefined_entity_uses_placeholder() {
    let analysis = analyze_curp("GOMJ800101HZZRRL01");
    let parts = analysis.decomposition().expect("decomposed");

    assert_eq!(parts.description(Field::BirthEntity), UNKNOWN_ENTITY);
    assert_eq!(analysis.outcome(), Outcome::Valid);
}

#[test]
fn every_entity_code_resolves_to_its_name() {
    for (code, name) in ENTITIES {
        let input = format!("GOMJ800101H{code}RRL01");
        let analysis = analyze_curp(&input);
        let parts = analysis.decomposition().expect("decomposed");
        assert_eq!(parts.description(Field::BirthEntity), name, "{code}");
    }
}

#[test]
fn free_form_input_is_normalized() {
    let report = analyze("\t lopm920315mnlprr05\n");

    assert_eq!(report.normalized, "LOPM920315MNLPRR05");
    assert_eq!(report.outcome, Outcome::Valid);
    assert_eq!(report.descriptions[6], "Female");
    assert_eq!(report.descriptions[7], "NUEVO LEÓN");
}

#[test]
fn inner_whitespace_survives_normalization() {
    let report = analyze("GOMJ 800101HDFRRL0");
    assert_eq!(report.outcome, Outcome::ShapeError);
    assert_eq!(report.total_digits, 7);
}

#[test]
fn analyzer_slice_matches_free_functions() {
    let analyzer = Analyzer::default();
    for input in ["GOMJ800101HDFRRL01", "AB12", "1234800101HDFRRL01"] {
        assert_eq!(analyzer.analyze(input), analyze(input));
        assert_eq!(analyzer.analyze_curp(input), analyze_curp(input));
    }
}
