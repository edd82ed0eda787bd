use curp_analysis::entities::{ENTITIES, UNKNOWN_ENTITY};
use curp_analysis::report::SHAPE_MESSAGE;
use curp_analysis::{Field, Outcome, analyze_curp};
use proptest::prelude::*;

/// 18 characters from `[A-Z0-9]` with at least one letter.
fn shaped_code() -> impl Strategy<Value = String> {
    "[A-Z0-9]{17}".prop_flat_map(|rest| {
        ("[A-Z]", 0..18usize).prop_map(move |(letter, at)| {
            let mut code = rest.clone();
            code.insert_str(at, &letter);
            code
        })
    })
}

/// Letters and digits laid out the way a real CURP is.
fn conforming_code() -> impl Strategy<Value = String> {
    "[A-Z]{4}[0-9]{6}[A-Z]{6}[0-9]{2}"
}

fn is_entity(code: &str) -> bool {
    ENTITIES.iter().any(|(known, _)| *known == code)
}

proptest! {
    #[test]
    fn wrong_length_is_a_shape_error(input in "[A-Z0-9]{0,40}".prop_filter("not 18", |s| s.len() != 18)) {
        let analysis = analyze_curp(&input);
        prop_assert_eq!(analysis.outcome(), Outcome::ShapeError);
        prop_assert_eq!(analysis.message(), SHAPE_MESSAGE);
        prop_assert!(analysis.tokens().is_empty());
        prop_assert!(analysis.descriptions().is_empty());
    }

    #[test]
    fn lowercase_is_a_shape_error(mut code in shaped_code(), at in 0..18usize, ch in "[a-z]") {
        code.replace_range(at..=at, &ch);
        prop_assert_eq!(analyze_curp(&code).outcome(), Outcome::ShapeError);
    }

    #[test]
    fn fields_partition_the_code(code in shaped_code()) {
        let analysis = analyze_curp(&code);
        prop_assert_ne!(analysis.outcome(), Outcome::ShapeError);
        prop_assert_eq!(analysis.tokens().len(), 12);
        prop_assert_eq!(analysis.descriptions().len(), 12);
        prop_assert_eq!(analysis.tokens().concat(), code);
    }

    #[test]
    fn analysis_is_idempotent(input in "\\PC{0,24}") {
        prop_assert_eq!(analyze_curp(&input), analyze_curp(&input));
    }

    #[test]
    fn sex_is_male_only_for_h(code in shaped_code()) {
        let analysis = analyze_curp(&code);
        let expected = if code.as_bytes()[10] == b'H' { "Male" } else { "Female" };
        prop_assert_eq!(analysis.descriptions()[6], expected);
    }

    #[test]
    fn conforming_codes_are_valid(code in conforming_code()) {
        prop_assert_eq!(analyze_curp(&code).outcome(), Outcome::Valid);
    }

    #[test]
    fn wrong_class_in_place_is_a_grammar_mismatch(
        mut code in conforming_code(),
        at in 0..15usize,
        letter in "[A-Z]",
        digit in "[0-9]",
    ) {
        let swapped = if code.as_bytes()[at].is_ascii_digit() { letter } else { digit };
        code.replace_range(at..=at, &swapped);

        prop_assert_eq!(analyze_curp(&code).outcome(), Outcome::GrammarMismatch, "{}", code);
    }

    #[test]
    fn unlisted_entity_reads_as_placeholder(
        entity in "[A-Z]{2}".prop_filter("listed entity", |code| !is_entity(code)),
    ) {
        let code = format!("GOMJ800101H{entity}RRL01");
        let analysis = analyze_curp(&code);
        let parts = analysis.decomposition().expect("decomposed");

        prop_assert_eq!(parts.field(Field::BirthEntity), entity.as_str());
        prop_assert_eq!(parts.description(Field::BirthEntity), UNKNOWN_ENTITY);
        prop_assert_eq!(analysis.outcome(), Outcome::Valid);
    }
}
