use curp_kernel::SAFE_ALPHABET;
use curp_kernel::safe_nanoid;

#[test]
fn generates_expected_length_and_charset() {
    let id = safe_nanoid!();
    assert_eq!(id.len(), 12);
    assert!(id.chars().all(|ch| SAFE_ALPHABET.contains(&ch)), "unexpected character in {id}");
}

#[test]
fn custom_length() {
    assert_eq!(safe_nanoid!(20).len(), 20);
}

#[test]
fn ids_do_not_repeat() {
    let first = safe_nanoid!();
    let second = safe_nanoid!();
    assert_ne!(first, second);
}
