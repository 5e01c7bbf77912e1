//! Integration tests for the document validators

use brazilian_utils_documents::generator::STATE_REGION_DIGITS;
use brazilian_utils_documents::{
    boleto, cep, cnpj, cpf, extract_digits, Boleto, Cnpj, Cpf, CpfGenerator, DocumentEngine,
    DocumentError, DocumentKind,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_empty_and_absent_follow_required_flag() {
    init_tracing();

    for is_required in [true, false] {
        for value in [None, Some("")] {
            assert_eq!(cpf::is_valid(value, is_required), !is_required);
            assert_eq!(cnpj::is_valid(value, is_required), !is_required);
            assert_eq!(boleto::is_valid(value, is_required), !is_required);
        }

        // Whitespace is present input with no digits
        assert!(!cpf::is_valid(Some("   "), is_required));
        assert!(!cnpj::is_valid(Some("   "), is_required));
        assert!(!boleto::is_valid(Some("   "), is_required));
    }
}

#[test]
fn test_repeated_digits_rejected_for_tax_ids() {
    init_tracing();

    for d in 0..=9 {
        let digit = char::from_digit(d, 10).unwrap();
        let cpf_value: String = std::iter::repeat(digit).take(11).collect();
        let cnpj_value: String = std::iter::repeat(digit).take(14).collect();

        assert_eq!(
            Cpf::parse(&cpf_value),
            Err(DocumentError::RepeatedDigits(DocumentKind::Cpf))
        );
        assert_eq!(
            Cnpj::parse(&cnpj_value),
            Err(DocumentError::RepeatedDigits(DocumentKind::Cnpj))
        );
    }
}

#[test]
fn test_reference_values() {
    init_tracing();

    assert!(cpf::is_valid(Some("01234567890"), true));
    assert!(!cpf::is_valid(Some("11111111111"), true));
    assert!(!cpf::is_valid(Some("11257245286"), true));

    assert!(cnpj::is_valid(Some("81.202.136/0001-86"), true));
    assert!(!cnpj::is_valid(Some("77173389000163"), true));
}

#[test]
fn test_boleto_block_digit_change_invalidates() {
    init_tracing();

    let valid = "0019000009 01149.718601 68524.522114 6 75860000102656";
    let tampered = "0019000009 01149.718601 68524.522112 6 75860000102656";

    assert!(boleto::is_valid(Some(valid), true));
    assert!(!boleto::is_valid(Some(tampered), true));
}

#[test]
fn test_boleto_barcode_matches_digitable_line() {
    init_tracing();

    for line in [
        "0019000009 01149.718601 68524.522114 6 75860000102656",
        "42297 03006 00002 695286 85088 140422 1 75840000044415",
        "00198.10001 00030.212237 00217.236553 1 35742800321323",
    ] {
        let barcode = boleto::digitable_line_to_barcode(line).unwrap();
        assert_eq!(barcode.len(), 44);
        assert!(boleto::is_valid(Some(&barcode), true), "Barcode should be valid: {}", barcode);
        assert_eq!(Boleto::parse(line).unwrap(), Boleto::parse(&barcode).unwrap());
    }
}

#[test]
fn test_format_roundtrip_for_valid_values() {
    init_tracing();

    let mut generator = CpfGenerator::seeded(11);
    for _ in 0..200 {
        let value = generator.generate("");
        assert_eq!(extract_digits(&cpf::format(&value)), value);
    }

    for value in ["81202136000186", "46238497000181", "18240603000126", "13723705000189"] {
        assert!(cnpj::is_valid(Some(value), true));
        assert_eq!(extract_digits(&cnpj::format(value)), value);
    }

    assert_eq!(extract_digits(&cep::format("92500000")), "92500000");
}

#[test]
fn test_generated_cpfs_with_random_states() {
    init_tracing();

    let mut picker = StdRng::seed_from_u64(5);
    let mut generator = CpfGenerator::seeded(6);

    for _ in 0..1000 {
        let (state, digit) = STATE_REGION_DIGITS[picker.gen_range(0..STATE_REGION_DIGITS.len())];
        let generated = generator.generate(state);

        assert_eq!(generated.len(), 11);
        assert!(cpf::is_valid(Some(&generated), true), "Generated CPF should be valid: {}", generated);
        assert_eq!(generated.chars().nth(8).and_then(|c| c.to_digit(10)), Some(digit));
    }
}

#[test]
fn test_generate_with_thread_rng() {
    init_tracing();

    for _ in 0..1000 {
        let generated = cpf::generate("");
        assert_eq!(generated.len(), 11);
        assert!(cpf::is_valid(Some(&generated), true), "Generated CPF should be valid: {}", generated);
    }
}

#[test]
fn test_identifiers_in_json_payload() {
    init_tracing();

    #[derive(serde::Deserialize)]
    struct Customer {
        cpf: Cpf,
        company: Option<Cnpj>,
    }

    let customer: Customer =
        serde_json::from_str(r#"{"cpf": "012.345.678-90", "company": "81.202.136/0001-86"}"#)
            .unwrap();
    assert_eq!(customer.cpf.as_str(), "01234567890");
    assert_eq!(customer.company.unwrap().root(), "81202136");

    let invalid = serde_json::from_str::<Customer>(r#"{"cpf": "11257245286", "company": null}"#);
    let message = invalid.err().unwrap().to_string();
    assert!(message.contains("Invalid CPF check digit"), "unexpected error: {}", message);
}
