#![cfg(feature = "core")]

use hubdev::core::*;

// ---------------------------------------------------------------------------
// CNPJ
// ---------------------------------------------------------------------------

#[test]
fn cnpj_receita_federal_fixture() {
    let cnpj = validate_cnpj("00000000000191").unwrap();
    assert_eq!(cnpj.as_str(), "00000000000191");
    assert_eq!(cnpj.formatted(), "00.000.000/0001-91");
}

#[test]
fn cnpj_all_ones_rejected() {
    let err = validate_cnpj("11111111111111").unwrap_err();
    assert_eq!(err.kind, IdentifierKind::Cnpj);
    assert_eq!(err.reason, "all digits are identical");
}

#[test]
fn cnpj_masked_input() {
    assert!(validate_cnpj("11.222.333/0001-81").is_ok());
    assert!(validate_cnpj(" 11 222 333 0001 81 ").is_ok());
}

#[test]
fn cnpj_letters_are_stripped_not_counted() {
    // Letters vanish; what remains must still be 14 valid digits.
    assert!(validate_cnpj("CNPJ 00000000000191").is_ok());
    assert!(validate_cnpj("0000000000019A").is_err());
}

#[test]
fn cnpj_second_known_valid() {
    assert!(validate_cnpj("11444777000161").is_ok());
    assert!(validate_cnpj("11444777000162").is_err());
}

// ---------------------------------------------------------------------------
// CPF
// ---------------------------------------------------------------------------

#[test]
fn cpf_fixture() {
    let cpf = validate_cpf("12345678909").unwrap();
    assert_eq!(cpf.formatted(), "123.456.789-09");
}

#[test]
fn cpf_all_ones_rejected() {
    assert!(validate_cpf("11111111111").is_err());
    assert!(validate_cpf("000.000.000-00").is_err());
}

#[test]
fn cpf_other_known_valid() {
    assert!(validate_cpf("529.982.247-25").is_ok());
    assert!(validate_cpf("529.982.247-26").is_err());
}

#[test]
fn cpf_error_message() {
    let err = validate_cpf("123").unwrap_err();
    assert_eq!(err.to_string(), "invalid CPF '123': expected 11 digits, got 3");
}

// ---------------------------------------------------------------------------
// CEP
// ---------------------------------------------------------------------------

#[test]
fn cep_hyphenated() {
    assert_eq!(validate_cep("01001-000").unwrap().as_str(), "01001000");
}

#[test]
fn cep_short() {
    assert!(validate_cep("123").is_err());
}

#[test]
fn cep_no_checksum() {
    assert!(validate_cep("99999999").is_ok());
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

#[test]
fn date_feb_31_invalid() {
    assert!(validate_date("31/02/1990").is_err());
}

#[test]
fn date_roundtrips() {
    let d = validate_date("01/01/1990").unwrap();
    assert_eq!(d.to_string(), "01/01/1990");
    assert_eq!(d.date(), chrono::NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
}

#[test]
fn date_wrong_pattern() {
    assert!(validate_date("01-01-1990").is_err());
    assert!(validate_date("1990/01/01").is_err());
    assert!(validate_date("").is_err());
}

#[test]
fn date_month_13() {
    assert!(validate_date("01/13/1990").is_err());
}

// ---------------------------------------------------------------------------
// Municipal code
// ---------------------------------------------------------------------------

#[test]
fn ibge_sao_paulo() {
    assert_eq!(validate_municipal_code("3550308").unwrap().to_string(), "3550308");
}

#[test]
fn ibge_non_numeric() {
    let err = validate_municipal_code("SP").unwrap_err();
    assert_eq!(err.kind, IdentifierKind::MunicipalCode);
}

// ---------------------------------------------------------------------------
// Identifier enum
// ---------------------------------------------------------------------------

#[test]
fn identifier_kinds() {
    for (kind, raw, normalized) in [
        (IdentifierKind::Cnpj, "00.000.000/0001-91", "00000000000191"),
        (IdentifierKind::Cpf, "123.456.789-09", "12345678909"),
        (IdentifierKind::Cep, "01001-000", "01001000"),
        (IdentifierKind::MunicipalCode, "3550308", "3550308"),
    ] {
        let id = Identifier::parse(kind, raw).unwrap();
        assert_eq!(id.kind(), kind);
        assert_eq!(id.raw(), raw);
        assert_eq!(id.normalized(), normalized);
    }
}

#[test]
fn parse_via_fromstr() {
    let cnpj: Cnpj = "00000000000191".parse().unwrap();
    let cpf: Cpf = "12345678909".parse().unwrap();
    let cep: Cep = "01001000".parse().unwrap();
    let code: MunicipalCode = "1".parse().unwrap();
    assert_eq!(
        (cnpj.as_str(), cpf.as_str(), cep.as_str(), code.as_str()),
        ("00000000000191", "12345678909", "01001000", "1")
    );
}
