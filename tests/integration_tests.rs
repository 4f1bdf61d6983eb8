//! Integration tests for nuban-predictor

use nuban_predictor::{
    default_predictor, find_matching_banks, is_account_valid, predict, BankPredictor, InputKind,
    Institution, InstitutionDirectory, PredictionRules, PredictorError, StaticDirectory,
};

const MONIEPOINT: &str = "MONIEPOINT MICROFINANCE BANK";

fn names(institutions: &[Institution]) -> Vec<&str> {
    institutions.iter().map(|i| i.name.as_str()).collect()
}

fn bundled_fintechs() -> Vec<Institution> {
    StaticDirectory::bundled().unwrap().fintechs().to_vec()
}

#[test]
fn test_moniepoint_first_for_prefixed_nuban() {
    let result = predict("5600000011").unwrap();

    assert!(!result.is_empty());
    assert_eq!(result[0].name, MONIEPOINT);
    assert_eq!(result[0].code, "50515");
}

#[test]
fn test_full_ranking_for_prefixed_nuban() {
    let result = predict("5600000011").unwrap();

    assert_eq!(
        names(&result),
        vec![
            MONIEPOINT,
            "PAGA",
            "GTBANK PLC",
            "SMARTCASH PAYMENT SERVICE BANK",
            "TITAN TRUST BANK",
            "FIDELITY BANK",
        ]
    );
}

#[test]
fn test_popular_banks_prioritized() {
    let result = predict("0000000017").unwrap();

    assert_eq!(
        names(&result),
        vec![
            "PALMPAY",
            "UNITED BANK FOR AFRICA",
            "9 Payment Service Bank",
            "FIRST BANK OF NIGERIA",
            "ACCESS BANK",
        ]
    );
}

#[test]
fn test_unpopular_banks_keep_table_order() {
    let result = predict("0123456789").unwrap();

    assert_eq!(
        names(&result),
        vec![
            "ECOBANK",
            "Fairmoney Microfinance Bank",
            "FIRST CITY MONUMENT BANK",
            "PARALLEX BANK",
            "TAJ BANK",
            "VFD MICROFINANCE BANK",
        ]
    );
}

#[test]
fn test_all_matches_returned() {
    let result = predict("6175115121").unwrap();

    assert!(result.len() > 1);
    assert!(result.iter().any(|b| b.name == "9 Payment Service Bank"));
}

#[test]
fn test_every_candidate_is_checksum_valid() {
    for input in ["5600000011", "0000000017", "1111111111", "0123456789"] {
        for bank in predict(input).unwrap() {
            assert!(is_account_valid(input, &bank.code), "{} / {}", input, bank.name);
        }
    }
}

#[test]
fn test_invalid_length_returns_empty() {
    assert!(predict("12345").unwrap().is_empty());
    assert!(predict("123456789012").unwrap().is_empty());
}

#[test]
fn test_non_numeric_input_returns_empty() {
    assert!(predict("abcdefghij").unwrap().is_empty());
}

#[test]
fn test_generic_phone_returns_base_fintechs() {
    let result = predict("8012345678").unwrap();
    assert_eq!(result, bundled_fintechs());
}

#[test]
fn test_phone_with_90_prefix_appends_moniepoint() {
    let base = bundled_fintechs();
    let result = predict("9012345678").unwrap();

    assert_eq!(result.len(), base.len() + 1);
    assert_eq!(&result[..base.len()], base.as_slice());
    assert_eq!(result[base.len()], Institution::new(MONIEPOINT, "50515"));
}

#[test]
fn test_phone_with_81_prefix_appends_moniepoint() {
    let base = bundled_fintechs();
    let result = predict("8112345678").unwrap();

    assert_eq!(result.len(), base.len() + 1);
    assert_eq!(result.last().unwrap().name, MONIEPOINT);
    assert_eq!(result.last().unwrap().code, "50515");
}

#[test]
fn test_phone_takes_precedence_over_nuban() {
    let input = "9000000001";
    let directory = StaticDirectory::bundled().unwrap();

    // Checksum-valid for several banks, but it reads as 09000000001
    assert!(!find_matching_banks(input, directory.banks()).is_empty());

    let prediction = default_predictor().unwrap().predict_detailed(input).unwrap();
    assert_eq!(prediction.kind, InputKind::PhoneNumber);
    assert_eq!(prediction.institutions.len(), directory.fintechs().len() + 1);
}

#[test]
fn test_empty_input_is_an_error() {
    assert!(matches!(predict(""), Err(PredictorError::MissingInput)));
}

#[test]
fn test_repeated_predictions_are_identical() {
    for input in ["5600000011", "9012345678", "0000000017", "12345"] {
        let first = predict(input).unwrap();
        let second = predict(input).unwrap();
        assert_eq!(first, second);
    }

    // The appended phone entry must not leak into the fintech table
    let before = default_predictor().unwrap().directory().fintechs().to_vec();
    predict("9012345678").unwrap();
    assert_eq!(default_predictor().unwrap().directory().fintechs(), before.as_slice());
}

#[test]
fn test_custom_tables_and_rules() {
    let directory = StaticDirectory::from_json(
        r#"{ "data": [
            { "name": "Access Bank", "code": "044" },
            { "name": "First Bank", "code": "011" },
            { "name": "Broken", "code": "99" }
        ] }"#,
        r#"{ "data": [ { "name": "OPay", "code": "999992" } ] }"#,
    )
    .unwrap();

    let rules = PredictionRules::from_json(
        r#"{
            "popular_banks": ["First Bank"],
            "phone_extra": { "name": "Moniepoint MFB", "code": "50515" }
        }"#,
    )
    .unwrap();

    let predictor = BankPredictor::new(directory).with_rules(rules);

    assert_eq!(
        names(&predictor.predict("0000000017").unwrap()),
        vec!["First Bank", "Access Bank"]
    );
    assert_eq!(
        names(&predictor.predict("9012345678").unwrap()),
        vec!["OPay", "Moniepoint MFB"]
    );
}

#[test]
fn test_prediction_serializes() {
    let prediction = default_predictor()
        .unwrap()
        .predict_detailed("5600000011")
        .unwrap();

    let json = serde_json::to_value(&prediction).unwrap();
    assert_eq!(json["kind"], "nuban");
    assert_eq!(json["institutions"][0]["name"], MONIEPOINT);
    assert_eq!(json["input"], "5600000011");
}
