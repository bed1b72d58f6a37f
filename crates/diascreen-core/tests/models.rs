use diascreen_core::models::credentials::Credentials;
use diascreen_core::models::patient::PatientForm;
use diascreen_core::models::prediction::{PREDICTION_FAILED_MESSAGE, PredictionResult};
use diascreen_core::models::profile::{Gender, UserProfile};
use diascreen_core::models::signup::SignupForm;

#[test]
fn gender_parses_wire_values_and_labels() {
    assert_eq!("prefer_not_to_say".parse::<Gender>().unwrap(), Gender::PreferNotToSay);
    assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
    assert!("robot".parse::<Gender>().is_err());
}

#[test]
fn user_profile_reads_service_json() {
    let json = r#"{
        "email": "ada@example.com",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "gender": "female",
        "age": 36,
        "nationality": "British"
    }"#;
    let profile: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.gender, Gender::Female);
    assert_eq!(profile.age, 36);
}

#[test]
fn credentials_debug_hides_password() {
    let rendered = format!("{:?}", Credentials::new("ada@example.com", "hunter2hunter2"));
    assert!(rendered.contains("ada@example.com"));
    assert!(!rendered.contains("hunter2"));
}

#[test]
fn patient_identity_trims_name_and_keeps_integral_age_integral() {
    let identity = PatientForm {
        name: "  Ada  ".to_string(),
        age: " 42 ".to_string(),
    }
    .identity()
    .unwrap();

    assert_eq!(identity.name, "Ada");
    assert_eq!(serde_json::to_value(&identity).unwrap()["age"], serde_json::json!(42));
}

#[test]
fn patient_identity_keeps_fractional_age() {
    let identity = PatientForm {
        name: "Ada".to_string(),
        age: "41.5".to_string(),
    }
    .identity()
    .unwrap();
    assert_eq!(identity.age.as_f64(), Some(41.5));
}

#[test]
fn signup_form_yields_profile_with_integer_age() {
    let form = SignupForm {
        email: "ada@example.com".to_string(),
        password: "correct-horse".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        gender: Some(Gender::Other),
        age: "30.9".to_string(),
        nationality: "British".to_string(),
    };
    let (password, profile) = form.to_profile().unwrap();
    assert_eq!(password, "correct-horse");
    assert_eq!(profile.age, 30);
    assert_eq!(profile.gender, Gender::Other);
}

#[test]
fn failure_result_uses_generic_text() {
    let result = PredictionResult::failure();
    assert!(result.is_error());
    assert_eq!(result.text, PREDICTION_FAILED_MESSAGE);
    assert!(!PredictionResult::prediction("Diabetic").is_error());
}
