use lwe_cipher::errors::LweCipherError;
use lwe_cipher::{CharsetPolicy, EncryptedData, EncryptionEngine, EngineConfig};

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn default_engine() -> EncryptionEngine {
    EncryptionEngine::try_with(EngineConfig::with_dimensions(64, 128, 2053)).unwrap()
}

#[test]
fn hi_with_password123_round_trips() -> Result<(), LweCipherError> {
    let engine = default_engine();

    let encrypted = engine.encrypt("Hi", Some("password123"), None)?;
    let bundle = EncryptedData {
        data: encrypted.data.clone(),
        params: encrypted.params.clone(),
    };

    assert_eq!(engine.decrypt(&bundle, Some("password123"))?, "Hi");
    Ok(())
}

#[test]
fn wrong_password_does_not_recover_message() -> Result<(), LweCipherError> {
    let engine = default_engine();
    let message = "Pesan rahasia saya";

    let encrypted = engine.encrypt(message, Some("password123"), None)?;
    match engine.decrypt(&encrypted, Some("password124")) {
        Ok(recovered) => assert_ne!(recovered, message),
        Err(LweCipherError::MalformedCiphertext(_)) => {}
        Err(e) => return Err(e),
    }
    Ok(())
}

#[test]
fn explicit_params_are_reused_verbatim() -> Result<(), LweCipherError> {
    let engine = default_engine();
    let first = engine.encrypt("first message", Some("pw"), None)?;

    let second = engine.encrypt("second message", Some("pw"), Some(&first.params))?;
    let third = engine.encrypt("first message", Some("pw"), Some(&first.params))?;

    assert_eq!(second.params, first.params);
    assert_eq!(third, first);
    assert_eq!(engine.decrypt(&second, Some("pw"))?, "second message");
    Ok(())
}

#[test]
fn fresh_params_differ_between_calls() -> Result<(), LweCipherError> {
    let engine = default_engine();

    let one = engine.encrypt("identical", Some("pw"), None)?;
    let two = engine.encrypt("identical", Some("pw"), None)?;

    assert_ne!(one.params.A, two.params.A);
    assert_ne!(one.data, two.data);
    assert_eq!(engine.decrypt(&one, Some("pw"))?, "identical");
    assert_eq!(engine.decrypt(&two, Some("pw"))?, "identical");
    Ok(())
}

#[test]
fn message_longer_than_b_cycles() -> Result<(), LweCipherError> {
    let engine = EncryptionEngine::try_with(EngineConfig::with_dimensions(4, 3, 2053))?;
    let message = "a message much longer than three columns";

    let encrypted = engine.encrypt(message, Some("pw"), None)?;
    assert_eq!(engine.decrypt(&encrypted, Some("pw"))?, message);
    Ok(())
}

#[test]
fn secret_shorter_than_digest_works() -> Result<(), LweCipherError> {
    let engine = EncryptionEngine::try_with(EngineConfig::with_dimensions(5, 7, 2053))?;

    let encrypted = engine.encrypt("tiny", Some("pw"), None)?;
    assert_eq!(encrypted.params.A.len(), 5);
    assert_eq!(engine.decrypt(&encrypted, Some("pw"))?, "tiny");
    Ok(())
}

#[test]
fn bundle_survives_json_wire_format() -> Result<(), LweCipherError> {
    let engine = default_engine();
    let encrypted = engine.encrypt("over the wire", Some("pw"), None)?;

    let restored = EncryptedData::from_json(&encrypted.to_json()?)?;
    assert_eq!(engine.decrypt(&restored, Some("pw"))?, "over the wire");
    Ok(())
}

#[test]
fn tampered_params_are_rejected() -> Result<(), LweCipherError> {
    let engine = default_engine();
    let mut encrypted = engine.encrypt("hello", Some("pw"), None)?;

    encrypted.params.E.pop();
    assert!(matches!(
        engine.decrypt(&encrypted, Some("pw")),
        Err(LweCipherError::DimensionMismatch(_))
    ));
    Ok(())
}

#[test]
fn garbage_data_is_malformed() -> Result<(), LweCipherError> {
    let engine = default_engine();
    let mut encrypted = engine.encrypt("hello", Some("pw"), None)?;

    encrypted.data = "%%%".to_string();
    assert!(matches!(
        engine.decrypt(&encrypted, Some("pw")),
        Err(LweCipherError::MalformedCiphertext(_))
    ));
    Ok(())
}

#[test]
fn reject_policy_refuses_out_of_range_characters() -> Result<(), LweCipherError> {
    let config = EngineConfig {
        charset_policy: CharsetPolicy::Reject,
        ..EngineConfig::with_dimensions(16, 32, 257)
    };
    let engine = EncryptionEngine::try_with(config)?;

    assert!(matches!(
        engine.encrypt("ā is U+0101", Some("pw"), None),
        Err(LweCipherError::Validation(_))
    ));
    assert!(engine.encrypt("plain ascii", Some("pw"), None).is_ok());
    Ok(())
}

#[test]
fn wrap_policy_silently_corrupts_out_of_range_characters() -> Result<(), LweCipherError> {
    let engine = EncryptionEngine::try_with(EngineConfig::with_dimensions(16, 32, 257))?;

    let encrypted = engine.encrypt("Ā", Some("pw"), None)?;
    // U+0100 = 256 survives; U+0101 = 257 wraps to 0
    assert_eq!(engine.decrypt(&encrypted, Some("pw"))?, "Ā");
    let encrypted = engine.encrypt("ā", Some("pw"), None)?;
    assert_eq!(engine.decrypt(&encrypted, Some("pw"))?, "\0");
    Ok(())
}

#[quickcheck]
fn prop_round_trip_below_modulus(message: String, password: String) -> TestResult {
    let message: String = message.chars().filter(|&c| (c as u32) < 2053).collect();

    let engine = EncryptionEngine::try_with(EngineConfig::with_dimensions(16, 24, 2053)).unwrap();
    let result = engine
        .encrypt(&message, Some(&password), None)
        .and_then(|encrypted| engine.decrypt(&encrypted, Some(&password)));

    match result {
        Ok(decrypted) => TestResult::from_bool(decrypted == message),
        Err(e) => TestResult::error(e.to_string()),
    }
}
