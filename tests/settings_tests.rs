//! Integration tests for the packed settings record

use nap_clock::{SETTINGS_SIZE, Settings, SettingsError, TimeField};

fn custom() -> Settings {
    Settings {
        nap_length: 45,
        naps_before_time: 1080,
        sleep_warn_time: 1410,
        sleep_ok_time: 30,
        brightness: 200,
    }
}

#[test]
fn packed_size_is_nine_bytes() {
    assert_eq!(SETTINGS_SIZE, 9);
    assert_eq!(custom().to_bytes().len(), 9);
}

#[test]
fn round_trip_preserves_every_field() {
    for settings in [Settings::DEFAULT, custom()] {
        let bytes = settings.to_bytes();
        assert_eq!(Settings::from_bytes(&bytes), Ok(settings));
    }
}

#[test]
fn default_bytes_are_little_endian() {
    // 90, 1080, 360, 420, 128
    assert_eq!(
        Settings::DEFAULT.to_bytes(),
        [0x5A, 0x00, 0x38, 0x04, 0x68, 0x01, 0xA4, 0x01, 0x80]
    );
}

#[test]
fn wrong_length_is_rejected() {
    let bytes = custom().to_bytes();
    assert_eq!(
        Settings::from_bytes(&bytes[..8]),
        Err(SettingsError::InvalidLength {
            expected: 9,
            actual: 8
        })
    );

    let mut long = [0u8; 10];
    long[..9].copy_from_slice(&bytes);
    assert_eq!(
        Settings::from_bytes(&long),
        Err(SettingsError::InvalidLength {
            expected: 9,
            actual: 10
        })
    );
}

#[test]
fn out_of_range_time_is_rejected() {
    let mut bytes = custom().to_bytes();
    bytes[6..8].copy_from_slice(&1440u16.to_le_bytes());
    assert_eq!(
        Settings::from_bytes(&bytes),
        Err(SettingsError::TimeOutOfRange {
            field: TimeField::SleepOk,
            minute: 1440
        })
    );
}

#[test]
fn nap_length_of_a_day_is_rejected() {
    let settings = Settings {
        nap_length: 1440,
        ..custom()
    };
    assert_eq!(
        Settings::from_bytes(&settings.to_bytes()),
        Err(SettingsError::NapLengthOutOfRange(1440))
    );
}

#[test]
fn from_bytes_unchecked_skips_validation() {
    let bytes = [0xFF; SETTINGS_SIZE];
    let settings = Settings::from_bytes_unchecked(&bytes);
    assert_eq!(settings.naps_before_time, 0xFFFF);
    assert!(settings.validate().is_err());
}

#[test]
fn load_or_default_falls_back_on_corrupt_data() {
    assert_eq!(Settings::load_or_default(&[0xFF; SETTINGS_SIZE]), Settings::DEFAULT);
    assert_eq!(Settings::load_or_default(&[]), Settings::DEFAULT);
    assert_eq!(Settings::load_or_default(&custom().to_bytes()), custom());
}

#[test]
fn time_accessors_match_fields() {
    let settings = custom();
    assert_eq!(settings.naps_before().minute(), 1080);
    assert_eq!(settings.sleep_warn().hour(), 23);
    assert_eq!(settings.sleep_ok().minute_of_hour(), 30);
}
