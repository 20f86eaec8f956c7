#![cfg(feature = "config")]
use ranked_index::config::{ConfigError, PolicyKind, RankedIndexConfig};
use std::io::Write;

#[test]
fn config_file_to_index() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "
id = 'RankedIndexConfig'
capacity = 2
policy.kind = 'Frequency'
"
    )
    .unwrap();

    let config = RankedIndexConfig::from_file(file.path()).unwrap();
    assert_eq!(config.policy(), PolicyKind::Frequency);

    let mut index = config.build::<&'static str>();
    assert!(index.update_and_rank("a"));
    assert!(index.update_and_rank("b"));
    assert!(!index.update_and_rank("c"));
    assert!(index.update_and_rank("c"));
    assert_eq!(index.ranked_at(0).unwrap().key(), &"c");
    assert_eq!(index.ranked_at(1).unwrap().key(), &"a");
}

#[test]
fn config_error_display() {
    let e = RankedIndexConfig::from_string("id = 'Nope'\ncapacity = 1")
        .unwrap_err();
    assert!(matches!(e, ConfigError::ConfigFormatError(_)));
    assert!(e.to_string().contains("Nope"));
}
