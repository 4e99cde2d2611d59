#![no_main]

use dictionary::ItemTypeDictionary;
use libfuzzer_sys::fuzz_target;
use protocol::ProtocolVersion;
use table::parse_table;

fuzz_target!(|data: &[u8]| {
    let Ok(entries) = parse_table(ProtocolVersion::CURRENT, "fuzz.json", data) else {
        return;
    };
    let Ok(dictionary) = ItemTypeDictionary::new(entries) else {
        return;
    };

    // Every accepted table must be a bijection.
    for entry in dictionary.iter() {
        assert_eq!(
            dictionary.runtime_id_of(&entry.identifier),
            Some(entry.runtime_id)
        );
        assert_eq!(
            dictionary.identifier_of(entry.runtime_id),
            Some(entry.identifier.as_str())
        );
    }
});
