#![no_main]

use libfuzzer_sys::fuzz_target;
use protocol::{AliasRule, ProtocolResolver, ProtocolVersion};

fuzz_target!(|data: &[u8]| {
    // Bytes drive a bounded rule list followed by one query.
    let mut words = data
        .chunks_exact(2)
        .map(|pair| ProtocolVersion::new(u32::from(u16::from_le_bytes([pair[0], pair[1]]))));
    let mut rules = Vec::new();
    while rules.len() < 32 {
        let (Some(a), Some(b), Some(to)) = (words.next(), words.next(), words.next()) else {
            break;
        };
        if a.raw() % 2 == 0 {
            rules.push(AliasRule::exact(a, to));
        } else {
            rules.push(AliasRule::range(a, b, to));
        }
    }
    let Ok(resolver) = ProtocolResolver::new(rules.clone()) else {
        return;
    };

    for raw in words.take(64) {
        let resolved = resolver.resolve(raw);
        assert_eq!(resolved, resolver.resolve(raw));
        let first = rules.iter().find_map(|rule| rule.apply(raw)).unwrap_or(raw);
        assert_eq!(resolved, first);
    }
});
