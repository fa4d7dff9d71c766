use tracing::debug;

use crate::mnemonic::types::Mnemonic;
use crate::process::{ProcessNameResolver, first_letter};
use crate::window::Snapshot;

/// Counter bucket shared by every first letter outside `a`..=`z`.
///
/// This is the `z` bucket: a window whose process could not be resolved
/// (`?`) or whose name starts with a digit or symbol continues the
/// disambiguator sequence of real `z` processes. Codes stay unique because
/// the first letters differ.
pub const OVERFLOW_BUCKET: usize = 25;

/// Counter bucket for a first letter.
pub fn bucket_index(first: char) -> usize {
    if first.is_ascii_lowercase() {
        (first as u8 - b'a') as usize
    } else {
        OVERFLOW_BUCKET
    }
}

/// True when typing `c` and lowercasing it gives `c` back.
fn is_typeable(c: char) -> bool {
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    let mut lower = c.to_lowercase();
    lower.next() == Some(c) && lower.next().is_none()
}

/// Second characters in the order they are handed out: `a`..=`z`, `0`..=`9`,
/// ASCII punctuation, then lowercase letters and digits beyond ASCII.
///
/// Every character survives the lowercasing applied to typed input, so each
/// code stays selectable. The sequence is long enough for any snapshot size.
pub fn disambiguators() -> impl Iterator<Item = char> {
    ('a'..='z')
        .chain('0'..='9')
        .chain(('!'..='~').filter(|c| c.is_ascii_punctuation()))
        .chain(('\u{a1}'..=char::MAX).filter(|&c| c.is_alphanumeric() && is_typeable(c)))
}

/// Assign a code to every window of the snapshot.
///
/// Single pass in snapshot order; entry `i` of the result is the code of
/// snapshot entry `i`. The process name is resolved live for each entry, so
/// the result can differ between calls if processes exit in between.
pub fn assign_mnemonics(snapshot: &Snapshot, resolver: &dyn ProcessNameResolver) -> Vec<Mnemonic> {
    // No bucket can need more second characters than there are entries
    let seconds: Vec<char> = disambiguators().take(snapshot.len()).collect();
    let mut counters = [0usize; 26];

    let codes: Vec<Mnemonic> = snapshot
        .iter()
        .map(|entry| {
            let name = resolver.executable_name(entry.process_id);
            let first = first_letter(name.as_deref());
            let bucket = bucket_index(first);
            let second = seconds[counters[bucket]];
            counters[bucket] += 1;
            Mnemonic::new(first, second)
        })
        .collect();

    debug!(event = "core.mnemonic.assigned", count = codes.len());
    codes
}

/// Index of the first code equal to the typed pair.
pub fn find_match(codes: &[Mnemonic], typed: [char; 2]) -> Option<usize> {
    codes.iter().position(|code| code.matches(typed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::{WindowEntry, WindowHandle};
    use std::collections::{HashMap, HashSet};

    struct MockResolver(HashMap<u32, &'static str>);

    impl ProcessNameResolver for MockResolver {
        fn executable_name(&self, pid: u32) -> Option<String> {
            self.0.get(&pid).map(|s| s.to_string())
        }
    }

    fn snapshot(pids: &[u32]) -> Snapshot {
        Snapshot::new(
            pids.iter()
                .enumerate()
                .map(|(i, pid)| WindowEntry {
                    handle: WindowHandle::from_raw(i as isize + 1),
                    process_id: *pid,
                    title: format!("Window {}", i),
                    class_name: "AppWindow".to_string(),
                })
                .collect(),
        )
    }

    fn codes(pids: &[u32], names: &[(u32, &'static str)]) -> Vec<String> {
        let resolver = MockResolver(names.iter().copied().collect());
        assign_mnemonics(&snapshot(pids), &resolver)
            .iter()
            .map(|m| m.to_string())
            .collect()
    }

    #[test]
    fn test_alpha_beta_alpha() {
        let result = codes(&[10, 20, 10], &[(10, "alpha.exe"), (20, "beta.exe")]);
        assert_eq!(result, vec!["aa", "ba", "ab"]);
    }

    #[test]
    fn test_first_letter_is_lowercased() {
        let result = codes(&[1, 2], &[(1, "Firefox.exe"), (2, "firefox.exe")]);
        assert_eq!(result, vec!["fa", "fb"]);
    }

    #[test]
    fn test_disambiguators_increase_in_snapshot_order() {
        let result = codes(&[1, 2, 1, 3, 1], &[(1, "code.exe"), (2, "chrome.exe"), (3, "x.exe")]);
        assert_eq!(result, vec!["ca", "cb", "cc", "xa", "cd"]);
    }

    #[test]
    fn test_unresolved_process_shares_z_bucket() {
        // pid 99 is not resolvable and falls into the `z` counter sequence
        let result = codes(&[1, 99, 1, 2], &[(1, "zed.exe"), (2, "7zFM.exe")]);
        assert_eq!(result, vec!["za", "?b", "zc", "7d"]);
    }

    #[test]
    fn test_bucket_index() {
        assert_eq!(bucket_index('a'), 0);
        assert_eq!(bucket_index('z'), 25);
        assert_eq!(bucket_index('?'), OVERFLOW_BUCKET);
        assert_eq!(bucket_index('é'), OVERFLOW_BUCKET);
        assert_eq!(bucket_index('A'), OVERFLOW_BUCKET);
    }

    #[test]
    fn test_codes_are_unique_for_large_snapshots() {
        let pids: Vec<u32> = (0..1024).map(|i| i % 3).collect();
        let names = [(0, "alpha.exe"), (1, "zulu.exe")];
        let resolver = MockResolver(names.iter().copied().collect());

        let codes = assign_mnemonics(&snapshot(&pids), &resolver);
        let unique: HashSet<Mnemonic> = codes.iter().copied().collect();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn test_second_characters_continue_with_digits() {
        let pids = vec![1u32; 30];
        let result = codes(&pids, &[(1, "chrome.exe")]);
        assert_eq!(result[25], "cz");
        assert_eq!(result[26], "c0");
        assert_eq!(result[29], "c3");
    }

    #[test]
    fn test_second_characters_are_typeable() {
        let seconds: Vec<char> = disambiguators().take(1024).collect();
        let unique: HashSet<char> = seconds.iter().copied().collect();
        assert_eq!(unique.len(), 1024);

        for c in seconds {
            assert!(!c.is_control(), "control character {:?}", c);
            assert!(!c.is_whitespace(), "whitespace {:?}", c);
            assert_eq!(c.to_lowercase().collect::<String>(), c.to_string());
        }
    }

    #[test]
    fn test_empty_snapshot() {
        let resolver = MockResolver(HashMap::new());
        assert!(assign_mnemonics(&Snapshot::default(), &resolver).is_empty());
    }

    #[test]
    fn test_find_match() {
        let codes = vec![
            Mnemonic::new('a', 'a'),
            Mnemonic::new('b', 'a'),
            Mnemonic::new('a', 'b'),
        ];
        assert_eq!(find_match(&codes, ['a', 'b']), Some(2));
        assert_eq!(find_match(&codes, ['b', 'a']), Some(1));
        assert_eq!(find_match(&codes, ['z', 'z']), None);
    }
}
