//! Property tests for token composition and parsing.

use proptest::prelude::*;

use taskmaster_verify::domain::token::to_base36_upper;
use taskmaster_verify::VerificationToken;

fn is_grammar_conforming(s: &str) -> bool {
    let Some(rest) = s.strip_prefix("TASKMASTER-") else {
        return false;
    };
    let Some((random, timestamp)) = rest.split_once('-') else {
        return false;
    };

    random.len() == 8
        && random
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
        && !timestamp.is_empty()
        && timestamp
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: base-36 encoding decodes back to the same integer.
    #[test]
    fn property_base36_decodes_to_input(n in any::<u64>()) {
        let encoded = to_base36_upper(n);
        prop_assert!(encoded.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));
        prop_assert_eq!(u64::from_str_radix(&encoded, 36).ok(), Some(n));
    }

    /// PROPERTY: every composed token matches the published grammar and parses.
    #[test]
    fn property_tokens_match_grammar(random in any::<[u8; 4]>(), ts in any::<u64>()) {
        let token = VerificationToken::from_parts(random, ts);

        prop_assert!(is_grammar_conforming(token.as_str()), "{}", token);
        prop_assert_eq!(token.as_str().parse::<VerificationToken>().ok(), Some(token.clone()));
        prop_assert_eq!(token.timestamp_millis(), Some(ts));
    }

    /// PROPERTY: the random segment is the hex of the entropy bytes.
    #[test]
    fn property_random_segment_encodes_bytes(random in any::<[u8; 4]>()) {
        let token = VerificationToken::from_parts(random, 1_704_067_200_000);
        let expected: String = random.iter().map(|b| format!("{:02X}", b)).collect();
        prop_assert_eq!(token.random_segment(), expected.as_str());
    }

    /// PROPERTY: different random bytes in the same millisecond give different tokens.
    #[test]
    fn property_same_millisecond_tokens_differ_by_random(
        a in any::<[u8; 4]>(),
        b in any::<[u8; 4]>(),
        ts in any::<u64>(),
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(
            VerificationToken::from_parts(a, ts),
            VerificationToken::from_parts(b, ts)
        );
    }

    /// PROPERTY: a token is found again when embedded in surrounding text.
    #[test]
    fn property_find_in_recovers_embedded_token(
        random in any::<[u8; 4]>(),
        ts in any::<u64>(),
        prefix in "[a-z :\n]{0,20}",
        suffix in "([ \n.!][a-z ]{0,20})?",
    ) {
        let token = VerificationToken::from_parts(random, ts);
        let text = format!("{}{}{}", prefix, token, suffix);
        prop_assert_eq!(VerificationToken::find_in(&text), Some(token));
    }

    /// PROPERTY: parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(s in "\\PC{0,40}") {
        let _ = s.parse::<VerificationToken>();
        let _ = VerificationToken::find_in(&s);
    }
}
