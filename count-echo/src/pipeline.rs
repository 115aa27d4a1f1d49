use crate::{Error, Result};
use model::CountPayload;
use serde::de::Error as _;
use serde_json::Deserializer;

/// Decodes `body` as `P`, increments its count and encodes the payload back
/// with a trailing newline.
pub fn process<P: CountPayload>(body: &[u8]) -> Result<Vec<u8>> {
    let mut payload: P = decode(body)?;

    if !payload.has_count() {
        return Err(Error::MissingValue);
    }

    payload.increment();

    encode(&payload)
}

// Reads the first JSON value only, trailing bytes are left alone
fn decode<P: CountPayload>(body: &[u8]) -> Result<P> {
    match Deserializer::from_slice(body).into_iter::<P>().next() {
        Some(res) => res.map_err(Error::DecodeError),
        None => Err(Error::DecodeError(serde_json::Error::custom(
            "EOF while parsing a value",
        ))),
    }
}

fn encode<P: CountPayload>(payload: &P) -> Result<Vec<u8>> {
    let mut buf = serde_json::to_vec(payload).map_err(Error::EncodeError)?;
    buf.push(b'\n');
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::payload::{
        PayloadWithBasicTypes, PayloadWithCustomTypes, PayloadWithGenericNumberType,
        PayloadWithPointerTypes,
    };

    fn run<P: CountPayload>(body: &str) -> Result<String> {
        process::<P>(body.as_bytes()).map(|b| String::from_utf8(b).unwrap())
    }

    #[test]
    fn test_increment() {
        assert_eq!(run::<PayloadWithBasicTypes>(r#"{"count":1}"#).unwrap(), "{\"count\":2}\n");
        assert_eq!(run::<PayloadWithPointerTypes>(r#"{"count":-1}"#).unwrap(), "{\"count\":0}\n");
        assert_eq!(run::<PayloadWithCustomTypes>(r#"{"count":0}"#).unwrap(), "{\"count\":1}\n");
        assert_eq!(
            run::<PayloadWithGenericNumberType>(r#"{"count":1}"#).unwrap(),
            "{\"count\":2}\n"
        );
    }

    #[test]
    fn test_increment_large_integers() {
        let cases = [
            (r#"{"count":9007199254740990}"#, "{\"count\":9007199254740991}\n"),
            (r#"{"count":9007199254740991}"#, "{\"count\":9007199254740992}\n"),
        ];

        for (req, res) in cases {
            assert_eq!(run::<PayloadWithBasicTypes>(req).unwrap(), res);
            assert_eq!(run::<PayloadWithCustomTypes>(req).unwrap(), res);
            assert_eq!(run::<PayloadWithGenericNumberType>(req).unwrap(), res);
        }

        // 1e20 + 1 rounds back to 1e20 in f64
        assert_eq!(
            run::<PayloadWithGenericNumberType>(r#"{"count":1e20}"#).unwrap(),
            "{\"count\":100000000000000000000}\n"
        );
    }

    #[test]
    fn test_null_body_rejected() {
        assert!(matches!(run::<PayloadWithBasicTypes>("null"), Err(Error::DecodeError(_))));
        assert!(matches!(run::<PayloadWithPointerTypes>("null"), Err(Error::DecodeError(_))));
        assert!(matches!(run::<PayloadWithCustomTypes>("null"), Err(Error::DecodeError(_))));
    }

    #[test]
    fn test_duplicate_count_rejected() {
        let body = r#"{"count":1,"count":2}"#;
        assert!(matches!(run::<PayloadWithBasicTypes>(body), Err(Error::DecodeError(_))));
        assert!(matches!(
            run::<PayloadWithGenericNumberType>(body),
            Err(Error::DecodeError(_))
        ));
    }

    #[test]
    fn test_empty_body() {
        assert!(matches!(run::<PayloadWithBasicTypes>(""), Err(Error::DecodeError(_))));
        assert!(matches!(run::<PayloadWithCustomTypes>("  \n"), Err(Error::DecodeError(_))));
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(run::<PayloadWithPointerTypes>("{\"count\":"), Err(Error::DecodeError(_))));
        assert!(matches!(
            run::<PayloadWithCustomTypes>(r#"{"count":"one"}"#),
            Err(Error::DecodeError(_))
        ));
        assert!(matches!(run::<PayloadWithBasicTypes>("[1]"), Err(Error::DecodeError(_))));
    }

    #[test]
    fn test_missing_value() {
        assert!(matches!(run::<PayloadWithPointerTypes>("{}"), Err(Error::MissingValue)));
        assert!(matches!(
            run::<PayloadWithCustomTypes>(r#"{"count":null}"#),
            Err(Error::MissingValue)
        ));
        assert!(matches!(
            run::<PayloadWithGenericNumberType>("{}"),
            Err(Error::MissingValue)
        ));
    }

    #[test]
    fn test_basic_divergence() {
        assert_eq!(run::<PayloadWithBasicTypes>("{}").unwrap(), "{\"count\":1}\n");
        assert!(matches!(
            run::<PayloadWithBasicTypes>(r#"{"count":null}"#),
            Err(Error::DecodeError(_))
        ));
    }

    #[test]
    fn test_trailing_data_ignored() {
        assert_eq!(
            run::<PayloadWithCustomTypes>("{\"count\":5}\n{\"count\":9}").unwrap(),
            "{\"count\":6}\n"
        );
    }

    #[test]
    fn test_non_finite_float_fails_encoding() {
        // 1e39 is out of f32 range and decodes to infinity
        assert!(matches!(
            run::<PayloadWithGenericNumberType<f32>>(r#"{"count":1e39}"#),
            Err(Error::EncodeError(_))
        ));
    }
}
