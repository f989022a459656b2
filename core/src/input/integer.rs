use crate::error::RouteError;

/// Parses a token as a non-negative base-10 integer.
///
/// An optional leading `+` or `-` is accepted by the syntax check, so `"-0"` is a
/// valid zero while `"-5"` is reported as negative rather than malformed.
pub fn parse_positive_integer(token: &str) -> Result<u64, RouteError> {
    let value: i64 = token
        .parse()
        .map_err(|_| RouteError::MalformedInteger {
            token: token.to_string(),
        })?;

    u64::try_from(value).map_err(|_| RouteError::NegativeInteger { value })
}
