use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    MissingSeparator(String),

    #[error("Component '{component}' cannot be empty in '{pair}'.")]
    EmptyComponent {
        component: &'static str,
        pair: String,
    },
}

/// Splits a `KEY=VALUE` pair at the first `=`, trimming whitespace around both halves.
pub fn parse_key_value(pair: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(pair.to_string()))?;
    let (key, value) = (key.trim(), value.trim());

    if key.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "key",
            pair: pair.to_string(),
        });
    }
    if value.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "value",
            pair: pair.to_string(),
        });
    }
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_separator() {
        assert_eq!(parse_key_value("pie.seed=42"), Ok(("pie.seed", "42")));
        assert_eq!(parse_key_value(" a = b=c "), Ok(("a", "b=c")));
    }

    #[test]
    fn rejects_missing_separator() {
        assert_eq!(
            parse_key_value("pie.seed"),
            Err(ParseError::MissingSeparator("pie.seed".to_string()))
        );
    }

    #[test]
    fn rejects_empty_components() {
        assert!(matches!(
            parse_key_value("=5"),
            Err(ParseError::EmptyComponent {
                component: "key",
                ..
            })
        ));
        assert!(matches!(
            parse_key_value("pie.seed= "),
            Err(ParseError::EmptyComponent {
                component: "value",
                ..
            })
        ));
    }
}
