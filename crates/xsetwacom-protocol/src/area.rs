//! Area values: `xsetwacom --get <id> Area` output.

use tabletmap_geometry::Rect;

use crate::ParseError;

/// Parse the four coordinates printed by an area query.
///
/// The utility prints one line, `x1 y1 x2 y2`, separated by whitespace.
/// Exactly four tokens are required; surrounding whitespace and the trailing
/// newline are ignored.
///
/// # Errors
///
/// [`ParseError::CoordinateCount`] when the token count is not four,
/// [`ParseError::InvalidCoordinate`] for a non-integer token, and
/// [`ParseError::Geometry`] when the coordinates describe an inverted
/// rectangle.
pub fn parse_area(output: &str) -> Result<Rect, ParseError> {
    let tokens: Vec<&str> = output.split_whitespace().collect();
    let &[x1, y1, x2, y2] = tokens.as_slice() else {
        return Err(ParseError::CoordinateCount {
            found: tokens.len(),
        });
    };

    Ok(Rect::new(
        parse_coordinate(0, x1)?,
        parse_coordinate(1, y1)?,
        parse_coordinate(2, x2)?,
        parse_coordinate(3, y2)?,
    )?)
}

fn parse_coordinate(index: usize, token: &str) -> Result<i32, ParseError> {
    token
        .parse()
        .map_err(|source| ParseError::InvalidCoordinate {
            index,
            token: token.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabletmap_geometry::GeometryError;

    #[test]
    fn test_parse_typical_output() -> Result<(), ParseError> {
        let area = parse_area("0 0 15200 9500\n")?;
        assert_eq!(area, Rect::new(0, 0, 15200, 9500)?);
        Ok(())
    }

    #[test]
    fn test_irregular_whitespace_is_tolerated() -> Result<(), ParseError> {
        let area = parse_area("  -10\t0   15200\t 9500  \n")?;
        assert_eq!(area, Rect::new(-10, 0, 15200, 9500)?);
        Ok(())
    }

    #[test]
    fn test_too_few_coordinates() {
        assert_eq!(
            parse_area("0 0 15200"),
            Err(ParseError::CoordinateCount { found: 3 })
        );
    }

    #[test]
    fn test_too_many_coordinates() {
        assert_eq!(
            parse_area("0 0 15200 9500 1"),
            Err(ParseError::CoordinateCount { found: 5 })
        );
    }

    #[test]
    fn test_empty_output() {
        assert_eq!(parse_area(""), Err(ParseError::CoordinateCount { found: 0 }));
    }

    #[test]
    fn test_non_integer_coordinate_reports_position() {
        let result = parse_area("0 0 wide 9500");
        assert!(matches!(
            result,
            Err(ParseError::InvalidCoordinate { index: 2, ref token, .. }) if token == "wide"
        ));
    }

    #[test]
    fn test_inverted_corners_are_rejected() {
        assert_eq!(
            parse_area("15200 0 0 9500"),
            Err(ParseError::Geometry(GeometryError::InvertedCorners {
                x1: 15200,
                y1: 0,
                x2: 0,
                y2: 9500,
            }))
        );
    }
}
