//! CSS color syntax checks for catalog color stops.

use cssparser::{ParseError, Parser, ParserInput, Token};

const COLOR_FUNCTIONS: &[&str] = &["rgb", "rgba", "hsl", "hsla"];

const COLOR_KEYWORDS: &[&str] = &["transparent", "currentcolor", "black", "white"];

/// Returns `true` if `value` is a single CSS color: a 3/4/6/8 digit hash
/// color, an `rgb()`/`rgba()`/`hsl()`/`hsla()` function with three or four
/// components, or one of a few keywords.
pub(crate) fn is_css_color(value: &str) -> bool {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);

    let token = match parser.next() {
        Ok(token) => token.clone(),
        Err(_) => return false,
    };

    let valid = match token {
        Token::Hash(ref hex) | Token::IDHash(ref hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        Token::Ident(ref name) => COLOR_KEYWORDS
            .iter()
            .any(|keyword| name.eq_ignore_ascii_case(keyword)),
        Token::Function(ref name) => {
            COLOR_FUNCTIONS
                .iter()
                .any(|func| name.eq_ignore_ascii_case(func))
                && matches!(count_components(&mut parser), Some(3 | 4))
        }
        _ => false,
    };

    valid && parser.is_exhausted()
}

/// Counts numeric components in the function block the parser is positioned
/// at. Returns `None` if anything other than numbers and separators appears.
fn count_components(parser: &mut Parser<'_, '_>) -> Option<usize> {
    let result: Result<Option<usize>, ParseError<'_, ()>> = parser.parse_nested_block(|block| {
        let mut count = 0;
        loop {
            let is_component = match block.next() {
                Ok(Token::Number { .. }) | Ok(Token::Percentage { .. }) | Ok(Token::Dimension { .. }) => true,
                Ok(Token::Comma) | Ok(Token::Delim('/')) => false,
                Ok(_) => return Ok(None),
                Err(_) => break,
            };
            if is_component {
                count += 1;
            }
        }
        Ok(Some(count))
    });
    result.ok().flatten()
}
