//! Shared character-level pieces: the token class, quoted strings, and
//! the `;name=value` / `,name=value` parameter grammars.

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{anychar, char, space0},
    combinator::{map, opt},
    multi::{many0, separated_list0},
    sequence::{delimited, pair, preceded},
    IResult,
};

use crate::types::param::Params;

/// RFC 3261 token characters.
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '.' | '!' | '%' | '*' | '_' | '+' | '`' | '\'' | '~'
        )
}

/// Characters legal in an unquoted parameter value. Wider than the token
/// class so IP literals (`received=2001:db8::1`) and opaque URI values
/// parse without quoting.
pub fn is_param_value_char(c: char) -> bool {
    is_token_char(c) || matches!(c, ':' | '[' | ']' | '/' | '@' | '$')
}

/// One token.
pub fn token(input: &str) -> IResult<&str, &str> {
    take_while1(is_token_char)(input)
}

/// Wraps a parser in optional surrounding spaces.
pub fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(space0, inner, space0)
}

/// A double-quoted string with `\` escapes resolved. Returns the inner
/// content without the surrounding quotes.
pub fn quoted_string(input: &str) -> IResult<&str, String> {
    delimited(char('"'), quoted_content, char('"'))(input)
}

fn quoted_content(input: &str) -> IResult<&str, String> {
    map(
        many0(alt((
            map(take_while1(|c| c != '"' && c != '\\'), str::to_string),
            map(preceded(char('\\'), anychar), |c| c.to_string()),
        ))),
        |pieces| pieces.concat(),
    )(input)
}

enum RawValue {
    Quoted(String),
    Plain(String),
}

// generic-param = token [ EQUAL gen-value ]
fn param(input: &str) -> IResult<&str, (&str, Option<RawValue>)> {
    pair(
        token,
        opt(preceded(
            ws(char('=')),
            alt((
                map(quoted_string, RawValue::Quoted),
                map(take_while1(is_param_value_char), |s: &str| {
                    RawValue::Plain(s.to_string())
                }),
            )),
        )),
    )(input)
}

fn collect(separator: char, pairs: Vec<(&str, Option<RawValue>)>) -> Params {
    let mut params = Params::with_separator(separator);
    for (name, value) in pairs {
        match value {
            None => params.set_flag(name),
            Some(RawValue::Plain(v)) => params.set(name, v),
            Some(RawValue::Quoted(v)) => params.set_prequoted(name, v),
        }
    }
    params
}

/// Zero or more separator-preceded parameters: `;a=1;b;c="x"`. The
/// leading-separator form every header tail uses.
pub fn params_with(separator: char) -> impl Fn(&str) -> IResult<&str, Params> {
    move |input| {
        let (rest, pairs) = many0(preceded(ws(char(separator)), param))(input)?;
        Ok((rest, collect(separator, pairs)))
    }
}

/// Separator-joined parameters with no leading separator: the form that
/// follows a Digest scheme token (`realm="x",nonce="y"`).
pub fn param_list(separator: char) -> impl Fn(&str) -> IResult<&str, Params> {
    move |input| {
        let (rest, pairs) = separated_list0(ws(char(separator)), param)(input)?;
        Ok((rest, collect(separator, pairs)))
    }
}

/// Splits a header value on the commas that separate list items, leaving
/// commas inside quoted strings or angle brackets alone.
pub fn split_list_items(value: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut in_angle = false;
    let mut escaped = false;
    for (i, c) in value.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            '<' if !in_quotes => in_angle = true,
            '>' if !in_quotes => in_angle = false,
            ',' if !in_quotes && !in_angle => {
                items.push(&value[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&value[start..]);
    items
}
