use super::SignatureHeader;
use logos::{Lexer, Logos, Span};
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Auth-scheme tag in front of the header value proper
const SCHEME_PREFIX: &str = "Signature ";

/// Header parsing error
#[derive(Debug, Diagnostic, Error)]
pub enum ParseError {
    /// A timestamp field held something other than a base-10 integer
    #[error("Invalid timestamp")]
    InvalidTimestamp {
        /// Location of the offending value
        #[label("not a base-10 Unix timestamp")]
        at: SourceSpan,
    },

    /// A required field is missing from the header
    #[error("Missing field `{0}`")]
    MissingField(&'static str),

    /// The input strays from the `key="value"` comma-separated shape
    #[error("Malformed authorisation header")]
    UnexpectedToken {
        /// Location the lexer gave up at
        #[label("unexpected token")]
        at: SourceSpan,
    },
}

#[derive(Debug, Logos)]
#[logos(skip r"[ \t]+")]
enum TokenTy {
    #[regex(r"\w+")]
    Key,

    #[token("=")]
    Equals,

    #[regex(r#""[^"]*""#)]
    Value,

    #[token(",")]
    Comma,
}

#[derive(Debug)]
struct Token {
    pub ty: TokenTy,
    pub span: Span,
}

impl Token {
    pub fn parse(input: &str) -> impl Iterator<Item = Result<Token, Span>> + '_ {
        Lexer::<'_, TokenTy>::new(input)
            .spanned()
            .map(|(ty, span)| match ty {
                Ok(ty) => Ok(Token { ty, span }),
                Err(()) => Err(span),
            })
    }
}

macro_rules! ensure {
    ($self:expr, $token:expr, $pattern:pat) => {{
        let token = match $token {
            Ok(token) => token,
            Err(span) => {
                $self.is_broken = true;
                return Some(Err(ParseError::UnexpectedToken { at: span.into() }));
            }
        };

        if !matches!(token.ty, $pattern) {
            $self.is_broken = true;
            return Some(Err(ParseError::UnexpectedToken {
                at: token.span.into(),
            }));
        }

        token
    }};
}

struct ParseIter<'a, I> {
    /// Token stream coming out of the lexer
    inner: I,

    /// The input the lexer ran over, for resolving token spans
    input: &'a str,

    /// Set once any illegal token shows up; the iterator yields nothing
    /// after that
    is_broken: bool,
}

impl<'a, I> Iterator for ParseIter<'a, I>
where
    I: Iterator<Item = Result<Token, Span>>,
{
    type Item = Result<(&'a str, &'a str, Span), ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_broken {
            return None;
        }

        let key = ensure!(self, self.inner.next()?, TokenTy::Key);
        ensure!(self, self.inner.next()?, TokenTy::Equals);
        // Bare integers lex as `Key`; peers are inconsistent about quoting
        // the timestamp fields, so both shapes are accepted here
        let value = ensure!(self, self.inner.next()?, TokenTy::Value | TokenTy::Key);

        if let Some(next) = self.inner.next() {
            ensure!(self, next, TokenTy::Comma);
        }

        let key = &self.input[key.span];
        let value_span = value.span.clone();
        let value = self.input[value.span].trim_matches('"');

        Some(Ok((key, value, value_span)))
    }
}

fn parse_timestamp(value: &str, span: Span) -> Result<u64, ParseError> {
    atoi_radix10::parse_from_str(value)
        .map_err(|_| ParseError::InvalidTimestamp { at: span.into() })
}

/// Parse an `Authorization` header value into its structured form
///
/// A leading `Signature ` auth-scheme tag is accepted and skipped. Values are
/// split on top-level commas and only on the first `=` of each pair; the
/// scheme guarantees no field value ever contains a comma, and the lexer
/// rejects the header outright instead of mis-splitting if a peer violates
/// that. Unknown fields are skipped, and `algorithm` is discarded since the
/// key id itself pins the algorithm in its third segment.
///
/// # Errors
///
/// Returns an error if the input doesn't lex into `key="value"` pairs, a
/// timestamp doesn't parse, or a required field is absent
#[inline]
pub fn parse(input: &str) -> Result<SignatureHeader<'_>, ParseError> {
    let input = input.strip_prefix(SCHEME_PREFIX).unwrap_or(input);

    let kv_iter = ParseIter {
        inner: Token::parse(input),
        input,
        is_broken: false,
    };

    let mut key_id = None;
    let mut signature = None;
    let mut headers = None;
    let mut created = None;
    let mut expires = None;

    for kv in kv_iter {
        let (key, value, value_span) = kv?;

        match key {
            "algorithm" => {
                // Discarded. The key id names the algorithm, and the registry
                // only hands out Ed25519 keys anyway.
            }
            "keyId" => key_id = Some(value),
            "signature" => signature = Some(value),
            "headers" => headers = Some(value.split_whitespace().collect()),
            "created" => created = Some(parse_timestamp(value, value_span)?),
            "expires" => expires = Some(parse_timestamp(value, value_span)?),
            // Unknown fields are skipped instead of rejected
            _ => continue,
        }
    }

    Ok(SignatureHeader {
        key_id: key_id.ok_or(ParseError::MissingField("keyId"))?,
        headers: headers.ok_or(ParseError::MissingField("headers"))?,
        signature: signature.ok_or(ParseError::MissingField("signature"))?,
        created: created.ok_or(ParseError::MissingField("created"))?,
        expires: expires.ok_or(ParseError::MissingField("expires"))?,
    })
}
