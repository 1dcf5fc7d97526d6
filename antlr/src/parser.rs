use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_until},
    character::complete::{alpha1, alphanumeric1, char, multispace1},
    combinator::{map, opt, recognize, value},
    multi::{many0, many1, separated_list1},
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};

use crate::{Alternative, Atom, Body, Element, Grammar, Identifier, Rule, Suffix};

/// Skip whitespace and `//` line comments.
fn ws(input: &str) -> IResult<&str, &str> {
    recognize(many0(alt((
        multispace1,
        recognize(pair(tag("//"), opt(is_not("\n\r")))),
    ))))(input)
}

pub fn identifier(input: &str) -> IResult<&str, Identifier> {
    let (rem, matched) = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))(input)?;
    Ok((rem, Identifier(matched.to_owned())))
}

pub fn literal(input: &str) -> IResult<&str, String> {
    let (rem, matched) = delimited(char('\''), take_until("'"), char('\''))(input)?;
    Ok((rem, matched.to_owned()))
}

pub fn atom(input: &str) -> IResult<&str, Atom> {
    alt((
        map(literal, Atom::Literal),
        map(identifier, |id| {
            if id.is_token() {
                Atom::TokenRef(id)
            } else {
                Atom::RuleRef(id)
            }
        }),
    ))(input)
}

pub fn suffix(input: &str) -> IResult<&str, Suffix> {
    alt((
        value(Suffix::Optional, char('?')),
        value(Suffix::ZeroOrMore, char('*')),
        value(Suffix::OneOrMore, char('+')),
    ))(input)
}

pub fn element(input: &str) -> IResult<&str, Element> {
    alt((group, atom_element))(input)
}

fn atom_element(input: &str) -> IResult<&str, Element> {
    let (rem, atom) = atom(input)?;
    let (rem, suffix) = opt(preceded(ws, suffix))(rem)?;
    Ok((rem, Element::Atom { atom, suffix }))
}

fn group(input: &str) -> IResult<&str, Element> {
    let (rem, alternatives) =
        delimited(char('('), alternative_list, preceded(ws, char(')')))(input)?;
    let (rem, suffix) = opt(preceded(ws, suffix))(rem)?;
    Ok((
        rem,
        Element::Group {
            alternatives,
            suffix,
        },
    ))
}

pub fn alternative(input: &str) -> IResult<&str, Alternative> {
    let (rem, elements) = many1(preceded(ws, element))(input)?;
    let (rem, label) = opt(preceded(
        preceded(ws, char('#')),
        preceded(ws, identifier),
    ))(rem)?;
    Ok((rem, Alternative { elements, label }))
}

fn alternative_list(input: &str) -> IResult<&str, Vec<Alternative>> {
    separated_list1(preceded(ws, char('|')), alternative)(input)
}

pub fn rule(input: &str) -> IResult<&str, Rule> {
    let (rem, name) = preceded(ws, identifier)(input)?;
    let (rem, _) = preceded(ws, char(':'))(rem)?;
    if name.is_token() {
        // Token rule patterns are not parsed further. Their translation only
        // needs the rule name, so keep the pattern text as-is.
        // TODO: A quoted ';' inside the pattern ends the body early.
        let (rem, raw) = terminated(take_until(";"), char(';'))(rem)?;
        let body = Body::Token(raw.trim().to_owned());
        return Ok((rem, Rule { name, body }));
    }
    let (rem, alternatives) = alternative_list(rem)?;
    let (rem, _) = preceded(ws, char(';'))(rem)?;
    Ok((
        rem,
        Rule {
            name,
            body: Body::Alternatives(alternatives),
        },
    ))
}

fn header(input: &str) -> IResult<&str, Identifier> {
    delimited(
        pair(preceded(ws, tag("grammar")), ws),
        identifier,
        preceded(ws, char(';')),
    )(input)
}

pub fn grammar(input: &str) -> IResult<&str, Grammar> {
    let (rem, name) = opt(header)(input)?;
    let (rem, rules) = many0(rule)(rem)?;
    let (rem, _) = ws(rem)?;
    Ok((rem, Grammar { name, rules }))
}
