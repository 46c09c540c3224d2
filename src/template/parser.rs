use std::sync::OnceLock;

use regex::Regex;

use crate::InsertError;

use super::{Quantifier, Segment, Template};

/// A separator followed by a quantifier, an optional marker and a name.
const PARAMETER: &str = r"/(?P<quantifier>[:*])(?P<optional>\?)?(?P<name>[\w-]+)";

fn parameter() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(PARAMETER).expect("parameter grammar is a valid regex"))
}

/// `/foo` and `/foo/` are the same route; the empty route is the root.
fn normalize(route: &str) -> &str {
    match route.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ if route.is_empty() => "/",
        _ => route,
    }
}

/// Compiles a route template into its candidate templates.
///
/// The first candidate always omits every optional parameter. Each optional
/// parameter then adds one candidate: everything literal or required up to
/// that point, followed by the optional parameter itself. Text after the last
/// parameter is appended to every candidate.
///
/// ```
/// use waypoint::{compile, Segment};
///
/// let templates = compile("/fixed/:var1/:?var2").unwrap();
/// assert_eq!(templates.len(), 2);
/// assert_eq!(
///     templates[1].segments(),
///     &[
///         Segment::literal("/fixed/"),
///         Segment::bounded("var1"),
///         Segment::literal("/"),
///         Segment::bounded("var2"),
///     ]
/// );
/// ```
pub fn compile(route: &str) -> Result<Vec<Template>, InsertError> {
    let route = normalize(route);

    let mut base = Template::default();
    let mut optionals = Vec::new();
    let mut offset = 0;

    for captures in parameter().captures_iter(route) {
        let (Some(token), Some(name)) = (captures.get(0), captures.name("name")) else {
            continue;
        };
        let quantifier = match &captures["quantifier"] {
            "*" => Quantifier::Greedy,
            _ => Quantifier::Bounded,
        };
        let name = name.as_str();

        // the separator stays with the literal run
        base.push_literal(&route[offset..token.start() + 1]);
        offset = token.end();

        let segment = Segment::Param {
            name: name.to_string(),
            quantifier,
        };
        if captures.name("optional").is_some() {
            if name.contains('-') {
                return Err(InsertError::invalid_argument_name(name));
            }
            let mut candidate = base.clone();
            candidate.push(segment);
            optionals.push(candidate);
        } else {
            base.push(segment);
        }
    }

    let remainder = &route[offset..];
    let mut templates = Vec::with_capacity(optionals.len() + 1);
    templates.push(base);
    templates.extend(optionals);
    for template in &mut templates {
        template.push_literal(remainder);
    }
    Ok(templates)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(route: &str) -> Vec<Vec<Segment>> {
        compile(route)
            .unwrap()
            .into_iter()
            .map(|template| template.segments().to_vec())
            .collect()
    }

    #[test]
    fn should_normalize_trailing_separator() {
        assert_eq!(normalize("/static/"), "/static");
        assert_eq!(normalize("/static"), "/static");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize(""), "/");
    }

    #[test]
    fn should_yield_static_route() {
        assert_eq!(parse("/static"), vec![vec![Segment::literal("/static")]]);
        assert_eq!(parse("/static/"), vec![vec![Segment::literal("/static")]]);
        assert_eq!(parse("/"), vec![vec![Segment::literal("/")]]);
    }

    #[test]
    fn should_keep_text_after_last_param() {
        assert_eq!(
            parse("/files/:name.json"),
            vec![vec![
                Segment::literal("/files/"),
                Segment::bounded("name"),
                Segment::literal(".json"),
            ]]
        );
    }

    #[test]
    fn should_treat_unprefixed_quantifier_as_literal() {
        assert_eq!(parse("/a:b"), vec![vec![Segment::literal("/a:b")]]);
        assert_eq!(parse("/:"), vec![vec![Segment::literal("/:")]]);
    }
}
