//! Route templates and their compiled, canonical form.
//!
//! A route template such as `/shop/:category/*rest` compiles into one or
//! more [`Template`]s. Each template is a sequence of literal text and named
//! parameters; optional parameters (`/:?name`) add one template per optional.

use std::fmt::Display;

pub use parser::compile;

mod parser;

/// How much of the path a parameter may capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifier {
    /// `:name`, a single path component.
    Bounded,
    /// `*name`, anything including separators.
    Greedy,
}

impl Quantifier {
    /// The capture pattern used when no constraint overrides it.
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::Bounded => "[^/]+",
            Self::Greedy => ".*",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Bounded => ':',
            Self::Greedy => '*',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param { name: String, quantifier: Quantifier },
}

impl Segment {
    pub fn literal<S: Into<String>>(text: S) -> Self {
        Self::Literal(text.into())
    }

    pub fn bounded<S: Into<String>>(name: S) -> Self {
        Self::Param {
            name: name.into(),
            quantifier: Quantifier::Bounded,
        }
    }

    pub fn greedy<S: Into<String>>(name: S) -> Self {
        Self::Param {
            name: name.into(),
            quantifier: Quantifier::Greedy,
        }
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Self::Param { .. })
    }
}

/// One concrete form of a route template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// A template is static when it has no parameters at all.
    pub fn is_static(&self) -> bool {
        !self.segments.iter().any(Segment::is_param)
    }

    /// The full text of a static template.
    pub fn literal(&self) -> Option<&str> {
        match self.segments.as_slice() {
            [] => Some(""),
            [Segment::Literal(text)] => Some(text),
            _ => None,
        }
    }

    /// Parameter names in declaration order, duplicates included.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param { name, .. } => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    pub(crate) fn push(&mut self, segment: Segment) {
        match segment {
            Segment::Literal(text) => self.push_literal(&text),
            param => self.segments.push(param),
        }
    }

    /// Appends literal text, merging it into a trailing literal.
    ///
    /// A leading separator is dropped when the template already ends in one,
    /// so skipping an optional parameter never leaves `//` behind.
    pub(crate) fn push_literal(&mut self, text: &str) {
        let text = match self.segments.last() {
            Some(Segment::Literal(last)) if last.ends_with('/') => {
                text.strip_prefix('/').unwrap_or(text)
            }
            _ => text,
        };
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(Segment::Literal(last)) => last.push_str(text),
            _ => self.segments.push(Segment::literal(text)),
        }
    }
}

impl FromIterator<Segment> for Template {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        let mut template = Template::default();
        for segment in iter {
            template.push(segment);
        }
        template
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => text.fmt(f)?,
                Segment::Param { name, quantifier } => write!(f, "{}{}", quantifier.symbol(), name)?,
            }
        }
        Ok(())
    }
}
