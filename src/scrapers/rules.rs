//! Candidate rules for the heuristic extractors.
//!
//! Every field is driven by an ordered table of [`Rule`]s: a [`Matcher`] that
//! picks elements, a [`Read`] that turns an element into text, and a [`Scope`]
//! saying whether only the first matched element counts. [`first_match`] walks
//! a table and returns the first non-empty value.
//!
//! Class heuristics ("class contains `title`") all go through
//! [`class_contains`], so swapping that heuristic touches one function.

use crate::error::RuleError;
use crate::utils::clean_text;
use scraper::node::Element;
use scraper::{ElementRef, Selector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Sensitive,
    Insensitive,
}

/// Does the element's class list contain any of `keywords` as a substring?
///
/// Case-sensitive matching looks at the raw `class` attribute, the same way a
/// CSS `[class*="..."]` selector does. Case-insensitive matching lowercases
/// the space-joined class list first.
pub fn class_contains(element: &Element, keywords: &[&str], case: Case) -> bool {
    match case {
        Case::Sensitive => element
            .attr("class")
            .is_some_and(|class| keywords.iter().any(|k| class.contains(k))),
        Case::Insensitive => {
            let joined = element.classes().collect::<Vec<_>>().join(" ").to_lowercase();
            !joined.is_empty()
                && keywords
                    .iter()
                    .any(|k| joined.contains(k.to_lowercase().as_str()))
        }
    }
}

pub fn parse_selector(selector: &str) -> Result<Selector, RuleError> {
    Selector::parse(selector).map_err(|e| RuleError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// How a rule picks candidate elements below a scope element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// A plain CSS selector.
    Css(&'static str),
    /// Elements whose class list contains one of `keywords`.
    /// An empty `tags` list accepts any element name.
    Class {
        tags: &'static [&'static str],
        keywords: &'static [&'static str],
        case: Case,
    },
}

impl Matcher {
    /// Any element whose raw class attribute contains one of `keywords`.
    pub const fn class(keywords: &'static [&'static str]) -> Self {
        Matcher::Class {
            tags: &[],
            keywords,
            case: Case::Sensitive,
        }
    }

    /// Elements named in `tags` whose class list contains one of `keywords`,
    /// ignoring case.
    pub const fn class_ci(
        tags: &'static [&'static str],
        keywords: &'static [&'static str],
    ) -> Self {
        Matcher::Class {
            tags,
            keywords,
            case: Case::Insensitive,
        }
    }

    /// All matching descendants of `scope`, in document order. The scope
    /// element itself is never returned.
    pub fn select<'a>(&self, scope: ElementRef<'a>) -> Result<Vec<ElementRef<'a>>, RuleError> {
        match *self {
            Matcher::Css(css) => {
                let selector = parse_selector(css)?;
                Ok(scope.select(&selector).collect())
            }
            Matcher::Class {
                tags,
                keywords,
                case,
            } => Ok(scope
                .descendants()
                .skip(1)
                .filter_map(ElementRef::wrap)
                .filter(|el| tags.is_empty() || tags.contains(&el.value().name()))
                .filter(|el| class_contains(el.value(), keywords, case))
                .collect()),
        }
    }

    pub fn first<'a>(&self, scope: ElementRef<'a>) -> Result<Option<ElementRef<'a>>, RuleError> {
        Ok(self.select(scope)?.into_iter().next())
    }
}

/// How a matched element becomes a value. Values are always whitespace-normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Read {
    Text,
    Attr(&'static str),
    /// The attribute when present and non-empty, the element text otherwise.
    AttrOrText(&'static str),
}

impl Read {
    pub fn read(&self, element: ElementRef<'_>) -> String {
        match *self {
            Read::Text => element_text(element),
            Read::Attr(name) => clean_text(element.value().attr(name).unwrap_or_default()),
            Read::AttrOrText(name) => match element.value().attr(name) {
                Some(value) if !value.is_empty() => clean_text(value),
                _ => element_text(element),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Only the first matched element is read.
    First,
    /// Matched elements are read in order until one yields a value.
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub matcher: Matcher,
    pub read: Read,
    pub scope: Scope,
}

impl Rule {
    pub const fn new(matcher: Matcher, read: Read, scope: Scope) -> Self {
        Self {
            matcher,
            read,
            scope,
        }
    }

    /// Text of the first matched element.
    pub const fn text(matcher: Matcher) -> Self {
        Self::new(matcher, Read::Text, Scope::First)
    }

    /// First non-empty value among the elements this rule matches, if any.
    pub fn apply(&self, scope: ElementRef<'_>) -> Result<Option<String>, RuleError> {
        let elements = self.matcher.select(scope)?;
        let limit = match self.scope {
            Scope::First => 1,
            Scope::All => elements.len(),
        };
        Ok(elements
            .into_iter()
            .take(limit)
            .map(|el| self.read.read(el))
            .find(|value| !value.is_empty()))
    }
}

/// Value of the first rule in `rules` that yields something, or an empty string.
pub fn first_match(rules: &[Rule], scope: ElementRef<'_>) -> Result<String, RuleError> {
    for rule in rules {
        if let Some(value) = rule.apply(scope)? {
            return Ok(value);
        }
    }
    Ok(String::new())
}

/// Concatenated text nodes of `element`, normalized.
pub fn element_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<String>())
}

pub const TITLE_RULES: &[Rule] = &[
    Rule::text(Matcher::Css("h1")),
    Rule::text(Matcher::class(&["title"])),
    Rule::text(Matcher::class(&["headline"])),
    Rule::text(Matcher::Css(".entry-title")),
    Rule::text(Matcher::Css("article h1")),
];

pub const SUBTITLE_RULES: &[Rule] = &[
    Rule::text(Matcher::class(&["subtitle"])),
    Rule::text(Matcher::class(&["summary"])),
    Rule::text(Matcher::class(&["excerpt"])),
    Rule::text(Matcher::Css(".entry-summary")),
];

pub const AUTHOR_RULES: &[Rule] = &[
    Rule::text(Matcher::class(&["author"])),
    Rule::text(Matcher::class(&["byline"])),
    Rule::text(Matcher::Css(r#"[rel="author"]"#)),
    Rule::text(Matcher::Css(".entry-author")),
];

pub const DATE_RULES: &[Rule] = &[
    Rule::new(
        Matcher::Css(r#"meta[property="article:published_time"]"#),
        Read::Attr("content"),
        Scope::All,
    ),
    Rule::new(
        Matcher::Css(r#"meta[name="date"]"#),
        Read::Attr("content"),
        Scope::All,
    ),
    Rule::new(
        Matcher::Css(r#"meta[name="publish_date"]"#),
        Read::Attr("content"),
        Scope::All,
    ),
    Rule::new(
        Matcher::Css("time[datetime]"),
        Read::AttrOrText("datetime"),
        Scope::All,
    ),
    Rule::new(Matcher::Css("time"), Read::AttrOrText("datetime"), Scope::All),
    Rule::new(
        Matcher::class_ci(&["div", "span", "p"], &["date", "time", "published", "fecha"]),
        Read::Text,
        Scope::All,
    ),
];

/// Containers searched for body paragraphs, in order.
pub const CONTENT_CONTAINERS: &[Matcher] = &[
    Matcher::Css("article"),
    Matcher::class(&["content"]),
    Matcher::class(&["article-body"]),
    Matcher::class(&["entry-content"]),
    Matcher::Css(".post-content"),
    Matcher::Css("main"),
];

/// Every element matched by any of these contributes a tag.
pub const TAG_MATCHERS: &[Matcher] = &[
    Matcher::class(&["tag"]),
    Matcher::class(&["label"]),
    Matcher::class(&["category"]),
];

pub const TEASER_CONTAINER: Matcher = Matcher::class_ci(
    &["article", "div"],
    &["article", "post", "news", "story", "content"],
);

pub const TEASER_HEADING: Matcher =
    Matcher::class_ci(&["h1", "h2", "h3", "h4"], &["title", "heading", "headline"]);

pub const TEASER_LINK: Matcher = Matcher::Css("a[href]");
