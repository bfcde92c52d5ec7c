//! Static route table.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use serde::Serialize;

use crate::api::gateway::encode_segment;

/// Page-level view components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PageKind {
    Home,
    WorksheetList,
    WorksheetDetail,
    Static,
}

/// Typed inputs handed to a page component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "slug", rename_all = "snake_case")]
pub enum PageProps {
    None,
    Category(String),
    Tag(String),
    Worksheet(String),
    Static(String),
}

/// How a route turns its `:slug` parameter (or nothing) into page props.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropsRule {
    None,
    Category,
    Tag,
    Worksheet,
    Fixed(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct RouteDef {
    pub name: &'static str,
    pub pattern: &'static str,
    pub page: PageKind,
    pub props: PropsRule,
}

pub const ROUTES: &[RouteDef] = &[
    RouteDef { name: "home", pattern: "/", page: PageKind::Home, props: PropsRule::None },
    RouteDef { name: "worksheets", pattern: "/worksheets", page: PageKind::WorksheetList, props: PropsRule::None },
    RouteDef { name: "category", pattern: "/category/:slug", page: PageKind::WorksheetList, props: PropsRule::Category },
    RouteDef { name: "worksheet-detail", pattern: "/worksheet/:slug", page: PageKind::WorksheetDetail, props: PropsRule::Worksheet },
    RouteDef { name: "tag", pattern: "/tag/:slug", page: PageKind::WorksheetList, props: PropsRule::Tag },
    RouteDef { name: "about", pattern: "/about", page: PageKind::Static, props: PropsRule::Fixed("about") },
    RouteDef { name: "contacts", pattern: "/contacts", page: PageKind::Static, props: PropsRule::Fixed("contacts") },
    RouteDef { name: "terms", pattern: "/terms", page: PageKind::Static, props: PropsRule::Fixed("terms") },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub name: &'static str,
    pub path: String,
    pub page: PageKind,
    pub props: PageProps,
}

#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    routes: &'static [RouteDef],
}

impl Default for RouteTable {
    fn default() -> Self {
        Self { routes: ROUTES }
    }
}

impl RouteTable {
    pub fn new(routes: &'static [RouteDef]) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &'static [RouteDef] {
        self.routes
    }

    /// Match a URL path. Query string, fragment and a trailing slash are
    /// ignored; parameters are percent-decoded.
    pub fn resolve(&self, url: &str) -> Option<RouteMatch> {
        let path = normalize(url);
        let segments: Vec<&str> = split(&path).collect();

        self.routes.iter().find_map(|route| {
            let params = match_pattern(route.pattern, &segments)?;
            Some(RouteMatch {
                name: route.name,
                path: path.clone(),
                page: route.page,
                props: build_props(route.props, params),
            })
        })
    }

    /// Build the path of a named route. `slug` fills the `:slug` parameter.
    pub fn path_for(&self, name: &str, slug: Option<&str>) -> Option<String> {
        let route = self.routes.iter().find(|r| r.name == name)?;
        let mut path = String::new();
        for segment in split(route.pattern) {
            path.push('/');
            if segment.starts_with(':') {
                path.push_str(&encode_segment(slug?));
            } else {
                path.push_str(segment);
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        Some(path)
    }
}

fn normalize(url: &str) -> String {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let trimmed = url[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// The decoded `:slug` value when the pattern matches, `Some(None)` when it
/// matches without parameters.
fn match_pattern(pattern: &str, segments: &[&str]) -> Option<Option<String>> {
    let expected: Vec<&str> = split(pattern).collect();
    if expected.len() != segments.len() {
        return None;
    }

    let mut param = None;
    for (want, got) in expected.iter().zip(segments) {
        if want.starts_with(':') {
            let decoded: Cow<'_, str> = percent_decode_str(got).decode_utf8_lossy();
            param = Some(decoded.into_owned());
        } else if want != got {
            return None;
        }
    }
    Some(param)
}

fn build_props(rule: PropsRule, param: Option<String>) -> PageProps {
    match (rule, param) {
        (PropsRule::Category, Some(slug)) => PageProps::Category(slug),
        (PropsRule::Tag, Some(slug)) => PageProps::Tag(slug),
        (PropsRule::Worksheet, Some(slug)) => PageProps::Worksheet(slug),
        (PropsRule::Fixed(slug), _) => PageProps::Static(slug.to_string()),
        _ => PageProps::None,
    }
}
