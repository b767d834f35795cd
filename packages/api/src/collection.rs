//! The public record collections served by the content API.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A kind of record with its own list and detail endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Authors,
    Partners,
    Advisors,
    Team,
    Services,
    Projects,
    Articles,
    Events,
}

impl Collection {
    pub const ALL: [Collection; 8] = [
        Collection::Authors,
        Collection::Partners,
        Collection::Advisors,
        Collection::Team,
        Collection::Services,
        Collection::Projects,
        Collection::Articles,
        Collection::Events,
    ];

    /// URL segment shared by the site routes and the API paths.
    pub fn slug(self) -> &'static str {
        match self {
            Collection::Authors => "authors",
            Collection::Partners => "partners",
            Collection::Advisors => "advisors",
            Collection::Team => "team",
            Collection::Services => "services",
            Collection::Projects => "projects",
            Collection::Articles => "articles",
            Collection::Events => "events",
        }
    }

    /// Page heading.
    pub fn title(self) -> &'static str {
        match self {
            Collection::Authors => "Our Authors",
            Collection::Partners => "Our Partners",
            Collection::Advisors => "Our Advisors",
            Collection::Team => "Our Team",
            Collection::Services => "Our Services",
            Collection::Projects => "Our Projects",
            Collection::Articles => "Articles",
            Collection::Events => "Events",
        }
    }

    /// Lowercase plural used in empty-state and search messages.
    pub fn plural(self) -> &'static str {
        match self {
            Collection::Team => "team members",
            other => other.slug(),
        }
    }

    /// Lowercase singular used in not-found messages.
    pub fn singular(self) -> &'static str {
        match self {
            Collection::Authors => "author",
            Collection::Partners => "partner",
            Collection::Advisors => "advisor",
            Collection::Team => "team member",
            Collection::Services => "service",
            Collection::Projects => "project",
            Collection::Articles => "article",
            Collection::Events => "event",
        }
    }

    /// `GET` path for the whole collection.
    pub fn endpoint(self) -> String {
        format!("/api/{}", self.slug())
    }

    /// `GET`/`DELETE` path for one record.
    pub fn record_endpoint(self, id: &str) -> String {
        format!("/api/{}/{}", self.slug(), id)
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error for a route segment that names no collection.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown collection: {0}")]
pub struct UnknownCollection(pub String);

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| UnknownCollection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_roundtrip() {
        for collection in Collection::ALL {
            assert_eq!(collection.slug().parse::<Collection>(), Ok(collection));
            assert_eq!(collection.to_string(), collection.slug());
        }
        assert!("widgets".parse::<Collection>().is_err());
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(Collection::Partners.endpoint(), "/api/partners");
        assert_eq!(Collection::Advisors.record_endpoint("7"), "/api/advisors/7");
    }

    #[test]
    fn test_unknown_slug_error() {
        let err = "widgets".parse::<Collection>().unwrap_err();
        assert_eq!(err, UnknownCollection("widgets".to_string()));
        assert_eq!(err.to_string(), "unknown collection: widgets");
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }
}
