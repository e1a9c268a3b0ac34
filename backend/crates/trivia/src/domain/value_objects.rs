//! Domain Value Objects
//!
//! Immutable value types for the trivia domain.

use std::collections::HashSet;

use kernel::id::{CategoryId, QuestionId};

/// Question difficulty, 1 (easiest) to 5 (hardest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: i64) -> Option<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&level) {
            Some(Self(level as u8))
        } else {
            None
        }
    }

    pub fn level(&self) -> u8 {
        self.0
    }
}

impl From<Difficulty> for i32 {
    fn from(d: Difficulty) -> Self {
        i32::from(d.0)
    }
}

/// Which categories a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No restriction
    Any,
    /// Only questions of this category
    Only(CategoryId),
}

impl CategoryFilter {
    /// Raw quiz category id; 0 means "all categories"
    pub fn from_raw(id: i32) -> Self {
        if id == 0 {
            CategoryFilter::Any
        } else {
            CategoryFilter::Only(CategoryId::new(id))
        }
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        match self {
            CategoryFilter::Any => None,
            CategoryFilter::Only(id) => Some(*id),
        }
    }

    pub fn matches(&self, category: CategoryId) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Only(id) => *id == category,
        }
    }
}

/// One "next question" request of a quiz session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuery {
    pub filter: CategoryFilter,
    /// Questions already served in this session
    pub exclude: HashSet<QuestionId>,
}

impl QuizQuery {
    pub fn new(filter: CategoryFilter, exclude: impl IntoIterator<Item = QuestionId>) -> Self {
        Self {
            filter,
            exclude: exclude.into_iter().collect(),
        }
    }
}

/// 1-based page number for question listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    pub const FIRST: Page = Page(1);

    pub fn new(number: i64) -> Option<Self> {
        u32::try_from(number).ok().filter(|n| *n >= 1).map(Self)
    }

    /// Lenient parse of a `?page=` value; anything unparseable is the first page
    pub fn parse_or_first(raw: Option<&str>) -> Result<Self, i64> {
        let number = raw
            .and_then(|s| s.trim().parse::<i64>().ok())
            .unwrap_or(1);
        Self::new(number).ok_or(number)
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    pub fn offset(&self, per_page: u32) -> i64 {
        i64::from(self.0 - 1) * i64::from(per_page)
    }
}

/// Validated search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub category: Option<CategoryId>,
}
