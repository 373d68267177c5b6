//! List filtering and ordering.
//!
//! A [`CourseFilter`] narrows a course listing by exact `id` and/or exact
//! `name`, and orders the result by one or more [`Ordering`] keys. Filters
//! combine with AND. Without explicit ordering, courses are listed by
//! ascending id.

use std::fmt;

/// A field courses can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    /// The course id.
    Id,
    /// The course name.
    Name,
}

impl OrderField {
    /// Parses a field name as accepted in the `ordering` query parameter.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "id" => Some(OrderField::Id),
            "name" => Some(OrderField::Name),
            _ => None,
        }
    }

    /// Returns the field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderField::Id => "id",
            OrderField::Name => "name",
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

/// One ordering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ordering {
    /// The field to order by.
    pub field: OrderField,
    /// The direction.
    pub direction: SortDirection,
}

impl Ordering {
    /// Ascending order on `field`.
    pub fn asc(field: OrderField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Descending order on `field`.
    pub fn desc(field: OrderField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }

    /// Parses a comma separated ordering expression such as `-name,id`.
    ///
    /// A leading `-` selects descending order. Unknown fields and empty
    /// segments are skipped, and a field is only honoured the first time it
    /// appears.
    pub fn parse_list(s: &str) -> Vec<Self> {
        let mut orderings: Vec<Self> = Vec::new();
        for term in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let (direction, name) = match term.strip_prefix('-') {
                Some(rest) => (SortDirection::Descending, rest),
                None => (SortDirection::Ascending, term),
            };
            let Some(field) = OrderField::parse(name) else {
                continue;
            };
            if orderings.iter().any(|o| o.field == field) {
                continue;
            }
            orderings.push(Self { field, direction });
        }
        orderings
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Ascending => write!(f, "{}", self.field),
            SortDirection::Descending => write!(f, "-{}", self.field),
        }
    }
}

/// Criteria for listing courses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    /// Only courses with exactly this id.
    pub id: Option<i64>,
    /// Only courses with exactly this name (case-sensitive).
    pub name: Option<String>,
    /// Ordering keys, most significant first.
    pub ordering: Vec<Ordering>,
}

impl CourseFilter {
    /// A filter that matches every course.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the listing to one id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Restricts the listing to an exact name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends an ordering key.
    pub fn order_by(mut self, ordering: Ordering) -> Self {
        self.ordering.push(ordering);
        self
    }

    /// Returns true if no criteria restrict the listing.
    pub fn is_unfiltered(&self) -> bool {
        self.id.is_none() && self.name.is_none()
    }
}
