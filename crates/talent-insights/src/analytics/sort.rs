use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Sort state of one table. Only one column is sorted at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SortState<C> {
    Unsorted,
    Sorted {
        column: C,
        direction: SortDirection,
    },
}

impl<C> Default for SortState<C> {
    fn default() -> Self {
        Self::Unsorted
    }
}

impl<C: Copy + PartialEq> SortState<C> {
    pub fn column(&self) -> Option<C> {
        match self {
            Self::Unsorted => None,
            Self::Sorted { column, .. } => Some(*column),
        }
    }

    pub fn direction(&self) -> Option<SortDirection> {
        match self {
            Self::Unsorted => None,
            Self::Sorted { direction, .. } => Some(*direction),
        }
    }

    /// Header click transition: asc, then desc, then back to unsorted. A different column
    /// always starts over at ascending.
    pub fn next(self, clicked: C) -> Self {
        match self {
            Self::Sorted {
                column,
                direction: SortDirection::Ascending,
            } if column == clicked => Self::Sorted {
                column,
                direction: SortDirection::Descending,
            },
            Self::Sorted {
                column,
                direction: SortDirection::Descending,
            } if column == clicked => Self::Unsorted,
            _ => Self::Sorted {
                column: clicked,
                direction: SortDirection::Ascending,
            },
        }
    }
}

pub fn next_sort_state<C: Copy + PartialEq>(current: SortState<C>, clicked: C) -> SortState<C> {
    current.next(clicked)
}

/// Comparable value a column extracts from a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey<'a> {
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
    /// Value that cannot be computed (e.g. a ratio over zero placements); orders after every
    /// present value.
    Missing,
}

impl SortKey<'_> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            (SortKey::Missing, SortKey::Missing) => Ordering::Equal,
            (SortKey::Missing, _) => Ordering::Greater,
            (_, SortKey::Missing) => Ordering::Less,
            _ => Ordering::Equal,
        }
    }
}

/// A sortable table column over rows of type `R`.
pub trait SortColumn<R>: Copy + PartialEq {
    fn key<'r>(&self, row: &'r R) -> SortKey<'r>;
}

/// Stable sort of `rows` by the table's sort state. Unsorted keeps input order.
pub fn sort_records<R, C>(rows: &[R], state: SortState<C>) -> Vec<R>
where
    R: Clone,
    C: SortColumn<R>,
{
    let mut sorted = rows.to_vec();
    sort_in_place(&mut sorted, state);
    sorted
}

pub(crate) fn sort_in_place<R, C>(rows: &mut [R], state: SortState<C>)
where
    C: SortColumn<R>,
{
    let SortState::Sorted { column, direction } = state else {
        return;
    };

    rows.sort_by(|a, b| {
        let ordering = column.key(a).compare(&column.key(b));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
